//! Native (y-up) to SVG (y-down) coordinate mapping.

use glam::{DVec2, dvec2};

use crate::types::{NativeBox, NativePt};

/// How the output canvas is sized, chosen once per compilation run
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CanvasPolicy {
    /// viewBox derived from the symbol's bounding box; no origin offset
    #[default]
    FitToContent,
    /// Constant canvas; native (0, 0) lands on `origin`
    Fixed {
        width: f64,
        height: f64,
        origin: DVec2,
    },
}

impl CanvasPolicy {
    /// Fixed canvas with the native origin at its center
    pub fn fixed(width: f64, height: f64) -> Self {
        CanvasPolicy::Fixed {
            width,
            height,
            origin: dvec2(width / 2.0, height / 2.0),
        }
    }

    pub fn transform(&self) -> Transform {
        match *self {
            CanvasPolicy::FitToContent => Transform { origin: DVec2::ZERO },
            CanvasPolicy::Fixed { origin, .. } => Transform { origin },
        }
    }
}

/// Maps native points to output points: `x' = x + Ox`, `y' = Oy - y`.
///
/// Fit-to-content is the special case `O = (0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    origin: DVec2,
}

impl Transform {
    pub fn origin(&self) -> DVec2 {
        self.origin
    }

    pub fn apply(&self, p: NativePt) -> DVec2 {
        dvec2(p.x.raw() + self.origin.x, self.origin.y - p.y.raw())
    }

    pub fn inverse(&self, q: DVec2) -> DVec2 {
        dvec2(q.x - self.origin.x, self.origin.y - q.y)
    }

    /// Map a native box to output space. The y flip swaps which native edge
    /// becomes the output minimum.
    pub fn apply_box(&self, b: &NativeBox) -> OutputBox {
        OutputBox {
            min: dvec2(b.min.x.raw() + self.origin.x, self.origin.y - b.max.y.raw()),
            max: dvec2(b.max.x.raw() + self.origin.x, self.origin.y - b.min.y.raw()),
        }
    }
}

/// Axis-aligned box in output coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutputBox {
    pub min: DVec2,
    pub max: DVec2,
}

impl OutputBox {
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Whether the square of half-width `pad` around `p` lies inside the box
    pub fn contains_square(&self, p: DVec2, pad: f64) -> bool {
        p.x - pad >= self.min.x
            && p.x + pad <= self.max.x
            && p.y - pad >= self.min.y
            && p.y + pad <= self.max.y
    }
}
