//! Feature to drawing-instruction translation.
//!
//! Each feature produces exactly one instruction. Coordinates go through the
//! run's [`Transform`]; radii and stroke widths are copied as-is.

use facet_svg::{Circle as SvgCircle, Path as SvgPath, PathData, SvgNode, SvgStyle};
use glam::DVec2;

use crate::defaults;
use crate::feature::{CornerStyle, Feature, FeatureCategory, Geometry, bezier_segments};
use crate::svg::unsigned_zero;
use crate::transform::Transform;
use crate::types::Length;

/// Fill of an emitted shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    None,
    Solid,
}

impl Fill {
    pub fn for_category(category: FeatureCategory) -> Self {
        if category.is_filled() { Fill::Solid } else { Fill::None }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Fill::None => defaults::NO_FILL,
            Fill::Solid => defaults::SOLID_FILL,
        }
    }
}

/// One step of a path outline, in output coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathStep {
    MoveTo(DVec2),
    LineTo(DVec2),
    CurveTo { ctrl1: DVec2, ctrl2: DVec2, to: DVec2 },
    Close,
}

impl PathStep {
    /// The SVG command letter this step is written as
    pub fn letter(&self) -> char {
        match self {
            PathStep::MoveTo(_) => 'M',
            PathStep::LineTo(_) => 'L',
            PathStep::CurveTo { .. } => 'C',
            PathStep::Close => 'Z',
        }
    }
}

/// A `<path>` to draw
#[derive(Debug, Clone, PartialEq)]
pub struct PathInstruction {
    pub steps: Vec<PathStep>,
    pub fill: Fill,
    pub stroke_width: Option<String>,
    pub join: CornerStyle,
}

impl PathInstruction {
    /// Number of steps written with `letter`
    pub fn count(&self, letter: char) -> usize {
        self.steps.iter().filter(|s| s.letter() == letter).count()
    }

    /// Build the `d` attribute
    pub fn path_data(&self) -> PathData {
        self.steps.iter().fold(PathData::new(), |d, step| match *step {
            PathStep::MoveTo(p) => d.m(unsigned_zero(p.x), unsigned_zero(p.y)),
            PathStep::LineTo(p) => d.l(unsigned_zero(p.x), unsigned_zero(p.y)),
            PathStep::CurveTo { ctrl1, ctrl2, to } => d.c(
                unsigned_zero(ctrl1.x),
                unsigned_zero(ctrl1.y),
                unsigned_zero(ctrl2.x),
                unsigned_zero(ctrl2.y),
                unsigned_zero(to.x),
                unsigned_zero(to.y),
            ),
            PathStep::Close => d.z(),
        })
    }
}

/// A `<circle>` to draw
#[derive(Debug, Clone, PartialEq)]
pub struct CircleInstruction {
    pub center: DVec2,
    pub radius: Length,
    pub fill: Fill,
    pub stroke_width: Option<String>,
}

/// One drawing instruction of a rendered document
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    Path(PathInstruction),
    Circle(CircleInstruction),
}

impl Instruction {
    pub fn fill(&self) -> Fill {
        match self {
            Instruction::Path(p) => p.fill,
            Instruction::Circle(c) => c.fill,
        }
    }

    /// Convert to the serializable SVG element.
    ///
    /// `facet_svg::Path` has no join attribute, so the join goes into `style`.
    pub fn to_svg_node(&self) -> SvgNode {
        match self {
            Instruction::Path(p) => SvgNode::Path(SvgPath {
                d: Some(p.path_data()),
                fill: Some(p.fill.as_str().to_string()),
                stroke: Some(defaults::STROKE.to_string()),
                stroke_width: p.stroke_width.clone(),
                stroke_dasharray: None,
                style: SvgStyle::new().add("stroke-linejoin", p.join.as_str()),
            }),
            Instruction::Circle(c) => SvgNode::Circle(SvgCircle {
                cx: Some(c.center.x),
                cy: Some(c.center.y),
                r: Some(c.radius.raw()),
                fill: Some(c.fill.as_str().to_string()),
                stroke: Some(defaults::STROKE.to_string()),
                stroke_width: c.stroke_width.clone(),
                stroke_dasharray: None,
                style: SvgStyle::new(),
            }),
        }
    }
}

/// Translate one validated feature
pub fn emit(feature: &Feature, transform: &Transform) -> Instruction {
    let fill = Fill::for_category(feature.category);
    let stroke_width = feature.stroke.width_attr.clone();

    let steps = match &feature.geometry {
        Geometry::Circle { center, radius } => {
            return Instruction::Circle(CircleInstruction {
                center: transform.apply(*center),
                radius: *radius,
                fill,
                stroke_width,
            });
        }
        Geometry::Polyline(points) => {
            let mut steps: Vec<PathStep> = points
                .iter()
                .enumerate()
                .map(|(i, &p)| {
                    let q = transform.apply(p);
                    if i == 0 { PathStep::MoveTo(q) } else { PathStep::LineTo(q) }
                })
                .collect();
            if feature.category.is_closed() {
                steps.push(PathStep::Close);
            }
            steps
        }
        Geometry::Bezier(points) => {
            let mut steps = Vec::with_capacity(1 + points.len() / 3);
            if let Some(&first) = points.first() {
                steps.push(PathStep::MoveTo(transform.apply(first)));
            }
            for segment in bezier_segments(points) {
                let [ctrl1, ctrl2, to] =
                    [segment[0], segment[1], segment[2]].map(|p| transform.apply(p));
                steps.push(PathStep::CurveTo { ctrl1, ctrl2, to });
            }
            steps
        }
    };

    Instruction::Path(PathInstruction {
        steps,
        fill,
        stroke_width,
        join: feature.stroke.corners,
    })
}
