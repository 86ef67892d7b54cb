//! Stroke-aware bounding boxes.
//!
//! Stroke thickness is applied as square padding around each point rather
//! than a true stroke outline.

use crate::feature::{Feature, Geometry};
use crate::types::{Length, NativeBox};

/// Padding a feature applies around each of its points
pub fn padding(feature: &Feature) -> Length {
    match &feature.geometry {
        Geometry::Circle { radius, .. } => *radius + feature.stroke.thickness,
        Geometry::Polyline(_) | Geometry::Bezier(_) => feature.stroke.thickness,
    }
}

/// Grow `bbox` to cover one feature
pub fn extend(bbox: &mut NativeBox, feature: &Feature) {
    let pad = padding(feature);
    for &p in feature.points() {
        bbox.expand_square(p, pad);
    }
}

/// Bounding box of all features, or `None` when there are none
pub fn symbol_bounds(features: &[Feature]) -> Option<NativeBox> {
    let mut bbox = NativeBox::new();
    for feature in features {
        extend(&mut bbox, feature);
    }
    (!bbox.is_empty()).then_some(bbox)
}
