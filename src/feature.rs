//! Validated geometric features and the degenerate-feature filter.
//!
//! A [`RawFeature`] becomes a [`Feature`] only if every number it needs is
//! present and finite. Everything downstream (bounds, emission) works on
//! `Feature` and never sees NaN.

use thiserror::Error;

use crate::catalog::{NumAttr, RawFeature, RawPoint, SymbolDefinition};
use crate::types::{Length, NativePt, NumericError, Point};

/// The seven geometry element kinds a symbol can contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureCategory {
    OpenPolyline,
    ClosedPolygon,
    FilledPolygon,
    Circle,
    FilledCircle,
    BezierChain,
    FilledBezierChain,
}

impl FeatureCategory {
    /// Emission order within a document
    pub const ALL: [FeatureCategory; 7] = [
        FeatureCategory::OpenPolyline,
        FeatureCategory::ClosedPolygon,
        FeatureCategory::FilledPolygon,
        FeatureCategory::Circle,
        FeatureCategory::FilledCircle,
        FeatureCategory::BezierChain,
        FeatureCategory::FilledBezierChain,
    ];

    /// Element name in the catalog XML
    pub fn tag(self) -> &'static str {
        match self {
            FeatureCategory::OpenPolyline => "lines",
            FeatureCategory::ClosedPolygon => "polygon",
            FeatureCategory::FilledPolygon => "filled-polygon",
            FeatureCategory::Circle => "circle",
            FeatureCategory::FilledCircle => "filled-circle",
            FeatureCategory::BezierChain => "beziers",
            FeatureCategory::FilledBezierChain => "filled-beziers",
        }
    }

    pub fn is_filled(self) -> bool {
        matches!(
            self,
            FeatureCategory::FilledPolygon
                | FeatureCategory::FilledCircle
                | FeatureCategory::FilledBezierChain
        )
    }

    pub fn is_closed(self) -> bool {
        matches!(self, FeatureCategory::ClosedPolygon | FeatureCategory::FilledPolygon)
    }

    pub fn is_circle(self) -> bool {
        matches!(self, FeatureCategory::Circle | FeatureCategory::FilledCircle)
    }

    pub fn is_bezier(self) -> bool {
        matches!(self, FeatureCategory::BezierChain | FeatureCategory::FilledBezierChain)
    }

    /// Position in [`FeatureCategory::ALL`]
    pub fn emission_rank(self) -> usize {
        self as usize
    }

    /// Minimum number of points a feature of this category needs.
    ///
    /// A bezier chain only needs its first anchor; an incomplete trailing
    /// group is not drawn.
    pub fn min_points(self) -> usize {
        if self.is_circle() || self.is_bezier() { 1 } else { 2 }
    }
}

/// Stroke join style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CornerStyle {
    #[default]
    Miter,
    Round,
}

impl CornerStyle {
    /// Only the literal `round` selects round joins
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("round") => CornerStyle::Round,
            _ => CornerStyle::Miter,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CornerStyle::Miter => "miter",
            CornerStyle::Round => "round",
        }
    }
}

/// Why a feature was excluded from rendering
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Degenerate {
    #[error("point {index} has a missing or non-numeric coordinate")]
    MissingCoordinate { index: usize },

    #[error("point {index} has an invalid coordinate: {source}")]
    InvalidCoordinate {
        index: usize,
        #[source]
        source: NumericError,
    },

    #[error("needs at least {needed} points, found {found}")]
    TooFewPoints { needed: usize, found: usize },

    #[error("radius is missing or non-numeric")]
    MissingRadius,

    #[error("invalid radius: {0}")]
    InvalidRadius(NumericError),

    #[error("thickness {text:?} is not a number")]
    NonNumericThickness { text: String },

    #[error("invalid thickness: {0}")]
    InvalidThickness(NumericError),
}

/// Stroke attributes common to every feature
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    /// Padding used for bounds; zero when the attribute is absent
    pub thickness: Length,
    /// The thickness attribute text, copied verbatim to `stroke-width`
    pub width_attr: Option<String>,
    pub corners: CornerStyle,
}

/// Feature geometry in native coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Polylines and polygons
    Polyline(Vec<NativePt>),
    Circle { center: NativePt, radius: Length },
    /// One anchor followed by (control, control, anchor) groups. Points of a
    /// trailing incomplete group are kept for bounds but never drawn.
    Bezier(Vec<NativePt>),
}

/// A validated, renderable feature
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub category: FeatureCategory,
    pub stroke: Stroke,
    pub geometry: Geometry,
}

impl Feature {
    /// Validate a raw record; this is the degenerate-geometry filter
    pub fn from_raw(raw: &RawFeature) -> Result<Feature, Degenerate> {
        let category = raw.category;
        let needed = category.min_points();
        if raw.points.len() < needed {
            return Err(Degenerate::TooFewPoints { needed, found: raw.points.len() });
        }

        let stroke = Stroke {
            thickness: validate_thickness(&raw.thickness)?,
            width_attr: raw.thickness.text.clone(),
            corners: CornerStyle::from_attr(raw.corners.as_deref()),
        };

        let geometry = if category.is_circle() {
            // Only the first point is the center; extras are ignored
            let center = validate_points(&raw.points[..1])?.remove(0);
            let radius = raw.radius.value.ok_or(Degenerate::MissingRadius)?;
            let radius = Length::try_non_negative(radius).map_err(Degenerate::InvalidRadius)?;
            Geometry::Circle { center, radius }
        } else if category.is_bezier() {
            Geometry::Bezier(validate_points(&raw.points)?)
        } else {
            Geometry::Polyline(validate_points(&raw.points)?)
        };

        Ok(Feature { category, stroke, geometry })
    }

    /// Every native point this feature is built from
    pub fn points(&self) -> &[NativePt] {
        match &self.geometry {
            Geometry::Polyline(points) | Geometry::Bezier(points) => points,
            Geometry::Circle { center, .. } => std::slice::from_ref(center),
        }
    }
}

/// Complete (control, control, anchor) groups of a bezier point list,
/// starting after the initial anchor
pub fn bezier_segments(points: &[NativePt]) -> impl Iterator<Item = &[NativePt]> {
    points.get(1..).unwrap_or(&[]).chunks_exact(3)
}

fn validate_thickness(attr: &NumAttr) -> Result<Length, Degenerate> {
    let Some(text) = &attr.text else {
        return Ok(Length::ZERO);
    };
    let value = attr
        .value
        .ok_or_else(|| Degenerate::NonNumericThickness { text: text.clone() })?;
    Length::try_non_negative(value).map_err(Degenerate::InvalidThickness)
}

fn validate_points(points: &[RawPoint]) -> Result<Vec<NativePt>, Degenerate> {
    points
        .iter()
        .enumerate()
        .map(|(index, p)| match (p.x, p.y) {
            (Some(x), Some(y)) => NativePt::try_new(x, y)
                .map_err(|source| Degenerate::InvalidCoordinate { index, source }),
            _ => Err(Degenerate::MissingCoordinate { index }),
        })
        .collect()
}

impl SymbolDefinition {
    /// Renderable features in emission order; degenerate ones are logged and dropped
    pub fn valid_features(&self) -> Vec<Feature> {
        let mut features: Vec<Feature> = self
            .features
            .iter()
            .enumerate()
            .filter_map(|(index, raw)| match Feature::from_raw(raw) {
                Ok(feature) => Some(feature),
                Err(reason) => {
                    crate::log::warn!(
                        symbol = %self.id,
                        element = raw.category.tag(),
                        index,
                        %reason,
                        "skipping degenerate feature"
                    );
                    None
                }
            })
            .collect();
        // Stable, so document order holds within a category
        features.sort_by_key(|f| f.category.emission_rank());
        features
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polyline_validates() {
        let raw = RawFeature::new(FeatureCategory::OpenPolyline)
            .with_points(&[(0.0, 0.0), (1.0, 1.0)])
            .with_thickness("0.5")
            .with_corners("round");
        let f = Feature::from_raw(&raw).unwrap();
        assert_eq!(f.stroke.thickness, Length(0.5));
        assert_eq!(f.stroke.width_attr.as_deref(), Some("0.5"));
        assert_eq!(f.stroke.corners, CornerStyle::Round);
        assert_eq!(f.points().len(), 2);
    }

    #[test]
    fn corner_style_is_literal() {
        assert_eq!(CornerStyle::from_attr(Some("round")), CornerStyle::Round);
        assert_eq!(CornerStyle::from_attr(Some("Round")), CornerStyle::Miter);
        assert_eq!(CornerStyle::from_attr(Some("bevel")), CornerStyle::Miter);
        assert_eq!(CornerStyle::from_attr(None), CornerStyle::Miter);
    }

    #[test]
    fn missing_thickness_means_no_padding() {
        let raw = RawFeature::new(FeatureCategory::ClosedPolygon)
            .with_points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        let f = Feature::from_raw(&raw).unwrap();
        assert_eq!(f.stroke.thickness, Length::ZERO);
        assert_eq!(f.stroke.width_attr, None);
    }

    #[test]
    fn non_numeric_thickness_is_degenerate() {
        let raw = RawFeature::new(FeatureCategory::OpenPolyline)
            .with_points(&[(0.0, 0.0), (1.0, 1.0)])
            .with_thickness("thick");
        assert_eq!(
            Feature::from_raw(&raw),
            Err(Degenerate::NonNumericThickness { text: "thick".to_string() })
        );
    }

    #[test]
    fn negative_thickness_is_degenerate() {
        let raw = RawFeature::new(FeatureCategory::OpenPolyline)
            .with_points(&[(0.0, 0.0), (1.0, 1.0)])
            .with_thickness("-1");
        assert_eq!(
            Feature::from_raw(&raw),
            Err(Degenerate::InvalidThickness(NumericError::Negative))
        );
    }

    #[test]
    fn missing_coordinate_is_degenerate() {
        let mut raw = RawFeature::new(FeatureCategory::OpenPolyline)
            .with_points(&[(0.0, 0.0), (1.0, 1.0)]);
        raw.points[1] = RawPoint { x: Some(1.0), y: None };
        assert_eq!(Feature::from_raw(&raw), Err(Degenerate::MissingCoordinate { index: 1 }));
    }

    #[test]
    fn infinite_coordinate_is_degenerate() {
        let raw = RawFeature::new(FeatureCategory::OpenPolyline)
            .with_points(&[(0.0, 0.0), (f64::INFINITY, 1.0)]);
        assert_eq!(
            Feature::from_raw(&raw),
            Err(Degenerate::InvalidCoordinate { index: 1, source: NumericError::Infinite })
        );
    }

    #[test]
    fn single_point_polyline_is_degenerate() {
        let raw = RawFeature::new(FeatureCategory::OpenPolyline).with_points(&[(0.0, 0.0)]);
        assert_eq!(
            Feature::from_raw(&raw),
            Err(Degenerate::TooFewPoints { needed: 2, found: 1 })
        );
    }

    #[test]
    fn circle_needs_radius() {
        let raw = RawFeature::new(FeatureCategory::Circle).with_points(&[(5.0, 5.0)]);
        assert_eq!(Feature::from_raw(&raw), Err(Degenerate::MissingRadius));

        let raw = raw.with_radius("3");
        let f = Feature::from_raw(&raw).unwrap();
        assert_eq!(
            f.geometry,
            Geometry::Circle {
                center: Point::new(Length(5.0), Length(5.0)),
                radius: Length(3.0)
            }
        );
    }

    #[test]
    fn circle_without_center_is_degenerate() {
        let raw = RawFeature::new(FeatureCategory::FilledCircle).with_radius("1");
        assert_eq!(
            Feature::from_raw(&raw),
            Err(Degenerate::TooFewPoints { needed: 1, found: 0 })
        );
    }

    #[test]
    fn bezier_without_complete_group_still_validates() {
        let raw = RawFeature::new(FeatureCategory::BezierChain)
            .with_points(&[(0.0, 0.0), (1.0, 1.0)]);
        let f = Feature::from_raw(&raw).unwrap();
        assert_eq!(f.points().len(), 2);
        assert_eq!(bezier_segments(f.points()).count(), 0);

        let empty = RawFeature::new(FeatureCategory::FilledBezierChain);
        assert_eq!(
            Feature::from_raw(&empty),
            Err(Degenerate::TooFewPoints { needed: 1, found: 0 })
        );
    }

    #[test]
    fn bezier_segments_drop_incomplete_tail() {
        let pts: Vec<NativePt> = (0..5)
            .map(|i| Point::new(Length(i as f64), Length(0.0)))
            .collect();
        let segments: Vec<_> = bezier_segments(&pts).collect();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0][0].x, Length(1.0));
        assert_eq!(segments[0][2].x, Length(3.0));
        assert_eq!(bezier_segments(&pts[..4]).count(), 1);
        assert_eq!(bezier_segments(&[]).count(), 0);
    }

    #[test]
    fn valid_features_filters_degenerate_records() {
        let symbol = SymbolDefinition {
            id: "s".to_string(),
            features: vec![
                RawFeature::new(FeatureCategory::OpenPolyline).with_points(&[(0.0, 0.0)]),
                RawFeature::new(FeatureCategory::OpenPolyline)
                    .with_points(&[(0.0, 0.0), (2.0, 2.0)]),
            ],
            ..Default::default()
        };
        let features = symbol.valid_features();
        assert_eq!(features.len(), 1);
        assert_eq!(features[0].points().len(), 2);
    }

    #[test]
    fn valid_features_are_sorted_by_category() {
        let symbol = SymbolDefinition {
            id: "s".to_string(),
            features: vec![
                RawFeature::new(FeatureCategory::Circle)
                    .with_points(&[(0.0, 0.0)])
                    .with_radius("1"),
                RawFeature::new(FeatureCategory::OpenPolyline)
                    .with_points(&[(0.0, 0.0), (5.0, 5.0)]),
                RawFeature::new(FeatureCategory::OpenPolyline)
                    .with_points(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]),
            ],
            ..Default::default()
        };
        let features = symbol.valid_features();
        let categories: Vec<_> = features.iter().map(|f| f.category).collect();
        assert_eq!(
            categories,
            [
                FeatureCategory::OpenPolyline,
                FeatureCategory::OpenPolyline,
                FeatureCategory::Circle
            ]
        );
        assert_eq!(features[0].points().len(), 2);
        assert_eq!(features[1].points().len(), 3);
    }

    #[test]
    fn emission_rank_matches_all() {
        for (i, c) in FeatureCategory::ALL.iter().enumerate() {
            assert_eq!(c.emission_rank(), i);
        }
    }

    #[test]
    fn fill_flags_per_category() {
        let filled: Vec<_> = FeatureCategory::ALL.iter().filter(|c| c.is_filled()).collect();
        assert_eq!(
            filled,
            [
                &FeatureCategory::FilledPolygon,
                &FeatureCategory::FilledCircle,
                &FeatureCategory::FilledBezierChain
            ]
        );
    }
}
