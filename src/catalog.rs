//! Typed model of a parsed symbol catalog.
//!
//! Everything here is a direct projection of the input XML: numbers are
//! parsed but not yet validated. Validation happens in [`crate::feature`].

use indexmap::IndexMap;

use crate::feature::FeatureCategory;

/// A whole input document
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub symbols: Vec<SymbolDefinition>,
}

/// One `<symbol>` element
#[derive(Debug, Clone, Default)]
pub struct SymbolDefinition {
    pub id: String,
    pub kind: Option<String>,
    /// Display names keyed by language code, in document order
    pub names: IndexMap<String, String>,
    /// Free-text descriptions keyed by language code, in document order
    pub texts: IndexMap<String, String>,
    /// Feature records; validation puts them into [`FeatureCategory::ALL`] order
    pub features: Vec<RawFeature>,
}

impl SymbolDefinition {
    /// Whether the id can name a file directly inside the output directory
    pub fn has_file_safe_id(&self) -> bool {
        let id = self.id.as_str();
        !id.is_empty() && id != "." && id != ".." && !id.contains(['/', '\\', '\0'])
    }
}

/// A `<point>` whose coordinates may have failed to parse
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawPoint {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl RawPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x: Some(x), y: Some(y) }
    }
}

/// A numeric attribute kept together with its source text.
///
/// The text is what ends up in `stroke-width`; the value is what the
/// geometry uses.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumAttr {
    pub text: Option<String>,
    pub value: Option<f64>,
}

impl NumAttr {
    pub fn from_text(text: Option<&str>) -> Self {
        Self {
            text: text.map(str::to_string),
            value: parse_number(text),
        }
    }
}

/// One geometry element before validation
#[derive(Debug, Clone, PartialEq)]
pub struct RawFeature {
    pub category: FeatureCategory,
    pub points: Vec<RawPoint>,
    pub thickness: NumAttr,
    pub radius: NumAttr,
    pub corners: Option<String>,
}

impl RawFeature {
    pub fn new(category: FeatureCategory) -> Self {
        Self {
            category,
            points: Vec::new(),
            thickness: NumAttr::default(),
            radius: NumAttr::default(),
            corners: None,
        }
    }
}

#[cfg(test)]
impl RawFeature {
    pub(crate) fn with_points(mut self, points: &[(f64, f64)]) -> Self {
        self.points = points.iter().map(|&(x, y)| RawPoint::new(x, y)).collect();
        self
    }

    pub(crate) fn with_thickness(mut self, text: &str) -> Self {
        self.thickness = NumAttr::from_text(Some(text));
        self
    }

    pub(crate) fn with_radius(mut self, text: &str) -> Self {
        self.radius = NumAttr::from_text(Some(text));
        self
    }

    pub(crate) fn with_corners(mut self, corners: &str) -> Self {
        self.corners = Some(corners.to_string());
        self
    }
}

/// Parse a numeric attribute value.
///
/// Surrounding whitespace is ignored. Anything that is not a number yields
/// `None`; infinities parse and are rejected later by validation.
pub fn parse_number(text: Option<&str>) -> Option<f64> {
    text.and_then(|t| t.trim().parse::<f64>().ok())
}
