//! The symbol-level `<svg>` root and number formatting for serialization.
//!
//! Shape elements come from `facet_svg`; only the root is declared here
//! because symbol documents carry a canvas `fill`.

use facet::Facet;
use facet_svg::SvgNode;
use facet_svg::facet_xml as xml;

/// Root element of one symbol image
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg", rename = "svg")]
pub struct SymbolSvg {
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute, rename = "viewBox")]
    pub view_box: Option<String>,
    #[facet(xml::attribute)]
    pub width: Option<String>,
    #[facet(xml::attribute)]
    pub height: Option<String>,
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

/// Shortest round-trip decimal form, with negative zero written as `0`.
///
/// Flipping the y axis of a point on the x axis yields `-0.0`.
pub fn fmt_num(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

/// Map `-0.0` to `0.0`, leaving every other value alone
pub fn unsigned_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

/// `float_formatter` for `facet_xml::SerializeOptions`
pub fn format_float(value: f64, writer: &mut dyn std::io::Write) -> Result<(), std::io::Error> {
    write!(writer, "{}", fmt_num(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_zero_prints_as_zero() {
        assert_eq!(fmt_num(-0.0), "0");
        assert_eq!(fmt_num(0.0), "0");
        assert!(unsigned_zero(-0.0).is_sign_positive());
        assert_eq!(unsigned_zero(-1.5), -1.5);
    }

    #[test]
    fn shortest_decimal_form() {
        assert_eq!(fmt_num(12.0), "12");
        assert_eq!(fmt_num(0.35), "0.35");
        assert_eq!(fmt_num(-2.5), "-2.5");
        assert_eq!(fmt_num(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn float_formatter_writes_fmt_num() {
        let mut out = Vec::new();
        format_float(-0.0, &mut out).unwrap();
        format_float(1.25, &mut out).unwrap();
        assert_eq!(out, b"01.25");
    }
}
