//! Catalog XML to typed model.
//!
//! This is the only module that touches the XML tree. Matching follows the
//! catalog format's lookup rules: symbols, geometry elements, points and
//! localized strings are found at any depth below their parent, in document
//! order.

use indexmap::IndexMap;
use roxmltree::{Document, Node, ParsingOptions};

use crate::catalog::{Catalog, NumAttr, RawFeature, RawPoint, SymbolDefinition, parse_number};
use crate::errors::{CompileError, SourceContext};
use crate::feature::FeatureCategory;

/// Parse a whole catalog document
pub fn parse_catalog(ctx: &SourceContext) -> Result<Catalog, CompileError> {
    let mut options = ParsingOptions::default();
    options.allow_dtd = true;
    let doc = Document::parse_with_options(&ctx.source, options).map_err(|e| {
        let pos = e.pos();
        CompileError::Parse {
            message: e.to_string(),
            src: ctx.named_source(),
            span: ctx.offset_of(pos.row, pos.col).into(),
        }
    })?;

    let symbols: Vec<SymbolDefinition> = doc
        .descendants()
        .filter(|n| n.has_tag_name("symbol"))
        .map(|n| extract_symbol(&n))
        .collect();

    crate::log::debug!(source = %ctx.name, symbols = symbols.len(), "parsed catalog");
    Ok(Catalog { symbols })
}

/// Read one `<symbol>` element
pub fn extract_symbol(node: &Node) -> SymbolDefinition {
    let features = FeatureCategory::ALL
        .iter()
        .flat_map(|&category| extract_features(node, category))
        .collect();

    SymbolDefinition {
        id: node.attribute("id").unwrap_or_default().to_string(),
        kind: node.attribute("kind").map(str::to_string),
        names: localized(node, "name"),
        texts: localized(node, "text"),
        features,
    }
}

/// All feature records of one category below `symbol`, in document order
pub fn extract_features(symbol: &Node, category: FeatureCategory) -> Vec<RawFeature> {
    symbol
        .descendants()
        .filter(|n| n.has_tag_name(category.tag()))
        .map(|n| RawFeature {
            category,
            points: n
                .descendants()
                .filter(|p| p.has_tag_name("point"))
                .map(|p| RawPoint {
                    x: parse_number(p.attribute("x")),
                    y: parse_number(p.attribute("y")),
                })
                .collect(),
            thickness: NumAttr::from_text(n.attribute("thickness")),
            radius: NumAttr::from_text(n.attribute("radius")),
            corners: n.attribute("corners").map(str::to_string),
        })
        .collect()
}

/// `lang` attribute to text content of every matching element; last one wins
fn localized(symbol: &Node, tag: &str) -> IndexMap<String, String> {
    let mut map = IndexMap::new();
    for n in symbol.descendants().filter(|n| n.has_tag_name(tag)) {
        let lang = n.attribute("lang").unwrap_or_default().to_string();
        map.insert(lang, text_content(&n));
    }
    map
}

/// Concatenated text of all descendant text nodes
fn text_content(node: &Node) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}
