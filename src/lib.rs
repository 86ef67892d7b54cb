//! Compile a catalog of XML symbol definitions into standalone SVG files.
//!
//! A catalog holds `<symbol>` elements built from line paths, polygons,
//! circles and bezier chains in a y-up coordinate space. Each symbol with at
//! least one drawable feature becomes `<id>.svg`; the symbols' localized
//! names and descriptions are collected into `lang.json`.
//!
//! ```rust
//! use symbolc::{CompileOptions, compile};
//!
//! let catalog = r#"<symbols>
//!   <symbol id="dot"><circle radius="2" thickness="0.5"><point x="0" y="0"/></circle></symbol>
//!   <symbol id="empty"/>
//! </symbols>"#;
//! let out = compile(catalog, &CompileOptions::default()).unwrap();
//! assert_eq!(out.symbols.len(), 1);
//! assert!(out.dictionary.get("empty").is_none());
//! ```

pub mod bounds;
pub mod catalog;
pub mod defaults;
pub mod document;
pub mod emit;
pub mod errors;
pub mod extract;
pub mod feature;
pub mod lang;
pub mod log;
pub mod output;
pub mod svg;
pub mod transform;
pub mod types;

pub use catalog::{Catalog, SymbolDefinition};
pub use document::{Canvas, RenderedDocument};
pub use errors::CompileError;
pub use lang::LanguageDictionary;
pub use output::{Summary, compile_file};
pub use transform::CanvasPolicy;

use errors::SourceContext;

/// Settings that apply to a whole compilation run
#[derive(Debug, Clone, PartialEq)]
pub struct CompileOptions {
    pub canvas: CanvasPolicy,
    /// Extension of the image files, without the dot
    pub extension: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            canvas: CanvasPolicy::FitToContent,
            extension: defaults::IMAGE_EXTENSION.to_string(),
        }
    }
}

/// One symbol that produced an image
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledSymbol {
    pub id: String,
    pub document: RenderedDocument,
}

/// Everything a run produces, before anything is written
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Compilation {
    pub symbols: Vec<CompiledSymbol>,
    pub dictionary: LanguageDictionary,
}

/// Compile catalog source text held in memory
pub fn compile(source: &str, options: &CompileOptions) -> Result<Compilation, CompileError> {
    compile_source(&SourceContext::new("<input>", source), options)
}

/// Compile catalog source text, naming it in diagnostics
pub fn compile_source(
    ctx: &SourceContext,
    options: &CompileOptions,
) -> Result<Compilation, CompileError> {
    let catalog = extract::parse_catalog(ctx)?;
    Ok(compile_catalog(&catalog, options))
}

/// Compile an already parsed catalog. Symbols are independent of each other;
/// output order follows the catalog.
pub fn compile_catalog(catalog: &Catalog, options: &CompileOptions) -> Compilation {
    let mut out = Compilation::default();
    for symbol in &catalog.symbols {
        if !symbol.has_file_safe_id() {
            crate::log::warn!(
                id = ?symbol.id,
                "symbol id cannot be used as a file name, skipping"
            );
            continue;
        }
        let Some(document) = document::assemble(symbol, &options.canvas) else {
            continue;
        };
        out.dictionary.insert(symbol);
        out.symbols.push(CompiledSymbol {
            id: symbol.id.clone(),
            document,
        });
    }
    crate::log::info!(
        symbols = catalog.symbols.len(),
        emitted = out.symbols.len(),
        "compiled catalog"
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"<?xml version="1.0"?>
<symbols>
  <symbol id="101" kind="point">
    <name lang="en">Triangle</name>
    <name lang="en">Marker</name>
    <polygon thickness="1"><point x="0" y="0"/><point x="10" y="0"/><point x="10" y="10"/></polygon>
  </symbol>
  <symbol id="102"><name lang="en">Nothing</name></symbol>
  <symbol id="103">
    <lines thickness="x"><point x="0" y="0"/><point x="1" y="1"/></lines>
  </symbol>
  <symbol id="104"><filled-circle radius="3" thickness="1"><point x="5" y="5"/></filled-circle></symbol>
</symbols>"#;

    #[test]
    fn only_symbols_with_shapes_are_emitted() {
        let out = compile(CATALOG, &CompileOptions::default()).unwrap();
        let ids: Vec<_> = out.symbols.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["101", "104"]);
        assert_eq!(out.dictionary.ids().collect::<Vec<_>>(), ["101", "104"]);
        assert!(out.dictionary.get("102").is_none());
        assert!(out.dictionary.get("103").is_none());
    }

    #[test]
    fn later_name_wins() {
        let out = compile(CATALOG, &CompileOptions::default()).unwrap();
        let entry = out.dictionary.get("101").unwrap();
        assert_eq!(entry.names.get("en").map(String::as_str), Some("Marker"));
        assert_eq!(entry.kind.as_deref(), Some("point"));
    }

    #[test]
    fn fixed_canvas_applies_to_every_symbol() {
        let options = CompileOptions {
            canvas: CanvasPolicy::fixed(200.0, 200.0),
            ..Default::default()
        };
        let out = compile(CATALOG, &options).unwrap();
        for symbol in &out.symbols {
            assert_eq!(
                symbol.document.canvas,
                Canvas::Fixed { width: 200.0, height: 200.0 }
            );
        }
        let circle = &out.symbols[1].document.instructions[0];
        let emit::Instruction::Circle(c) = circle else {
            panic!("expected circle, got {circle:?}");
        };
        assert_eq!(c.center, glam::dvec2(105.0, 95.0));
        assert_eq!(c.radius.raw(), 3.0);
    }

    #[test]
    fn unusable_ids_are_skipped() {
        let catalog = r#"<symbols>
  <symbol id=""><circle radius="1"><point x="0" y="0"/></circle></symbol>
  <symbol id="a/b"><circle radius="1"><point x="0" y="0"/></circle></symbol>
  <symbol id="ok"><circle radius="1"><point x="0" y="0"/></circle></symbol>
</symbols>"#;
        let out = compile(catalog, &CompileOptions::default()).unwrap();
        let ids: Vec<_> = out.symbols.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["ok"]);
        assert_eq!(out.dictionary.ids().collect::<Vec<_>>(), ["ok"]);
    }

    #[test]
    fn parse_failure_is_fatal() {
        let err = compile("<symbols><symbol>", &CompileOptions::default()).unwrap_err();
        assert!(matches!(err, CompileError::Parse { .. }));
    }
}
