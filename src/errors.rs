//! Error types with rich diagnostics using miette
//!
//! Only fatal conditions live here. Features with bad numbers are not
//! errors; see [`crate::feature::Degenerate`].

use camino::Utf8PathBuf;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Source context for error reporting
#[derive(Debug, Clone)]
pub struct SourceContext {
    /// Name of the source (filename or "<input>")
    pub name: String,
    /// The full source text
    pub source: String,
}

impl SourceContext {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Create a NamedSource for miette
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.source.clone())
    }

    /// Byte offset of a 1-based row/column position, clamped to the source
    pub fn offset_of(&self, row: u32, col: u32) -> usize {
        let mut offset = 0;
        for (i, line) in self.source.split_inclusive('\n').enumerate() {
            if i + 1 == row as usize {
                let col_bytes = line
                    .char_indices()
                    .nth(col.saturating_sub(1) as usize)
                    .map(|(b, _)| b)
                    .unwrap_or(line.len());
                return offset + col_bytes;
            }
            offset += line.len();
        }
        self.source.len()
    }
}

/// Errors that abort a compilation run
#[derive(Error, Diagnostic, Debug)]
pub enum CompileError {
    #[error("failed to read {path}")]
    #[diagnostic(code(symbolc::io::read))]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create output directory {path}")]
    #[diagnostic(code(symbolc::io::create_dir))]
    CreateDir {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}")]
    #[diagnostic(code(symbolc::io::write))]
    Write {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed symbol catalog: {message}")]
    #[diagnostic(code(symbolc::parse))]
    Parse {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("failed to serialize SVG for symbol {id}: {message}")]
    #[diagnostic(code(symbolc::svg))]
    Serialize { id: String, message: String },

    #[error("failed to encode the language dictionary")]
    #[diagnostic(code(symbolc::json))]
    Json(#[from] serde_json::Error),
}
