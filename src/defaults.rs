//! Fixed output settings

/// Stroke color of every emitted shape
pub const STROKE: &str = "black";
/// Fill of filled shapes
pub const SOLID_FILL: &str = "black";
/// Fill of outline-only shapes
pub const NO_FILL: &str = "none";
/// Fill declared on the root `<svg>` element
pub const CANVAS_FILL: &str = "transparent";
/// File extension of symbol images
pub const IMAGE_EXTENSION: &str = "svg";
/// Name of the language dictionary written next to the images
pub const LANG_FILE: &str = "lang.json";
/// Prolog written before every SVG document
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;
