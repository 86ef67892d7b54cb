//! Per-symbol SVG document assembly.

use facet_svg::facet_xml::{self, SerializeOptions};

use crate::bounds::symbol_bounds;
use crate::catalog::SymbolDefinition;
use crate::defaults;
use crate::emit::{Instruction, emit};
use crate::errors::CompileError;
use crate::svg::{SymbolSvg, fmt_num, format_float};
use crate::transform::{CanvasPolicy, OutputBox};

/// Canvas declaration of a rendered document
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Canvas {
    /// Sized to the content's bounding box, in output coordinates
    ViewBox(OutputBox),
    /// Constant size; the origin offset is already baked into the coordinates
    Fixed { width: f64, height: f64 },
}

/// Drawing instructions of one symbol plus its canvas
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocument {
    pub canvas: Canvas,
    pub instructions: Vec<Instruction>,
}

/// Build the document for one symbol.
///
/// Returns `None` when the symbol has no renderable feature; such symbols
/// produce neither an image nor a dictionary entry.
pub fn assemble(symbol: &SymbolDefinition, policy: &CanvasPolicy) -> Option<RenderedDocument> {
    let features = symbol.valid_features();
    if features.is_empty() {
        crate::log::debug!(symbol = %symbol.id, "no renderable features, skipping");
        return None;
    }

    let transform = policy.transform();
    let instructions: Vec<Instruction> = features.iter().map(|f| emit(f, &transform)).collect();

    let canvas = match *policy {
        CanvasPolicy::FitToContent => {
            let bbox = symbol_bounds(&features)?;
            Canvas::ViewBox(transform.apply_box(&bbox))
        }
        CanvasPolicy::Fixed { width, height, .. } => Canvas::Fixed { width, height },
    };

    crate::log::debug!(
        symbol = %symbol.id,
        shapes = instructions.len(),
        ?canvas,
        "assembled symbol"
    );
    Some(RenderedDocument { canvas, instructions })
}

impl RenderedDocument {
    /// The SVG element tree
    pub fn to_svg(&self) -> SymbolSvg {
        let mut svg = SymbolSvg {
            fill: Some(defaults::CANVAS_FILL.to_string()),
            ..Default::default()
        };
        match self.canvas {
            Canvas::ViewBox(b) => {
                let (w, h) = (b.width(), b.height());
                svg.view_box = Some(format!(
                    "{} {} {} {}",
                    fmt_num(b.min.x),
                    fmt_num(b.min.y),
                    fmt_num(w),
                    fmt_num(h)
                ));
                svg.width = Some(format!("{}px", fmt_num(w)));
                svg.height = Some(format!("{}px", fmt_num(h)));
            }
            Canvas::Fixed { width, height } => {
                svg.width = Some(fmt_num(width));
                svg.height = Some(fmt_num(height));
            }
        }
        svg.children = self.instructions.iter().map(Instruction::to_svg_node).collect();
        svg
    }

    /// Serialize to a standalone SVG file body, XML declaration included
    pub fn to_xml(&self, id: &str) -> Result<String, CompileError> {
        let options = SerializeOptions {
            float_formatter: Some(format_float),
            ..Default::default()
        };
        let body = facet_xml::to_string_with_options(&self.to_svg(), &options).map_err(|e| {
            CompileError::Serialize {
                id: id.to_string(),
                message: e.to_string(),
            }
        })?;
        Ok(format!("{}\n{}", defaults::XML_DECLARATION, body))
    }
}
