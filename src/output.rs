//! Reading the catalog file and populating the output directory.
//!
//! Any I/O failure aborts the run. Files written before the failure stay in
//! place.

use camino::{Utf8Path, Utf8PathBuf};

use crate::errors::{CompileError, SourceContext};
use crate::{Compilation, CompileOptions, compile_source, defaults};

/// What a run wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub images: Vec<Utf8PathBuf>,
    pub dictionary: Utf8PathBuf,
}

/// Compile `input` and write `<id>.<ext>` files plus `lang.json` into `output_dir`
pub fn compile_file(
    input: &Utf8Path,
    output_dir: &Utf8Path,
    options: &CompileOptions,
) -> Result<Summary, CompileError> {
    let source = std::fs::read_to_string(input).map_err(|source| CompileError::Read {
        path: input.to_owned(),
        source,
    })?;
    let compilation = compile_source(&SourceContext::new(input.as_str(), source), options)?;
    write_compilation(&compilation, output_dir, options)
}

/// Write an in-memory compilation to disk
pub fn write_compilation(
    compilation: &Compilation,
    output_dir: &Utf8Path,
    options: &CompileOptions,
) -> Result<Summary, CompileError> {
    std::fs::create_dir_all(output_dir).map_err(|source| CompileError::CreateDir {
        path: output_dir.to_owned(),
        source,
    })?;

    let mut images = Vec::with_capacity(compilation.symbols.len());
    for symbol in &compilation.symbols {
        let path = output_dir.join(format!("{}.{}", symbol.id, options.extension));
        let xml = symbol.document.to_xml(&symbol.id)?;
        write(&path, &xml)?;
        crate::log::debug!(%path, "wrote symbol");
        images.push(path);
    }

    let dictionary = output_dir.join(defaults::LANG_FILE);
    write(&dictionary, &compilation.dictionary.to_json()?)?;

    crate::log::info!(images = images.len(), dir = %output_dir, "output written");
    Ok(Summary { images, dictionary })
}

fn write(path: &Utf8Path, contents: &str) -> Result<(), CompileError> {
    std::fs::write(path, contents).map_err(|source| CompileError::Write {
        path: path.to_owned(),
        source,
    })
}
