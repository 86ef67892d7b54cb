use camino::Utf8PathBuf;
use clap::Parser;
use symbolc::{CompileOptions, compile_file};
use tracing_subscriber::EnvFilter;

/// Compile an XML symbol catalog into one SVG per symbol plus lang.json
#[derive(Parser)]
#[command(name = "symbolc")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Symbol catalog to read
    input: Utf8PathBuf,

    /// Directory that receives `<id>.svg` and `lang.json` (created if missing)
    output_dir: Utf8PathBuf,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let summary = compile_file(&cli.input, &cli.output_dir, &CompileOptions::default())?;
    tracing::info!(
        images = summary.images.len(),
        dictionary = %summary.dictionary,
        "done"
    );
    Ok(())
}
