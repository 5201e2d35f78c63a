use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "aichecker", version)]
#[command(about = "Estimate AI-likeness of text from various file types.")]
struct Cli {
    /// Path to input file (.txt, .docx, .pdf, .pptx)
    #[arg(value_name = "FILE")]
    filepath: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    aichecker_lib::init_logging();

    aichecker_lib::run(&cli.filepath)
        .with_context(|| format!("analyzing {}", cli.filepath.display()))?;
    Ok(())
}
