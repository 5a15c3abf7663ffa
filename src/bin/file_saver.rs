//! File saver entry point
//!
//! Saves text given on the command line to a file, choosing a numbered name
//! (`output_1.txt`, `output_2.txt`, ...) instead of overwriting.

use anyhow::Context;
use clap::Parser;
use page_gleaner::config::DEFAULT_ENCODING;
use page_gleaner::output::FileSaver;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Save content to a file without overwriting existing files
#[derive(Parser, Debug)]
#[command(name = "file-saver")]
#[command(version)]
#[command(about = "Save content to a file.", long_about = None)]
struct Cli {
    /// The content to save
    #[arg(value_name = "CONTENT")]
    content: String,

    /// The directory to save the file in (created if missing) [default: current directory]
    #[arg(long, value_name = "DIR")]
    directory: Option<PathBuf>,

    /// The filename to use [default: output.txt]
    #[arg(long, value_name = "NAME")]
    filename: Option<String>,

    /// The encoding to use when saving the file
    #[arg(long, value_name = "LABEL", default_value = DEFAULT_ENCODING)]
    encoding: String,

    /// Enable detailed logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let saver = FileSaver::new(&cli.encoding).context("Failed to save the file")?;
    let path = saver
        .save(&cli.content, cli.directory.as_deref(), cli.filename.as_deref())
        .context("Failed to save the file")?;

    println!("{}", path.display());
    Ok(())
}

/// Logs go to stderr so stdout carries only the saved path
fn setup_logging(verbose: bool) {
    let default_filter = if verbose {
        "page_gleaner=debug,info"
    } else {
        "page_gleaner=info,warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
