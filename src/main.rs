//! Page Gleaner main entry point
//!
//! This is the command-line interface for the crawler.

use anyhow::Context;
use clap::Parser;
use page_gleaner::config::{load_settings, validate, validate_seed, CrawlerSettings};
use page_gleaner::crawler::crawl;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Page Gleaner: crawl a website and save page titles and text as JSON
///
/// Starting at BASE_URL, pages are visited depth-first up to the maximum
/// depth. Results are saved periodically and once more when the crawl ends.
/// An existing output file is never overwritten; a numbered name is used
/// instead (crawl_results_1.json, ...).
#[derive(Parser, Debug)]
#[command(name = "page-gleaner")]
#[command(version)]
#[command(about = "A simple depth-first web crawler", long_about = None)]
struct Cli {
    /// The base URL to start crawling from
    #[arg(value_name = "BASE_URL")]
    base_url: String,

    /// The maximum depth to crawl; 0 fetches only the base URL [default: 2]
    #[arg(long = "max_depth", visible_alias = "max-depth", value_name = "N")]
    max_depth: Option<u32>,

    /// The file to save the crawl results [default: crawl_results.json]
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Timeout for HTTP requests in seconds [default: 10]
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<u64>,

    /// Save progress after this many pages [default: 10]
    #[arg(long = "save_interval", visible_alias = "save-interval", value_name = "N")]
    save_interval: Option<usize>,

    /// Text encoding of the results file [default: utf-8]
    #[arg(long, value_name = "LABEL")]
    encoding: Option<String>,

    /// Follow links to other hosts too
    #[arg(long = "allow_external", visible_alias = "allow-external")]
    allow_external: bool,

    /// User-Agent header sent with each request
    #[arg(long = "user_agent", visible_alias = "user-agent", value_name = "UA")]
    user_agent: Option<String>,

    /// TOML settings file; command-line flags take precedence
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable detailed logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Layers defaults, the optional settings file and the flags given
    fn settings(&self) -> anyhow::Result<CrawlerSettings> {
        let mut settings = CrawlerSettings::default();

        if let Some(path) = &self.config {
            let file = load_settings(path)
                .with_context(|| format!("Failed to load settings from {}", path.display()))?;
            tracing::info!("Loaded settings from {}", path.display());
            settings = settings.with_file(&file);
        }

        if let Some(max_depth) = self.max_depth {
            settings.max_depth = max_depth;
        }
        if let Some(output) = &self.output {
            settings.output_path = output.clone();
        }
        if let Some(timeout) = self.timeout {
            settings.timeout_secs = timeout;
        }
        if let Some(save_interval) = self.save_interval {
            settings.save_interval = save_interval;
        }
        if let Some(encoding) = &self.encoding {
            settings.encoding = encoding.clone();
        }
        if let Some(user_agent) = &self.user_agent {
            settings.user_agent = user_agent.clone();
        }
        if self.allow_external {
            settings.same_host_only = false;
        }

        validate(&settings).context("Invalid settings")?;
        Ok(settings)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    validate_seed(&cli.base_url).context("Invalid base URL")?;
    let settings = cli.settings()?;

    handle_crawl(settings, &cli.base_url).await
}

/// Sets up the logging/tracing subscriber on stderr
///
/// A set `RUST_LOG` takes precedence; otherwise `--verbose` selects debug
/// output for this crate.
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
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the main crawl operation
async fn handle_crawl(settings: CrawlerSettings, seed: &str) -> anyhow::Result<()> {
    tracing::info!(
        "Max depth: {}, timeout: {}s, save interval: {}, same host only: {}",
        settings.max_depth,
        settings.timeout_secs,
        settings.save_interval,
        settings.same_host_only
    );

    let requested = settings.output_path.clone();
    let summary = crawl(settings, seed)
        .await
        .with_context(|| format!("Crawl failed; could not write {}", requested.display()))?;

    if summary.output_path != requested {
        tracing::info!(
            "{} already existed; results written to {} instead",
            requested.display(),
            summary.output_path.display()
        );
    }

    tracing::info!(
        "Crawl results saved to {} ({} pages, {} failed, {:.1}% success)",
        summary.output_path.display(),
        summary.pages_visited,
        summary.pages_failed,
        summary.success_rate()
    );

    Ok(())
}
