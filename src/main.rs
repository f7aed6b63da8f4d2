//! Corpus-Mill main entry point
//!
//! This is the command-line interface for the Corpus-Mill book-corpus harvester.

use clap::Parser;
use corpus_mill::config::load_config_with_hash;
use corpus_mill::crawler::crawl;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Corpus-Mill: a book-library corpus harvester
///
/// Corpus-Mill walks a book-library site's author indexes, downloads zipped
/// HTML book archives, extracts readable prose paragraphs, and accumulates
/// them into a flat text corpus up to a configured word budget.
#[derive(Parser, Debug)]
#[command(name = "corpus-mill")]
#[command(version = "1.0.0")]
#[command(about = "A book-library corpus harvester", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, _config_hash) = match load_config_with_hash(&cli.config) {
        Ok((cfg, hash)) => {
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (cfg, hash)
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
    } else {
        handle_crawl(config).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("corpus_mill=info,warn"),
            1 => EnvFilter::new("corpus_mill=debug,info"),
            2 => EnvFilter::new("corpus_mill=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would be crawled
fn handle_dry_run(config: &corpus_mill::config::Config) {
    println!("=== Corpus-Mill Dry Run ===\n");

    println!("Site:");
    println!("  Base URL: {}", config.site.base_url);
    println!("  Index letters: {}", config.site.index_letters);
    println!("  Scratch directory: {}", config.site.scratch_dir);

    println!("\nCorpus:");
    println!("  Word budget: {}", config.corpus.max_words);
    println!("  Output directory: {}", config.corpus.output_dir);

    println!("\nUser Agent:");
    println!("  {}", config.user_agent.header_value());

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would traverse {} author index pages starting at {}",
        config.site.index_letters.len(),
        corpus_mill::crawler::author_index_url(
            &config.site.base_url,
            config.site.index_letters.chars().next().unwrap_or('a')
        )
    );
}

/// Handles the main crawl operation
async fn handle_crawl(config: corpus_mill::config::Config) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(
        "Harvesting {} with a budget of {} words",
        config.site.base_url,
        config.corpus.max_words
    );

    match crawl(config).await {
        Ok(()) => {
            tracing::info!("Harvest completed successfully");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Harvest failed: {}", e);
            Err(e.into())
        }
    }
}
