//! Crawl coordinator - main traversal logic
//!
//! This module drives the nested traversal over the library site: for each
//! index letter, enumerate authors; for each author, enumerate book archives;
//! for each book, fetch and extract the archive, run every HTML file through
//! the extractor, and hand the book's blocks to the corpus. The word budget
//! is checked once per whole book, and the entire remaining traversal stops
//! as soon as it is exceeded.

use crate::config::Config;
use crate::corpus::Corpus;
use crate::crawler::archive::extract_archive;
use crate::crawler::catalog::{author_index_url, parse_author_links, parse_book_archive_links};
use crate::crawler::fetcher::{build_http_client, fetch_bytes, fetch_text};
use crate::extract::{decode_windows_1251, extract_blocks};
use crate::{MillError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

/// Main harvester structure owning the crawl state for one run
pub struct Harvester {
    config: Config,
    client: Client,
    corpus: Corpus,
    progress: ProgressBar,
}

impl Harvester {
    /// Creates a new harvester from a validated configuration
    pub fn new(config: Config) -> Result<Self> {
        let client = build_http_client(&config.user_agent)?;
        let corpus = Corpus::new(config.corpus.max_words);

        // The bar tracks cumulative words against the budget, nothing else.
        let progress = ProgressBar::new(config.corpus.max_words);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("[{bar:40.green/dim}] {pos}/{len} words")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        Ok(Self {
            config,
            client,
            corpus,
            progress,
        })
    }

    /// Runs the traversal to completion and returns the accumulated corpus
    ///
    /// The scratch directory is recreated empty at startup and removed at
    /// the end. Traversal covers every configured index letter unless the
    /// budget predicate turns true after some whole book, at which point all
    /// remaining files, books, authors, and letters are abandoned.
    pub async fn run(mut self) -> Result<Corpus> {
        let scratch = PathBuf::from(&self.config.site.scratch_dir);
        if scratch.exists() {
            fs::remove_dir_all(&scratch)?;
        }
        fs::create_dir_all(&scratch)?;

        let letters: Vec<char> = self.config.site.index_letters.chars().collect();

        'crawl: for letter in letters {
            let index_url = author_index_url(&self.config.site.base_url, letter);
            tracing::info!("Author index '{}': {}", letter, index_url);

            let index_html = fetch_text(&self.client, &index_url).await?;
            let authors = parse_author_links(&index_html);
            tracing::debug!("Found {} author links under '{}'", authors.len(), letter);

            for author in authors {
                let books = self.list_books(&author).await?;

                for book in books {
                    self.process_book(&book, &scratch).await?;
                    self.progress.set_position(self.corpus.total_words());

                    if self.corpus.is_over_budget() {
                        tracing::info!(
                            "Budget exceeded: {} words > {} max, stopping traversal",
                            self.corpus.total_words(),
                            self.config.corpus.max_words
                        );
                        break 'crawl;
                    }
                }
            }
        }

        fs::remove_dir_all(&scratch)?;
        self.progress.finish_and_clear();

        tracing::info!(
            "Traversal finished: {} blocks, {} words",
            self.corpus.len(),
            self.corpus.total_words()
        );

        Ok(self.corpus)
    }

    /// Enumerates one author's book archive addresses
    ///
    /// A malformed author address is treated as "no books found" rather than
    /// propagated; listing pages without a book table yield the empty set.
    async fn list_books(&self, author: &str) -> Result<BTreeSet<String>> {
        if Url::parse(author).is_err() {
            tracing::debug!("Skipping malformed author address: {}", author);
            return Ok(BTreeSet::new());
        }

        let html = fetch_text(&self.client, author).await?;
        Ok(parse_book_archive_links(&html))
    }

    /// Downloads and processes one book archive
    ///
    /// All blocks from all of the book's HTML files are gathered and added to
    /// the corpus in a single `add_book` call, so the budget check that
    /// follows sees whole books only. Scratch files are deleted as they are
    /// consumed.
    async fn process_book(&mut self, archive_url: &str, scratch: &Path) -> Result<()> {
        tracing::debug!("Fetching archive: {}", archive_url);
        let bytes = fetch_bytes(&self.client, archive_url).await?;
        let files = extract_archive(&bytes, scratch)?;

        let mut blocks = Vec::new();
        for file in files {
            let raw = fs::read(&file)?;
            let html = decode_windows_1251(&raw).ok_or_else(|| MillError::Decode {
                path: file.clone(),
            })?;
            blocks.extend(extract_blocks(&html));
            fs::remove_file(&file)?;
        }

        self.corpus.add_book(blocks);
        Ok(())
    }
}

/// Runs a complete harvest: traverse the site, then save the corpus
///
/// # Arguments
///
/// * `config` - The validated crawler configuration
///
/// # Returns
///
/// * `Ok(())` - Harvest completed and corpus saved
/// * `Err(MillError)` - Harvest failed
///
/// # Example
///
/// ```no_run
/// use corpus_mill::config::load_config;
/// use corpus_mill::crawler::run_harvest;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("config.toml"))?;
/// run_harvest(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn run_harvest(config: Config) -> Result<()> {
    let output_dir = PathBuf::from(&config.corpus.output_dir);
    let harvester = Harvester::new(config)?;
    let corpus = harvester.run().await?;
    corpus.save(&output_dir)
}
