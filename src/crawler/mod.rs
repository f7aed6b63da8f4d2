//! Crawler module for site traversal and book processing
//!
//! This module contains the crawl logic, including:
//! - HTTP fetching of index pages, listings, and archives
//! - Author and book enumeration
//! - ZIP archive extraction into the scratch directory
//! - Overall traversal coordination and budget enforcement

mod archive;
mod catalog;
mod coordinator;
mod fetcher;

pub use archive::extract_archive;
pub use catalog::{author_index_url, parse_author_links, parse_book_archive_links};
pub use coordinator::{run_harvest, Harvester};
pub use fetcher::{build_http_client, fetch_bytes, fetch_text};

use crate::config::Config;
use crate::Result;

/// Runs a complete harvest operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the HTTP client
/// 2. Recreate the scratch directory
/// 3. Walk author indexes, book listings, and archives in order
/// 4. Accumulate prose blocks until the word budget is exceeded
/// 5. Save the corpus to the configured output directory
pub async fn crawl(config: Config) -> Result<()> {
    run_harvest(config).await
}
