use serde::Deserialize;

/// Main configuration structure for Corpus-Mill
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub site: SiteConfig,
    pub corpus: CorpusConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
}

/// Source site configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Base URL of the library site (e.g., "https://royallib.com")
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Author index keys to traverse, in order
    #[serde(rename = "index-letters", default = "default_index_letters")]
    pub index_letters: String,

    /// Scratch directory for extracted archive files
    #[serde(rename = "scratch-dir", default = "default_scratch_dir")]
    pub scratch_dir: String,
}

/// Corpus accumulation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorpusConfig {
    /// Maximum total word count before traversal stops
    #[serde(rename = "max-words", default = "default_max_words")]
    pub max_words: u64,

    /// Directory the finished corpus is written to
    #[serde(rename = "output-dir")]
    pub output_dir: String,
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for crawler-related contact
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

impl UserAgentConfig {
    /// Formats the user agent string as `Name/Version (+URL; email)`
    pub fn header_value(&self) -> String {
        format!(
            "{}/{} (+{}; {})",
            self.crawler_name, self.crawler_version, self.contact_url, self.contact_email
        )
    }
}

fn default_index_letters() -> String {
    ('a'..='z').collect()
}

fn default_scratch_dir() -> String {
    "htmls".to_string()
}

fn default_max_words() -> u64 {
    10_000_000
}
