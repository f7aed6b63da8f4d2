use crate::config::types::{Config, CorpusConfig, SiteConfig, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_corpus_config(&config.corpus)?;
    validate_user_agent_config(&config.user_agent)?;

    if config.site.scratch_dir == config.corpus.output_dir {
        return Err(ConfigError::Validation(
            "scratch_dir and output_dir must be distinct directories".to_string(),
        ));
    }

    Ok(())
}

/// Validates source site configuration
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base_url: {}", e)))?;

    if url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "base_url must use HTTPS scheme, got '{}'",
            config.base_url
        )));
    }

    if config.index_letters.is_empty() {
        return Err(ConfigError::Validation(
            "index_letters cannot be empty".to_string(),
        ));
    }

    if !config
        .index_letters
        .chars()
        .all(|c| c.is_ascii_lowercase())
    {
        return Err(ConfigError::Validation(format!(
            "index_letters must be ASCII lowercase letters, got '{}'",
            config.index_letters
        )));
    }

    if config.scratch_dir.is_empty() {
        return Err(ConfigError::Validation(
            "scratch_dir cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates corpus configuration
fn validate_corpus_config(config: &CorpusConfig) -> Result<(), ConfigError> {
    if config.max_words < 1 {
        return Err(ConfigError::Validation(format!(
            "max_words must be >= 1, got {}",
            config.max_words
        )));
    }

    if config.output_dir.is_empty() {
        return Err(ConfigError::Validation(
            "output_dir cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    // Validate crawler name: non-empty, alphanumeric + hyphens only
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    // Validate contact URL
    Url::parse(&config.contact_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact_url: {}", e)))?;

    // Validate contact email (basic validation)
    validate_email(&config.contact_email)?;

    Ok(())
}

/// Basic email validation: one '@' with non-empty local part and a dotted domain
fn validate_email(email: &str) -> Result<(), ConfigError> {
    let parts: Vec<&str> = email.split('@').collect();

    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return Err(ConfigError::Validation(format!(
            "contact_email must be a valid email address, got '{}'",
            email
        )));
    }

    if !parts[1].contains('.') {
        return Err(ConfigError::Validation(format!(
            "contact_email domain must contain a dot, got '{}'",
            email
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            site: SiteConfig {
                base_url: "https://royallib.com".to_string(),
                index_letters: "abc".to_string(),
                scratch_dir: "htmls".to_string(),
            },
            corpus: CorpusConfig {
                max_words: 10_000_000,
                output_dir: "./corpus".to_string(),
            },
            user_agent: UserAgentConfig {
                crawler_name: "TestMill".to_string(),
                crawler_version: "1.0".to_string(),
                contact_url: "https://example.com/about".to_string(),
                contact_email: "admin@example.com".to_string(),
            },
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_rejects_http_base_url() {
        let mut config = valid_config();
        config.site.base_url = "http://royallib.com".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_unparseable_base_url() {
        let mut config = valid_config();
        config.site.base_url = "not a url".to_string();
        assert!(matches!(validate(&config), Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_rejects_empty_index_letters() {
        let mut config = valid_config();
        config.site.index_letters = String::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_rejects_uppercase_index_letters() {
        let mut config = valid_config();
        config.site.index_letters = "aBc".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_rejects_zero_budget() {
        let mut config = valid_config();
        config.corpus.max_words = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_rejects_empty_output_dir() {
        let mut config = valid_config();
        config.corpus.output_dir = String::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_rejects_scratch_equal_to_output() {
        let mut config = valid_config();
        config.site.scratch_dir = "./corpus".to_string();
        config.corpus.output_dir = "./corpus".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_rejects_bad_crawler_name() {
        let mut config = valid_config();
        config.user_agent.crawler_name = "Test Mill!".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_rejects_bad_email() {
        let mut config = valid_config();
        config.user_agent.contact_email = "not-an-email".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_user_agent_header_value() {
        let config = valid_config();
        assert_eq!(
            config.user_agent.header_value(),
            "TestMill/1.0 (+https://example.com/about; admin@example.com)"
        );
    }
}
