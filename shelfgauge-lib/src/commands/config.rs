use crate::Result;
use crate::hosting::DEFAULT_API_URL;
use camino::{Utf8Path, Utf8PathBuf};
use core::ops::RangeInclusive;
use core::time::Duration;
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use url::Url;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// Name of the configuration file looked up when none is given explicitly
pub const CONFIG_FILE_NAME: &str = "shelfgauge.toml";

/// Accepted sizes, in bytes, of a generated repository secret
pub const SECRET_BYTES_RANGE: RangeInclusive<usize> = 16..=256;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Base URL of the GitHub REST API
    #[serde(default = "default_github_api_url")]
    pub github_api_url: String,

    /// User-Agent header sent with GitHub requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Timeout applied to each GitHub request
    #[serde(default = "default_request_timeout", with = "humantime_serde")]
    pub request_timeout: Duration,

    /// Number of random bytes in a generated repository secret
    #[serde(default = "default_secret_bytes")]
    pub secret_bytes: usize,

    /// Heading of commit comments
    #[serde(default = "default_comment_title")]
    pub comment_title: String,
}

fn default_github_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_user_agent() -> String {
    "shelfgauge".to_string()
}

const fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

const fn default_secret_bytes() -> usize {
    40
}

fn default_comment_title() -> String {
    "Benchmark results".to_string()
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// Without an explicit path, `shelfgauge.toml` is looked up in `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated
    pub fn load(dir: &Utf8Path, config_path: Option<&Utf8Path>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading shelfgauge configuration file '{path}'"))?;
            (path.to_path_buf(), text)
        } else {
            let path: Utf8PathBuf = dir.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
                Err(e) => return Err(e).into_app_err_with(|| format!("reading shelfgauge configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if a value is out of range or malformed
    pub fn validate(&self) -> Result<()> {
        if !SECRET_BYTES_RANGE.contains(&self.secret_bytes) {
            return Err(app_err!(
                "secret_bytes must be between {} and {}, got {}",
                SECRET_BYTES_RANGE.start(),
                SECRET_BYTES_RANGE.end(),
                self.secret_bytes
            ));
        }

        let url = Url::parse(&self.github_api_url).into_app_err_with(|| format!("parsing github_api_url '{}'", self.github_api_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(app_err!("github_api_url must use http or https, got '{}'", url.scheme()));
        }

        if self.request_timeout.is_zero() {
            return Err(app_err!("request_timeout must be greater than zero"));
        }

        if self.user_agent.trim().is_empty() {
            return Err(app_err!("user_agent must not be empty"));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_api_url: default_github_api_url(),
            user_agent: default_user_agent(),
            request_timeout: default_request_timeout(),
            secret_bytes: default_secret_bytes(),
            comment_title: default_comment_title(),
        }
    }
}
