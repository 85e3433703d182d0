//! Pieces shared by several commands.

use super::config::Config;
use crate::Result;
use crate::api::SUITE_SERIALIZER;
use crate::entity::Suite;
use crate::hosting::Client;
use crate::serializer::Json;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, ValueEnum};
use ohno::{IntoAppError, bail};
use std::fs;

const LOG_TARGET: &str = "commands";

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

/// Arguments shared by the commands that read configuration
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Path to configuration file (default is `shelfgauge.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none", global = true)]
    pub log_level: LogLevel,
}

impl CommonArgs {
    /// Initialize logging and load the configuration.
    pub fn setup(&self) -> Result<Config> {
        init_logging(self.log_level);
        Config::load(Utf8Path::new("."), self.config.as_deref())
    }
}

pub fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    // a logger may already be installed when commands run repeatedly in one process
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .try_init();
}

/// Read a suite from a JSON file in the shape CI posts it.
pub fn read_suite(path: &Utf8Path) -> Result<Suite> {
    let text = fs::read_to_string(path).into_app_err_with(|| format!("reading suite file '{path}'"))?;
    let json: Json = serde_json::from_str(&text).into_app_err_with(|| format!("parsing suite file '{path}'"))?;

    if !json.is_object() {
        bail!("suite file '{path}' must contain a JSON object");
    }

    let suite = SUITE_SERIALIZER.deserialize(&json);
    log::debug!(target: LOG_TARGET, "Read suite {:?} with {} tests from '{path}'", suite.name, suite.tests().len());
    Ok(suite)
}

/// Create a GitHub client from the configuration.
pub fn github_client(config: &Config, token: Option<&str>) -> Result<Client> {
    Client::new(token, config.github_api_url.as_str(), &config.user_agent, config.request_timeout)
}

/// Get the token or fail with a hint about how to supply one.
pub fn require_token(token: Option<&str>) -> Result<&str> {
    match token {
        Some(token) if !token.is_empty() => Ok(token),
        _ => bail!("a GitHub token is required; pass --github-token or set GITHUB_TOKEN"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_suite() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from(temp_dir.path().to_string_lossy().to_string()).join("suite.json");
        fs::write(
            &path,
            r#"{ "ref": "abc", "name": "nightly", "tests": [{ "name": "parse", "value": 1.5 }] }"#,
        )
        .unwrap();

        let suite = read_suite(&path).unwrap();
        assert_eq!(suite.git_ref.as_deref(), Some("abc"));
        assert_eq!(suite.test_named("parse").and_then(|t| t.value), Some(1.5));
    }

    #[test]
    fn test_read_suite_rejects_non_object() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from(temp_dir.path().to_string_lossy().to_string()).join("suite.json");
        fs::write(&path, "[1, 2]").unwrap();

        let _ = read_suite(&path).unwrap_err();
    }

    #[test]
    fn test_read_suite_rejects_invalid_json() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from(temp_dir.path().to_string_lossy().to_string()).join("suite.json");
        fs::write(&path, "{ not json").unwrap();

        let _ = read_suite(&path).unwrap_err();
    }

    #[test]
    fn test_require_token() {
        assert_eq!(require_token(Some("t")).unwrap(), "t");
        let _ = require_token(Some("")).unwrap_err();
        let _ = require_token(None).unwrap_err();
    }
}
