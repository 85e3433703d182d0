use super::Host;
use super::common::{LogLevel, init_logging};
use super::config::Config;
use crate::Result;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to configuration file (default is `shelfgauge.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,
}

pub fn validate_config<H: Host>(host: &mut H, args: &ValidateArgs) -> Result<()> {
    init_logging(args.log_level);
    let config_path = args.config.as_deref();

    match Config::load(Utf8Path::new("."), config_path) {
        Ok(_) => {
            let message = config_path.map_or_else(
                || "Configuration is valid (no config file found, using defaults)".to_string(),
                |path| format!("Configuration file '{path}' is valid"),
            );
            let _ = writeln!(host.output(), "{message}");
            Ok(())
        }
        Err(e) => {
            let _ = writeln!(host.error(), "Configuration validation failed: {e}");
            host.exit(1);
            Err(e)
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::commands::host::TestHost;
    use crate::commands::init::{InitArgs, init_config};

    fn temp_path(dir: &tempfile::TempDir, name: &str) -> Utf8PathBuf {
        Utf8PathBuf::from(dir.path().to_string_lossy().to_string()).join(name)
    }

    fn validate(path: Utf8PathBuf) -> (TestHost, Result<()>) {
        let mut host = TestHost::new();
        let args = ValidateArgs {
            config: Some(path),
            log_level: LogLevel::None,
        };
        let result = validate_config(&mut host, &args);
        (host, result)
    }

    #[test]
    fn test_generated_config_is_valid() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_path(&temp_dir, "shelfgauge.toml");

        let mut init_host = TestHost::new();
        let init_args = InitArgs {
            output: Some(path.clone()),
            force: false,
        };
        init_config(&mut init_host, &init_args).unwrap();
        assert!(init_host.output_str().contains("Generated default configuration file"));

        let (host, result) = validate(path);
        result.unwrap();
        assert!(host.output_str().contains("is valid"));
        assert_eq!(host.exit_code, None);
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_path(&temp_dir, "shelfgauge.toml");
        std::fs::write(&path, "secret_bytes = 64\n").unwrap();

        let mut host = TestHost::new();
        let mut args = InitArgs {
            output: Some(path.clone()),
            force: false,
        };
        let _ = init_config(&mut host, &args).unwrap_err();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "secret_bytes = 64\n");

        args.force = true;
        init_config(&mut host, &args).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("secret_bytes = 40"));
    }

    #[test]
    fn test_invalid_toml_syntax() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_path(&temp_dir, "invalid_syntax.toml");
        std::fs::write(&path, "comment_title = \"unterminated\n").unwrap();

        let (host, result) = validate(path);
        assert!(result.is_err(), "invalid TOML syntax should fail validation");
        assert_eq!(host.exit_code, Some(1));
        assert!(host.error_str().contains("Configuration validation failed"));
    }

    #[test]
    fn test_unknown_field() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_path(&temp_dir, "unknown_field.toml");
        std::fs::write(&path, "unknown_field = \"value\"\n").unwrap();

        let (host, result) = validate(path);
        assert!(result.is_err(), "unknown field should fail validation");
        assert_eq!(host.exit_code, Some(1));
    }

    #[test]
    fn test_invalid_duration_format() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_path(&temp_dir, "invalid_duration.toml");
        std::fs::write(&path, "request_timeout = \"not a valid duration\"\n").unwrap();

        let (_, result) = validate(path);
        assert!(result.is_err(), "invalid duration should fail validation");
    }

    #[test]
    fn test_out_of_range_secret_bytes() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_path(&temp_dir, "secret_bytes.toml");
        std::fs::write(&path, "secret_bytes = 8\n").unwrap();

        let (host, result) = validate(path);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("secret_bytes"), "unexpected error: {message}");
        assert_eq!(host.exit_code, Some(1));
    }

    #[test]
    fn test_empty_config_is_valid() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_path(&temp_dir, "empty.toml");
        std::fs::write(&path, "# Empty config file\n").unwrap();

        let (_, result) = validate(path);
        assert!(result.is_ok(), "empty config should be valid (uses defaults)");
    }
}
