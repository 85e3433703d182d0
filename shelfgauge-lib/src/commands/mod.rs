//! Command-line interface for shelfgauge
//!
//! The commands let CI jobs and repository owners drive the library from a
//! shell, without running the web backend.
//!
//! ## Commands
//!
//! - **report**: Read a suite JSON file, optionally with a previous one, and
//!   print the Markdown comment comparing them
//! - **comment**: Build the same comment and post it on a GitHub commit
//! - **repos**: List the GitHub repositories the token owner administers, in
//!   the JSON API's response shape
//! - **secret**: Generate a repository secret for CI agents
//! - **init**: Generate a default configuration file
//! - **validate**: Check a configuration file
//!
//! Configuration is read from `shelfgauge.toml` in the current directory, or
//! from the file given with `--config`. Defaults apply when neither exists.

mod comment;
mod common;
mod config;
mod host;
mod init;
mod report;
mod repos;
mod run;
mod secret;
mod validate;

#[cfg(debug_assertions)]
pub use config::Config;

pub use comment::{CommentArgs, post_comment};
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use report::{ReportArgs, print_report};
pub use repos::{ReposArgs, list_repos};
pub use run::run;
pub use secret::{SecretArgs, create_secret};
pub use validate::{ValidateArgs, validate_config};
