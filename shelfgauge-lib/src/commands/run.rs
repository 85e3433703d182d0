//! Command dispatch logic for shelfgauge

use super::{
    CommentArgs, InitArgs, ReportArgs, ReposArgs, SecretArgs, ValidateArgs, create_secret, init_config, list_repos, post_comment,
    print_report, validate_config,
};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "shelfgauge", version, author, long_about = None)]
#[command(about = "Track benchmark results per commit and report how they change")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the comment comparing a suite with a previous run
    Report(ReportArgs),
    /// Post the comparison as a comment on a GitHub commit
    Comment(Box<CommentArgs>),
    /// List the GitHub repositories you administer
    Repos(ReposArgs),
    /// Generate a repository secret for CI agents
    Secret(SecretArgs),
    /// Generate a default configuration file
    Init(InitArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// # Errors
///
/// Returns an error if command parsing fails or if the executed command fails
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    match &Cli::parse_from(args).command {
        Command::Report(report_args) => print_report(host, report_args),
        Command::Comment(comment_args) => post_comment(host, comment_args).await,
        Command::Repos(repos_args) => list_repos(host, repos_args).await,
        Command::Secret(secret_args) => create_secret(host, secret_args),
        Command::Init(init_args) => init_config(host, init_args),
        Command::Validate(validate_args) => validate_config(host, validate_args),
    }
}
