use super::Host;
use super::common::{CommonArgs, github_client, require_token};
use super::report::ReportArgs;
use crate::Result;
use clap::Parser;
use ohno::EnrichableExt;
use std::io::Write;

const LOG_TARGET: &str = "commands";

#[derive(Parser, Debug)]
pub struct CommentArgs {
    /// Repository to comment on, as `owner~repo`
    #[arg(value_name = "REPO")]
    pub repo: String,

    /// Commit to comment on
    #[arg(value_name = "SHA")]
    pub sha: String,

    /// GitHub personal access token
    #[arg(long, value_name = "TOKEN", env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Print the comment instead of posting it
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub report: ReportArgs,
}

impl CommentArgs {
    const fn common(&self) -> &CommonArgs {
        &self.report.common
    }
}

pub async fn post_comment<H: Host>(host: &mut H, args: &CommentArgs) -> Result<()> {
    let config = args.common().setup()?;
    let body = args.report.render(&config.comment_title)?;

    if args.dry_run {
        let _ = write!(host.output(), "{body}");
        return Ok(());
    }

    let token = require_token(args.github_token.as_deref())?;
    let client = github_client(&config, Some(token))?;

    log::debug!(target: LOG_TARGET, "Posting {} bytes to {}@{}", body.len(), args.repo, args.sha);

    let comment = client
        .post_commit_comment(&args.repo, &args.sha, &body)
        .await
        .map_err(|e| e.enrich_with(|| format!("commenting on {}@{}", args.repo, args.sha)))?;

    let _ = writeln!(host.output(), "Posted comment: {}", comment.html_url);
    Ok(())
}
