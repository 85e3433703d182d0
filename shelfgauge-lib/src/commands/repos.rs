use super::Host;
use super::common::{CommonArgs, github_client, require_token};
use crate::Result;
use crate::api::github_show_all;
use clap::Parser;
use ohno::IntoAppError;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct ReposArgs {
    /// GitHub personal access token
    #[arg(long, value_name = "TOKEN", env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Print the repositories the token owner administers, as the API would list them.
pub async fn list_repos<H: Host>(host: &mut H, args: &ReposArgs) -> Result<()> {
    let config = args.common.setup()?;
    let token = require_token(args.github_token.as_deref())?;
    let client = github_client(&config, Some(token))?;

    let github_repos = client.fetch_repos().await?;
    let response = github_show_all(&github_repos);

    let text = serde_json::to_string_pretty(&response.body).into_app_err("serializing repository list")?;
    let _ = writeln!(host.output(), "{text}");
    Ok(())
}
