use super::Host;
use super::common::{CommonArgs, read_suite};
use crate::Result;
use crate::reports::comment_body;
use camino::Utf8PathBuf;
use clap::Args;
use std::io::Write;

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Suite JSON file of the run being reported
    #[arg(value_name = "PATH")]
    pub current: Utf8PathBuf,

    /// Suite JSON file of the run to compare against
    #[arg(long, short = 'p', value_name = "PATH")]
    pub previous: Option<Utf8PathBuf>,

    /// Heading of the report (default is `comment_title` from the configuration)
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl ReportArgs {
    /// Build the comment body these arguments describe.
    pub(super) fn render(&self, comment_title: &str) -> Result<String> {
        let current = read_suite(&self.current)?;
        let previous = self.previous.as_deref().map(read_suite).transpose()?;
        let title = self.title.as_deref().unwrap_or(comment_title);

        Ok(comment_body(title, &current, previous.as_ref()))
    }
}

pub fn print_report<H: Host>(host: &mut H, args: &ReportArgs) -> Result<()> {
    let config = args.common.setup()?;
    let body = args.render(&config.comment_title)?;

    let _ = write!(host.output(), "{body}");
    Ok(())
}
