use super::Host;
use super::common::CommonArgs;
use super::config::SECRET_BYTES_RANGE;
use crate::Result;
use crate::entity::generate_secret;
use clap::Parser;
use ohno::bail;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct SecretArgs {
    /// Number of random bytes (default is `secret_bytes` from the configuration)
    #[arg(long, value_name = "COUNT")]
    pub bytes: Option<usize>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Generate a repository secret and print the key with the digest to store.
pub fn create_secret<H: Host>(host: &mut H, args: &SecretArgs) -> Result<()> {
    let config = args.common.setup()?;
    let bytes = args.bytes.unwrap_or(config.secret_bytes);

    if !SECRET_BYTES_RANGE.contains(&bytes) {
        bail!(
            "--bytes must be between {} and {}, got {bytes}",
            SECRET_BYTES_RANGE.start(),
            SECRET_BYTES_RANGE.end()
        );
    }

    let (key, secret) = generate_secret(None, bytes);
    let _ = writeln!(host.output(), "key: {key}\ndigest: {}", secret.digest_base64());
    Ok(())
}
