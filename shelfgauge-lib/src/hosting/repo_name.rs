use crate::Result;
use ohno::bail;

const SEPARATOR: char = '~';

/// Split an `owner~repo` name into its owner and repository parts.
pub fn split_repo_name(name: &str) -> Result<(&str, &str)> {
    let Some((owner, repo)) = name.split_once(SEPARATOR) else {
        bail!("invalid repository name '{name}': expected 'owner{SEPARATOR}repo'");
    };

    if owner.is_empty() || repo.is_empty() || repo.contains(SEPARATOR) {
        bail!("invalid repository name '{name}': expected 'owner{SEPARATOR}repo'");
    }

    Ok((owner, repo))
}

/// Turn a GitHub `owner/repo` full name into the `owner~repo` form.
#[must_use]
pub fn join_repo_name(full_name: &str) -> String {
    full_name.replacen('/', "~", 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_repo_name() {
        assert_eq!(split_repo_name("shelfgauge~shelfgauge").unwrap(), ("shelfgauge", "shelfgauge"));
        assert_eq!(split_repo_name("tokio-rs~tokio").unwrap(), ("tokio-rs", "tokio"));
    }

    #[test]
    fn test_split_repo_name_rejects_malformed() {
        let _ = split_repo_name("no-separator").unwrap_err();
        let _ = split_repo_name("~repo").unwrap_err();
        let _ = split_repo_name("owner~").unwrap_err();
        let _ = split_repo_name("a~b~c").unwrap_err();
    }

    #[test]
    fn test_join_repo_name() {
        assert_eq!(join_repo_name("shelfgauge/shelfgauge"), "shelfgauge~shelfgauge");
        assert_eq!(join_repo_name("owner/repo/extra"), "owner~repo/extra");
    }
}
