use super::join_repo_name;
use crate::entity::{Repo, RepoCommit};
use chrono::{DateTime, Utc};
use serde::Deserialize;

const GITHUB_SOURCE: &str = "github";

/// A repository as returned by `GET /repos/{owner}/{repo}` and `GET /user/repos`
#[derive(Debug, Clone, Deserialize)]
pub struct GithubRepo {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub fork: bool,
    pub url: String,
    pub html_url: String,

    /// Only present when the request was authenticated
    #[serde(default)]
    pub permissions: GithubPermissions,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct GithubPermissions {
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub push: bool,
    #[serde(default)]
    pub pull: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GithubCommitSummary {
    pub sha: String,
    pub url: String,
    #[serde(default)]
    pub html_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GithubCommit {
    pub sha: String,
    pub url: String,
    pub html_url: String,
    #[serde(default)]
    pub parents: Vec<GithubCommitSummary>,
    pub commit: GithubCommitDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GithubCommitDetail {
    pub message: String,
    #[serde(default)]
    pub comment_count: u64,
    pub author: Option<GithubSignature>,
    pub committer: Option<GithubSignature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GithubSignature {
    pub name: String,
    pub email: String,
    pub date: DateTime<Utc>,
}

/// A comment created through `POST /repos/{owner}/{repo}/commits/{sha}/comments`
#[derive(Debug, Clone, Deserialize)]
pub struct CommitComment {
    pub id: u64,
    pub html_url: String,
}

/// Convert a GitHub repository into a [`Repo`] record.
#[must_use]
pub fn to_repo(github: &GithubRepo) -> Repo {
    Repo {
        source: Some(GITHUB_SOURCE.to_string()),
        name: Some(join_repo_name(&github.full_name)),
        url: Some(github.html_url.clone()),
        ..Repo::default()
    }
}

/// Flatten commits into one [`RepoCommit`] per commit/parent pair, in input order.
///
/// Root commits have no parents and therefore produce no records.
#[must_use]
pub fn to_commits(github: &[GithubCommit], repo_name: Option<&str>) -> Vec<RepoCommit> {
    github
        .iter()
        .flat_map(|commit| {
            commit.parents.iter().map(move |parent| RepoCommit {
                repo_name: repo_name.map(str::to_string),
                git_ref: commit.sha.clone(),
                parent: parent.sha.clone(),
            })
        })
        .collect()
}
