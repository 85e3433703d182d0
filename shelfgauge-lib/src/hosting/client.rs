//! GitHub API client
//!
//! Minimal GitHub REST client for the calls the backend makes: listing and
//! fetching repositories, listing commits, and commenting on commits.

use super::{CommitComment, GithubCommit, GithubRepo, split_repo_name};
use crate::Result;
use core::time::Duration;
use ohno::{IntoAppError, bail};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::json;

const LOG_TARGET: &str = "github";

/// Base URL of the public GitHub REST API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const MAX_PER_PAGE: &str = "100";

/// GitHub API client
#[derive(Debug, Clone)]
#[expect(clippy::struct_field_names, reason = "client field stores the underlying HTTP client")]
pub struct Client {
    client: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Create a new client with an optional OAuth or personal access token
    pub fn new(token: Option<&str>, base_url: impl Into<String>, user_agent: &str, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let _ = headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        if let Some(t) = token {
            let mut auth_val = HeaderValue::from_str(&format!("token {t}"))?;
            auth_val.set_sensitive(true);
            let _ = headers.insert(AUTHORIZATION, auth_val);
        }

        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        let base_url: String = base_url.into();

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get the base URL for this client
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Repositories of the authenticated user, most recently updated first
    pub async fn fetch_repos(&self) -> Result<Vec<GithubRepo>> {
        let url = format!("{}/user/repos", self.base_url);
        self.get_json(&url, &[("sort", "updated"), ("per_page", MAX_PER_PAGE)]).await
    }

    /// A single repository, given as `owner~repo`
    pub async fn fetch_repo(&self, name: &str) -> Result<GithubRepo> {
        let (owner, repo) = split_repo_name(name)?;
        let url = format!("{}/repos/{owner}/{repo}", self.base_url);
        self.get_json(&url, &[]).await
    }

    /// Recent commits of a repository, optionally starting from `sha`
    pub async fn fetch_commits(&self, name: &str, sha: Option<&str>) -> Result<Vec<GithubCommit>> {
        let (owner, repo) = split_repo_name(name)?;
        let url = format!("{}/repos/{owner}/{repo}/commits", self.base_url);

        let mut query = vec![("per_page", MAX_PER_PAGE)];
        if let Some(sha) = sha {
            query.push(("sha", sha));
        }

        self.get_json(&url, &query).await
    }

    /// Post a comment on a commit
    pub async fn post_commit_comment(&self, name: &str, sha: &str, body: &str) -> Result<CommitComment> {
        let (owner, repo) = split_repo_name(name)?;
        let url = format!("{}/repos/{owner}/{repo}/commits/{sha}/comments", self.base_url);

        log::info!(target: LOG_TARGET, "Commenting on {owner}/{repo}@{sha}");

        let resp = self
            .client
            .post(&url)
            .json(&json!({ "body": body }))
            .send()
            .await
            .into_app_err_with(|| format!("posting comment to {url}"))?;

        Self::decode(&url, resp).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, query: &[(&str, &str)]) -> Result<T> {
        log::debug!(target: LOG_TARGET, "GET {url}");

        let resp = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .into_app_err_with(|| format!("requesting {url}"))?;

        Self::decode(url, resp).await
    }

    async fn decode<T: DeserializeOwned>(url: &str, resp: reqwest::Response) -> Result<T> {
        let status = resp.status();
        if !status.is_success() {
            log::debug!(target: LOG_TARGET, "{url} answered HTTP {status}");
            bail!("GitHub request to {url} failed: HTTP {status}");
        }

        resp.json::<T>().await.into_app_err_with(|| format!("decoding response from {url}"))
    }
}
