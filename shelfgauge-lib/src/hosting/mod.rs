//! GitHub integration
//!
//! Wire types for the parts of the GitHub REST API the backend reads, the
//! conversions from those types to [`crate::entity`] records, and a small
//! client issuing the calls. Pagination and rate limiting are left to the
//! caller: every list call fetches a single page of up to 100 items.

mod client;
mod github_data;
mod repo_name;

pub use client::{Client, DEFAULT_API_URL};
pub use github_data::{CommitComment, GithubCommit, GithubCommitDetail, GithubCommitSummary, GithubPermissions, GithubRepo, GithubSignature, to_commits, to_repo};
pub use repo_name::{join_repo_name, split_repo_name};
