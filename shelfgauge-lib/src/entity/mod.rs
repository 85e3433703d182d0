//! Records persisted by the backend
//!
//! These are plain values: loading and storing them is the job of the hosting
//! environment. Fields that the JSON API exposes are `Option`s so that a record
//! can be partially populated, which is how the serializer represents a field
//! that was never provided.

mod repo;
mod repo_commit;
mod repo_secret;
mod suite;

pub use repo::Repo;
pub use repo_commit::RepoCommit;
pub use repo_secret::{RepoSecret, generate_secret};
pub use suite::{Suite, SuiteEnv, SuiteTest};
