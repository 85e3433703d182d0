use super::{LOG_TARGET, Outcome, REPO_SERIALIZER, Response, Status};
use crate::entity::{Repo, RepoCommit, RepoSecret, generate_secret};
use crate::hosting::{GithubCommit, GithubRepo, to_commits, to_repo};
use crate::serializer::Json;
use serde_json::json;

/// A repository registered through GitHub, with its known commit graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRepo {
    pub repo: Repo,
    pub commits: Vec<RepoCommit>,
}

/// `GET /user/repo/github`
///
/// Lists the user's GitHub repositories that the user administers.
#[must_use]
pub fn github_show_all(github_repos: &[GithubRepo]) -> Response {
    let repos: Vec<Repo> = github_repos.iter().filter(|repo| repo.permissions.admin).map(to_repo).collect();
    Response::success(Status::Ok, Json::Array(REPO_SERIALIZER.serialize_many(&repos)))
}

/// `GET /user/repo/github/:name`
///
/// Responds with the stored repository when `existing` is given. Otherwise the
/// repository fetched from GitHub is registered for `user_id`, who must
/// administer it, and handed back with its commits for persistence.
#[must_use]
pub fn github_show(
    existing: Option<&Repo>,
    github_repo: Option<&GithubRepo>,
    github_commits: &[GithubCommit],
    user_id: i64,
) -> Outcome<NewRepo> {
    if let Some(repo) = existing {
        return Outcome {
            response: Response::success(Status::Ok, REPO_SERIALIZER.serialize(repo)),
            created: None,
        };
    }

    let Some(github_repo) = github_repo else {
        return Outcome::rejected(Response::error(Status::NotFound));
    };

    register(github_repo, github_commits, user_id, Status::Ok)
}

/// Registers a GitHub repository for `user_id`, who must administer it.
///
/// This is the registration step of [`github_show`], answering `201 Created`.
#[must_use]
pub fn github_create(github_repo: &GithubRepo, github_commits: &[GithubCommit], user_id: i64) -> Outcome<NewRepo> {
    register(github_repo, github_commits, user_id, Status::Created)
}

fn register(github_repo: &GithubRepo, github_commits: &[GithubCommit], user_id: i64, status: Status) -> Outcome<NewRepo> {
    if !github_repo.permissions.admin {
        log::debug!(target: LOG_TARGET, "User {user_id} is not an admin of {}", github_repo.full_name);
        return Outcome::rejected(Response::error(Status::UnprocessableEntity));
    }

    let mut repo = to_repo(github_repo);
    repo.user_ids = vec![user_id];
    let commits = to_commits(github_commits, repo.name.as_deref());

    log::info!(target: LOG_TARGET, "Registering {} with {} commit edges", github_repo.full_name, commits.len());

    let response = Response::success(status, REPO_SERIALIZER.serialize(&repo));
    Outcome::created(response, NewRepo { repo, commits })
}

/// `POST /user/repo/:source/:name/auth`
///
/// Issues a new shared secret for CI agents. The plain key appears only in the
/// response; the returned record holds its digest.
#[must_use]
pub fn create_auth(repo: Option<&Repo>, user_id: i64, secret_bytes: usize) -> Outcome<RepoSecret> {
    let Some(repo) = repo else {
        return Outcome::rejected(Response::error(Status::NotFound));
    };

    if !repo.is_affiliated(user_id) {
        log::debug!(target: LOG_TARGET, "User {user_id} is not affiliated with {:?}", repo.name);
        return Outcome::rejected(Response::error(Status::Forbidden));
    }

    let (key, secret) = generate_secret(repo.id, secret_bytes);
    Outcome::created(Response::success(Status::Created, json!({ "authorization": key })), secret)
}
