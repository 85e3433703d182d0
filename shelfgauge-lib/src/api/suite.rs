use super::{LOG_TARGET, Outcome, Response, SUITE_SERIALIZER, Status};
use crate::entity::{Repo, RepoSecret, Suite};
use crate::serializer::{Json, STRING, Transform};
use chrono::{DateTime, Utc};

/// `GET /repo/:source/:name/suite`
///
/// `suites` are the suites posted with any of the repository's secrets.
#[must_use]
pub fn show_suites(repo: Option<&Repo>, suites: &[Suite]) -> Response {
    if repo.is_none() {
        return Response::error(Status::NotFound);
    }

    Response::success(Status::Ok, Json::Array(SUITE_SERIALIZER.serialize_many(suites)))
}

/// `POST /repo/:source/:name/suite`
///
/// The body carries the shared secret under `secret` and the suite under `data`.
/// `secrets` are the secrets registered for `repo`. On success the new suite is
/// stamped with `now` as its creation time and returned for persistence.
#[must_use]
pub fn create_suite(repo: Option<&Repo>, secrets: &[RepoSecret], body: &Json, now: DateTime<Utc>) -> Outcome<Suite> {
    let Some(repo) = repo else {
        return Outcome::rejected(Response::error(Status::NotFound));
    };

    let candidate = body.get("secret").and_then(|secret| STRING.deserialize(secret));
    let Some(secret) = candidate.and_then(|candidate| secrets.iter().find(|secret| secret.matches(&candidate))) else {
        log::debug!(target: LOG_TARGET, "Rejecting suite for {:?}: no matching secret", repo.name);
        return Outcome::rejected(Response::error(Status::Forbidden));
    };

    let data = body.get("data").unwrap_or(&Json::Null);
    if !data.is_object() {
        log::debug!(target: LOG_TARGET, "Rejecting suite for {:?}: 'data' is not an object", repo.name);
        return Outcome::rejected(Response::error(Status::UnprocessableEntity));
    }

    let mut suite = SUITE_SERIALIZER.deserialize(data);
    suite.created_at = Some(now);
    suite.secret_id = secret.id;

    log::info!(
        target: LOG_TARGET,
        "Accepted suite {:?} at {:?} for {:?} with {} tests",
        suite.name,
        suite.git_ref,
        repo.name,
        suite.tests().len()
    );

    Outcome::created(Response::success(Status::Created, SUITE_SERIALIZER.serialize(&suite)), suite)
}
