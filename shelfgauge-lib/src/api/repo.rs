use super::{REPO_SERIALIZER, Response, Status};
use crate::entity::Repo;

/// `GET /repo/:source/:name`
#[must_use]
pub fn show_repo(repo: Option<&Repo>) -> Response {
    match repo {
        Some(repo) => Response::success(Status::Ok, REPO_SERIALIZER.serialize(repo)),
        None => Response::error(Status::NotFound),
    }
}
