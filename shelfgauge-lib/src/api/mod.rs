//! JSON API handlers
//!
//! Handler logic for the backend's endpoints, independent of any web framework
//! or database. Callers load the relevant records, invoke a handler, send the
//! returned [`Response`] and persist whatever record the handler produced.
//!
//! | Endpoint                              | Handler               |
//! |---------------------------------------|-----------------------|
//! | `GET /repo/:source/:name`             | [`show_repo`]         |
//! | `GET /repo/:source/:name/suite`       | [`show_suites`]       |
//! | `POST /repo/:source/:name/suite`      | [`create_suite`]      |
//! | `GET /user/repo/github`               | [`github_show_all`]   |
//! | `GET /user/repo/github/:name`         | [`github_show`]       |
//! | `POST /user/repo/:source/:name/auth`  | [`create_auth`]       |
//!
//! [`github_create`] registers a repository without the lookup step.

mod repo;
mod response;
mod serializers;
mod suite;
mod user_repo;

pub use repo::show_repo;
pub use response::{Outcome, Response, Status};
pub use serializers::{REPO_SERIALIZER, SUITE_SERIALIZER};
pub use suite::{create_suite, show_suites};
pub use user_repo::{NewRepo, create_auth, github_create, github_show, github_show_all};

const LOG_TARGET: &str = "api";
