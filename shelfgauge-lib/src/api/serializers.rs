use crate::entity::{Repo, Suite, SuiteEnv, SuiteTest};
use crate::serializer::{DATE, NUMBER, ObjectSerializer, STRING};
use std::sync::LazyLock;

/// JSON shape of a repository
pub static REPO_SERIALIZER: LazyLock<ObjectSerializer<Repo>> = LazyLock::new(|| {
    ObjectSerializer::new(Repo::default)
        .field("url", STRING, |r| r.url.as_ref(), |r, v| r.url = Some(v))
        .field("source", STRING, |r| r.source.as_ref(), |r, v| r.source = Some(v))
        .field("name", STRING, |r| r.name.as_ref(), |r, v| r.name = Some(v))
});

/// JSON shape of a suite, both as posted by CI and as returned by the API
pub static SUITE_SERIALIZER: LazyLock<ObjectSerializer<Suite>> = LazyLock::new(|| {
    let env = ObjectSerializer::new(SuiteEnv::default)
        .field("source", STRING, |e| e.source.as_ref(), |e, v| e.source = Some(v))
        .field("info", STRING, |e| e.info.as_ref(), |e, v| e.info = Some(v));

    let tests = ObjectSerializer::new(SuiteTest::default)
        .field("name", STRING, |t| t.name.as_ref(), |t, v| t.name = Some(v))
        .field("value", NUMBER, |t| t.value.as_ref(), |t, v| t.value = Some(v))
        .into_array();

    ObjectSerializer::new(Suite::default)
        .field("ref", STRING, |s| s.git_ref.as_ref(), |s, v| s.git_ref = Some(v))
        .field("name", STRING, |s| s.name.as_ref(), |s, v| s.name = Some(v))
        .field("ranAt", DATE, |s| s.ran_at.as_ref(), |s, v| s.ran_at = Some(v))
        .field("createdAt", DATE, |s| s.created_at.as_ref(), |s, v| s.created_at = Some(v))
        .field("env", env, |s| s.env.as_ref(), |s, v| s.env = Some(v))
        .field("tests", tests, |s| s.tests.as_ref(), |s, v| s.tests = Some(v))
});
