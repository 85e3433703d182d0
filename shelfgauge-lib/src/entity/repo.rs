/// A source repository registered with the backend.
///
/// `name` uses `owner~repo` so it can travel as a single URL path segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Repo {
    pub id: Option<i64>,
    pub source: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
    pub user_ids: Vec<i64>,
}

impl Repo {
    /// Whether the given user administers this repository.
    #[must_use]
    pub fn is_affiliated(&self, user_id: i64) -> bool {
        self.user_ids.contains(&user_id)
    }
}
