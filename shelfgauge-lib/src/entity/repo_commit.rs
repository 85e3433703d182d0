/// One edge of a repository's commit graph: a commit and one of its parents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoCommit {
    pub repo_name: Option<String>,
    pub git_ref: String,
    pub parent: String,
}
