use serde::Deserialize;

/// A GitHub user as returned by `GET /users/{username}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub url: Option<String>,
    pub html_url: Option<String>,

    /// ISO-8601 timestamp, e.g. `2011-01-25T18:44:36Z`.
    pub created_at: Option<String>,

    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
}

/// The subset of a repository from `GET /users/{username}/repos` that Lens
/// consumes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepoRecord {
    pub name: String,
    pub url: String,
}
