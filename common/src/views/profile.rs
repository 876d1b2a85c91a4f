use serde::Serialize;
use utoipa::ToSchema;

/// The account half of a profile, mapped field-for-field from the upstream
/// user record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct UserSummary {
    /// The user's login handle.
    pub user_name: String,

    /// The user's display name, if they have set one.
    pub display_name: Option<String>,

    /// URL of the user's avatar image.
    pub avatar: Option<String>,

    /// Free-text location from the user's profile.
    pub geo_location: Option<String>,

    /// Public email address, if the user exposes one.
    pub email: Option<String>,

    /// API URL of the user.
    pub url: Option<String>,

    /// Account creation time in RFC 1123 form (`Tue, 25 Jan 2011 18:44:36
    /// GMT`). Carries the upstream value unchanged if it could not be parsed.
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RepoSummary {
    pub name: String,
    pub url: String,
}

impl RepoSummary {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// A user's profile merged with their repository list.
///
/// `repo_count` is always the length of `repos`; both are only ever set
/// together through [`ProfileDocument::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProfileDocument {
    #[serde(flatten)]
    pub user: UserSummary,

    /// Repositories in the order the upstream returned them.
    repos: Vec<RepoSummary>,

    repo_count: usize,
}

impl ProfileDocument {
    pub fn new(user: UserSummary, repos: Vec<RepoSummary>) -> Self {
        let repo_count = repos.len();
        Self {
            user,
            repos,
            repo_count,
        }
    }

    pub fn repos(&self) -> &[RepoSummary] {
        &self.repos
    }

    pub fn repo_count(&self) -> usize {
        self.repo_count
    }
}
