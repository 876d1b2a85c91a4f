use axum::{
    Json,
    extract::{Path, State},
};
use lens_common::views::{ApiErrorResponse, ProfileDocument};
use tracing::{debug, instrument};

use crate::{context::ApiContext, error::ApiError};


/// GET /api/v1/users/{username}/profile
///
/// Fetch a GitHub user's account details and repositories in one document.
#[utoipa::path(
    get,
    path = "/api/v1/users/{username}/profile",
    tags = ["profile"],
    params(("username" = String, Path, description = "GitHub username")),
    responses(
        (status = 200, description = "Profile found", body = ProfileDocument),
        (status = 404, description = "User not found", body = ApiErrorResponse),
        (status = 502, description = "GitHub API error", body = ApiErrorResponse),
    )
)]
#[instrument(skip(ctx))]
pub async fn get_profile(
    State(ctx): State<ApiContext>,
    Path(username): Path<String>,
) -> Result<Json<ProfileDocument>, ApiError> {
    debug!("Received profile request");

    let profile = ctx.profiles.get_profile(&username).await?;

    debug!(repo_count = profile.repo_count(), "Retrieved profile");
    Ok(Json(profile))
}
