pub mod profile;

#[utoipa::path(
    get,
    path = "/healthz",
    tags = ["health"],
    responses((status = 200, description = "Service is up", body = String))
)]
pub async fn health_check() -> &'static str {
    "Healthy"
}
