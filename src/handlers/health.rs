/// GET /: plain-text liveness string.
pub async fn health() -> &'static str {
    "API running"
}
