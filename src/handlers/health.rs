/// Liveness endpoint.
///
/// GET `/` — plain-text confirmation that the server is up. Never fails.
pub async fn liveness() -> &'static str {
    "It's alive!"
}
