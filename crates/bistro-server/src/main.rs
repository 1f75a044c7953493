//! Binary entrypoint for the restaurant menu HTTP server.
//!
//! Serves the API on the fixed port 3000. The menu collection is seeded at
//! startup and lives only in process memory.

use bistro_server::router::build_router;
use bistro_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let state = AppState::new();
    let app = build_router(state);

    let addr = "0.0.0.0:3000";
    tracing::info!("restaurant API server running at http://localhost:3000");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
