//! Router assembly for the menu HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with the
//! request-logging, CORS, and tracing middleware layers.

use axum::routing::get;
use axum::{middleware, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::logging;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// Routes use axum 0.8 `/{param}` path syntax. CORS is permissive.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home::home))
        .route(
            "/api/menu",
            get(handlers::menu::list_menu).post(handlers::menu::create_menu_item),
        )
        .route(
            "/api/menu/{id}",
            get(handlers::menu::get_menu_item)
                .put(handlers::menu::update_menu_item)
                .delete(handlers::menu::delete_menu_item),
        )
        .layer(middleware::from_fn(logging::log_request))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
