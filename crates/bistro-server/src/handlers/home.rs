//! API homepage handler.

use axum::Json;

/// Lists the available routes.
///
/// `GET /`
pub async fn home() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Welcome to the Restaurant API",
        "endpoints": {
            "GET /api/menu": "Get all menu items",
            "GET /api/menu/:id": "Get a specific menu item by ID",
            "POST /api/menu": "Add a new menu item",
            "PUT /api/menu/:id": "Update a menu item by ID",
            "DELETE /api/menu/:id": "Delete a menu item by ID"
        }
    }))
}
