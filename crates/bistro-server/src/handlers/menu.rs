//! Menu CRUD handlers (list, get, create, update, delete).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use bistro_core::{ItemId, MenuItem};

use crate::error::ApiError;
use crate::schema::menu::{DeleteMenuItemResponse, MenuItemUpsert};
use crate::state::AppState;
use crate::validate::validate;

/// Lists all menu items, in insertion order.
///
/// `GET /api/menu`
pub async fn list_menu(State(state): State<AppState>) -> Json<Vec<MenuItem>> {
    let store = state.store.lock().await;
    Json(store.list().to_vec())
}

/// Fetches a single menu item by id.
///
/// `GET /api/menu/{id}`
pub async fn get_menu_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MenuItem>, ApiError> {
    let store = state.store.lock().await;
    let item = store.get(ItemId(id))?;
    Ok(Json(item.clone()))
}

/// Creates a new menu item from a validated payload.
///
/// `POST /api/menu`
pub async fn create_menu_item(
    State(state): State<AppState>,
    Json(body): Json<MenuItemUpsert>,
) -> Result<(StatusCode, Json<MenuItem>), ApiError> {
    let draft = validate(&body).map_err(ApiError::ValidationFailed)?;
    let mut store = state.store.lock().await;
    let item = store.create(draft);
    Ok((StatusCode::CREATED, Json(item)))
}

/// Replaces a menu item wholesale. The stored id comes from the path, never
/// from the body.
///
/// `PUT /api/menu/{id}`
pub async fn update_menu_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<MenuItemUpsert>,
) -> Result<Json<MenuItem>, ApiError> {
    let draft = validate(&body).map_err(ApiError::ValidationFailed)?;
    let mut store = state.store.lock().await;
    let item = store.update(ItemId(id), draft)?;
    Ok(Json(item))
}

/// Deletes a menu item and returns a copy of the removed record.
///
/// `DELETE /api/menu/{id}`
pub async fn delete_menu_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteMenuItemResponse>, ApiError> {
    let mut store = state.store.lock().await;
    let item = store.remove(ItemId(id))?;
    Ok(Json(DeleteMenuItemResponse {
        message: "Menu item deleted successfully".to_string(),
        menu_item: item,
    }))
}
