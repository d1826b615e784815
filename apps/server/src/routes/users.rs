//! # User Routes
//!
//! Handlers for the user collection, including the "set products" call
//! that resolves product ids into shared references before assignment.
//!
//! ## Set-Products Flow
//! ```text
//! PUT /api/users/{id}/products   { "productIds": ["a", "b"] }
//!      │
//!      ▼
//! resolve each id through the inventory ── unknown id ──► 404
//!      │            (the SAME handles the inventory owns)
//!      ▼
//! users.set_user_products(id, handles) ── false ──► 404 (user unknown)
//!      │
//!      ▼
//! 200 with the user's refreshed snapshot
//! ```

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::AppState;
use stockroom_core::{CoreResult, ProductView, SharedProduct, UserDto, UserView};

/// Query string for name-based filtering.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterQuery {
    pub name: Option<String>,
}

/// Body for the set-products route: product ids to resolve and assign.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetProductsBody {
    pub product_ids: Vec<String>,
}

/// Lists users, optionally filtered by (normalized) name.
#[get("/api/users")]
pub async fn get_users(
    state: web::Data<AppState>,
    query: web::Query<FilterQuery>,
) -> Result<web::Json<Vec<UserView>>, ApiError> {
    debug!(name = ?query.name, "get_users");

    let views = state.with_users(|users| users.users(query.name.as_deref()));
    Ok(web::Json(views))
}

/// Creates a user. Responds 201 with the snapshot.
#[post("/api/users")]
pub async fn create_user(
    state: web::Data<AppState>,
    dto: web::Json<UserDto>,
) -> Result<HttpResponse, ApiError> {
    debug!(name = %dto.name, "create_user");

    let view = state.with_users(|users| users.create_user(dto.into_inner()));

    info!(id = %view.id, "user created");
    Ok(HttpResponse::Created().json(view))
}

/// Fetches a single user by id.
#[get("/api/users/{id}")]
pub async fn get_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<web::Json<UserView>, ApiError> {
    let id = path.into_inner();
    debug!(%id, "get_user");

    let view = state.with_users(|users| users.user_by_id(&id).map(|user| user.view()))?;
    Ok(web::Json(view))
}

/// Deletes a user. 204 on success, 404 when the id is unknown.
///
/// The manager reports absence as `false`, not as an error; the 404 is
/// reconstructed here at the transport boundary.
#[delete("/api/users/{id}")]
pub async fn delete_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let removed = state.with_users(|users| users.delete_user(&id));
    info!(%id, removed, "delete_user");

    if removed {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(ApiError::not_found("User", &id))
    }
}

/// Lists the products currently assigned to a user.
#[get("/api/users/{id}/products")]
pub async fn get_user_products(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<web::Json<Vec<ProductView>>, ApiError> {
    let id = path.into_inner();
    debug!(%id, "get_user_products");

    let view = state.with_users(|users| users.user_by_id(&id).map(|user| user.view()))?;
    Ok(web::Json(view.products))
}

/// Replaces a user's product list by resolving ids through the inventory.
///
/// Assigns the inventory's own shared handles, so later quantity
/// mutations stay visible through this user. 404 when any product id or
/// the user id is unknown.
#[put("/api/users/{id}/products")]
pub async fn set_user_products(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<SetProductsBody>,
) -> Result<web::Json<UserView>, ApiError> {
    let id = path.into_inner();
    debug!(%id, count = body.product_ids.len(), "set_user_products");

    let products: Vec<SharedProduct> = state.with_inventory(|inventory| {
        body.product_ids
            .iter()
            .map(|product_id| inventory.find_product_by_id(product_id))
            .collect::<CoreResult<Vec<_>>>()
    })?;

    let view = state.with_users(|users| {
        if users.set_user_products(&id, products) {
            users.user_by_id(&id).map(|user| user.view()).ok()
        } else {
            None
        }
    });

    match view {
        Some(view) => {
            info!(%id, count = view.products.len(), "user products replaced");
            Ok(web::Json(view))
        }
        None => Err(ApiError::not_found("User", &id)),
    }
}
