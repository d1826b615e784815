//! # Product Routes
//!
//! Handlers for the global inventory: create, read, search, delete, and
//! the two quantity mutations. Each handler delegates straight to the
//! [`InventoryManager`] and serializes snapshots back to the client.

use actix_web::{delete, get, patch, post, web, HttpResponse};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::AppState;
use stockroom_core::{ProductDto, ProductView, SharedProduct};

/// Query string for name-based search.
///
/// An absent or empty `name` returns the full inventory.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub name: Option<String>,
}

/// Body for the quantity mutation routes.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmountBody {
    pub amount: i64,
}

/// Searches products by (normalized) name; empty filter returns all.
#[get("/api/products")]
pub async fn search_products(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> Result<web::Json<Vec<ProductView>>, ApiError> {
    debug!(name = ?query.name, "search_products");

    let views: Vec<ProductView> = state.with_inventory(|inventory| {
        inventory
            .search_products(query.name.as_deref())
            .iter()
            .map(SharedProduct::snapshot)
            .collect()
    });

    info!(count = views.len(), "search_products complete");
    Ok(web::Json(views))
}

/// Creates a product in the inventory. Responds 201 with the snapshot.
#[post("/api/products")]
pub async fn create_product(
    state: web::Data<AppState>,
    dto: web::Json<ProductDto>,
) -> Result<HttpResponse, ApiError> {
    debug!(name = %dto.name, "create_product");

    let view = state.with_inventory(|inventory| inventory.create_product(dto.into_inner()).snapshot());

    info!(id = %view.id, "product created");
    Ok(HttpResponse::Created().json(view))
}

/// Fetches a single product by id.
#[get("/api/products/{id}")]
pub async fn get_product(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<web::Json<ProductView>, ApiError> {
    let id = path.into_inner();
    debug!(%id, "get_product");

    let view = state.with_inventory(|inventory| {
        inventory
            .find_product_by_id(&id)
            .map(|handle| handle.snapshot())
    })?;
    Ok(web::Json(view))
}

/// Deletes a product from the inventory.
///
/// Idempotent: responds 204 whether or not the id existed. Users holding
/// the product keep their (now stale) reference.
#[delete("/api/products/{id}")]
pub async fn delete_product(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let removed = state.with_inventory(|inventory| inventory.delete_product(&id));
    info!(%id, removed, "delete_product");

    Ok(HttpResponse::NoContent().finish())
}

/// Increases a product's quantity. 400 when the amount is not positive.
#[patch("/api/products/{id}/add")]
pub async fn add_product_quantity(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<AmountBody>,
) -> Result<web::Json<ProductView>, ApiError> {
    let id = path.into_inner();
    debug!(%id, amount = body.amount, "add_product_quantity");

    let view =
        state.with_inventory(|inventory| inventory.add_product_quantity(&id, body.amount))?;
    Ok(web::Json(view))
}

/// Decreases a product's quantity. 400 when stock is insufficient.
#[patch("/api/products/{id}/remove")]
pub async fn remove_product_quantity(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<AmountBody>,
) -> Result<web::Json<ProductView>, ApiError> {
    let id = path.into_inner();
    debug!(%id, amount = body.amount, "remove_product_quantity");

    let view =
        state.with_inventory(|inventory| inventory.remove_product_quantity(&id, body.amount))?;
    Ok(web::Json(view))
}
