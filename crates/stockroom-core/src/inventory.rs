//! # Inventory Manager
//!
//! The authoritative owner of the product collection.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                 Inventory Manager Operations                        │
//! │                                                                     │
//! │  HTTP Route                 Manager Call           Collection       │
//! │  ──────────                 ────────────           ──────────       │
//! │                                                                     │
//! │  POST /api/products ──────► create_product() ────► push(handle)     │
//! │                                                                     │
//! │  GET /api/products?name= ─► search_products() ───► filtered copy    │
//! │                                                                     │
//! │  PATCH .../{id}/add ──────► add_product_quantity()                  │
//! │                                  │                                  │
//! │                                  └─► find_product_by_id()           │
//! │                                          └─► entity.add_quantity()  │
//! │                                                                     │
//! │  DELETE /api/products/{id} ► delete_product() ───► retain(...)      │
//! │                                                                     │
//! │  Collection order = insertion order, uniqueness by id.              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult};
use crate::normalize::normalize;
use crate::product::{Product, ProductDto, ProductView, SharedProduct};

/// The owning collection of products.
///
/// ## Invariants
/// - Insertion order is preserved by every read operation
/// - Ids are unique (UUID v4, assigned at creation)
///
/// Construct one per process (or per test) and inject it; there is no
/// hidden global instance.
#[derive(Debug, Default)]
pub struct InventoryManager {
    products: Vec<SharedProduct>,
}

impl InventoryManager {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        InventoryManager {
            products: Vec::new(),
        }
    }

    /// Constructs and stores a new product, returning its shared handle.
    pub fn create_product(&mut self, dto: ProductDto) -> SharedProduct {
        let handle = SharedProduct::new(Product::new(dto));
        self.products.push(handle.clone());
        handle
    }

    /// Returns a snapshot of all products, insertion order preserved.
    ///
    /// The Vec is an independent copy; the entities inside remain shared
    /// handles, so mutations through them stay visible everywhere.
    pub fn products(&self) -> Vec<SharedProduct> {
        self.products.clone()
    }

    /// Finds the product with the given id.
    ///
    /// ## Errors
    /// [`CoreError::ProductNotFound`] when no product has that id.
    pub fn find_product_by_id(&self, id: &str) -> CoreResult<SharedProduct> {
        self.products
            .iter()
            .find(|p| p.with(|inner| inner.id == id))
            .cloned()
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))
    }

    /// Increases a product's quantity, returning the updated snapshot.
    ///
    /// ## Errors
    /// - [`CoreError::ProductNotFound`] when the id is absent
    /// - [`CoreError::InvalidQuantity`] when `amount` is not positive
    pub fn add_product_quantity(&mut self, id: &str, amount: i64) -> CoreResult<ProductView> {
        let handle = self.find_product_by_id(id)?;
        handle.with_mut(|p| p.add_quantity(amount))?;
        Ok(handle.snapshot())
    }

    /// Decreases a product's quantity, returning the updated snapshot.
    ///
    /// ## Errors
    /// - [`CoreError::ProductNotFound`] when the id is absent
    /// - [`CoreError::InsufficientStock`] when `amount` exceeds stock;
    ///   the product is left unchanged
    pub fn remove_product_quantity(&mut self, id: &str, amount: i64) -> CoreResult<ProductView> {
        let handle = self.find_product_by_id(id)?;
        handle.with_mut(|p| p.remove_quantity(amount))?;
        Ok(handle.snapshot())
    }

    /// Removes the product with the given id from the collection.
    ///
    /// Idempotent: deleting an absent id is a no-op (mirrors
    /// [`crate::UserManager::delete_user`]). Returns whether a product
    /// was actually removed.
    ///
    /// Users holding the deleted product keep their reference; there is
    /// no cascading removal from user lists.
    pub fn delete_product(&mut self, id: &str) -> bool {
        let initial_len = self.products.len();
        self.products.retain(|p| p.with(|inner| inner.id != id));
        self.products.len() != initial_len
    }

    /// Searches products by normalized name.
    ///
    /// ## Behavior
    /// - Filter that normalizes to empty (absent, empty, whitespace):
    ///   returns the full snapshot
    /// - Otherwise: products whose normalized name contains the
    ///   normalized term as a substring, insertion order preserved
    ///
    /// Matching is case- and accent-insensitive: "teC" matches "Teclado".
    pub fn search_products(&self, name: Option<&str>) -> Vec<SharedProduct> {
        let term = normalize(name.unwrap_or(""));
        if term.is_empty() {
            return self.products();
        }

        self.products
            .iter()
            .filter(|p| p.with(|inner| normalize(&inner.name).contains(&term)))
            .cloned()
            .collect()
    }

    /// Number of products in the inventory.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the inventory is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
