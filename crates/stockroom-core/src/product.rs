//! # Product Entity
//!
//! The product entity, its quantity invariants, and the shared handle
//! through which every holder observes the same underlying state.
//!
//! ## Shared Mutable Entity References
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                 Shared Product Ownership                            │
//! │                                                                     │
//! │  InventoryManager ──┐                                               │
//! │                     ├──► SharedProduct ──► Mutex<Product>           │
//! │  User "Alice" ──────┤         (Arc)                                 │
//! │                     │                                               │
//! │  User "Bob" ────────┘                                               │
//! │                                                                     │
//! │  add_product_quantity(id, 15) through the inventory is visible      │
//! │  in Alice's AND Bob's product lists: same entity, not copies.       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - `quantity` never goes negative; any operation that would make it
//!   negative is rejected and leaves the entity unchanged
//! - `id` is generated at creation and never changes

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// DTOs / Views
// =============================================================================

/// Input shape for creating a product.
///
/// ## Why DTO?
/// - Decouples the internal entity from the API contract
/// - The id is assigned by the inventory, never by the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub name: String,
    /// Price in cents (smallest currency unit). Integer money, no floats.
    pub price_cents: i64,
    pub quantity: i64,
}

/// Serializable snapshot of a product at read time.
///
/// Views are plain values: cloning or serializing one does NOT share
/// state with the underlying entity. Re-read the handle for fresh data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub price_cents: i64,
    pub quantity: i64,
}

// =============================================================================
// Product
// =============================================================================

/// A product held in the inventory.
#[derive(Debug)]
pub struct Product {
    /// Unique identifier (UUID v4), immutable after creation.
    pub id: String,

    /// Display name, searched case/accent-insensitively.
    pub name: String,

    /// Price in cents.
    pub price_cents: i64,

    /// Current stock count. Never negative.
    pub quantity: i64,
}

impl Product {
    /// Creates a product from a DTO, assigning a fresh id.
    pub fn new(dto: ProductDto) -> Self {
        Product {
            id: Uuid::new_v4().to_string(),
            name: dto.name,
            price_cents: dto.price_cents,
            quantity: dto.quantity,
        }
    }

    /// Increases quantity by `amount`.
    ///
    /// ## Errors
    /// [`CoreError::InvalidQuantity`] when `amount` is not strictly
    /// positive; the entity is left unchanged.
    pub fn add_quantity(&mut self, amount: i64) -> CoreResult<()> {
        if amount <= 0 {
            return Err(CoreError::InvalidQuantity { requested: amount });
        }
        self.quantity += amount;
        Ok(())
    }

    /// Decreases quantity by `amount`.
    ///
    /// ## Errors
    /// [`CoreError::InsufficientStock`] when `amount` exceeds the current
    /// quantity; the entity is left unchanged (no partial mutation).
    pub fn remove_quantity(&mut self, amount: i64) -> CoreResult<()> {
        if amount > self.quantity {
            return Err(CoreError::InsufficientStock {
                id: self.id.clone(),
                available: self.quantity,
                requested: amount,
            });
        }
        self.quantity -= amount;
        Ok(())
    }

    /// Takes a serializable snapshot of the current state.
    pub fn view(&self) -> ProductView {
        ProductView {
            id: self.id.clone(),
            name: self.name.clone(),
            price_cents: self.price_cents,
            quantity: self.quantity,
        }
    }
}

// =============================================================================
// Shared Handle
// =============================================================================

/// Shared-ownership handle to a product.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Product>>` because:
/// - `Arc`: the inventory and any number of users hold the same entity
/// - `Mutex`: request handlers may run on different threads
///
/// Cloning the handle clones the *reference*, never the product.
#[derive(Debug, Clone)]
pub struct SharedProduct(Arc<Mutex<Product>>);

impl SharedProduct {
    /// Wraps a freshly created product in a shared handle.
    pub fn new(product: Product) -> Self {
        SharedProduct(Arc::new(Mutex::new(product)))
    }

    /// Returns the product's immutable id.
    pub fn id(&self) -> String {
        self.with(|p| p.id.clone())
    }

    /// Takes a serializable snapshot of the current state.
    pub fn snapshot(&self) -> ProductView {
        self.with(|p| p.view())
    }

    /// Executes a function with read access to the product.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let name = handle.with(|p| p.name.clone());
    /// ```
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Product) -> R,
    {
        let product = self.0.lock().expect("Product mutex poisoned");
        f(&product)
    }

    /// Executes a function with write access to the product.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// handle.with_mut(|p| p.add_quantity(5))?;
    /// ```
    pub fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Product) -> R,
    {
        let mut product = self.0.lock().expect("Product mutex poisoned");
        f(&mut product)
    }

    /// Checks whether two handles point at the same underlying entity.
    pub fn same_entity(&self, other: &SharedProduct) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
