//! # User Entity
//!
//! A user and the list of product references assigned to them.
//!
//! The product list holds shared handles, not copies: the same entities
//! the inventory owns. Mutating a product through the inventory (or
//! through another user) is visible here, and deleting a product from the
//! inventory does NOT remove it from user lists (stale references are
//! preserved behavior).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::product::{ProductView, SharedProduct};

// =============================================================================
// DTOs / Views
// =============================================================================

/// Input shape for creating a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub name: String,
}

/// Serializable snapshot of a user, with product state at read time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: String,
    pub name: String,
    pub products: Vec<ProductView>,
}

// =============================================================================
// User
// =============================================================================

/// A user who can be assigned products from the inventory.
#[derive(Debug)]
pub struct User {
    /// Unique identifier (UUID v4), immutable after creation.
    pub id: String,

    /// Display name, filtered case/accent-insensitively.
    pub name: String,

    products: Vec<SharedProduct>,
}

impl User {
    /// Creates a user from a DTO with a fresh id and no products.
    pub fn new(dto: UserDto) -> Self {
        User {
            id: Uuid::new_v4().to_string(),
            name: dto.name,
            products: Vec::new(),
        }
    }

    /// Replaces the product list wholesale.
    ///
    /// No deduplication and no validation against any inventory: the
    /// caller decides which references the user holds.
    pub fn set_products(&mut self, products: Vec<SharedProduct>) {
        self.products = products;
    }

    /// The user's product references, insertion order preserved.
    pub fn products(&self) -> &[SharedProduct] {
        &self.products
    }

    /// Takes a serializable snapshot: product fields are read through the
    /// shared handles at this moment, so earlier mutations are visible.
    pub fn view(&self) -> UserView {
        UserView {
            id: self.id.clone(),
            name: self.name.clone(),
            products: self.products.iter().map(SharedProduct::snapshot).collect(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{Product, ProductDto};

    fn shared(name: &str, quantity: i64) -> SharedProduct {
        SharedProduct::new(Product::new(ProductDto {
            name: name.to_string(),
            price_cents: 100,
            quantity,
        }))
    }

    #[test]
    fn test_new_user_has_fresh_id_and_no_products() {
        let user = User::new(UserDto {
            name: "Alice".to_string(),
        });
        assert!(!user.id.is_empty());
        assert!(user.products().is_empty());
    }

    #[test]
    fn test_set_products_replaces_wholesale() {
        let mut user = User::new(UserDto {
            name: "Alice".to_string(),
        });

        user.set_products(vec![shared("Mouse", 10), shared("Teclado", 5)]);
        assert_eq!(user.products().len(), 2);

        user.set_products(vec![shared("Monitor", 1)]);
        assert_eq!(user.products().len(), 1);
        assert_eq!(user.products()[0].snapshot().name, "Monitor");
    }

    #[test]
    fn test_view_reads_product_state_through_handles() {
        let mut user = User::new(UserDto {
            name: "Alice".to_string(),
        });
        let mouse = shared("Mouse", 10);
        user.set_products(vec![mouse.clone()]);

        mouse.with_mut(|p| p.add_quantity(15)).unwrap();

        assert_eq!(user.view().products[0].quantity, 25);
    }
}
