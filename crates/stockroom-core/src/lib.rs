//! # stockroom-core: Pure Domain Logic for Stockroom
//!
//! This crate is the **heart** of Stockroom. It contains the inventory and
//! user domain model as pure in-memory logic with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Stockroom Architecture                         │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                   Web Client (excluded)                     │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │ HTTP/JSON                           │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │                  apps/server (actix-web)                    │   │
//! │  │       routes, status mapping, tracing, app state            │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │                                     │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │              ★ stockroom-core (THIS CRATE) ★                │   │
//! │  │                                                             │   │
//! │  │  ┌───────────┐ ┌───────────┐ ┌───────────┐ ┌────────────┐  │   │
//! │  │  │ normalize │ │  product  │ │ inventory │ │ user/users │  │   │
//! │  │  │  search   │ │  entity   │ │  manager  │ │  manager   │  │   │
//! │  │  └───────────┘ └───────────┘ └───────────┘ └────────────┘  │   │
//! │  │                                                             │   │
//! │  │  NO I/O • NO DATABASE • NO NETWORK                          │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`normalize`] - Case/accent-insensitive string canonicalization
//! - [`product`] - Product entity, quantity invariants, shared handles
//! - [`inventory`] - The owning collection of products
//! - [`user`] - User entity and its product references
//! - [`users`] - The owning collection of users
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Shared entities**: products are reference-counted handles; a
//!    mutation through the inventory is visible through every user that
//!    holds the same product
//! 2. **No I/O**: database, network, file system access is FORBIDDEN here
//! 3. **Integer money**: prices are in cents (i64) to avoid float errors
//! 4. **Explicit errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::{InventoryManager, ProductDto, UserDto, UserManager};
//!
//! let mut inventory = InventoryManager::new();
//! let mut users = UserManager::new();
//!
//! let mouse = inventory.create_product(ProductDto {
//!     name: "Mouse".into(),
//!     price_cents: 150,
//!     quantity: 10,
//! });
//!
//! let alice = users.create_user(UserDto { name: "Alice".into() });
//! assert!(users.set_user_products(&alice.id, vec![mouse.clone()]));
//!
//! inventory.remove_product_quantity(&mouse.id(), 3).unwrap();
//!
//! // Alice sees the mutation: same underlying entity, not a copy.
//! let view = users.user_by_id(&alice.id).unwrap().view();
//! assert_eq!(view.products[0].quantity, 7);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod inventory;
pub mod normalize;
pub mod product;
pub mod user;
pub mod users;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use stockroom_core::Product` instead of
// `use stockroom_core::product::Product`

pub use error::{CoreError, CoreResult};
pub use inventory::InventoryManager;
pub use normalize::normalize;
pub use product::{Product, ProductDto, ProductView, SharedProduct};
pub use user::{User, UserDto, UserView};
pub use users::UserManager;
