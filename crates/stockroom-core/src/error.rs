//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  stockroom-core errors (this file)                                  │
//! │  └── CoreError        - Domain rule violations and missing ids      │
//! │                                                                     │
//! │  Server errors (apps/server)                                        │
//! │  └── ApiError         - What HTTP clients see (serialized)          │
//! │                                                                     │
//! │  Flow: CoreError → ApiError → HTTP status + JSON body               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (id, quantities)
//! 3. Errors are enum variants, never String
//!
//! ## Propagation Policy
//! Find/mutate operations let these errors propagate to the caller. Two
//! manager operations deliberately convert a not-found failure into a
//! boolean instead: [`crate::UserManager::delete_user`] and
//! [`crate::UserManager::set_user_products`]. Callers of those only get a
//! success/failure signal, never an error object.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
///
/// These errors represent domain rule violations or lookups of absent
/// entities. They should be caught at the transport boundary and
/// translated to user-facing responses.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product id is absent from the inventory collection.
    ///
    /// ## When This Occurs
    /// - Product id never existed
    /// - Product was deleted from the inventory
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// User id is absent from the user collection.
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// Removing this quantity would drive the stock negative.
    ///
    /// The product is left unchanged: no partial mutation.
    #[error("Insufficient stock for {id}: available {available}, requested {requested}")]
    InsufficientStock {
        id: String,
        available: i64,
        requested: i64,
    },

    /// Quantity to add must be strictly positive.
    #[error("Invalid quantity: {requested} (must be positive)")]
    InvalidQuantity { requested: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
