//! # Application State
//!
//! Process-wide manager state for the HTTP server.
//!
//! ## Why an explicit context object?
//! The managers are created once at process start and injected into every
//! handler via `web::Data`, instead of living in a global/static. This
//! keeps the core testable: each test constructs its own `AppState` with
//! no cross-test coupling.
//!
//! ## Thread Safety
//! Each manager is wrapped in `Arc<Mutex<T>>` because:
//! - `Arc`: handlers on every worker thread share the same collections
//! - `Mutex`: each operation runs to completion against the collection
//!   before the next begins (sequential with respect to shared state)

use std::sync::{Arc, Mutex};

use stockroom_core::{InventoryManager, UserManager};

/// Shared manager state injected into every request handler.
#[derive(Clone, Default)]
pub struct AppState {
    inventory: Arc<Mutex<InventoryManager>>,
    users: Arc<Mutex<UserManager>>,
}

impl AppState {
    /// Creates empty inventory and user collections.
    pub fn new() -> Self {
        AppState {
            inventory: Arc::new(Mutex::new(InventoryManager::new())),
            users: Arc::new(Mutex::new(UserManager::new())),
        }
    }

    /// Executes a function with exclusive access to the inventory.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let view = state.with_inventory(|inv| inv.add_product_quantity(&id, 5))?;
    /// ```
    pub fn with_inventory<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut InventoryManager) -> R,
    {
        let mut inventory = self.inventory.lock().expect("Inventory mutex poisoned");
        f(&mut inventory)
    }

    /// Executes a function with exclusive access to the user collection.
    pub fn with_users<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut UserManager) -> R,
    {
        let mut users = self.users.lock().expect("UserManager mutex poisoned");
        f(&mut users)
    }
}
