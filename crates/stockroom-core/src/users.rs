//! # User Manager
//!
//! The owning collection of users.
//!
//! ## Error-to-Boolean Conversion
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │              Two deliberate bool-returning operations               │
//! │                                                                     │
//! │  delete_user(id) ────────► user existed and was removed? true/false │
//! │                                                                     │
//! │  set_user_products(id, products)                                    │
//! │       │                                                             │
//! │       ├── user_by_id(id) ── Err(UserNotFound) ──► false             │
//! │       │                                          (error swallowed)  │
//! │       └── Ok(user) ──► user.set_products(...) ──► true              │
//! │                                                                     │
//! │  Every OTHER call site gets the failure-raising contract:           │
//! │  user_by_id propagates CoreError::UserNotFound unchanged.           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult};
use crate::normalize::normalize;
use crate::product::SharedProduct;
use crate::user::{User, UserDto, UserView};

/// The owning collection of users.
///
/// ## Invariants
/// - Insertion order is preserved by every read operation
/// - Ids are unique (UUID v4, assigned at creation)
#[derive(Debug, Default)]
pub struct UserManager {
    users: Vec<User>,
}

impl UserManager {
    /// Creates an empty user collection.
    pub fn new() -> Self {
        UserManager { users: Vec::new() }
    }

    /// Constructs and stores a new user, returning its snapshot.
    pub fn create_user(&mut self, dto: UserDto) -> UserView {
        let user = User::new(dto);
        let view = user.view();
        self.users.push(user);
        view
    }

    /// Returns user snapshots filtered by normalized name.
    ///
    /// ## Behavior
    /// - Filter that normalizes to empty (absent, empty, whitespace):
    ///   all users
    /// - Otherwise: users whose normalized name contains the normalized
    ///   term as a substring, insertion order preserved
    pub fn users(&self, name: Option<&str>) -> Vec<UserView> {
        let term = normalize(name.unwrap_or(""));
        self.users
            .iter()
            .filter(|u| term.is_empty() || normalize(&u.name).contains(&term))
            .map(User::view)
            .collect()
    }

    /// Finds the user with the given id.
    ///
    /// ## Errors
    /// [`CoreError::UserNotFound`] when no user has that id.
    pub fn user_by_id(&self, id: &str) -> CoreResult<&User> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .ok_or_else(|| CoreError::UserNotFound(id.to_string()))
    }

    /// Removes the user with the given id.
    ///
    /// Returns `true` if a user existed and was removed, `false` if no
    /// such user existed (the not-found condition is converted, not
    /// propagated). The collection is untouched in the `false` case.
    pub fn delete_user(&mut self, id: &str) -> bool {
        let initial_len = self.users.len();
        self.users.retain(|u| u.id != id);
        self.users.len() != initial_len
    }

    /// Replaces a user's product list wholesale.
    ///
    /// Returns `true` on success; `false` when the user is unknown, in
    /// which case nothing changes anywhere (the not-found failure is
    /// caught here and converted, matching [`Self::delete_user`]).
    pub fn set_user_products(&mut self, id: &str, products: Vec<SharedProduct>) -> bool {
        match self.users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.set_products(products);
                true
            }
            None => false,
        }
    }

    /// Number of users in the collection.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Checks if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
