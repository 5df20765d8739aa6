//! Session-scoped customer carts.
//!
//! Each customer session owns one [`Cart`], addressed by a [`CartId`].
//! The registry replaces ambient per-process cart state: handlers receive
//! the id explicitly and the cart is discarded on checkout or clear.

use std::collections::HashMap;
use std::sync::Arc;

use common::CartId;
use domain::Cart;
use tokio::sync::RwLock;

/// Registry of active cart sessions.
#[derive(Clone, Default)]
pub struct CartSessions {
    carts: Arc<RwLock<HashMap<CartId, Cart>>>,
}

impl CartSessions {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new session with an empty cart.
    pub async fn create(&self) -> CartId {
        let id = CartId::new();
        self.carts.write().await.insert(id, Cart::new());
        id
    }

    /// Returns a copy of the session's cart, if the session exists.
    pub async fn snapshot(&self, id: &CartId) -> Option<Cart> {
        self.carts.read().await.get(id).cloned()
    }

    /// Applies a mutation to the session's cart.
    ///
    /// Returns the closure's result, or `None` for an unknown session.
    pub async fn update<R>(&self, id: &CartId, f: impl FnOnce(&mut Cart) -> R) -> Option<R> {
        self.carts.write().await.get_mut(id).map(f)
    }

    /// Replaces the session's cart wholesale.
    ///
    /// Returns false for an unknown session.
    pub async fn replace(&self, id: &CartId, cart: Cart) -> bool {
        match self.carts.write().await.get_mut(id) {
            Some(slot) => {
                *slot = cart;
                true
            }
            None => false,
        }
    }

    /// Ends a session, discarding its cart.
    pub async fn remove(&self, id: &CartId) {
        self.carts.write().await.remove(id);
    }

    /// Returns the number of active sessions.
    pub async fn session_count(&self) -> usize {
        self.carts.read().await.len()
    }
}
