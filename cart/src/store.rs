//! Persistence boundary between the cart model and a string-keyed store.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser the backing store is `localStorage`; on the server and in
//! tests it is [`crate::MemoryStore`]. The adapter owns the key and the JSON
//! encoding so callers only ever see [`Cart`] values.
//!
//! TRADE-OFFS
//! ==========
//! [`CartStoreAdapter::save`] is a blind overwrite. Two writers that load the
//! same value and save in turn lose the first write. Callers that care use
//! [`CartStoreAdapter::load_snapshot`] + [`CartStoreAdapter::save_if_unchanged`],
//! which is only as atomic as the store's `compare_and_set`.

use crate::Cart;

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

/// Key the storefront uses for the cart array.
pub const CART_STORAGE_KEY: &str = "cart";

/// Error returned by stores and the cart adapter.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing store cannot be reached (no window, storage disabled, poisoned lock).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// The store refused a write, e.g. quota exceeded.
    #[error("failed to write key {key}: {reason}")]
    Write { key: String, reason: String },
    /// The cart could not be serialized.
    #[error("failed to encode cart: {0}")]
    Encode(#[source] serde_json::Error),
    /// The stored value is not a JSON array of line items.
    #[error("stored cart is malformed: {0}")]
    Malformed(#[source] serde_json::Error),
    /// The stored value changed after it was loaded.
    #[error("cart under key {0} was modified by another writer")]
    Conflict(String),
}

/// Synchronous string-keyed store, shaped like the Web Storage API.
pub trait KeyValueStore {
    /// Read the value under `key`, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when the store cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] or [`StoreError::Write`].
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Write `value` only if the current value equals `expected`.
    ///
    /// The default reads then writes and is not atomic; stores with a lock
    /// should override it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] when the current value differs.
    fn compare_and_set(&self, key: &str, expected: Option<&str>, value: &str) -> Result<(), StoreError> {
        let current = self.get_item(key)?;
        if current.as_deref() != expected {
            return Err(StoreError::Conflict(key.to_owned()));
        }
        self.set_item(key, value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set_item(key, value)
    }

    fn compare_and_set(&self, key: &str, expected: Option<&str>, value: &str) -> Result<(), StoreError> {
        (**self).compare_and_set(key, expected, value)
    }
}

/// A loaded cart together with the raw value it was decoded from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartSnapshot {
    pub cart: Cart,
    /// `None` when the key was absent.
    pub raw: Option<String>,
}

/// Reads and writes the cart under a fixed key of a [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct CartStoreAdapter<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> CartStoreAdapter<S> {
    /// Adapter over `store` using [`CART_STORAGE_KEY`].
    pub fn new(store: S) -> Self {
        Self::with_key(store, CART_STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the cart, treating a missing, unreadable or malformed value as empty.
    ///
    /// Failures are logged, never returned.
    pub fn load(&self) -> Cart {
        match self.try_load() {
            Ok(cart) => cart,
            Err(err) => {
                log::warn!("cart: falling back to empty cart for key {}: {err}", self.key);
                Cart::default()
            }
        }
    }

    /// Load the cart, surfacing read and decode failures.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the store cannot be read and
    /// [`StoreError::Malformed`] if the value is not a cart array.
    pub fn try_load(&self) -> Result<Cart, StoreError> {
        Ok(self.try_load_snapshot()?.cart)
    }

    /// Load the cart along with its raw value for a later conditional save.
    ///
    /// A malformed value yields an empty cart but keeps the raw string so a
    /// conditional save still detects concurrent writers.
    pub fn load_snapshot(&self) -> CartSnapshot {
        let raw = match self.store.get_item(&self.key) {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("cart: store read failed for key {}: {err}", self.key);
                return CartSnapshot::default();
            }
        };
        let cart = match raw.as_deref().map(decode).transpose() {
            Ok(cart) => cart.unwrap_or_default(),
            Err(err) => {
                log::warn!("cart: falling back to empty cart for key {}: {err}", self.key);
                Cart::default()
            }
        };
        CartSnapshot { cart, raw }
    }

    fn try_load_snapshot(&self) -> Result<CartSnapshot, StoreError> {
        let raw = self.store.get_item(&self.key)?;
        let cart = raw.as_deref().map(decode).transpose()?.unwrap_or_default();
        Ok(CartSnapshot { cart, raw })
    }

    /// Serialize `cart` and overwrite the stored value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Encode`] if serialization fails, or the store's
    /// write error.
    pub fn save(&self, cart: &Cart) -> Result<(), StoreError> {
        let raw = encode(cart)?;
        self.store.set_item(&self.key, &raw)?;
        log::debug!("cart: saved {} line(s) under key {}", cart.len(), self.key);
        Ok(())
    }

    /// Save `cart` only if the stored value still equals `snapshot.raw`.
    ///
    /// Returns the snapshot of what was written so it can seed the next
    /// conditional save.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] if another writer changed the value
    /// since `snapshot` was taken.
    pub fn save_if_unchanged(&self, snapshot: &CartSnapshot, cart: &Cart) -> Result<CartSnapshot, StoreError> {
        let raw = encode(cart)?;
        self.store
            .compare_and_set(&self.key, snapshot.raw.as_deref(), &raw)
            .inspect_err(|err| log::info!("cart: conditional save rejected: {err}"))?;
        Ok(CartSnapshot { cart: cart.clone(), raw: Some(raw) })
    }
}

fn decode(raw: &str) -> Result<Cart, StoreError> {
    serde_json::from_str(raw).map_err(StoreError::Malformed)
}

fn encode(cart: &Cart) -> Result<String, StoreError> {
    serde_json::to_string(cart).map_err(StoreError::Encode)
}
