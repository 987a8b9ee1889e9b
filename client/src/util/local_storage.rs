//! Browser `localStorage` binding for the cart store trait.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components never touch web-sys storage directly; they build an adapter with
//! [`cart_adapter`] and go through the `cart` crate. Outside the `hydrate`
//! build (SSR, unit tests) reads see an empty store and writes are dropped, so
//! server rendering stays deterministic.

use cart::{CartStoreAdapter, KeyValueStore, StoreError};

#[cfg(test)]
#[path = "local_storage_test.rs"]
mod local_storage_test;

/// The page's `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|err| StoreError::Unavailable(format!("{err:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|err| StoreError::Write { key: key.to_owned(), reason: format!("{err:?}") })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }
}

/// Cart adapter over `localStorage` under the storefront's `cart` key.
pub fn cart_adapter() -> CartStoreAdapter<BrowserStorage> {
    CartStoreAdapter::new(BrowserStorage)
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StoreError> {
    let window = web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_owned()))?;
    window
        .local_storage()
        .map_err(|err| StoreError::Unavailable(format!("{err:?}")))?
        .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".to_owned()))
}
