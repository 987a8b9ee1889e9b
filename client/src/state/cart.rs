//! Header cart state: the in-memory cart copy and dropdown visibility.
//!
//! DESIGN
//! ======
//! The stored cart is owned by the key-value store; this state is a transient
//! copy. It is reloaded explicitly (`refresh`) on mount and whenever the
//! dropdown opens, rather than as a side effect of every visibility change.
//! Mutations go through the adapter first and only replace the copy once the
//! write succeeded.

use cart::{Cart, CartStoreAdapter, KeyValueStore, ProductId, StoreError};

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

/// Route the checkout button navigates to.
pub const CHECKOUT_PATH: &str = "/user/cart";

/// Cart contents and dropdown visibility shared through Leptos context.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartState {
    pub cart: Cart,
    pub dropdown_open: bool,
    /// Last persistence failure, cleared by the next successful write.
    pub last_error: Option<String>,
}

impl CartState {
    pub fn item_count(&self) -> u32 {
        self.cart.item_count()
    }

    pub fn total(&self) -> f64 {
        self.cart.total()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Replace the in-memory copy with the stored cart.
    pub fn refresh<S: KeyValueStore>(&mut self, adapter: &CartStoreAdapter<S>) {
        self.cart = adapter.load();
    }

    /// Flip dropdown visibility, reloading the cart when it opens.
    pub fn toggle_dropdown<S: KeyValueStore>(&mut self, adapter: &CartStoreAdapter<S>) {
        self.dropdown_open = !self.dropdown_open;
        if self.dropdown_open {
            self.refresh(adapter);
        }
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown_open = false;
    }

    /// Remove every line for `product_id`, persist, then update the copy.
    ///
    /// # Errors
    ///
    /// Returns the store error if the write fails. The in-memory copy is left
    /// unchanged and the message is kept in `last_error`.
    pub fn remove_item<S: KeyValueStore>(
        &mut self,
        adapter: &CartStoreAdapter<S>,
        product_id: &ProductId,
    ) -> Result<(), StoreError> {
        let updated = self.cart.without(product_id);
        if let Err(err) = adapter.save(&updated) {
            self.last_error = Some(err.to_string());
            return Err(err);
        }
        self.cart = updated;
        self.last_error = None;
        Ok(())
    }

    /// Close the dropdown and return the route to navigate to.
    pub fn checkout(&mut self) -> &'static str {
        self.close_dropdown();
        CHECKOUT_PATH
    }
}
