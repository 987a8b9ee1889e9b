//! Site header with brand, logout link and cart button.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header is mounted on every storefront page. It loads the stored cart
//! once on mount so the badge is correct before the dropdown is ever opened.

use leptos::prelude::*;

use crate::components::cart_dropdown::CartDropdown;
use crate::state::cart::CartState;
use crate::util::display::cart_button_label;
use crate::util::local_storage::cart_adapter;

pub const BRAND_NAME: &str = "Flipkart";

/// Top bar for storefront pages.
#[component]
pub fn Header() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();

    // Effects only run in the browser, after hydration.
    Effect::new(move || {
        cart.update(|state| state.refresh(&cart_adapter()));
    });

    let item_count = move || cart.with(CartState::item_count);

    view! {
        <header class="site-header">
            <h1 class="site-header__brand">{BRAND_NAME}</h1>

            <span class="site-header__spacer"></span>

            <a href="/login" class="btn site-header__logout">
                "Logout"
            </a>

            <div class="cart-menu">
                <button
                    class="btn cart-menu__toggle"
                    class:cart-menu__toggle--open=move || cart.with(|state| state.dropdown_open)
                    on:click=move |_| cart.update(|state| state.toggle_dropdown(&cart_adapter()))
                    title="Cart"
                >
                    {move || cart_button_label(item_count())}
                </button>

                <Show when=move || cart.with(|state| state.dropdown_open)>
                    <CartDropdown/>
                </Show>
            </div>
        </header>
    }
}
