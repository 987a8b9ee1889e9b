//! Dropdown listing cart lines, the running total and the checkout action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::cart_line::CartLine;
use crate::state::cart::{CHECKOUT_PATH, CartState};
use crate::util::display::format_price;

/// Cart dropdown panel. Rendered by [`crate::components::header::Header`]
/// while `dropdown_open` is set.
#[component]
pub fn CartDropdown() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let navigate = use_navigate();

    let on_checkout = move |_: leptos::ev::MouseEvent| {
        let path = cart.try_update(CartState::checkout).unwrap_or(CHECKOUT_PATH);
        navigate(path, NavigateOptions::default());
    };

    let is_empty = move || cart.with(CartState::is_empty);
    let total = move || format_price(cart.with(CartState::total));

    view! {
        <div class="cart-dropdown">
            <div class="cart-dropdown__header">
                <h3 class="cart-dropdown__title">"Your Cart"</h3>
                <button
                    class="cart-dropdown__close"
                    on:click=move |_| cart.update(CartState::close_dropdown)
                    title="Close"
                    aria-label="Close cart"
                >
                    "✕"
                </button>
            </div>

            <div class="cart-dropdown__items">
                <Show
                    when=move || !is_empty()
                    fallback=|| view! { <div class="cart-dropdown__empty">"Your cart is empty"</div> }
                >
                    {move || {
                        cart.with(|state| state.cart.items().to_vec())
                            .into_iter()
                            .map(|item| view! { <CartLine item=item/> })
                            .collect_view()
                    }}
                </Show>
            </div>

            <Show when=move || cart.with(|state| state.last_error.is_some())>
                <div class="cart-dropdown__error">
                    {move || cart.with(|state| state.last_error.clone().unwrap_or_default())}
                </div>
            </Show>

            <Show when=move || !is_empty()>
                <div class="cart-dropdown__footer">
                    <div class="cart-dropdown__total">
                        <span>"Total:"</span>
                        <span>{total}</span>
                    </div>
                    <button class="btn cart-dropdown__checkout" on:click=on_checkout.clone()>
                        "View Cart & Checkout"
                    </button>
                </div>
            </Show>
        </div>
    }
}
