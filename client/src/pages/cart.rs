//! Checkout route reached from the cart dropdown.
//!
//! SYSTEM CONTEXT
//! ==============
//! Payment and order placement are handled elsewhere; this page shows the
//! stored cart with its total so the shopper can review it.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::state::cart::CartState;
use crate::util::display::{format_price, line_price_label};

/// Cart review page at `/user/cart`.
#[component]
pub fn CartPage() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();

    let rows = move || {
        cart.with(|state| {
            state
                .cart
                .iter()
                .map(|item| (item.product_id.to_string(), item.name.clone(), line_price_label(item), item.subtotal()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="cart-page">
            <Header/>
            <main class="cart-page__body">
                <h2 class="cart-page__title">"Your Cart"</h2>
                <Show
                    when=move || !cart.with(CartState::is_empty)
                    fallback=|| view! { <p class="cart-page__empty">"Your cart is empty"</p> }
                >
                    <table class="cart-page__table">
                        <thead>
                            <tr>
                                <th>"Product"</th>
                                <th>"Price"</th>
                                <th>"Subtotal"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                rows()
                                    .into_iter()
                                    .map(|(id, name, price_label, subtotal)| {
                                        view! {
                                            <tr data-product-id=id>
                                                <td>{name}</td>
                                                <td>{price_label}</td>
                                                <td>{format_price(subtotal)}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                    <div class="cart-page__total">
                        <span>"Total:"</span>
                        <span>{move || format_price(cart.with(CartState::total))}</span>
                    </div>
                </Show>
            </main>
        </div>
    }
}
