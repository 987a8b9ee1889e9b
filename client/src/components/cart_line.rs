//! A single row in the cart dropdown.

use cart::CartLineItem;
use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast as _;

use crate::state::cart::CartState;
#[cfg(feature = "hydrate")]
use crate::util::display::PLACEHOLDER_IMAGE_URL;
use crate::util::display::{image_src, line_price_label};
use crate::util::local_storage::cart_adapter;

/// Image, name, `price × quantity` and a remove button for one line item.
#[component]
pub fn CartLine(item: CartLineItem) -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();

    let src = image_src(item.image_url.as_deref()).to_owned();
    let price_label = line_price_label(&item);
    let product_id = item.product_id.clone();

    let on_remove = move |_| {
        cart.update(|state| {
            if let Err(err) = state.remove_item(&cart_adapter(), &product_id) {
                log::error!("cart: failed to remove product {product_id}: {err}");
            }
        });
    };

    view! {
        <div class="cart-line">
            <img
                class="cart-line__image"
                src=src
                alt=item.name.clone()
                on:error=move |ev| swap_to_placeholder(&ev)
            />
            <div class="cart-line__body">
                <h4 class="cart-line__name">{item.name.clone()}</h4>
                <p class="cart-line__price">{price_label}</p>
            </div>
            <button
                class="cart-line__remove"
                on:click=on_remove
                title="Remove from cart"
                aria-label="Remove from cart"
            >
                "🗑️"
            </button>
        </div>
    }
}

/// Point a broken `<img>` at the placeholder.
fn swap_to_placeholder(ev: &leptos::ev::Event) {
    #[cfg(feature = "hydrate")]
    {
        let Some(img) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlImageElement>().ok())
        else {
            return;
        };
        if img.src() != PLACEHOLDER_IMAGE_URL {
            img.set_src(PLACEHOLDER_IMAGE_URL);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
    }
}
