//! Storefront landing page.

use leptos::prelude::*;

use crate::components::header::Header;

/// Landing route: the header over the storefront body.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <Header/>
            <main class="home-page__body">
                <p class="home-page__welcome">"Welcome to the store."</p>
            </main>
        </div>
    }
}
