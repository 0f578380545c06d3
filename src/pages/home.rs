//! Home Page - landing page hosting the product showcase

use leptos::prelude::*;

use crate::components::ProductShowcase;
use crate::state::access::use_access_context;

#[component]
pub fn HomePage() -> impl IntoView {
    let access = use_access_context();

    let is_wallet_connected = Signal::derive(move || access.is_connected());
    let is_verified = Signal::derive(move || access.is_verified());

    view! {
        <main>
            <ProductShowcase is_wallet_connected=is_wallet_connected is_verified=is_verified/>
        </main>
    }
}
