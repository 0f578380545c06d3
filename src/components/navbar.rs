//! Navigation Bar Component

use leptos::logging::log;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::access::use_access_context;

#[component]
pub fn Navbar() -> impl IntoView {
    let access = use_access_context();

    // Stand-ins for the real wallet and referral flows
    let toggle_wallet = move |_| {
        let connected = !access.is_connected();
        access.set_connected(connected);
        log!("Wallet connection toggled: connected={}", connected);
    };

    let toggle_verified = move |_| {
        let verified = !access.is_verified();
        access.set_verified(verified);
        log!("Verification toggled: verified={}", verified);
    };

    view! {
        <nav>
            <div style="max-width: 1200px; margin: 0 auto; padding: 0 24px; display: flex; justify-content: space-between; align-items: center;">
                <A href="/" attr:class="nav-link-clean">
                    <span class="nav-title">
                        <span class="nav-title-accent">"OP"</span><span class="nav-title-rest">"Chat"</span>
                    </span>
                </A>
                <div style="display: flex; gap: 12px;">
                    <button class="nav-pill" on:click=toggle_wallet>
                        {move || if access.is_connected() { "Wallet: Connected" } else { "Wallet: Disconnected" }}
                    </button>
                    <button class="nav-pill" on:click=toggle_verified>
                        {move || if access.is_verified() { "Access: Verified" } else { "Access: Unverified" }}
                    </button>
                </div>
            </div>
        </nav>
    }
}
