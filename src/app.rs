//! One Piece AI Chat - Leptos Frontend
//!
//! Promotional showcase with wallet-gated access to the character chat

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::components::{Backdrop, Navbar};
use crate::pages::{HomePage, ReferralsPage};
use crate::state::access::provide_access_context;

#[component]
pub fn App() -> impl IntoView {
    // Access flags only - wallet and verification flows live elsewhere
    provide_access_context();

    // Hide loading screen once app is mounted (backup in case main() didn't catch it)
    Effect::new(move || {
        hide_loading_screen();

        // Also try async as additional backup
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(100).await;
            hide_loading_screen();
        });
    });

    view! {
        <Router>
            <div class="app-container">
                <Backdrop/>
                <Navbar/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/referrals") view=ReferralsPage/>
                </Routes>
            </div>
        </Router>
    }
}

fn hide_loading_screen() {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(d) => d,
        None => return,
    };

    if let Some(loading_element) = document.get_element_by_id("leptos-loading") {
        if let Some(html_element) = loading_element.dyn_ref::<HtmlElement>() {
            html_element.class_list().add_1("hidden").ok();
        }
        loading_element
            .set_attribute("style", "display: none !important;")
            .ok();
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: center; min-height: calc(100vh - 60px);">
            <div class="card" style="max-width: 500px; text-align: center;">
                <h1 style="font-size: 32px; font-weight: 700; margin-bottom: 16px;">"404 - Page Not Found"</h1>
                <p class="subtitle" style="margin-bottom: 24px;">"That island isn't on the map."</p>
                <A href="/">
                    <span class="btn" style="margin-top: 20px; display: inline-block;">
                        "Back to the Showcase"
                    </span>
                </A>
            </div>
        </div>
    }
}
