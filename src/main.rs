//! One Piece AI Chat - Promotional Web Frontend
//!
//! Client-side Leptos app. Wallet connection, verification and the chat
//! backend are external collaborators; this app only presents them.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

mod app;
mod components;
mod pages;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Initialize logger
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("One Piece AI Chat showcase starting...");

    // Hide loading screen immediately when WASM loads
    hide_loading_screen();

    // Mount the Leptos app
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the loading screen element
fn hide_loading_screen() {
    let window = match web_sys::window() {
        Some(w) => w,
        None => {
            log::warn!("No window available");
            return;
        }
    };

    let document = match window.document() {
        Some(d) => d,
        None => {
            log::warn!("No document available");
            return;
        }
    };

    if let Some(loading_element) = document.get_element_by_id("leptos-loading") {
        if let Some(html_element) = loading_element.dyn_ref::<HtmlElement>() {
            if let Err(e) = html_element.class_list().add_1("hidden") {
                log::warn!("Failed to add 'hidden' class: {:?}", e);
            }
        }

        // Also set display:none as backup
        if let Err(e) = loading_element.set_attribute("style", "display: none !important;") {
            log::warn!("Failed to hide loading screen via style: {:?}", e);
        }

        log::info!("Loading screen hidden");
    } else {
        log::warn!("Loading element with id 'leptos-loading' not found");
    }
}
