//! Ocean Backdrop Component
//!
//! Fills the page background with drifting bubbles

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

#[component]
pub fn Backdrop() -> impl IntoView {
    // Populate bubbles after the component is in the DOM
    leptos::task::spawn_local(async move {
        TimeoutFuture::new(100).await;

        let document = match web_sys::window().and_then(|w| w.document()) {
            Some(d) => d,
            None => return,
        };

        if let Some(backdrop_element) = document.get_element_by_id("ocean-backdrop") {
            if let Some(html_element) = backdrop_element.dyn_ref::<HtmlElement>() {
                create_bubbles(html_element);
            }
        }
    });

    view! {
        <div
            class="ocean-backdrop"
            id="ocean-backdrop"
        ></div>
    }
}

fn create_bubbles(container: &HtmlElement) {
    let document = web_sys::window()
        .and_then(|win| win.document())
        .expect("should have a document");

    let num_bubbles = 40;

    for _i in 0..num_bubbles {
        let bubble = document
            .create_element("div")
            .expect("should create bubble element");

        bubble.set_class_name("bubble");

        // Random position, size and drift timing
        let left = js_sys::Math::random() * 100.0;
        let delay = js_sys::Math::random() * 12.0;
        let duration = js_sys::Math::random() * 10.0 + 8.0;
        let size = js_sys::Math::random() * 10.0 + 4.0;

        bubble
            .set_attribute(
                "style",
                &format!(
                    "left: {}%; animation-delay: {}s; animation-duration: {}s; width: {}px; height: {}px;",
                    left, delay, duration, size, size
                ),
            )
            .expect("should set style");

        // A few larger, brighter bubbles (20% chance)
        if js_sys::Math::random() > 0.8 {
            let large_size = js_sys::Math::random() * 14.0 + 10.0;
            bubble
                .set_attribute(
                    "style",
                    &format!(
                        "left: {}%; animation-delay: {}s; animation-duration: {}s; width: {}px; height: {}px; \
                        box-shadow: 0 0 12px rgba(255, 255, 255, 0.6), 0 0 24px rgba(168, 85, 247, 0.4);",
                        left, delay, duration, large_size, large_size
                    ),
                )
                .expect("should set style");
        }

        container
            .append_child(&bubble)
            .expect("should append bubble");
    }
}
