//! Product Showcase Section
//!
//! Split layout: chat panel on the left, character carousel on the right.
//! The carousel index is the only state this component owns; the access
//! flags arrive as props and feed the call to action.

use leptos::prelude::*;

use crate::components::ActionButton;
use crate::utils::constants::{
    CHARACTERS, CHAT_PANEL_BLURB, CHAT_PANEL_TITLE, SHOWCASE_HEADING, SHOWCASE_TAGLINE,
};

/// Advance to the next slide, wrapping past the end
pub fn next_slide(current: usize, len: usize) -> usize {
    (current + 1) % len
}

/// Step back to the previous slide, wrapping past the start
pub fn prev_slide(current: usize, len: usize) -> usize {
    (current + len - 1) % len
}

#[component]
pub fn ProductShowcase(
    #[prop(into)] is_wallet_connected: Signal<bool>,
    #[prop(into)] is_verified: Signal<bool>,
) -> impl IntoView {
    let (current_slide, set_current_slide) = signal(0usize);

    let on_next = move |_| {
        set_current_slide.update(|slide| *slide = next_slide(*slide, CHARACTERS.len()));
    };

    let on_prev = move |_| {
        set_current_slide.update(|slide| *slide = prev_slide(*slide, CHARACTERS.len()));
    };

    view! {
        <section class="showcase" style="padding: 80px 24px;">
            <div style="max-width: 1100px; margin: 0 auto;">
                <div style="text-align: center; margin-bottom: 64px;">
                    <h2 class="showcase-heading" style="font-size: 36px; font-weight: 700; margin-bottom: 16px;">
                        {SHOWCASE_HEADING}
                    </h2>
                    <p class="showcase-tagline" style="max-width: 640px; margin: 0 auto;">
                        {SHOWCASE_TAGLINE}
                    </p>
                </div>

                <div class="showcase-grid" style="display: grid; grid-template-columns: 1fr 1fr; gap: 32px;">
                    <div class="card chat-panel">
                        <div style="display: flex; align-items: center; gap: 16px; margin-bottom: 24px;">
                            <span class="panel-icon">"\u{1F916}"</span>
                            <h3 style="font-size: 24px; font-weight: 700;">{CHAT_PANEL_TITLE}</h3>
                        </div>
                        <p style="margin-bottom: 24px;">{CHAT_PANEL_BLURB}</p>
                        <ActionButton wallet_connected=is_wallet_connected verified=is_verified/>
                    </div>

                    <div class="carousel" style="position: relative;">
                        <div class="carousel-frame" style="position: relative; height: 400px; border-radius: 12px; overflow: hidden;">
                            {CHARACTERS.iter().enumerate().map(|(index, character)| {
                                view! {
                                    <div
                                        class="slide"
                                        class:slide-active=move || current_slide.get() == index
                                    >
                                        <img
                                            src=character.image
                                            alt=character.name
                                            style="position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover;"
                                        />
                                        <div class="slide-overlay" style="position: absolute; inset: 0; display: flex; flex-direction: column; justify-content: flex-end; padding: 32px;">
                                            <div style="margin-bottom: 16px;">
                                                <h3 style="font-size: 24px; font-weight: 700; margin-bottom: 8px;">
                                                    {character.name}
                                                </h3>
                                                <p class="slide-description">{character.description}</p>
                                            </div>
                                            <ActionButton wallet_connected=is_wallet_connected verified=is_verified/>
                                        </div>
                                    </div>
                                }
                            }).collect::<Vec<_>>()}
                        </div>

                        <button
                            class="carousel-arrow carousel-arrow-left"
                            on:click=on_prev
                            aria-label="Previous character"
                        >
                            "\u{2039}"
                        </button>
                        <button
                            class="carousel-arrow carousel-arrow-right"
                            on:click=on_next
                            aria-label="Next character"
                        >
                            "\u{203A}"
                        </button>

                        <div class="carousel-dots" style="position: absolute; bottom: 16px; left: 50%; transform: translateX(-50%); display: flex; gap: 8px;">
                            {CHARACTERS.iter().enumerate().map(|(index, _)| {
                                view! {
                                    <button
                                        class="carousel-dot"
                                        class:carousel-dot-active=move || current_slide.get() == index
                                        on:click=move |_| set_current_slide.set(index)
                                        aria-label=format!("Go to slide {}", index + 1)
                                    ></button>
                                }
                            }).collect::<Vec<_>>()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_back_to_start_after_full_cycle() {
        let len = CHARACTERS.len();
        for start in 0..len {
            let mut slide = start;
            for _ in 0..len {
                slide = next_slide(slide, len);
            }
            assert_eq!(slide, start);
        }
    }

    #[test]
    fn test_prev_is_the_inverse_of_next() {
        let len = CHARACTERS.len();
        for slide in 0..len {
            assert_eq!(prev_slide(next_slide(slide, len), len), slide);
            assert_eq!(next_slide(prev_slide(slide, len), len), slide);
        }
    }

    #[test]
    fn test_transitions_stay_in_bounds() {
        let len = CHARACTERS.len();
        for slide in 0..len {
            assert!(next_slide(slide, len) < len);
            assert!(prev_slide(slide, len) < len);
        }
    }

    #[test]
    fn test_prev_from_first_wraps_to_last() {
        let len = CHARACTERS.len();
        assert_eq!(prev_slide(0, len), len - 1);
        assert_eq!(next_slide(len - 1, len), 0);
    }
}
