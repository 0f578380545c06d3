//! Access-gated call to action
//!
//! Maps the two access flags to exactly one of three button variants.
//! Connecting a wallet and redeeming a referral code are handled elsewhere;
//! this component only reflects their outcome.

use leptos::logging::log;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::utils::constants::REFERRALS_PATH;

/// The three mutually exclusive call-to-action variants
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallToAction {
    /// No wallet connected: locked, goes nowhere
    Locked,
    /// Wallet connected but not verified: links to referral code entry
    ReferralGated,
    /// Wallet connected and verified: chat is available
    Ready,
}

impl CallToAction {
    /// Resolve the variant from the access flags.
    ///
    /// The wallet check takes priority: an unconnected wallet is locked no
    /// matter what the verification flag says.
    pub fn resolve(wallet_connected: bool, verified: bool) -> Self {
        if !wallet_connected {
            CallToAction::Locked
        } else if !verified {
            CallToAction::ReferralGated
        } else {
            CallToAction::Ready
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CallToAction::Locked => "Connect Wallet to Chat",
            CallToAction::ReferralGated => "Enter Referral Code to Access",
            CallToAction::Ready => "Start Chatting",
        }
    }
}

#[component]
pub fn ActionButton(
    #[prop(into)] wallet_connected: Signal<bool>,
    #[prop(into)] verified: Signal<bool>,
) -> impl IntoView {
    let start_chat = move |_| {
        // Chat session handoff is owned by the chat frontend
        log!("Chat requested from showcase");
    };

    move || match CallToAction::resolve(wallet_connected.get(), verified.get()) {
        CallToAction::Locked => view! {
            <button class="btn btn-locked" disabled=true>
                <span class="btn-icon">"\u{1F512}"</span>
                <span>{CallToAction::Locked.label()}</span>
            </button>
        }
        .into_any(),
        CallToAction::ReferralGated => view! {
            <A href=REFERRALS_PATH attr:class="btn-link">
                <span class="btn btn-referral">
                    <span class="btn-icon">"\u{1F512}"</span>
                    <span>{CallToAction::ReferralGated.label()}</span>
                </span>
            </A>
        }
        .into_any(),
        CallToAction::Ready => view! {
            <button class="btn btn-chat" on:click=start_chat>
                <span class="btn-icon">"\u{1F4AC}"</span>
                <span>{CallToAction::Ready.label()}</span>
            </button>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disconnected_wallet_is_locked_regardless_of_verification() {
        assert_eq!(CallToAction::resolve(false, false), CallToAction::Locked);
        assert_eq!(CallToAction::resolve(false, true), CallToAction::Locked);
    }

    #[test]
    fn test_connected_unverified_is_referral_gated() {
        assert_eq!(
            CallToAction::resolve(true, false),
            CallToAction::ReferralGated
        );
    }

    #[test]
    fn test_connected_verified_is_ready() {
        assert_eq!(CallToAction::resolve(true, true), CallToAction::Ready);
    }

    #[test]
    fn test_labels_match_product_copy() {
        assert_eq!(CallToAction::Locked.label(), "Connect Wallet to Chat");
        assert_eq!(
            CallToAction::ReferralGated.label(),
            "Enter Referral Code to Access"
        );
        assert_eq!(CallToAction::Ready.label(), "Start Chatting");
    }
}
