//! Referrals page (referral code entry)
//!
//! Destination of the "Enter Referral Code to Access" call to action.
//! Code redemption itself is handled by the verification service.

use leptos::prelude::*;

#[component]
pub fn ReferralsPage() -> impl IntoView {
    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: center; min-height: calc(100vh - 60px);">
            <div class="card" style="max-width: 500px; text-align: center;">
                <h1 style="font-size: 32px; font-weight: 700; margin-bottom: 12px;">"Referral Access"</h1>
                <p class="subtitle">"Enter a referral code to unlock character chat"</p>
            </div>
        </div>
    }
}
