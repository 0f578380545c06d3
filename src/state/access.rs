//! Access state management
//!
//! Wallet connection and referral verification both happen outside this app.
//! Their results arrive here as two flags that gate the chat call to action.

use leptos::prelude::*;

/// Global access context
#[derive(Clone, Copy)]
pub struct AccessContext {
    pub wallet_connected: RwSignal<bool>,
    pub verified: RwSignal<bool>,
}

impl AccessContext {
    pub fn new() -> Self {
        Self {
            wallet_connected: RwSignal::new(false),
            verified: RwSignal::new(false),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.wallet_connected.get()
    }

    pub fn is_verified(&self) -> bool {
        self.verified.get()
    }

    pub fn set_connected(&self, connected: bool) {
        self.wallet_connected.set(connected);
    }

    pub fn set_verified(&self, verified: bool) {
        self.verified.set(verified);
    }
}

impl Default for AccessContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_access_context() -> AccessContext {
    let context = AccessContext::new();
    provide_context(context);
    context
}

pub fn use_access_context() -> AccessContext {
    expect_context::<AccessContext>()
}
