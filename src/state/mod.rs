//! Shared UI state

pub mod access;
