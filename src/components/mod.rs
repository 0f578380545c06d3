//! UI Components

pub mod action_button;
pub mod backdrop;
pub mod navbar;
pub mod showcase;

pub use action_button::ActionButton;
pub use backdrop::Backdrop;
pub use navbar::Navbar;
pub use showcase::ProductShowcase;
