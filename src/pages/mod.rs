//! Page modules

pub mod home;
pub mod referrals;

pub use home::HomePage;
pub use referrals::ReferralsPage;
