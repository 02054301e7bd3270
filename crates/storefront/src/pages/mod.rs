//! Page controllers.
//!
//! One controller per page. Each user interaction of the page maps to one
//! synchronous method that mutates state, persists the cart when needed,
//! and returns the re-rendered fragment(s) plus any user-facing notice.

pub mod contact;
pub mod home;
pub mod menu;

pub use contact::{ContactPage, SubmitOutcome};
pub use home::HomePage;
pub use menu::{CartUpdate, MenuPage};
