//! Application pages module
//!
//! This module contains all the page components for the application:
//! - Home page (behind the gate)
//! - Login page
//! - Not found (404) page

mod home;
mod login;
mod not_found;

pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
