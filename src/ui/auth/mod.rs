//! Authentication UI module
//!
//! Components for the credential-entry gate.

mod login_form;

pub use login_form::LoginForm;
