//! Core domain logic: configuration snapshots and credential submission

pub mod auth;
#[cfg(feature = "ssr")]
pub mod config;
pub mod runtime;

pub use auth::SubmitError;
pub use runtime::RuntimeConfig;
