//! Authentication module

pub mod error_handler;
pub mod store;

// Re-export commonly used items
pub use error_handler::SessionExpiry;
pub use store::{AuthState, AuthStore};
