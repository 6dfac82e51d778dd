//! sayhi frontend glue
//!
//! The pieces a sayhi front end needs around the HTTP client: the auth
//! store mirrored into persistent storage, the route table and its login
//! guard, user-facing notices, and a [`Session`] that wires them together.

pub mod auth;
pub mod client;
pub mod config;
pub mod notify;
pub mod router;
pub mod session;

pub use auth::{AuthState, AuthStore, SessionExpiry};
pub use client::{BearerToken, create_api_client};
pub use config::{AuthConfig, Notices};
pub use notify::{Notifier, TracingNotifier};
pub use router::{GuardDecision, NavigationError, Route, Router};
pub use session::{Session, SessionError, SessionOptions};
