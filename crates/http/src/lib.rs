//! sayhi HTTP client
//!
//! A typed client for the sayhi backend API with an explicit interceptor
//! pipeline around every call, plus the wire types both ends agree on.

pub mod client;
pub mod types;

pub use client::error::{ClientError, ClientResult};
pub use client::interceptor::{RequestInterceptor, ResponseInterceptor};
pub use client::{ApiClient, ApiClientBuilder};
