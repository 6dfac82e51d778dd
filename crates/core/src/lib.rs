//! sayhi core types and utilities
//!
//! Persistent key/value storage (the native stand-in for browser local
//! storage), client settings and the error type they share.

pub mod error;
pub mod storage;

#[cfg(not(target_arch = "wasm32"))]
pub mod settings;
#[cfg(not(target_arch = "wasm32"))]
pub mod state_dir;

pub use error::{CoreError, CoreResult};
pub use storage::{KeyValueStore, MemoryStore, SharedStore};

#[cfg(not(target_arch = "wasm32"))]
pub use settings::{ApiSettings, Settings};
#[cfg(not(target_arch = "wasm32"))]
pub use state_dir::StateDir;
#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStore;
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStore;
