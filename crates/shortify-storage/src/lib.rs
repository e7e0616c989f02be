//! Store backends for Shortify.
//!
//! - [`RestStore`] talks to an Upstash-compatible REST endpoint and is the
//!   production backend.
//! - [`RedisStore`] speaks the native Redis protocol.
//! - [`InMemoryStore`] keeps everything in process, for development and tests.

pub mod memory;
pub mod redis;
pub mod rest;

pub use memory::InMemoryStore;
pub use self::redis::RedisStore;
pub use rest::{RestStore, RestStoreSettings};
pub use shortify_core::store::{ReadStore, Store};
pub use shortify_core::StorageError;
