//! Core types and traits for the Shortify URL shortener.
//!
//! This crate provides the slug type, the base62 codec, the key layout of
//! the backing store and the store traits shared by the shortener, the
//! redirector and the storage backends.

pub mod base62;
pub mod error;
pub mod keys;
pub mod slug;
pub mod store;

pub use error::{CoreError, StorageError};
pub use slug::Slug;
pub use store::{ReadStore, Store};
