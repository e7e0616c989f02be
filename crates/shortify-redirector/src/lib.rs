//! Slug resolution for Shortify.
//!
//! This crate provides a [`RedirectorService`] that resolves slugs to their
//! original URLs through any [`ReadStore`][shortify_core::ReadStore].
//! Store failures never reach the caller: they are logged and reported as
//! [`Resolution::Missing`], so a broken store degrades to fallback
//! redirects instead of errors.
//!
//! # Example
//!
//! ```rust
//! use shortify_core::Slug;
//! use shortify_redirector::{Redirector, RedirectorService, Resolution};
//! use shortify_storage::InMemoryStore;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = RedirectorService::new(Arc::new(InMemoryStore::new()));
//!
//! let slug = Slug::new("g8")?;
//! if let Resolution::Found(url) = service.resolve(&slug).await {
//!     println!("Redirect to: {}", url);
//! }
//! # Ok(())
//! # }
//! ```

pub mod redirector;
pub mod service;

pub use redirector::{Redirector, Resolution};
pub use service::RedirectorService;
