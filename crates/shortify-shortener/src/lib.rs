//! Slug creation for Shortify.
//!
//! This crate provides the [`Shortener`] trait, its store-backed
//! implementation [`ShortenerService`], and the [`Generator`] trait used to
//! mint slugs.

pub mod error;
pub mod generator;
pub mod service;
pub mod shortener;
pub mod validation;

pub use error::ShortenerError;
pub use generator::{CounterGenerator, Generator};
pub use service::ShortenerService;
pub use shortener::{ShortenedUrl, Shortener};
