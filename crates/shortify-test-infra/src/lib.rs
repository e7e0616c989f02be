//! Test fixtures shared by the Shortify crates.
//!
//! - [`rest::FakeRestStore`] serves an Upstash-compatible REST API from
//!   memory and can be told to misbehave.
//! - [`redis::RedisContainer`] starts a throwaway Redis in a container.

pub mod error;
pub mod redis;
pub mod rest;

pub use error::{Result, TestInfraError};
