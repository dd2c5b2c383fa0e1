//! morbyx-common — Shared error types used across all Morbyx crates.

pub mod error;

pub use error::{ApiError, MorbyxError, Result};
