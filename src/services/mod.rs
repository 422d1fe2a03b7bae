//! External service interactions
//!
//! This module contains services for interacting with the outside world:
//! - Feed body parsing
//! - Background feed fetching

pub mod feed;
pub mod fetch;

pub use feed::parse_feed;
pub use fetch::{FetchOutcome, FetchRunner};
