//! Wire models and fetch client for the gamefeed engine.
//!
//! This crate provides:
//! - `GameRecord` / `PageResponse` - JSON payloads from the listing endpoint
//! - `PageQuery` - Query-string building for paginated fetches
//! - `PageSource` trait + `HttpPageSource` - The fetch seam and its HTTP
//!   implementation

mod client;
mod query;
mod record;

pub use client::*;
pub use query::*;
pub use record::*;
