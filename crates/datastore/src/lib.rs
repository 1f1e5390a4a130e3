//! # MarketLens Datastore
//!
//! This crate owns the in-memory dataset the rest of the application reads
//! from. It is the system's only data source.
//!
//! ## Architectural Principles
//!
//! - **Load Once, Read Forever:** The two dataset files are parsed and
//!   validated a single time before serving begins. The resulting `Store`
//!   is immutable and shared by reference; there is no write path and no
//!   global mutable singleton.
//! - **Honest Lookups:** Lookups distinguish "this market does not exist"
//!   (an error) from "this market has no data in the requested window"
//!   (an empty result).
//!
//! ## Public API
//!
//! - `Store`: the immutable dataset plus all lookup and benchmark
//!   resolution methods (`latest_snapshot`, `snapshots_in_range`,
//!   `previous_snapshot`).
//! - `StoreError`: the specific error types that can be returned from this
//!   crate.

// Declare the modules that constitute this crate.
pub mod error;
pub mod store;

// Re-export the key components to create a clean, public-facing API.
pub use error::StoreError;
pub use store::Store;
