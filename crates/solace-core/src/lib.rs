//! solace-core
//!
//! Pure domain types shared by the scoring engine, the wellness aggregator,
//! and the HTTP surface. No I/O. This is the shared vocabulary of Solace.

pub mod error;
pub mod models;
