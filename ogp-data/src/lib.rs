//! Derivations over production and well data.
//!
//! This crate turns raw backend records into forms suitable for charting,
//! mapping and display. Everything here is synchronous and free of I/O so
//! it can be tested natively and reused by both the web app and the CLI.

pub mod aggregate;
pub mod chat;
pub mod dashboard;
pub mod format;
pub mod generation;
pub mod wells;
