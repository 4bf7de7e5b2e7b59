//! Shared Dioxus components and D3.js/Leaflet bridge for the production
//! dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for chart and map JS functions via `js_sys::eval()`
//! - `state`: app-wide signals and host capabilities, provided as context
//! - `components`: filter form, table, charts, map and chat widget

pub mod components;
pub mod js_bridge;
pub mod state;
