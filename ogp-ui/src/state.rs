//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the app-wide signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`.

use dioxus::prelude::*;
use ogp_core::ApiClient;

/// What the host environment can do, resolved once at startup.
///
/// Components that need a DOM (charts, the map) read this instead of probing
/// the environment themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// A `window`/`document` is available for D3 and Leaflet.
    pub browser: bool,
}

impl Capabilities {
    pub fn detect() -> Self {
        Self {
            browser: web_sys::window().and_then(|w| w.document()).is_some(),
        }
    }
}

/// Top-level views reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Map,
}

impl View {
    pub const ALL: [View; 2] = [View::Dashboard, View::Map];

    pub fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Map => "Map",
        }
    }
}

/// Shared application state.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Backend client (None when the configured base URL is unusable)
    pub api: Signal<Option<ApiClient>>,
    /// Host capabilities, fixed after launch
    pub capabilities: Signal<Capabilities>,
    /// Currently selected view
    pub view: Signal<View>,
    /// Fatal configuration error, shown instead of any view
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create an AppState around an already-resolved client and capabilities.
    pub fn new(api: anyhow::Result<ApiClient>, capabilities: Capabilities) -> Self {
        let (api, error_msg) = match api {
            Ok(client) => (Some(client), None),
            Err(e) => {
                log::error!("Backend configuration failed: {}", e);
                (None, Some(format!("Backend configuration failed: {}", e)))
            }
        };
        Self {
            api: Signal::new(api),
            capabilities: Signal::new(capabilities),
            view: Signal::new(View::Dashboard),
            error_msg: Signal::new(error_msg),
        }
    }
}
