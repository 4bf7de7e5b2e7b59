//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions and the Leaflet map glue live in `assets/js/*.js`.
//! They are evaluated as globals (no ES modules) and exposed via `window.*`.
//! This module serializes data on the Rust side and calls those globals once
//! their library and target DOM node are available.

use serde::Serialize;

// Embed all chart/map JS files at compile time
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static DOUGHNUT_CHART_JS: &str = include_str!("../assets/js/doughnut-chart.js");
static WELL_MAP_JS: &str = include_str!("../assets/js/well-map.js");

/// Global render functions promoted to `window` by [`init_scripts`].
const EXPORTED_FUNCTIONS: [&str; 5] = [
    "renderBarChart",
    "renderDoughnutChart",
    "initWellMap",
    "renderWellMap",
    "destroyWellMap",
];

/// Which third-party library a render call waits for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Library {
    D3,
    Leaflet,
}

impl Library {
    const ALL: [Library; 2] = [Library::D3, Library::Leaflet];

    fn global(&self) -> &'static str {
        match self {
            Library::D3 => "d3",
            Library::Leaflet => "L",
        }
    }

    fn script_src(&self) -> &'static str {
        match self {
            Library::D3 => "https://cdn.jsdelivr.net/npm/d3@7",
            Library::Leaflet => "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js",
        }
    }

    fn stylesheet(&self) -> Option<&'static str> {
        match self {
            Library::D3 => None,
            Library::Leaflet => Some("https://unpkg.com/leaflet@1.9.4/dist/leaflet.css"),
        }
    }
}

/// Quote a string as a JS string literal.
///
/// JSON string syntax is a subset of JS string syntax, so serde_json's
/// escaping covers quotes, backslashes and control characters.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "''".to_string())
}

/// Serialize a value to JSON, then quote that JSON as a JS string literal.
pub fn to_js_json<T: Serialize>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(json) => js_string(&json),
        Err(e) => {
            log::error!("Failed to serialize chart payload: {}", e);
            js_string("null")
        }
    }
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('OGP JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Append `<script>`/`<link>` tags for D3 and Leaflet unless the page
/// already defines them.
fn load_libraries() -> String {
    Library::ALL
        .iter()
        .map(|lib| {
            let css = lib
                .stylesheet()
                .map(|href| {
                    format!(
                        "var css = document.createElement('link'); css.rel = 'stylesheet'; \
                         css.href = {}; document.head.appendChild(css);",
                        js_string(href)
                    )
                })
                .unwrap_or_default();
            format!(
                "if (typeof {global} === 'undefined') {{ {css} \
                 var s = document.createElement('script'); s.src = {src}; \
                 document.head.appendChild(s); }}",
                global = lib.global(),
                src = js_string(lib.script_src()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Evaluate the embedded scripts at global scope and promote their
/// functions to `window`. Safe to call more than once.
pub fn init_scripts() {
    let all_js = [BAR_CHART_JS, DOUGHNUT_CHART_JS, WELL_MAP_JS].join("\n");
    let promote: String = EXPORTED_FUNCTIONS
        .iter()
        .map(|f| format!("if (typeof {f} !== 'undefined') window.{f} = {f};"))
        .collect::<Vec<_>>()
        .join("\n");

    let init_js = format!(
        r#"
        (function() {{
            if (window.__ogpScriptsReady) return;
            {libraries}
            (0, eval)({scripts});
            (0, eval)({promote});
            window.__ogpScriptsReady = true;
            console.log('OGP chart and map scripts initialized');
        }})();
        "#,
        libraries = load_libraries(),
        scripts = js_string(&all_js),
        promote = js_string(&promote),
    );
    call_js(&init_js);
}

/// Give up on a render after this many 100ms polls.
const MAX_POLL_ATTEMPTS: u32 = 100;

/// JS that polls until the scripts, the library and the container exist,
/// then calls `window.{function}('{container_id}', ...args)`.
///
/// One poll per container: a newer render replaces a pending one, and a poll
/// stops after [`MAX_POLL_ATTEMPTS`].
fn render_when_ready_js(
    library: Library,
    function: &str,
    container_id: &str,
    args: &[String],
) -> String {
    let container = js_string(container_id);
    let mut call_args = vec![container.clone()];
    call_args.extend(args.iter().cloned());
    let call_args = call_args.join(", ");
    let lib = library.global();

    format!(
        r#"
        (function() {{
            var polls = window.__ogpPolls = window.__ogpPolls || {{}};
            if (polls[{container}]) clearInterval(polls[{container}]);
            var attempts = 0;
            var poll = setInterval(function() {{
                if (window.__ogpScriptsReady &&
                    typeof {lib} !== 'undefined' &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById({container})) {{
                    clearInterval(poll);
                    delete polls[{container}];
                    try {{
                        window.{function}({call_args});
                    }} catch(e) {{ console.error('[OGP] {function} error:', e); }}
                }} else if (++attempts >= {max}) {{
                    clearInterval(poll);
                    delete polls[{container}];
                    console.warn('[OGP] {function} gave up waiting for', {container});
                }}
            }}, 100);
            polls[{container}] = poll;
        }})();
        "#,
        max = MAX_POLL_ATTEMPTS,
    )
}

/// Cancel a render still waiting on `container_id`.
fn cancel_pending_js(container_id: &str) -> String {
    let container = js_string(container_id);
    format!(
        "if (window.__ogpPolls && window.__ogpPolls[{container}]) {{ \
         clearInterval(window.__ogpPolls[{container}]); delete window.__ogpPolls[{container}]; }}"
    )
}

fn render_when_ready(library: Library, function: &str, container_id: &str, args: &[String]) {
    call_js(&render_when_ready_js(library, function, container_id, args));
}

/// Render the daily production bar chart.
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready(
        Library::D3,
        "renderBarChart",
        container_id,
        &[data_json.to_string(), config_json.to_string()],
    );
}

/// Render the production-by-region doughnut chart.
pub fn render_doughnut_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready(
        Library::D3,
        "renderDoughnutChart",
        container_id,
        &[data_json.to_string(), config_json.to_string()],
    );
}

/// Create (or reuse) the Leaflet map and replace its markers.
pub fn render_well_map(container_id: &str, defaults_json: &str, layers_json: &str) {
    render_when_ready(
        Library::Leaflet,
        "renderWellMap",
        container_id,
        &[defaults_json.to_string(), layers_json.to_string()],
    );
}

/// Create the Leaflet map with its default view and no markers.
pub fn init_well_map(container_id: &str, defaults_json: &str) {
    render_when_ready(
        Library::Leaflet,
        "initWellMap",
        container_id,
        &[defaults_json.to_string()],
    );
}

/// Tear down the Leaflet map bound to a container.
pub fn destroy_well_map(container_id: &str) {
    call_js(&format!(
        "{} if (window.destroyWellMap) window.destroyWellMap({});",
        cancel_pending_js(container_id),
        js_string(container_id)
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_string_escapes_quotes_and_newlines() {
        assert_eq!(js_string("it's \"x\"\n"), r#""it's \"x\"\n""#);
    }

    #[test]
    fn payload_is_double_encoded() {
        let quoted = to_js_json(&serde_json::json!({"name": "O'Brien"}));
        // A JS string literal whose content is the JSON document
        let inner: String = serde_json::from_str(&quoted).unwrap();
        assert_eq!(inner, r#"{"name":"O'Brien"}"#);
    }

    #[test]
    fn library_loader_guards_on_existing_globals() {
        let js = load_libraries();
        assert!(js.contains("typeof d3 === 'undefined'"));
        assert!(js.contains("typeof L === 'undefined'"));
        assert!(js.contains("leaflet.css"));
    }

    #[test]
    fn render_poll_is_bounded_and_replaces_pending() {
        let js = render_when_ready_js(
            Library::Leaflet,
            "renderWellMap",
            "well-map",
            &["'{}'".to_string()],
        );
        assert!(js.contains("++attempts >= 100"));
        assert!(js.contains(r#"if (polls["well-map"]) clearInterval(polls["well-map"]);"#));
        assert!(js.contains(r#"window.renderWellMap("well-map", '{}')"#));
        assert!(js.contains("typeof L !== 'undefined'"));
    }

    #[test]
    fn cancel_targets_one_container() {
        let js = cancel_pending_js("well-map");
        assert!(js.contains(r#"clearInterval(window.__ogpPolls["well-map"])"#));
    }

    #[test]
    fn map_script_reads_camel_case_bounds() {
        assert!(WELL_MAP_JS.contains("layers.fit.southWest"));
        assert!(!WELL_MAP_JS.contains("south_west"));
    }

    #[test]
    fn scripts_define_exported_functions() {
        let all_js = [BAR_CHART_JS, DOUGHNUT_CHART_JS, WELL_MAP_JS].join("\n");
        for f in EXPORTED_FUNCTIONS {
            assert!(all_js.contains(&format!("function {f}(")), "{f} missing");
        }
    }
}
