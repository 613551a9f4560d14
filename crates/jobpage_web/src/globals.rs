//! One-shot capture of the server-injected page globals.

use jobpage_core::{PageConfig, StreamFormat};
use page_logging::page_warn;
use wasm_bindgen::JsValue;
use web_sys::Window;

/// Fallback when the page injects no socket host. Matches the fixed
/// endpoint of the page revision that predates the `host` global.
const DEFAULT_SOCKET_HOST: &str = "localhost:8081";

/// Reads the injected globals and the current path into a [`PageConfig`].
///
/// The globals are written by the server-side renderer before any script
/// runs and are never mutated afterwards, so reading them once here is the
/// only access the rest of the code needs.
pub fn read_config(window: &Window) -> PageConfig {
    let error = string_global(window, "error").unwrap_or_default();
    let subscriptions_json = string_global(window, "subscriptions").unwrap_or_default();
    let socket_host = string_global(window, "host").unwrap_or_else(|| {
        page_warn!("no socket host injected; falling back to {DEFAULT_SOCKET_HOST}");
        DEFAULT_SOCKET_HOST.to_string()
    });
    let path = match window.location().pathname() {
        Ok(path) => path,
        Err(err) => {
            page_warn!("unable to read location.pathname: {err:?}");
            String::new()
        }
    };

    PageConfig {
        error,
        subscriptions_json,
        socket_host,
        path,
        stream_format: StreamFormat::Typed,
    }
}

fn string_global(window: &Window, name: &str) -> Option<String> {
    let value = js_sys::Reflect::get(window, &JsValue::from_str(name)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    let text = value.as_string();
    if text.is_none() {
        page_warn!("page global `{name}` is not a string");
    }
    text
}
