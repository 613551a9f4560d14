//! Browser wiring for the job/subscription page.
//!
//! Reads the server-injected page globals, renders the alert banner and the
//! subscription list, and follows the per-job WebSocket stream. All page
//! logic lives in `jobpage_core` and is tested on the host; this crate only
//! locates DOM regions, applies effects, and registers socket callbacks.
//!
//! Compiles to an empty library off the wasm target.

#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod globals;
#[cfg(target_arch = "wasm32")]
pub mod page;
#[cfg(target_arch = "wasm32")]
mod socket;

#[cfg(target_arch = "wasm32")]
use page_logging::{page_error, page_info};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// Module entry point, run once when the wasm module is instantiated.
///
/// The page template may load the module before the document finishes
/// parsing, so booting is deferred to `DOMContentLoaded` when needed.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if document.ready_state() == "loading" {
        let boot_document = document.clone();
        let once = Closure::once_into_js(move || boot(&boot_document));
        document.add_event_listener_with_callback("DOMContentLoaded", once.unchecked_ref())?;
    } else {
        boot(&document);
    }

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn boot(document: &web_sys::Document) {
    page_info!("jobpage module executing");

    let Some(window) = web_sys::window() else {
        page_error!("no window; cannot boot page");
        return;
    };

    let config = globals::read_config(&window);
    let state = jobpage_core::AppState::new(config);
    let app = page::App::new(state, page::Page::locate(document.clone()));
    app.dispatch(jobpage_core::Msg::PageReady);
}
