//! Typed DOM location and node helpers.
//!
//! Every selector this page depends on is owned by the page template, so a
//! missing or wrong-typed element is an expected condition: lookups return
//! `Option` and the caller decides which feature to skip.

use page_logging::{page_error, page_warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

/// Locates `selector` in the document, cast to the requested element type.
pub fn query<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    let found = match document.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            page_error!("bad selector `{selector}`: {err:?}");
            return None;
        }
    };
    cast(found?, selector)
}

/// Locates `selector` under `root`, cast to the requested element type.
pub fn query_in<T: JsCast>(root: &Element, selector: &str) -> Option<T> {
    let found = match root.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            page_error!("bad selector `{selector}`: {err:?}");
            return None;
        }
    };
    cast(found?, selector)
}

fn cast<T: JsCast>(element: Element, selector: &str) -> Option<T> {
    match element.dyn_into::<T>() {
        Ok(typed) => Some(typed),
        Err(_) => {
            page_warn!("element at `{selector}` has an unexpected type");
            None
        }
    }
}

/// Creates a `tag` element whose sole content is `text`.
pub fn text_element(document: &Document, tag: &str, text: &str) -> Result<Element, JsValue> {
    let element = document.create_element(tag)?;
    element.set_text_content(Some(text));
    Ok(element)
}
