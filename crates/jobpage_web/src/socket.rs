//! Job stream socket wiring.

use std::rc::Rc;

use jobpage_core::Msg;
use page_logging::page_warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, MessageEvent, WebSocket};

use crate::page::App;

/// Opens the job stream at `url` and registers the open/message/close
/// callbacks.
///
/// The closures are leaked deliberately: the handlers live for the rest of
/// the page, and the socket is only ever closed by the remote end or page
/// unload. There is no reconnect; after close the viewer is inert until
/// the page reloads.
pub fn connect(app: &Rc<App>, url: &str) -> Result<(), JsValue> {
    let socket = WebSocket::new(url)?;

    let open_app = Rc::clone(app);
    let on_open = Closure::wrap(Box::new(move |_event: Event| {
        open_app.dispatch(Msg::StreamOpened);
    }) as Box<dyn FnMut(Event)>);
    socket.set_onopen(Some(on_open.as_ref().unchecked_ref()));
    on_open.forget();

    let message_app = Rc::clone(app);
    let on_message = Closure::wrap(Box::new(move |event: MessageEvent| {
        match event.data().as_string() {
            Some(payload) => message_app.dispatch(Msg::StreamFrame(payload)),
            None => page_warn!("ignoring non-text frame on the job stream"),
        }
    }) as Box<dyn FnMut(MessageEvent)>);
    socket.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
    on_message.forget();

    let close_app = Rc::clone(app);
    let on_close = Closure::wrap(Box::new(move |_event: Event| {
        close_app.dispatch(Msg::StreamClosed);
    }) as Box<dyn FnMut(Event)>);
    socket.set_onclose(Some(on_close.as_ref().unchecked_ref()));
    on_close.forget();

    Ok(())
}
