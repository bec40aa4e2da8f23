use web_sys::{js_sys::Date, window, Document, Element, Window};

use crate::error::Error;

/// Returns the global window.
pub(crate) fn get_window() -> Result<Window, Error> {
    window().ok_or(Error::UnableToRetrieveWindow)
}

/// Returns the document of the global window.
pub(crate) fn get_document() -> Result<Document, Error> {
    get_window()?
        .document()
        .ok_or(Error::UnableToRetrieveDocument)
}

/// Returns the element with the given ID, or the document body if no ID is
/// given.
pub(crate) fn get_element_by_id_or_body(id: Option<&String>) -> Result<Element, Error> {
    match id {
        Some(id) => get_document()?
            .get_element_by_id(id)
            .ok_or_else(|| Error::UnableToRetrieveElementById(id.to_string())),
        None => get_document()?
            .body()
            .ok_or(Error::UnableToRetrieveBody)
            .map(|body| body.into()),
    }
}

/// Returns the current wall clock time in milliseconds.
pub fn now() -> f64 {
    Date::now()
}

/// Logs a debug message to the browser console.
#[cfg(target_arch = "wasm32")]
pub(crate) fn log_debug(message: &str) {
    web_sys::console::debug_1(&message.into());
}

/// Debug messages are only reported in the browser.
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn log_debug(_message: &str) {}

/// Logs an error message to the browser console.
#[cfg(target_arch = "wasm32")]
pub(crate) fn log_error(message: &str) {
    web_sys::console::error_1(&message.into());
}

/// Logs an error message to the standard error.
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn log_error(message: &str) {
    eprintln!("{message}");
}
