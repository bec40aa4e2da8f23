use web_sys::wasm_bindgen;

/// Custom error implementation.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Unable to retrieve window.
    ///
    /// This error occurs when [`web_sys::window()`] returns `None`.
    #[error("Unable to retrieve window")]
    UnableToRetrieveWindow,

    /// Unable to retrieve document.
    ///
    /// This error occurs when `window.document()` returns `None`.
    #[error("Unable to retrieve document")]
    UnableToRetrieveDocument,

    /// Unable to retrieve body.
    ///
    /// This error occurs when `document.body()` returns `None`.
    #[error("Unable to retrieve body")]
    UnableToRetrieveBody,

    /// Unable to retrieve an element by ID.
    ///
    /// This error occurs when `document.get_element_by_id(id)` returns `None`.
    #[error("Unable to retrieve element by ID: {0}")]
    UnableToRetrieveElementById(String),

    /// An option of [`EffectOptions`] is out of range.
    ///
    /// [`EffectOptions`]: crate::EffectOptions
    #[error("Invalid option: {0}")]
    InvalidOption(&'static str),

    /// JS value error.
    #[error("JS value error: {0:?}")]
    JsValue(wasm_bindgen::JsValue),
}

/// Convert [`wasm_bindgen::JsValue`] to [`Error`].
impl From<wasm_bindgen::JsValue> for Error {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::JsValue(value)
    }
}

/// Convert [`Error`] to [`std::io::Error`].
impl From<Error> for std::io::Error {
    fn from(error: Error) -> Self {
        std::io::Error::other(error.to_string())
    }
}
