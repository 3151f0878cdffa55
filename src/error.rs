// Error types for the backdrop, the link store and the admin gate. Each one
// crosses the wasm boundary as a plain JS string carrying its message.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Failures while locating or drawing into the render surface.
#[derive(Error, Debug)]
pub enum BackdropError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element with id `{0}`")]
    MissingCanvas(String),
    #[error("element `{0}` is not a canvas")]
    NotACanvas(String),
    #[error("canvas has no 2d context")]
    NoContext,
    #[error("invalid backdrop config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("canvas call failed: {0}")]
    Js(String),
}

impl BackdropError {
    /// True for every error that means "there is nothing to draw into".
    /// Those are swallowed at startup; the rest are reported.
    pub fn is_missing_surface(&self) -> bool {
        !matches!(self, BackdropError::Config(_) | BackdropError::Js(_))
    }
}

/// Failures of the key/value store backing the link list and admin flag.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage access failed: {0}")]
    Js(String),
}

#[derive(Error, Debug)]
pub enum LinkError {
    #[error("Please fill both fields")]
    MissingField,
    #[error("could not encode links: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Render a `JsValue` error the way the console would show it. Thrown
/// `Error` objects contribute their message.
pub fn describe_js(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

impl From<JsValue> for BackdropError {
    fn from(value: JsValue) -> Self {
        BackdropError::Js(describe_js(&value))
    }
}

impl From<JsValue> for StoreError {
    fn from(value: JsValue) -> Self {
        StoreError::Js(describe_js(&value))
    }
}

macro_rules! into_js_value {
    ($($error:ty),*) => {
        $(
            impl From<$error> for JsValue {
                fn from(error: $error) -> Self {
                    JsValue::from_str(&error.to_string())
                }
            }
        )*
    };
}

into_js_value!(BackdropError, StoreError, LinkError, AuthError);
