use std::{error::Error, fmt::Display};
use wasm_bindgen::JsCast;

/// Error crossing the JS boundary: failed fetches, bad JSON, missing DOM nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct JsError {
    pub description: String,
}

impl Error for JsError {}

impl Display for JsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}", self.description))
    }
}

impl From<wasm_bindgen::JsValue> for JsError {
    fn from(val: wasm_bindgen::JsValue) -> Self {
        let description = match val.dyn_ref::<js_sys::Error>() {
            Some(err) => String::from(err.message()),
            None => val
                .as_string()
                .unwrap_or_else(|| format!("{:?}", val)),
        };

        Self { description }
    }
}

impl From<serde_wasm_bindgen::Error> for JsError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        Self {
            description: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for JsError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            description: err.to_string(),
        }
    }
}

impl From<&str> for JsError {
    fn from(str: &str) -> Self {
        Self {
            description: String::from(str),
        }
    }
}

impl From<String> for JsError {
    fn from(description: String) -> Self {
        Self { description }
    }
}
