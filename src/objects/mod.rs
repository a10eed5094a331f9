mod api_config;
pub use api_config::*;
mod download;
pub use download::*;
mod form_error;
pub use form_error::FormError;
mod js_error;
pub use js_error::JsError;
mod persona;
pub use persona::*;
mod vod;
pub use vod::*;
