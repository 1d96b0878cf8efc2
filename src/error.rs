//! Error type for the browser glue and config loading.
//!
//! Gameplay itself never fails: a collision simply ends the run. Everything here is
//! about the environment (missing DOM objects, rejected config) and is converted to
//! a `JsValue` at the wasm-bindgen boundary.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GameError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("canvas has no 2d context")]
    NoContext,
    #[error("element #{0} is not a canvas")]
    NotCanvas(String),
    #[error("no entropy source for seeding: {0}")]
    Entropy(String),
    #[error("invalid game config: {0}")]
    InvalidConfig(String),
    #[error("could not parse game config: {0}")]
    ConfigParse(String),
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for GameError {
    fn from(value: JsValue) -> Self {
        GameError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
