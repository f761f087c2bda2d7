use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no global `window`")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("not an image: {0:?}")]
    NotAnImage(String),
    #[error("failed to read file: {0}")]
    FileRead(String),
    #[error("dom call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
