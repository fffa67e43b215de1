//! Failures reported by browser collaborators.
//!
//! TRADE-OFFS
//! ==========
//! None of these ever reach the UI. Callers log them and fall back to a fixed
//! default, so the type only exists to give those log lines a shape.

/// Error raised when a browser facility is missing or refuses a call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvError {
    /// No `window` (server rendering or a non-browser host).
    #[error("no browser window available")]
    NoWindow,

    /// `localStorage` is disabled or threw on access.
    #[error("storage unavailable: {0}")]
    Storage(String),

    /// The `prefers-color-scheme` media query could not be evaluated.
    #[error("media query failed: {0}")]
    MediaQuery(String),

    /// The document root element could not be updated.
    #[error("document root unavailable")]
    DocumentRoot,

    /// An `IntersectionObserver` could not be created.
    #[error("intersection observer failed: {0}")]
    Observer(String),
}

#[cfg(feature = "hydrate")]
impl EnvError {
    /// Render a thrown JS value into a message for logging.
    pub(crate) fn js_message(value: &wasm_bindgen::JsValue) -> String {
        value.as_string().unwrap_or_else(|| format!("{value:?}"))
    }
}
