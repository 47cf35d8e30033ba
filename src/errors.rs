//! Error types
//!
//! Nothing here ever reaches page code: copy failures become a "Copy failed"
//! label and setup failures are logged from `main`.

use std::fmt;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum PromoError {
    /// `window` is not available (not running in a browser)
    NoWindow,
    /// `window.document` is not available
    NoDocument,
    /// The document has no `<body>` to host the fallback textarea
    NoBody,
    /// The async clipboard promise rejected (permission denied, not focused, ...)
    ClipboardRejected(String),
    /// `document.execCommand("copy")` reported failure
    CopyCommandFailed,
    /// Any other exception thrown by a browser API
    Js(String),
}

impl fmt::Display for PromoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "No window"),
            Self::NoDocument => write!(f, "No document"),
            Self::NoBody => write!(f, "Document has no body"),
            Self::ClipboardRejected(msg) => write!(f, "Clipboard write rejected: {}", msg),
            Self::CopyCommandFailed => write!(f, "execCommand(\"copy\") failed"),
            Self::Js(msg) => write!(f, "JavaScript error: {}", msg),
        }
    }
}

impl std::error::Error for PromoError {}

impl From<JsValue> for PromoError {
    fn from(value: JsValue) -> Self {
        Self::Js(describe_js(&value))
    }
}

impl PromoError {
    pub fn clipboard_rejected(value: JsValue) -> Self {
        Self::ClipboardRejected(describe_js(&value))
    }
}

/// Best-effort message for a thrown JS value
pub fn describe_js(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

pub type PromoResult<T> = Result<T, PromoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(PromoError::NoWindow.to_string(), "No window");
        assert_eq!(
            PromoError::ClipboardRejected("NotAllowedError".into()).to_string(),
            "Clipboard write rejected: NotAllowedError"
        );
        assert_eq!(
            PromoError::CopyCommandFailed.to_string(),
            "execCommand(\"copy\") failed"
        );
    }
}
