//! Error types for snapshot computation

use thiserror::Error;

/// Errors raised while computing a form snapshot
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFormError {
    /// A control's kind is none of text-like, checkbox, radio, select or textarea.
    /// Aborts the whole computation; no partial snapshot is returned.
    #[error("unsupported control kind `{kind}` (control `{name}`)")]
    UnsupportedControlKind { kind: String, name: String },
}

impl FetchFormError {
    /// Label of the offending control kind
    pub fn kind(&self) -> &str {
        match self {
            FetchFormError::UnsupportedControlKind { kind, .. } => kind,
        }
    }
}
