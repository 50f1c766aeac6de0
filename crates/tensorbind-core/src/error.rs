//! Error types for the core data model.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unsupported element kind '{tag}' (expected one of {known:?})")]
    UnsupportedElementKind { tag: String, known: &'static [&'static str] },
}

impl CoreError {
    pub fn unsupported_kind(tag: impl Into<String>) -> Self {
        CoreError::UnsupportedElementKind {
            tag: tag.into(),
            known: crate::ElementKind::NAMES,
        }
    }
}
