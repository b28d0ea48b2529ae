use shared::{
    domain::ItemId,
    error::{ErrorCategory, ErrorCode},
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("Please enter both element type and text")]
    MissingElementFields,
    #[error("Invalid element type. Please try something like \"div\", \"p\", \"span\"")]
    InvalidElementType(String),
    #[error("no list item with id {0}")]
    UnknownItem(ItemId),
    #[error("unknown theme '{0}', expected light or dark")]
    UnknownTheme(String),
}

impl ErrorCategory for PageError {
    fn code(&self) -> ErrorCode {
        match self {
            Self::UnknownItem(_) => ErrorCode::NotFound,
            _ => ErrorCode::Validation,
        }
    }
}
