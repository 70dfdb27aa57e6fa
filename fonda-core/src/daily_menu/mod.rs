//! Daily menu composition
//!
//! The builder owns the one draft menu of a session and writes it through to
//! the `dailyMenu` key on every change, so a restart picks up where the
//! operator left off.

mod builder;
mod draft;
mod suggest;

pub use builder::MenuBuilder;
pub use draft::{MenuItemDraft, NewMenuItem};
pub use suggest::{Suggestion, SuggestionSource};

use shared::{AppError, ErrorCode};
use thiserror::Error;

use crate::store::StorageError;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Menu slot is required")]
    MissingSlot,

    #[error("Item name is required")]
    MissingName,

    #[error("Item name exceeds {max} characters")]
    NameTooLong { max: usize },

    #[error("Item price must be greater than 0")]
    InvalidPrice,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<MenuError> for AppError {
    fn from(err: MenuError) -> Self {
        match err {
            MenuError::MissingSlot => AppError::with_message(ErrorCode::MenuSlotRequired, err.to_string()),
            MenuError::MissingName => AppError::with_message(ErrorCode::DishNameRequired, err.to_string()),
            MenuError::NameTooLong { max } => {
                AppError::with_message(ErrorCode::ValueOutOfRange, err.to_string()).with_detail("max", max)
            }
            MenuError::InvalidPrice => AppError::with_message(ErrorCode::DishInvalidPrice, err.to_string()),
            MenuError::Storage(e) => e.into(),
        }
    }
}
