//! Dish catalog
//!
//! Validated create/edit/delete over the persisted dish list. Every mutation
//! rewrites the whole `menuItems` value before the in-memory list changes.

mod filter;
mod manager;

pub use filter::CategoryFilter;
pub(crate) use filter::name_contains;
pub use manager::CatalogManager;

use shared::models::FieldErrors;
use shared::{AppError, ErrorCode};
use thiserror::Error;

use crate::store::StorageError;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// One message per invalid field; nothing was written
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Dish {0} not found")]
    NotFound(i64),

    /// The store rejected the write; the catalog is unchanged
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl CatalogError {
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            CatalogError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Validation(errors) => {
                let mut app = AppError::with_message(ErrorCode::ValidationFailed, errors.to_string());
                for (field, message) in errors.iter() {
                    app = app.with_detail(field.as_str(), message);
                }
                app
            }
            CatalogError::NotFound(id) => {
                AppError::new(ErrorCode::DishNotFound).with_detail("id", id)
            }
            CatalogError::Storage(e) => e.into(),
        }
    }
}
