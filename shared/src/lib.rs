//! Shared types for Fonda
//!
//! Data model (dishes, daily menus, orders), the unified error-code system,
//! validation limits and id helpers used by `fonda-core` and by any
//! presentation layer that renders its results.

pub mod error;
pub mod models;
pub mod util;
pub mod validation;

// Re-exports
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
