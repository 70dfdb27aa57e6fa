//! Unified error codes for the Fonda workspace
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 6xxx: Dish and daily menu errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so a presentation layer
/// written in any language can switch on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 4xxx: Order ====================
    /// Order is empty
    OrderEmpty = 4007,
    /// Order line index is out of bounds
    OrderItemOutOfBounds = 4008,
    /// Item is not part of the published menu
    ItemNotOnMenu = 4009,
    /// No daily menu has been saved yet
    NoActiveMenu = 4010,
    /// Order total would leave the representable range
    OrderTotalOverflow = 4011,

    // ==================== 6xxx: Dish / Menu ====================
    /// Dish not found
    DishNotFound = 6001,
    /// Dish price is invalid
    DishInvalidPrice = 6002,
    /// Dish name is missing
    DishNameRequired = 6003,
    /// Dish category is missing
    DishCategoryRequired = 6004,
    /// Menu slot was not chosen
    MenuSlotRequired = 6101,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,

    // ==================== 94xx: Storage ====================
    /// Storage is full
    StorageFull = 9401,
    /// Stored data is corrupted
    StorageCorrupted = 9403,
    /// Store rejected the write
    StorageWriteFailed = 9405,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Order
            ErrorCode::OrderEmpty => "Order is empty",
            ErrorCode::OrderItemOutOfBounds => "Order item index is out of bounds",
            ErrorCode::ItemNotOnMenu => "Item is not on the published menu",
            ErrorCode::NoActiveMenu => "No daily menu has been saved",
            ErrorCode::OrderTotalOverflow => "Order total is out of range",

            // Dish / Menu
            ErrorCode::DishNotFound => "Dish not found",
            ErrorCode::DishInvalidPrice => "Price must be greater than zero",
            ErrorCode::DishNameRequired => "Dish name is required",
            ErrorCode::DishCategoryRequired => "Dish category is required",
            ErrorCode::MenuSlotRequired => "Menu category is required",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",

            // Storage
            ErrorCode::StorageFull => "Storage is full",
            ErrorCode::StorageCorrupted => "Stored data is corrupted",
            ErrorCode::StorageWriteFailed => "Could not write to storage",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Order
            4007 => Ok(ErrorCode::OrderEmpty),
            4008 => Ok(ErrorCode::OrderItemOutOfBounds),
            4009 => Ok(ErrorCode::ItemNotOnMenu),
            4010 => Ok(ErrorCode::NoActiveMenu),
            4011 => Ok(ErrorCode::OrderTotalOverflow),

            // Dish / Menu
            6001 => Ok(ErrorCode::DishNotFound),
            6002 => Ok(ErrorCode::DishInvalidPrice),
            6003 => Ok(ErrorCode::DishNameRequired),
            6004 => Ok(ErrorCode::DishCategoryRequired),
            6101 => Ok(ErrorCode::MenuSlotRequired),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),

            // Storage
            9401 => Ok(ErrorCode::StorageFull),
            9403 => Ok(ErrorCode::StorageCorrupted),
            9405 => Ok(ErrorCode::StorageWriteFailed),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}
