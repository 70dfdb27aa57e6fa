//! Customer orders against a published menu

mod composer;
mod fulfillment;

pub use composer::OrderComposer;
pub use fulfillment::{Fulfillment, LogFulfillment, MemoryFulfillment};

use rust_decimal::Decimal;
use shared::models::MenuSlot;
use shared::{AppError, ErrorCode};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("Line {index} out of bounds (order has {len} items)")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Item {id} is not on today's {slot} list")]
    NotOnMenu { slot: MenuSlot, id: i64 },

    #[error("Cannot submit an empty order")]
    EmptyOrder,

    #[error("Adding {price} to a total of {total} is out of range")]
    TotalOverflow { total: Decimal, price: Decimal },
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        let message = err.to_string();
        match err {
            OrderError::IndexOutOfBounds { index, len } => {
                AppError::with_message(ErrorCode::OrderItemOutOfBounds, message)
                    .with_detail("index", index)
                    .with_detail("len", len)
            }
            OrderError::NotOnMenu { slot, id } => {
                AppError::with_message(ErrorCode::ItemNotOnMenu, message)
                    .with_detail("slot", slot.key())
                    .with_detail("id", id)
            }
            OrderError::EmptyOrder => AppError::with_message(ErrorCode::OrderEmpty, message),
            OrderError::TotalOverflow { total, price } => {
                AppError::with_message(ErrorCode::OrderTotalOverflow, message)
                    .with_detail("total", total.to_string())
                    .with_detail("price", price.to_string())
            }
        }
    }
}
