use rust_decimal::Decimal;
use shared::models::{DailyMenu, MenuItem, MenuSlot, Order};
use shared::util::snowflake_id;
use std::sync::Arc;

use super::{Fulfillment, OrderError};

/// Builds one customer order at a time against a published menu
///
/// The running total is adjusted on every add/remove and always equals the
/// exact sum of line prices.
pub struct OrderComposer {
    menu: Arc<DailyMenu>,
    order: Order,
    fulfillment: Arc<dyn Fulfillment>,
}

impl std::fmt::Debug for OrderComposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderComposer")
            .field("menu_date", &self.menu.date())
            .field("order", &self.order)
            .finish()
    }
}

impl OrderComposer {
    pub fn new(menu: Arc<DailyMenu>, fulfillment: Arc<dyn Fulfillment>) -> Self {
        Self {
            menu,
            order: Order::new(snowflake_id()),
            fulfillment,
        }
    }

    pub fn menu(&self) -> &DailyMenu {
        &self.menu
    }

    /// The order being composed
    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.order.items
    }

    pub fn total(&self) -> Decimal {
        self.order.total
    }

    pub fn notes(&self) -> &str {
        &self.order.notes
    }

    /// Append a line; the same item may appear several times.
    ///
    /// A total that would overflow is rejected and nothing changes.
    pub fn add_item(&mut self, item: &MenuItem) -> Result<&MenuItem, OrderError> {
        let total = self.order.total.checked_add(item.price).ok_or_else(|| {
            tracing::warn!(order_id = self.order.id, item = %item.name, price = %item.price, "Rejected line, total out of range");
            OrderError::TotalOverflow {
                total: self.order.total,
                price: item.price,
            }
        })?;
        self.order.items.push(item.clone());
        self.order.total = total;
        self.check_total();
        tracing::debug!(order_id = self.order.id, item = %item.name, total = %self.order.total, "Line added");
        Ok(&self.order.items[self.order.items.len() - 1])
    }

    /// Append the menu item with `id` from `slot`
    pub fn add_from_menu(&mut self, slot: MenuSlot, id: i64) -> Result<&MenuItem, OrderError> {
        let menu = Arc::clone(&self.menu);
        let item = menu.find(slot, id).ok_or(OrderError::NotOnMenu { slot, id })?;
        self.add_item(item)
    }

    /// Remove the line at `index`
    pub fn remove_item(&mut self, index: usize) -> Result<MenuItem, OrderError> {
        let len = self.order.items.len();
        if index >= len {
            tracing::warn!(order_id = self.order.id, index, len, "Rejected out-of-range line removal");
            return Err(OrderError::IndexOutOfBounds { index, len });
        }
        let price = self.order.items[index].price;
        let total = self.order.total.checked_sub(price).ok_or(OrderError::TotalOverflow {
            total: self.order.total,
            price,
        })?;
        let removed = self.order.items.remove(index);
        self.order.total = total;
        self.check_total();
        tracing::debug!(order_id = self.order.id, item = %removed.name, total = %self.order.total, "Line removed");
        Ok(removed)
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.order.notes = notes.into();
    }

    /// Whether the submit button is enabled
    pub fn can_submit(&self) -> bool {
        !self.order.is_empty()
    }

    /// Hand the order to fulfillment and start a new empty one.
    ///
    /// Empty orders are rejected and nothing changes.
    pub fn submit(&mut self) -> Result<Order, OrderError> {
        if !self.can_submit() {
            tracing::warn!(order_id = self.order.id, "Rejected empty order submission");
            return Err(OrderError::EmptyOrder);
        }

        let next = Order::new(self.fresh_id());
        let submitted = std::mem::replace(&mut self.order, next);
        tracing::info!(order_id = submitted.id, items = submitted.items.len(), total = %submitted.total, "Submitting order");
        self.fulfillment.fulfill(submitted.clone());
        Ok(submitted)
    }

    fn fresh_id(&self) -> i64 {
        loop {
            let id = snowflake_id();
            if id != self.order.id {
                return id;
            }
        }
    }

    #[inline]
    fn check_total(&self) {
        debug_assert!(
            self.order.is_consistent(),
            "order total {} drifted from line sum {}",
            self.order.total,
            self.order.computed_total()
        );
    }
}
