use parking_lot::Mutex;
use shared::models::Order;

/// Receiver of submitted orders
///
/// Fire and forget: there is no acknowledgement and no retry.
pub trait Fulfillment: Send + Sync {
    fn fulfill(&self, order: Order);
}

/// Logs each order
#[derive(Debug, Default, Clone, Copy)]
pub struct LogFulfillment;

impl Fulfillment for LogFulfillment {
    fn fulfill(&self, order: Order) {
        let lines: Vec<String> = order
            .items
            .iter()
            .map(|item| format!("{} {}", item.name, crate::order_money::format_price(item.price)))
            .collect();
        tracing::info!(
            order_id = order.id,
            items = order.items.len(),
            total = %crate::order_money::format_price(order.total),
            notes = %order.notes,
            lines = ?lines,
            "Order submitted"
        );
    }
}

/// Collects orders in memory
#[derive(Debug, Default)]
pub struct MemoryFulfillment {
    orders: Mutex<Vec<Order>>,
}

impl MemoryFulfillment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orders(&self) -> Vec<Order> {
        self.orders.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.orders.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.lock().is_empty()
    }
}

impl Fulfillment for MemoryFulfillment {
    fn fulfill(&self, order: Order) {
        self.orders.lock().push(order);
    }
}
