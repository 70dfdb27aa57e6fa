//! Customer Order Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::menu::MenuItem;

/// A customer's selected menu items plus notes and a derived running total
///
/// `total` always equals the sum of `items[*].price`. The order composer is
/// the only writer; consumers receive finished values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    /// Insertion order, duplicates allowed
    pub items: Vec<MenuItem>,
    pub total: Decimal,
    pub notes: String,
}

impl Order {
    /// Empty order
    pub fn new(id: i64) -> Self {
        Self {
            id,
            items: Vec::new(),
            total: Decimal::ZERO,
            notes: String::new(),
        }
    }

    /// Sum of line prices, recomputed from scratch
    pub fn computed_total(&self) -> Decimal {
        self.items.iter().map(|item| item.price).sum()
    }

    /// Whether the stored total matches the lines
    pub fn is_consistent(&self) -> bool {
        self.total == self.computed_total()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_order_is_empty_and_consistent() {
        let order = Order::new(1);
        assert!(order.is_empty());
        assert_eq!(order.total, Decimal::ZERO);
        assert!(order.is_consistent());
    }

    #[test]
    fn test_json_shape() {
        let mut order = Order::new(9);
        order.items.push(MenuItem::new(1, "Consomé", Decimal::new(3550, 2)));
        order.total = Decimal::new(3550, 2);
        order.notes = "sin cebolla".into();

        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["id"], 9);
        assert_eq!(value["total"].as_f64(), Some(35.5));
        assert_eq!(value["notes"], "sin cebolla");
        assert_eq!(value["items"][0]["name"], "Consomé");
    }

    #[test]
    fn test_inconsistent_total_detected() {
        let mut order = Order::new(1);
        order.items.push(MenuItem::new(1, "Flan", Decimal::from(25)));
        assert!(!order.is_consistent());
        order.total = Decimal::from(25);
        assert!(order.is_consistent());
    }
}
