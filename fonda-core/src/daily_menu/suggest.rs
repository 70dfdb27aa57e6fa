use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::{Dish, MenuSlot};

use crate::catalog::name_contains;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SuggestionSource {
    /// A stored catalog dish
    Catalog,
    /// Typed into the menu editor this session; never written to the catalog
    AdHoc,
}

/// Autocomplete candidate for the item name field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub name: String,
    pub price: Decimal,
    pub slot: Option<MenuSlot>,
    pub source: SuggestionSource,
}

impl Suggestion {
    pub fn from_dish(dish: &Dish) -> Self {
        Self {
            name: dish.name.clone(),
            price: dish.price,
            slot: MenuSlot::from_catalog_label(&dish.category),
            source: SuggestionSource::Catalog,
        }
    }

    pub(crate) fn describes(&self, name: &str, slot: MenuSlot) -> bool {
        self.slot == Some(slot) && same_name(&self.name, name)
    }
}

fn same_name(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// First `limit` candidates whose name contains `query`
pub(crate) fn matching<'a>(
    candidates: impl Iterator<Item = &'a Suggestion>,
    query: &str,
    limit: usize,
) -> Vec<Suggestion> {
    let query = query.trim();
    candidates
        .filter(|s| name_contains(&s.name, query))
        .take(limit)
        .cloned()
        .collect()
}
