use serde::{Deserialize, Serialize};
use shared::models::Dish;

/// Category selector of the catalog list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type", content = "value")]
pub enum CategoryFilter {
    #[default]
    All,
    /// Exact catalog label
    Category(String),
}

impl CategoryFilter {
    pub fn category(label: impl Into<String>) -> Self {
        CategoryFilter::Category(label.into())
    }

    /// Whether `dish` passes both the category and the name search.
    ///
    /// Empty `search` matches every name.
    pub fn matches(&self, dish: &Dish, search: &str) -> bool {
        let in_category = match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(label) => dish.category == *label,
        };
        in_category && name_contains(&dish.name, search)
    }
}

/// Case-insensitive substring match
pub(crate) fn name_contains(name: &str, query: &str) -> bool {
    query.is_empty() || name.to_lowercase().contains(&query.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn dish(name: &str, category: &str) -> Dish {
        Dish {
            id: 1,
            name: name.into(),
            price: Decimal::from(20),
            category: category.into(),
        }
    }

    #[test]
    fn test_all_with_empty_search_matches() {
        assert!(CategoryFilter::All.matches(&dish("Flan napolitano", "Postre"), ""));
    }

    #[test]
    fn test_category_is_exact() {
        let filter = CategoryFilter::category("Postre");
        assert!(filter.matches(&dish("Flan napolitano", "Postre"), ""));
        assert!(!filter.matches(&dish("Flan napolitano", "postre"), ""));
        assert!(!filter.matches(&dish("Agua de jamaica", "Bebida"), ""));
    }

    #[test]
    fn test_search_ignores_case() {
        let d = dish("Chiles en NOGADA", "Plato fuerte");
        assert!(CategoryFilter::All.matches(&d, "nogada"));
        assert!(CategoryFilter::All.matches(&d, "CHILES"));
        assert!(!CategoryFilter::All.matches(&d, "mole"));
    }

    #[test]
    fn test_search_handles_accents() {
        let d = dish("Plátanos fritos", "Guarnición");
        assert!(CategoryFilter::category("Guarnición").matches(&d, "PLÁTANOS"));
    }
}
