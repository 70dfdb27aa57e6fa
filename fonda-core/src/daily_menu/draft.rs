use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::MenuSlot;
use shared::validation::{MAX_NAME_LEN, TextIssue, check_price, check_required_text};

use super::{MenuError, Suggestion};

/// Item about to be placed into a slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMenuItem {
    pub name: String,
    pub price: Decimal,
    /// Only honored for main courses
    #[serde(default)]
    pub is_econoplatillo: Option<bool>,
}

impl NewMenuItem {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
            is_econoplatillo: None,
        }
    }

    pub fn econoplatillo(mut self, flag: bool) -> Self {
        self.is_econoplatillo = Some(flag);
        self
    }

    /// Trimmed name and checked price
    pub(crate) fn checked(&self) -> Result<(String, Decimal), MenuError> {
        let name = match check_required_text(Some(&self.name), MAX_NAME_LEN) {
            Ok(name) => name.to_string(),
            Err(TextIssue::Empty) => return Err(MenuError::MissingName),
            Err(TextIssue::TooLong { max, .. }) => return Err(MenuError::NameTooLong { max }),
        };
        let price = check_price(Some(self.price)).map_err(|_| MenuError::InvalidPrice)?;
        Ok((name, price))
    }
}

/// The "add item" form of the menu editor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemDraft {
    pub slot: Option<MenuSlot>,
    pub name: String,
    pub price: Option<Decimal>,
    pub is_econoplatillo: bool,
}

impl MenuItemDraft {
    /// Whether the add button is enabled
    pub fn can_submit(&self) -> bool {
        self.validate().is_ok()
    }

    /// Take name and price from a picked suggestion.
    ///
    /// The slot follows the suggestion when its catalog label maps to one.
    pub fn select(&mut self, suggestion: &Suggestion) {
        self.name = suggestion.name.clone();
        self.price = Some(suggestion.price);
        if let Some(slot) = suggestion.slot {
            self.slot = Some(slot);
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn validate(&self) -> Result<(MenuSlot, NewMenuItem), MenuError> {
        let slot = self.slot.ok_or(MenuError::MissingSlot)?;
        let price = self.price.ok_or(MenuError::InvalidPrice)?;
        let item = NewMenuItem {
            name: self.name.clone(),
            price,
            is_econoplatillo: slot.carries_econoplatillo().then_some(self.is_econoplatillo),
        };
        item.checked()?;
        Ok((slot, item))
    }
}
