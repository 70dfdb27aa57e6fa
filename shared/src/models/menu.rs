//! Daily Menu Model
//!
//! A [`DailyMenu`] holds six fixed slots. Each slot is addressed through
//! [`MenuSlot`] and a dedicated accessor; there is no string-keyed access.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::validation::{MAX_NAME_LEN, check_price, check_required_text};

/// The six category slots of a daily menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MenuSlot {
    Appetizers,
    Soups,
    SideDishes,
    MainCourses,
    Drinks,
    Desserts,
}

impl MenuSlot {
    /// All slots in display order
    pub const ALL: [MenuSlot; 6] = [
        MenuSlot::Appetizers,
        MenuSlot::Soups,
        MenuSlot::SideDishes,
        MenuSlot::MainCourses,
        MenuSlot::Drinks,
        MenuSlot::Desserts,
    ];

    /// Persisted key, as in the `dailyMenu` JSON object
    pub fn key(&self) -> &'static str {
        match self {
            Self::Appetizers => "appetizers",
            Self::Soups => "soups",
            Self::SideDishes => "sideDishes",
            Self::MainCourses => "mainCourses",
            Self::Drinks => "drinks",
            Self::Desserts => "desserts",
        }
    }

    /// Heading shown to the operator
    pub fn label(&self) -> &'static str {
        match self {
            Self::Appetizers => "Entradas",
            Self::Soups => "Sopas",
            Self::SideDishes => "Guarniciones",
            Self::MainCourses => "Platos Principales",
            Self::Drinks => "Bebidas",
            Self::Desserts => "Postres",
        }
    }

    /// Catalog label that maps onto this slot
    pub fn catalog_label(&self) -> &'static str {
        match self {
            Self::Appetizers => "Entrada",
            Self::Soups => "Sopa",
            Self::SideDishes => "Guarnición",
            Self::MainCourses => "Plato fuerte",
            Self::Drinks => "Bebida",
            Self::Desserts => "Postre",
        }
    }

    /// Map a free-form catalog label onto a slot.
    ///
    /// Case-insensitive, surrounding whitespace ignored. Unknown labels have no slot.
    pub fn from_catalog_label(label: &str) -> Option<Self> {
        let label = label.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|slot| slot.catalog_label().to_lowercase() == label)
    }

    /// Only main courses carry the econoplatillo flag
    pub fn carries_econoplatillo(&self) -> bool {
        matches!(self, Self::MainCourses)
    }
}

impl fmt::Display for MenuSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error parsing a [`MenuSlot`] from its key
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown menu slot: {0}")]
pub struct UnknownMenuSlot(pub String);

impl FromStr for MenuSlot {
    type Err = UnknownMenuSlot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.key() == s)
            .ok_or_else(|| UnknownMenuSlot(s.to_string()))
    }
}

/// A dish snapshot placed into one daily menu slot
///
/// This is a copy taken when the item is added; later catalog edits never
/// reach it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    /// Present for main courses only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_econoplatillo: Option<bool>,
}

impl MenuItem {
    pub fn new(id: i64, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            is_econoplatillo: None,
        }
    }

    pub fn with_econoplatillo(mut self, flag: bool) -> Self {
        self.is_econoplatillo = Some(flag);
        self
    }

    /// Whether this item is flagged as a budget main course
    pub fn is_econoplatillo(&self) -> bool {
        self.is_econoplatillo.unwrap_or(false)
    }

    /// Whether the name and price would pass the item form.
    ///
    /// Used to screen values read back from storage.
    pub fn is_well_formed(&self) -> bool {
        check_required_text(Some(&self.name), MAX_NAME_LEN).is_ok()
            && check_price(Some(self.price)).is_ok()
    }

    /// Bring the flag in line with the slot the item lives in
    fn scope_to(&mut self, slot: MenuSlot) {
        self.is_econoplatillo = if slot.carries_econoplatillo() {
            Some(self.is_econoplatillo.unwrap_or(false))
        } else {
            None
        };
    }
}

/// Dated menu with six fixed category slots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMenu {
    date: NaiveDate,
    #[serde(default)]
    appetizers: Vec<MenuItem>,
    #[serde(default)]
    soups: Vec<MenuItem>,
    #[serde(default)]
    side_dishes: Vec<MenuItem>,
    #[serde(default)]
    main_courses: Vec<MenuItem>,
    #[serde(default)]
    drinks: Vec<MenuItem>,
    #[serde(default)]
    desserts: Vec<MenuItem>,
}

impl DailyMenu {
    /// Empty menu for the given date
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            appetizers: Vec::new(),
            soups: Vec::new(),
            side_dishes: Vec::new(),
            main_courses: Vec::new(),
            drinks: Vec::new(),
            desserts: Vec::new(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Date as `YYYY-MM-DD`
    pub fn date_iso(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn appetizers(&self) -> &[MenuItem] {
        &self.appetizers
    }

    pub fn soups(&self) -> &[MenuItem] {
        &self.soups
    }

    pub fn side_dishes(&self) -> &[MenuItem] {
        &self.side_dishes
    }

    pub fn main_courses(&self) -> &[MenuItem] {
        &self.main_courses
    }

    pub fn drinks(&self) -> &[MenuItem] {
        &self.drinks
    }

    pub fn desserts(&self) -> &[MenuItem] {
        &self.desserts
    }

    /// Items of one slot, in insertion order
    pub fn items(&self, slot: MenuSlot) -> &[MenuItem] {
        match slot {
            MenuSlot::Appetizers => self.appetizers(),
            MenuSlot::Soups => self.soups(),
            MenuSlot::SideDishes => self.side_dishes(),
            MenuSlot::MainCourses => self.main_courses(),
            MenuSlot::Drinks => self.drinks(),
            MenuSlot::Desserts => self.desserts(),
        }
    }

    fn items_mut(&mut self, slot: MenuSlot) -> &mut Vec<MenuItem> {
        match slot {
            MenuSlot::Appetizers => &mut self.appetizers,
            MenuSlot::Soups => &mut self.soups,
            MenuSlot::SideDishes => &mut self.side_dishes,
            MenuSlot::MainCourses => &mut self.main_courses,
            MenuSlot::Drinks => &mut self.drinks,
            MenuSlot::Desserts => &mut self.desserts,
        }
    }

    /// Append an item to a slot.
    ///
    /// Main courses always end up with a defined flag (default `false`);
    /// every other slot drops it.
    pub fn push(&mut self, slot: MenuSlot, mut item: MenuItem) {
        item.scope_to(slot);
        self.items_mut(slot).push(item);
    }

    /// Remove an item by id from a slot
    pub fn remove(&mut self, slot: MenuSlot, id: i64) -> Option<MenuItem> {
        let items = self.items_mut(slot);
        let pos = items.iter().position(|item| item.id == id)?;
        Some(items.remove(pos))
    }

    /// Find an item by id in a slot
    pub fn find(&self, slot: MenuSlot, id: i64) -> Option<&MenuItem> {
        self.items(slot).iter().find(|item| item.id == id)
    }

    /// Every item with its slot, in display order
    pub fn iter(&self) -> impl Iterator<Item = (MenuSlot, &MenuItem)> {
        MenuSlot::ALL
            .into_iter()
            .flat_map(move |slot| self.items(slot).iter().map(move |item| (slot, item)))
    }

    pub fn item_count(&self) -> usize {
        MenuSlot::ALL.iter().map(|slot| self.items(*slot).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }

    /// Clean up a menu read from storage.
    ///
    /// Drops items with a blank name or an out-of-range price and
    /// re-establishes the econoplatillo scoping on the rest. Returns the
    /// dropped items with their slot.
    pub fn normalize(&mut self) -> Vec<(MenuSlot, MenuItem)> {
        let mut dropped = Vec::new();
        for slot in MenuSlot::ALL {
            let items = self.items_mut(slot);
            let (kept, rejected): (Vec<_>, Vec<_>) =
                std::mem::take(items).into_iter().partition(MenuItem::is_well_formed);
            *items = kept;
            for item in items.iter_mut() {
                item.scope_to(slot);
            }
            dropped.extend(rejected.into_iter().map(|item| (slot, item)));
        }
        dropped
    }
}
