//! Dish Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::validation::{
    MAX_CATEGORY_LEN, MAX_NAME_LEN, PriceIssue, TextIssue, check_price, check_required_text,
};

/// Catalog labels offered by the dish form, in display order
pub const CATALOG_CATEGORIES: [&str; 4] = ["Guarnición", "Plato fuerte", "Bebida", "Postre"];

/// Catalog entry usable across many daily menus
///
/// Persisted as one element of the `menuItems` JSON array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: i64,
    pub name: String,
    /// Price in pesos, serialized as a JSON number
    pub price: Decimal,
    /// Free-form catalog label, e.g. "Plato fuerte"
    pub category: String,
}

impl Dish {
    pub fn new(id: i64, input: DishInput) -> Self {
        Self {
            id,
            name: input.name,
            price: input.price,
            category: input.category,
        }
    }

    /// Whether the stored values would pass [`DishDraft::validate`]
    pub fn is_well_formed(&self) -> bool {
        self.to_draft().validate().is_ok()
    }

    /// Current values as an editable form
    pub fn to_draft(&self) -> DishDraft {
        DishDraft {
            name: Some(self.name.clone()),
            price: Some(self.price),
            category: Some(self.category.clone()),
        }
    }
}

/// A dish that passed validation and is ready to be stored
#[derive(Debug, Clone, PartialEq)]
pub struct DishInput {
    pub name: String,
    pub price: Decimal,
    pub category: String,
}

/// In-progress dish form
///
/// Fields stay optional until [`DishDraft::validate`] turns the draft into a
/// [`DishInput`] or a complete set of per-field messages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DishDraft {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<String>,
}

impl DishDraft {
    pub fn new(name: impl Into<String>, price: Decimal, category: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            price: Some(price),
            category: Some(category.into()),
        }
    }

    /// Apply a partial edit on top of this draft
    pub fn merge(mut self, patch: DishPatch) -> Self {
        if let Some(name) = patch.name {
            self.name = Some(name);
        }
        if let Some(price) = patch.price {
            self.price = Some(price);
        }
        if let Some(category) = patch.category {
            self.category = Some(category);
        }
        self
    }

    /// Validate every field, collecting one message per invalid field.
    pub fn validate(&self) -> Result<DishInput, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = match check_required_text(self.name.as_deref(), MAX_NAME_LEN) {
            Ok(name) => Some(name.to_string()),
            Err(TextIssue::Empty) => {
                errors.insert(DishField::Name, "El nombre es requerido");
                None
            }
            Err(TextIssue::TooLong { max, .. }) => {
                errors.insert(
                    DishField::Name,
                    format!("El nombre no puede tener más de {max} caracteres"),
                );
                None
            }
        };

        let price = match check_price(self.price) {
            Ok(price) => Some(price),
            Err(PriceIssue::Missing | PriceIssue::NotPositive) => {
                errors.insert(DishField::Price, "El precio debe ser mayor que 0");
                None
            }
            Err(PriceIssue::TooLarge) => {
                errors.insert(DishField::Price, "El precio excede el máximo permitido");
                None
            }
        };

        let category = match check_required_text(self.category.as_deref(), MAX_CATEGORY_LEN) {
            Ok(category) => Some(category.to_string()),
            Err(TextIssue::Empty) => {
                errors.insert(DishField::Category, "La categoría es requerida");
                None
            }
            Err(TextIssue::TooLong { max, .. }) => {
                errors.insert(
                    DishField::Category,
                    format!("La categoría no puede tener más de {max} caracteres"),
                );
                None
            }
        };

        match (name, price, category) {
            (Some(name), Some(price), Some(category)) => Ok(DishInput {
                name,
                price,
                category,
            }),
            _ => Err(errors),
        }
    }
}

/// Partial update payload for an existing dish
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DishPatch {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<String>,
}

/// Form fields that can fail validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DishField {
    Name,
    Price,
    Category,
}

impl DishField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Price => "price",
            Self::Category => "category",
        }
    }
}

impl fmt::Display for DishField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-keyed validation messages, one per invalid field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<DishField, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: DishField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: DishField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: DishField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DishField, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, msg) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {msg}")?;
            first = false;
        }
        Ok(())
    }
}

/// Starter catalog used when seeding an empty store
pub fn default_catalog() -> Vec<Dish> {
    const SEED: [(i64, &str, &str, i64); 34] = [
        (1, "Postre", "Gelatinas de varios sabores", 20),
        (2, "Postre", "Arroz con leche", 25),
        (3, "Bebida", "Agua fresca de horchata", 45),
        (4, "Guarnición", "Ensalada fresca con apio y zanahoria", 35),
        (5, "Guarnición", "Ensalada de verduras al vapor", 35),
        (6, "Guarnición", "Ensalada de manzana con zanahoria", 40),
        (7, "Guarnición", "Crema de champiñón", 45),
        (8, "Guarnición", "Sopa aguada de pasta (caracol)", 35),
        (9, "Guarnición", "Sopa de verduras", 45),
        (10, "Guarnición", "Caldillo de habas", 45),
        (11, "Guarnición", "Frijoles fritos", 45),
        (12, "Guarnición", "Arroz verde", 35),
        (13, "Guarnición", "Spaghetti con crema", 45),
        (14, "Plato fuerte", "Flautas de pollo", 88),
        (15, "Plato fuerte", "Pastel de carne", 88),
        (16, "Plato fuerte", "Costilla en pipián verde", 88),
        (17, "Plato fuerte", "Pollo horneado a la BBQ", 88),
        (18, "Plato fuerte", "Ensalada de surimi", 88),
        (19, "Plato fuerte", "Especial de pollo", 125),
        (20, "Postre", "Flan napolitano", 25),
        (21, "Postre", "Fruta de temporada", 25),
        (22, "Bebida", "Agua fresca de jamaica", 45),
        (23, "Bebida", "Agua fresca de limón con chía", 45),
        (24, "Guarnición", "Ensalada de atún", 40),
        (25, "Guarnición", "Ensalada de pollo", 40),
        (26, "Guarnición", "Sopa de tortilla", 45),
        (27, "Guarnición", "Consomé de pollo", 35),
        (28, "Guarnición", "Arroz rojo", 35),
        (29, "Guarnición", "Puré de papa", 45),
        (30, "Plato fuerte", "Bistec a la mexicana", 88),
        (31, "Plato fuerte", "Pechuga de pollo empanizada", 88),
        (32, "Plato fuerte", "Milanesa de res", 88),
        (33, "Plato fuerte", "Chuleta ahumada", 88),
        (34, "Plato fuerte", "Filete de pescado empanizado", 88),
    ];

    SEED.iter()
        .map(|&(id, category, name, price)| Dish {
            id,
            name: name.to_string(),
            price: Decimal::from(price),
            category: category.to_string(),
        })
        .collect()
}
