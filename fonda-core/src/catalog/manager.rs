use shared::models::{Dish, DishDraft, DishPatch, default_catalog};
use shared::util::snowflake_id;
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use super::{CatalogError, CategoryFilter};
use crate::notify::{Notice, Notifier};
use crate::store::{CATALOG_KEY, KvStore, StorageResult, load_json, save_json};

const DEFAULT_NOTICE_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy)]
enum DishAction {
    Add,
    Edit,
    Remove,
}

impl DishAction {
    fn success_notice(self, duration: Duration) -> Notice {
        let (title, message) = match self {
            DishAction::Add => (
                "Platillo agregado",
                "El platillo se ha agregado exitosamente.",
            ),
            DishAction::Edit => (
                "Platillo actualizado",
                "El platillo se ha actualizado exitosamente.",
            ),
            DishAction::Remove => (
                "Platillo eliminado",
                "El platillo se ha eliminado exitosamente.",
            ),
        };
        Notice::success(title, message, duration)
    }

    fn failure_notice(self, duration: Duration) -> Notice {
        let verb = match self {
            DishAction::Add => "agregar",
            DishAction::Edit => "actualizar",
            DishAction::Remove => "eliminar",
        };
        Notice::error(
            "Error",
            format!("No se pudo {verb} el platillo. Por favor, intente de nuevo."),
            duration,
        )
    }
}

/// Owner of the in-memory dish list
///
/// The list mirrors the `menuItems` value exactly: a mutation is first
/// written in full, and only a successful write replaces the cached list.
pub struct CatalogManager {
    store: Arc<dyn KvStore>,
    notifier: Arc<dyn Notifier>,
    notice_duration: Duration,
    dishes: Vec<Dish>,
}

impl std::fmt::Debug for CatalogManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogManager")
            .field("dishes", &self.dishes.len())
            .field("notice_duration", &self.notice_duration)
            .finish()
    }
}

impl CatalogManager {
    /// Read the catalog once from the store.
    ///
    /// A missing or malformed value yields an empty catalog. Stored dishes
    /// that no longer pass validation are skipped. Read failures are returned.
    pub fn load(store: Arc<dyn KvStore>, notifier: Arc<dyn Notifier>) -> StorageResult<Self> {
        let stored: Vec<Dish> = load_json(store.as_ref(), CATALOG_KEY)?.unwrap_or_default();
        let mut dishes = Vec::with_capacity(stored.len());
        for dish in stored {
            if dish.is_well_formed() {
                dishes.push(dish);
            } else {
                tracing::warn!(id = dish.id, name = %dish.name, price = %dish.price, "Skipping invalid stored dish");
            }
        }
        tracing::info!(count = dishes.len(), "Catalog loaded");
        Ok(Self {
            store,
            notifier,
            notice_duration: DEFAULT_NOTICE_DURATION,
            dishes,
        })
    }

    pub fn with_notice_duration(mut self, duration: Duration) -> Self {
        self.notice_duration = duration;
        self
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn get(&self, id: i64) -> Option<&Dish> {
        self.dishes.iter().find(|d| d.id == id)
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    /// Dishes passing `filter` whose name contains `search`, in catalog order
    pub fn list(&self, filter: &CategoryFilter, search: &str) -> Vec<&Dish> {
        self.dishes
            .iter()
            .filter(|dish| filter.matches(dish, search))
            .collect()
    }

    /// Distinct catalog labels in use, sorted
    pub fn categories(&self) -> Vec<&str> {
        self.dishes
            .iter()
            .map(|d| d.category.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Validate and append a new dish
    pub fn add(&mut self, draft: &DishDraft) -> Result<Dish, CatalogError> {
        let input = draft.validate().map_err(|errors| {
            tracing::debug!(%errors, "Dish rejected");
            CatalogError::Validation(errors)
        })?;

        let dish = Dish::new(self.fresh_id(), input);
        let mut next = self.dishes.clone();
        next.push(dish.clone());

        self.commit(DishAction::Add, next)?;
        tracing::info!(id = dish.id, name = %dish.name, "Dish added");
        Ok(dish)
    }

    /// Apply `patch` to an existing dish, keeping its id
    pub fn edit(&mut self, id: i64, patch: DishPatch) -> Result<Dish, CatalogError> {
        let pos = self
            .dishes
            .iter()
            .position(|d| d.id == id)
            .ok_or(CatalogError::NotFound(id))?;

        let input = self.dishes[pos]
            .to_draft()
            .merge(patch)
            .validate()
            .map_err(CatalogError::Validation)?;

        let dish = Dish::new(id, input);
        let mut next = self.dishes.clone();
        next[pos] = dish.clone();

        self.commit(DishAction::Edit, next)?;
        tracing::info!(id, name = %dish.name, "Dish updated");
        Ok(dish)
    }

    /// Remove a dish by id.
    ///
    /// Unknown ids are not an error; the catalog is still written back.
    pub fn remove(&mut self, id: i64) -> Result<Option<Dish>, CatalogError> {
        let mut next = self.dishes.clone();
        let removed = next
            .iter()
            .position(|d| d.id == id)
            .map(|pos| next.remove(pos));

        self.commit(DishAction::Remove, next)?;
        match &removed {
            Some(dish) => tracing::info!(id, name = %dish.name, "Dish removed"),
            None => tracing::debug!(id, "Remove of unknown dish"),
        }
        Ok(removed)
    }

    /// Fill an empty catalog with the default dish list.
    ///
    /// Returns the number of dishes written (0 if the catalog already had
    /// entries).
    pub fn seed_defaults(&mut self) -> Result<usize, CatalogError> {
        if !self.dishes.is_empty() {
            return Ok(0);
        }
        let seed = default_catalog();
        save_json(self.store.as_ref(), CATALOG_KEY, &seed)?;
        let count = seed.len();
        self.dishes = seed;
        tracing::info!(count, "Catalog seeded with default dishes");
        Ok(count)
    }

    /// Persist `next`, then adopt it and report the outcome
    fn commit(&mut self, action: DishAction, next: Vec<Dish>) -> Result<(), CatalogError> {
        if let Err(e) = save_json(self.store.as_ref(), CATALOG_KEY, &next) {
            tracing::error!(?action, error = %e, "Failed to persist catalog");
            self.notifier.notify(action.failure_notice(self.notice_duration));
            return Err(e.into());
        }
        self.dishes = next;
        self.notifier.notify(action.success_notice(self.notice_duration));
        Ok(())
    }

    fn fresh_id(&self) -> i64 {
        loop {
            let id = snowflake_id();
            if self.get(id).is_none() {
                return id;
            }
        }
    }
}
