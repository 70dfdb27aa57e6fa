use chrono::NaiveDate;
use shared::models::{DailyMenu, Dish, MenuItem, MenuSlot};
use shared::util::{snowflake_id, today};
use std::sync::Arc;

use super::suggest::matching;
use super::{MenuError, MenuItemDraft, NewMenuItem, Suggestion, SuggestionSource};
use crate::core::Config;
use crate::store::{CATALOG_KEY, DAILY_MENU_KEY, KvStore, StorageResult, load_json, save_json};

/// Owner of the session's draft menu
pub struct MenuBuilder {
    store: Arc<dyn KvStore>,
    draft: DailyMenu,
    /// Catalog view for suggestions
    catalog: Vec<Suggestion>,
    /// Items typed in this session that the catalog does not know
    ad_hoc: Vec<Suggestion>,
    suggestion_limit: usize,
}

impl std::fmt::Debug for MenuBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuBuilder")
            .field("draft", &self.draft)
            .field("catalog", &self.catalog.len())
            .field("ad_hoc", &self.ad_hoc.len())
            .finish()
    }
}

impl MenuBuilder {
    /// Restore the persisted draft, or start an empty one dated today.
    ///
    /// Nothing is written here, so an existing draft is never clobbered.
    pub fn load(store: Arc<dyn KvStore>, config: &Config) -> StorageResult<Self> {
        let draft = match load_json::<DailyMenu>(store.as_ref(), DAILY_MENU_KEY)? {
            Some(mut menu) => {
                for (slot, item) in menu.normalize() {
                    tracing::warn!(slot = %slot.key(), id = item.id, name = %item.name, price = %item.price, "Dropping invalid stored menu item");
                }
                tracing::info!(date = %menu.date_iso(), items = menu.item_count(), "Draft menu restored");
                menu
            }
            None => {
                let menu = DailyMenu::new(today());
                tracing::info!(date = %menu.date_iso(), "Starting empty draft menu");
                menu
            }
        };

        let mut builder = Self {
            store,
            draft,
            catalog: Vec::new(),
            ad_hoc: Vec::new(),
            suggestion_limit: config.suggestion_limit,
        };
        builder.reload_catalog()?;
        Ok(builder)
    }

    pub fn draft(&self) -> &DailyMenu {
        &self.draft
    }

    /// Re-read the catalog used for suggestions
    pub fn reload_catalog(&mut self) -> StorageResult<()> {
        let dishes: Vec<Dish> = load_json(self.store.as_ref(), CATALOG_KEY)?.unwrap_or_default();
        self.catalog = dishes
            .iter()
            .filter(|dish| dish.is_well_formed())
            .map(Suggestion::from_dish)
            .collect();
        // Items the catalog now knows are no longer ad hoc
        let catalog = &self.catalog;
        self.ad_hoc.retain(|candidate| {
            !catalog
                .iter()
                .any(|known| candidate.slot.is_some_and(|slot| known.describes(&candidate.name, slot)))
        });
        Ok(())
    }

    /// Validate and append an item to `slot`.
    ///
    /// The item gets a fresh id and, outside main courses, no econoplatillo
    /// flag. The draft changes only after the write succeeds.
    pub fn add_item(&mut self, slot: MenuSlot, item: NewMenuItem) -> Result<MenuItem, MenuError> {
        let (name, price) = item.checked()?;

        let mut added = MenuItem::new(self.fresh_id(), name, price);
        if slot.carries_econoplatillo() {
            added = added.with_econoplatillo(item.is_econoplatillo.unwrap_or(false));
        }

        let mut next = self.draft.clone();
        next.push(slot, added.clone());
        self.commit(next)?;

        tracing::info!(slot = %slot.key(), id = added.id, name = %added.name, "Menu item added");
        self.register_candidate(slot, &added);
        Ok(added)
    }

    /// Submit the editor form
    pub fn add_draft(&mut self, form: &MenuItemDraft) -> Result<MenuItem, MenuError> {
        let (slot, item) = form.validate()?;
        self.add_item(slot, item)
    }

    /// Place a snapshot of a catalog dish into `slot`
    pub fn add_dish(
        &mut self,
        slot: MenuSlot,
        dish: &Dish,
        is_econoplatillo: Option<bool>,
    ) -> Result<MenuItem, MenuError> {
        self.add_item(
            slot,
            NewMenuItem {
                name: dish.name.clone(),
                price: dish.price,
                is_econoplatillo,
            },
        )
    }

    /// Take an item out of the draft; unknown ids change nothing
    pub fn remove_item(&mut self, slot: MenuSlot, id: i64) -> Result<Option<MenuItem>, MenuError> {
        if self.draft.find(slot, id).is_none() {
            return Ok(None);
        }
        let mut next = self.draft.clone();
        let removed = next.remove(slot, id);
        self.commit(next)?;
        tracing::info!(slot = %slot.key(), id, "Menu item removed");
        Ok(removed)
    }

    /// Replace the draft with an empty menu for `date`
    pub fn reset(&mut self, date: NaiveDate) -> Result<(), MenuError> {
        self.commit(DailyMenu::new(date))?;
        tracing::info!(date = %self.draft.date_iso(), "Draft menu reset");
        Ok(())
    }

    /// Publish a copy of the draft.
    ///
    /// Later edits of the draft do not reach the returned menu.
    pub fn finalize(&self) -> Arc<DailyMenu> {
        tracing::info!(date = %self.draft.date_iso(), items = self.draft.item_count(), "Menu finalized");
        Arc::new(self.draft.clone())
    }

    /// Names containing `query` (case-insensitive), catalog first
    pub fn suggest(&self, query: &str) -> Vec<Suggestion> {
        matching(
            self.catalog.iter().chain(self.ad_hoc.iter()),
            query,
            self.suggestion_limit,
        )
    }

    /// Ad hoc items gathered this session
    pub fn ad_hoc_candidates(&self) -> &[Suggestion] {
        &self.ad_hoc
    }

    fn commit(&mut self, next: DailyMenu) -> Result<(), MenuError> {
        if let Err(e) = save_json(self.store.as_ref(), DAILY_MENU_KEY, &next) {
            tracing::error!(error = %e, "Failed to persist draft menu");
            return Err(e.into());
        }
        self.draft = next;
        Ok(())
    }

    fn register_candidate(&mut self, slot: MenuSlot, item: &MenuItem) {
        let known = self
            .catalog
            .iter()
            .chain(self.ad_hoc.iter())
            .any(|s| s.describes(&item.name, slot));
        if known {
            return;
        }
        tracing::debug!(slot = %slot.key(), name = %item.name, "New ad hoc suggestion");
        self.ad_hoc.push(Suggestion {
            name: item.name.clone(),
            price: item.price,
            slot: Some(slot),
            source: SuggestionSource::AdHoc,
        });
    }

    fn fresh_id(&self) -> i64 {
        loop {
            let id = snowflake_id();
            if !self.draft.iter().any(|(_, item)| item.id == id) {
                return id;
            }
        }
    }
}
