use shared::models::DailyMenu;
use shared::{AppError, AppResult, ErrorCode};
use std::sync::Arc;

use crate::catalog::CatalogManager;
use crate::core::Config;
use crate::daily_menu::MenuBuilder;
use crate::notify::{Notifier, TracingNotifier};
use crate::orders::{Fulfillment, LogFulfillment, OrderComposer};
use crate::store::{KvStore, RedbStore};

/// Everything one operator session works with
///
/// Created at session start and dropped at session end. The catalog and the
/// draft menu are restored from the store; the order tab only opens after a
/// menu has been saved.
pub struct Session {
    config: Config,
    store: Arc<dyn KvStore>,
    fulfillment: Arc<dyn Fulfillment>,
    catalog: CatalogManager,
    menu_builder: MenuBuilder,
    active_menu: Option<Arc<DailyMenu>>,
    order: Option<OrderComposer>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .field("catalog", &self.catalog)
            .field("menu_builder", &self.menu_builder)
            .field("active_menu", &self.active_menu.as_ref().map(|m| m.date()))
            .finish()
    }
}

impl Session {
    /// Open the configured store and load the session with the default
    /// notifier and fulfillment
    pub fn open(config: &Config) -> AppResult<Self> {
        let store: Arc<dyn KvStore> = match &config.db_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "Opening store");
                Arc::new(RedbStore::open(path)?)
            }
            None => {
                tracing::info!("Opening in-memory store");
                Arc::new(RedbStore::open_in_memory()?)
            }
        };
        Self::with_parts(
            config.clone(),
            store,
            Arc::new(TracingNotifier),
            Arc::new(LogFulfillment),
        )
    }

    /// Build a session from explicit collaborators
    pub fn with_parts(
        config: Config,
        store: Arc<dyn KvStore>,
        notifier: Arc<dyn Notifier>,
        fulfillment: Arc<dyn Fulfillment>,
    ) -> AppResult<Self> {
        let mut catalog = CatalogManager::load(Arc::clone(&store), notifier)?
            .with_notice_duration(config.notice_duration());
        if config.seed_catalog {
            catalog.seed_defaults()?;
        }
        // After seeding so suggestions include the defaults
        let menu_builder = MenuBuilder::load(Arc::clone(&store), &config)?;

        Ok(Self {
            config,
            store,
            fulfillment,
            catalog,
            menu_builder,
            active_menu: None,
            order: None,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn KvStore> {
        &self.store
    }

    pub fn catalog(&self) -> &CatalogManager {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut CatalogManager {
        &mut self.catalog
    }

    pub fn menu_builder(&self) -> &MenuBuilder {
        &self.menu_builder
    }

    pub fn menu_builder_mut(&mut self) -> &mut MenuBuilder {
        &mut self.menu_builder
    }

    /// Publish the draft and start a fresh order against it.
    ///
    /// Saving again replaces the active menu and discards the open order.
    pub fn save_menu(&mut self) -> Arc<DailyMenu> {
        let menu = self.menu_builder.finalize();
        if let Some(previous) = self.order.as_ref().filter(|c| !c.items().is_empty()) {
            tracing::warn!(order_id = previous.order().id, "Discarding open order for new menu");
        }
        self.order = Some(OrderComposer::new(
            Arc::clone(&menu),
            Arc::clone(&self.fulfillment),
        ));
        self.active_menu = Some(Arc::clone(&menu));
        menu
    }

    pub fn active_menu(&self) -> Option<&DailyMenu> {
        self.active_menu.as_deref()
    }

    pub fn is_order_available(&self) -> bool {
        self.order.is_some()
    }

    pub fn order_composer(&self) -> AppResult<&OrderComposer> {
        self.order.as_ref().ok_or_else(no_active_menu)
    }

    pub fn order_composer_mut(&mut self) -> AppResult<&mut OrderComposer> {
        self.order.as_mut().ok_or_else(no_active_menu)
    }

    /// Let the menu editor see catalog changes made in this session
    pub fn refresh_suggestions(&mut self) -> AppResult<()> {
        self.menu_builder.reload_catalog()?;
        Ok(())
    }
}

fn no_active_menu() -> AppError {
    AppError::with_message(ErrorCode::NoActiveMenu, "Save a menu before taking orders")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daily_menu::NewMenuItem;
    use crate::notify::MemoryNotifier;
    use crate::orders::MemoryFulfillment;
    use crate::store::MemoryStore;
    use rust_decimal::Decimal;
    use shared::models::{DishDraft, MenuSlot};

    fn session(config: Config) -> Session {
        Session::with_parts(
            config,
            Arc::new(MemoryStore::new()),
            Arc::new(MemoryNotifier::new()),
            Arc::new(MemoryFulfillment::new()),
        )
        .unwrap()
    }

    #[test]
    fn test_order_unavailable_until_menu_saved() {
        let mut session = session(Config::default());
        assert!(!session.is_order_available());
        assert!(session.active_menu().is_none());

        let err = session.order_composer().unwrap_err();
        assert_eq!(err.code, ErrorCode::NoActiveMenu);
        assert!(session.order_composer_mut().is_err());

        session.save_menu();
        assert!(session.is_order_available());
        assert!(session.order_composer().unwrap().items().is_empty());
    }

    #[test]
    fn test_seed_catalog_flag() {
        let session = session(Config {
            seed_catalog: true,
            ..Config::default()
        });
        assert_eq!(session.catalog().len(), 34);
        assert!(!session.menu_builder().suggest("flan").is_empty());
    }

    #[test]
    fn test_refresh_suggestions_sees_new_dish() {
        let mut session = session(Config::default());
        session
            .catalog_mut()
            .add(&DishDraft::new("Chiles en nogada", Decimal::from(150), "Plato fuerte"))
            .unwrap();
        assert!(session.menu_builder().suggest("nogada").is_empty());

        session.refresh_suggestions().unwrap();
        assert_eq!(session.menu_builder().suggest("nogada").len(), 1);
    }

    #[test]
    fn test_save_menu_replaces_order() {
        let mut session = session(Config::default());
        let item = session
            .menu_builder_mut()
            .add_item(MenuSlot::Soups, NewMenuItem::new("Consomé", Decimal::from(35)))
            .unwrap();

        session.save_menu();
        session
            .order_composer_mut()
            .unwrap()
            .add_from_menu(MenuSlot::Soups, item.id)
            .unwrap();

        session.save_menu();
        assert!(session.order_composer().unwrap().items().is_empty());
        assert_eq!(session.active_menu().map(|m| m.item_count()), Some(1));
    }
}
