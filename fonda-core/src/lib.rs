//! Fonda Core - daily menu and order workflows of a small restaurant
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────── Session ────────────────────────────┐
//! │                                                                  │
//! │  CatalogManager ──┐                      ┌── OrderComposer       │
//! │   (menuItems)     │                      │    (Arc<DailyMenu>)   │
//! │                   ▼                      │          │            │
//! │               KvStore ◄── MenuBuilder ───┘          ▼            │
//! │           (redb / memory)  (dailyMenu)         Fulfillment       │
//! │                                                                  │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`catalog`] - validated dish catalog, written through on every change
//! - [`daily_menu`] - draft menu with six slots and name suggestions
//! - [`orders`] - order composition against a published menu
//! - [`store`] - key-value persistence
//! - [`notify`] - operator notices
//! - [`order_money`] - exact price arithmetic
//! - [`core`] - configuration and the session container

pub mod catalog;
pub mod core;
pub mod daily_menu;
pub mod notify;
pub mod order_money;
pub mod orders;
pub mod store;
pub mod utils;

pub use catalog::{CatalogError, CatalogManager, CategoryFilter};
pub use core::{Config, Session};
pub use daily_menu::{MenuBuilder, MenuError, MenuItemDraft, NewMenuItem, Suggestion};
pub use notify::{MemoryNotifier, Notice, Notifier, Severity, TracingNotifier};
pub use orders::{Fulfillment, LogFulfillment, MemoryFulfillment, OrderComposer, OrderError};
pub use store::{KvStore, MemoryStore, RedbStore, StorageError};
