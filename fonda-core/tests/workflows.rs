//! End-to-end workflows through a `Session`
//!
//! Catalog → daily menu → order, all backed by an in-memory store.

use fonda_core::store::{CATALOG_KEY, DAILY_MENU_KEY, KvStore, MemoryStore};
use fonda_core::{
    CatalogError, Config, MemoryFulfillment, MemoryNotifier, NewMenuItem, OrderError, Session,
    Severity,
};
use rust_decimal::Decimal;
use shared::ErrorCode;
use shared::models::{Dish, DishDraft, DishPatch, MenuSlot};
use std::sync::Arc;

struct Harness {
    store: Arc<MemoryStore>,
    notifier: Arc<MemoryNotifier>,
    fulfillment: Arc<MemoryFulfillment>,
    session: Session,
}

fn harness() -> Harness {
    let store = Arc::new(MemoryStore::new());
    let notifier = Arc::new(MemoryNotifier::new());
    let fulfillment = Arc::new(MemoryFulfillment::new());
    let session = Session::with_parts(
        Config::default(),
        store.clone(),
        notifier.clone(),
        fulfillment.clone(),
    )
    .unwrap();
    Harness {
        store,
        notifier,
        fulfillment,
        session,
    }
}

fn stored_catalog(store: &MemoryStore) -> Vec<Dish> {
    let raw = store.get(CATALOG_KEY).unwrap().unwrap_or_else(|| "[]".into());
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn scenario_add_first_dish() {
    let mut h = harness();
    assert!(h.session.catalog().is_empty());

    let dish = h
        .session
        .catalog_mut()
        .add(&DishDraft::new("Sopa de lima", Decimal::from(45), "Guarnición"))
        .unwrap();

    assert_eq!(h.session.catalog().len(), 1);
    assert!(dish.id > 0);
    assert_eq!(stored_catalog(&h.store), vec![dish]);
    assert_eq!(h.notifier.last().map(|n| n.severity), Some(Severity::Success));
}

#[test]
fn scenario_build_menu_and_take_order() {
    let mut h = harness();

    // Menu with a budget main course and a soup
    let builder = h.session.menu_builder_mut();
    let milanesa = builder
        .add_item(
            MenuSlot::MainCourses,
            NewMenuItem::new("Milanesa", Decimal::from(88)).econoplatillo(true),
        )
        .unwrap();
    let consome = builder
        .add_item(MenuSlot::Soups, NewMenuItem::new("Consomé", Decimal::from(35)))
        .unwrap();

    assert_eq!(builder.draft().main_courses().len(), 1);
    assert_eq!(milanesa.is_econoplatillo, Some(true));
    assert_eq!(builder.draft().soups().len(), 1);
    assert!(!consome.is_econoplatillo());

    // Publish and compose
    let menu = h.session.save_menu();
    assert_eq!(menu.item_count(), 2);

    let composer = h.session.order_composer_mut().unwrap();
    assert!(composer.items().is_empty());
    assert_eq!(composer.total(), Decimal::ZERO);

    composer.add_item(&milanesa).unwrap();
    assert_eq!(composer.total(), Decimal::from(88));
    composer.add_item(&consome).unwrap();
    assert_eq!(composer.total(), Decimal::from(123));
    composer.remove_item(0).unwrap();
    assert_eq!(composer.items(), &[consome.clone()]);
    assert_eq!(composer.total(), Decimal::from(35));

    composer.set_notes("Sin cilantro");
    let submitted = composer.submit().unwrap();
    assert_eq!(submitted.items, vec![consome]);
    assert_eq!(h.fulfillment.orders(), vec![submitted.clone()]);

    let composer = h.session.order_composer().unwrap();
    assert!(composer.items().is_empty());
    assert_ne!(composer.order().id, submitted.id);
}

#[test]
fn scenario_empty_order_is_blocked() {
    let mut h = harness();
    h.session.save_menu();

    let composer = h.session.order_composer_mut().unwrap();
    let id = composer.order().id;
    assert!(!composer.can_submit());
    assert_eq!(composer.submit(), Err(OrderError::EmptyOrder));

    assert!(h.fulfillment.is_empty());
    assert_eq!(h.session.order_composer().unwrap().order().id, id);
}

#[test]
fn order_tab_requires_saved_menu() {
    let h = harness();
    let err = h.session.order_composer().unwrap_err();
    assert_eq!(err.code, ErrorCode::NoActiveMenu);
    assert!(!h.session.is_order_available());
}

#[test]
fn invalid_dish_never_reaches_store() {
    let mut h = harness();

    let err = h.session.catalog_mut().add(&DishDraft::default()).unwrap_err();
    assert_eq!(err.field_errors().map(|e| e.len()), Some(3));

    let dish = h
        .session
        .catalog_mut()
        .add(&DishDraft::new("Milanesa", Decimal::from(88), "Plato fuerte"))
        .unwrap();
    let writes = h.store.write_count();

    let err = h
        .session
        .catalog_mut()
        .edit(
            dish.id,
            DishPatch {
                name: Some(String::new()),
                price: Some(Decimal::ZERO),
                category: Some(" ".into()),
            },
        )
        .unwrap_err();
    assert_eq!(err.field_errors().map(|e| e.len()), Some(3));
    assert_eq!(h.store.write_count(), writes);
}

#[test]
fn failed_write_keeps_catalog_in_sync() {
    let mut h = harness();
    let dish = h
        .session
        .catalog_mut()
        .add(&DishDraft::new("Arroz verde", Decimal::from(35), "Guarnición"))
        .unwrap();
    let before = h.session.catalog().dishes().to_vec();

    h.store.set_fail_writes(true);
    let add = h
        .session
        .catalog_mut()
        .add(&DishDraft::new("Frijoles fritos", Decimal::from(45), "Guarnición"));
    assert!(matches!(add, Err(CatalogError::Storage(_))));

    let edit = h.session.catalog_mut().edit(
        dish.id,
        DishPatch {
            price: Some(Decimal::from(40)),
            ..Default::default()
        },
    );
    assert!(matches!(edit, Err(CatalogError::Storage(_))));

    let remove = h.session.catalog_mut().remove(dish.id);
    assert!(matches!(remove, Err(CatalogError::Storage(_))));

    assert_eq!(h.session.catalog().dishes(), before.as_slice());
    assert_eq!(stored_catalog(&h.store), before);

    let errors: Vec<_> = h
        .notifier
        .notices()
        .into_iter()
        .filter(|n| n.severity == Severity::Error)
        .collect();
    assert_eq!(errors.len(), 3);
}

#[test]
fn catalog_edit_does_not_touch_menu_items() {
    let mut h = harness();
    let dish = h
        .session
        .catalog_mut()
        .add(&DishDraft::new("Pastel de carne", Decimal::from(88), "Plato fuerte"))
        .unwrap();

    let item = h
        .session
        .menu_builder_mut()
        .add_dish(MenuSlot::MainCourses, &dish, Some(false))
        .unwrap();
    let published = h.session.save_menu();

    h.session
        .catalog_mut()
        .edit(
            dish.id,
            DishPatch {
                name: Some("Pastel de carne especial".into()),
                price: Some(Decimal::from(99)),
                ..Default::default()
            },
        )
        .unwrap();

    // Both the draft and the published menu keep the snapshot
    let draft_item = h
        .session
        .menu_builder()
        .draft()
        .find(MenuSlot::MainCourses, item.id)
        .unwrap();
    assert_eq!(draft_item.name, "Pastel de carne");
    assert_eq!(draft_item.price, Decimal::from(88));

    let published_item = published.find(MenuSlot::MainCourses, item.id).unwrap();
    assert_eq!(published_item.name, "Pastel de carne");
    assert_eq!(published_item.price, Decimal::from(88));
}

#[test]
fn draft_edits_after_save_do_not_reach_open_order() {
    let mut h = harness();
    h.session
        .menu_builder_mut()
        .add_item(MenuSlot::Drinks, NewMenuItem::new("Agua de jamaica", Decimal::from(45)))
        .unwrap();
    h.session.save_menu();

    h.session
        .menu_builder_mut()
        .add_item(MenuSlot::Desserts, NewMenuItem::new("Flan napolitano", Decimal::from(25)))
        .unwrap();

    let composer = h.session.order_composer().unwrap();
    assert_eq!(composer.menu().item_count(), 1);
    assert!(composer.menu().desserts().is_empty());
}

#[test]
fn order_from_menu_by_id() {
    let mut h = harness();
    let item = h
        .session
        .menu_builder_mut()
        .add_item(MenuSlot::Appetizers, NewMenuItem::new("Guacamole", Decimal::new(4250, 2)))
        .unwrap();
    h.session.save_menu();

    let composer = h.session.order_composer_mut().unwrap();
    composer.add_from_menu(MenuSlot::Appetizers, item.id).unwrap();
    composer.add_from_menu(MenuSlot::Appetizers, item.id).unwrap();
    assert_eq!(composer.total(), Decimal::from(85));

    let err = composer.add_from_menu(MenuSlot::Desserts, item.id).unwrap_err();
    assert!(matches!(err, OrderError::NotOnMenu { .. }));
    assert_eq!(composer.items().len(), 2);
}

#[test]
fn invalid_restored_items_never_reach_an_order() {
    let store = Arc::new(MemoryStore::new());
    store
        .set(
            DAILY_MENU_KEY,
            r#"{"date":"2024-10-03","soups":[{"id":1,"name":"","price":-35},{"id":2,"name":"Pozole","price":2000000}],"drinks":[{"id":3,"name":"Café","price":20}]}"#,
        )
        .unwrap();
    let fulfillment = Arc::new(MemoryFulfillment::new());
    let mut session = Session::with_parts(
        Config::default(),
        store,
        Arc::new(MemoryNotifier::new()),
        fulfillment.clone(),
    )
    .unwrap();

    let menu = session.save_menu();
    assert_eq!(menu.item_count(), 1);

    let composer = session.order_composer_mut().unwrap();
    for id in [1, 2] {
        let err = composer.add_from_menu(MenuSlot::Soups, id).unwrap_err();
        assert!(matches!(err, OrderError::NotOnMenu { .. }));
    }
    assert_eq!(composer.submit(), Err(OrderError::EmptyOrder));

    composer.add_from_menu(MenuSlot::Drinks, 3).unwrap();
    let submitted = composer.submit().unwrap();
    assert_eq!(submitted.total, Decimal::from(20));
    assert_eq!(fulfillment.orders(), vec![submitted]);
}
