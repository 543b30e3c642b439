use pastry_store::{PastryStore, StoreError, seed_records};
use pastry_types::{Allergen, PastryId, PastryInput, PastryUpdate, SchemaProfile};
use pretty_assertions::assert_eq;

fn croissant() -> PastryInput {
    PastryInput {
        name: "Croissant".into(),
        description: Some("Flaky layered pastry".into()),
        price: Some(15.0),
        allergens: Some(vec![Allergen::Gluten, Allergen::Dairy]),
    }
}

fn id(n: u64) -> PastryId {
    PastryId::new(n)
}

// ── list ─────────────────────────────────────────────────────────

#[test]
fn list_on_empty_store_is_empty_error() {
    let store = PastryStore::new();
    assert_eq!(store.list().unwrap_err(), StoreError::Empty);
}

#[test]
fn list_returns_insertion_order() {
    let mut store = PastryStore::new();
    store.create(PastryInput::named("Semla")).unwrap();
    store.create(PastryInput::named("Croissant")).unwrap();
    store.create(PastryInput::named("Biscotti")).unwrap();

    let names: Vec<&str> = store.list().unwrap().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Semla", "Croissant", "Biscotti"]);
}

#[test]
fn seeded_store_holds_two_records() {
    let store = PastryStore::seeded(SchemaProfile::Full);
    let records = store.list().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Kanelbulle");
    assert_eq!(records[1].name, "Mazarine");
    assert_eq!(records[1].price, Some(20.0));
}

#[test]
fn light_seed_has_no_prices() {
    assert!(seed_records(SchemaProfile::Light).iter().all(|r| r.price.is_none()));
}

// ── create ───────────────────────────────────────────────────────

#[test]
fn first_create_gets_id_one() {
    let mut store = PastryStore::new();
    let record = store.create(croissant()).unwrap();
    assert_eq!(record.id, id(1));
    assert_eq!(store.len(), 1);
}

#[test]
fn create_follows_highest_existing_id() {
    let mut store = PastryStore::seeded(SchemaProfile::Full);
    let record = store.create(croissant()).unwrap();
    assert_eq!(record.id, id(3));
}

#[test]
fn create_then_find_round_trips() {
    let mut store = PastryStore::new();
    let created = store.create(croissant()).unwrap();
    let found = store.find_by_id(created.id).unwrap();

    assert_eq!(found, &created);
    assert_eq!(found.name, "Croissant");
    assert_eq!(found.description.as_deref(), Some("Flaky layered pastry"));
    assert_eq!(found.price, Some(15.0));
}

#[test]
fn create_rejects_normalized_duplicate() {
    let mut store = PastryStore::seeded(SchemaProfile::Full);
    let err = store
        .create(PastryInput::named("  kanelbulle "))
        .unwrap_err();

    assert_eq!(err, StoreError::Conflict("  kanelbulle ".into()));
    assert_eq!(err.code(), 409);
    assert_eq!(store.len(), 2);
}

#[test]
fn create_rejects_collapsed_whitespace_duplicate() {
    let mut store = PastryStore::new();
    store.create(PastryInput::named("Pain au chocolat")).unwrap();
    let err = store
        .create(PastryInput::named("PAIN  au   Chocolat"))
        .unwrap_err();
    assert!(matches!(err, StoreError::Conflict(_)));
}

#[test]
fn deleted_highest_id_is_not_reused() {
    let mut store = PastryStore::seeded(SchemaProfile::Full);
    store.delete(id(2)).unwrap();
    let record = store.create(croissant()).unwrap();
    assert_eq!(record.id, id(3));
}

#[test]
fn emptied_store_keeps_counting() {
    let mut store = PastryStore::new();
    let first = store.create(croissant()).unwrap();
    store.delete(first.id).unwrap();
    assert!(store.is_empty());

    let second = store.create(croissant()).unwrap();
    assert_eq!(second.id, id(2));
}

// ── find ─────────────────────────────────────────────────────────

#[test]
fn find_missing_id_is_not_found() {
    let store = PastryStore::seeded(SchemaProfile::Full);
    let err = store.find_by_id(id(99)).unwrap_err();
    assert_eq!(err, StoreError::NotFound(id(99)));
    assert_eq!(err.to_string(), "Pastry with id: 99 not found.");
    assert_eq!(err.code(), 404);
}

// ── update ───────────────────────────────────────────────────────

#[test]
fn update_changes_only_given_fields() {
    let mut store = PastryStore::new();
    let created = store.create(croissant()).unwrap();

    let updated = store
        .update(
            created.id,
            PastryUpdate {
                price: Some(18.0),
                ..PastryUpdate::default()
            },
        )
        .unwrap();

    assert_eq!(updated.price, Some(18.0));
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.allergens, created.allergens);
    assert_eq!(store.find_by_id(created.id).unwrap(), &updated);
}

#[test]
fn update_missing_id_is_not_found() {
    let mut store = PastryStore::seeded(SchemaProfile::Full);
    let err = store
        .update(
            id(42),
            PastryUpdate {
                price: Some(1.0),
                ..PastryUpdate::default()
            },
        )
        .unwrap_err();
    assert_eq!(err, StoreError::NotFound(id(42)));
}

#[test]
fn update_to_other_records_name_conflicts() {
    let mut store = PastryStore::seeded(SchemaProfile::Full);
    let err = store
        .update(
            id(2),
            PastryUpdate {
                name: Some("KANELBULLE".into()),
                ..PastryUpdate::default()
            },
        )
        .unwrap_err();

    assert_eq!(err, StoreError::Conflict("KANELBULLE".into()));
    assert_eq!(store.find_by_id(id(2)).unwrap().name, "Mazarine");
}

#[test]
fn update_may_recase_own_name() {
    let mut store = PastryStore::seeded(SchemaProfile::Full);
    let updated = store
        .update(
            id(1),
            PastryUpdate {
                name: Some("KANELBULLE".into()),
                ..PastryUpdate::default()
            },
        )
        .unwrap();
    assert_eq!(updated.name, "KANELBULLE");
}

// ── delete ───────────────────────────────────────────────────────

#[test]
fn delete_returns_prior_snapshot() {
    let mut store = PastryStore::seeded(SchemaProfile::Full);
    let before = store.find_by_id(id(1)).unwrap().clone();

    let removed = store.delete(id(1)).unwrap();
    assert_eq!(removed, before);
    assert_eq!(store.find_by_id(id(1)).unwrap_err(), StoreError::NotFound(id(1)));
    assert_eq!(store.len(), 1);
}

#[test]
fn delete_missing_id_leaves_store_unchanged() {
    let mut store = PastryStore::seeded(SchemaProfile::Full);
    let before = store.list().unwrap().to_vec();

    let err = store.delete(id(7)).unwrap_err();
    assert_eq!(err, StoreError::NotFound(id(7)));
    assert_eq!(store.list().unwrap(), before.as_slice());
}

#[test]
fn deleting_everything_makes_list_empty() {
    let mut store = PastryStore::seeded(SchemaProfile::Full);
    store.delete(id(1)).unwrap();
    store.delete(id(2)).unwrap();
    assert_eq!(store.list().unwrap_err(), StoreError::Empty);
    assert_eq!(StoreError::Empty.code(), 404);
}

// ── errors ───────────────────────────────────────────────────────

#[test]
fn error_messages_are_user_facing() {
    assert_eq!(
        StoreError::Empty.to_string(),
        "All out of pastries. Maybe add something?"
    );
    assert_eq!(
        StoreError::Conflict("Semla".into()).to_string(),
        "Semla already exists on the menu."
    );
}
