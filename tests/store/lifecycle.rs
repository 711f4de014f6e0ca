//! Record lifecycle: created, rated, deleted (terminal).

use fitscore::{ShoeRepository, ShoeStore, StoreError};

#[test]
fn deleted_record_is_gone_for_every_operation() {
    let store = ShoeStore::in_memory();
    let id = store.rate("Chuck Taylor", 4).unwrap().id();

    store.delete(id).unwrap();

    assert_eq!(store.get(id), Err(StoreError::NotFound(id)));
    assert_eq!(store.append_rating(id, 3), Err(StoreError::NotFound(id)));
    assert_eq!(store.delete(id), Err(StoreError::NotFound(id)));
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn deleting_an_empty_record() {
    let store = ShoeStore::in_memory();
    let id = store.resolve_or_create("Blazer Mid").unwrap().id();
    store.delete(id).unwrap();
    assert_eq!(store.get(id), Err(StoreError::NotFound(id)));
}

#[test]
fn recreated_name_gets_a_new_identifier() {
    let store = ShoeStore::in_memory();
    let first = store.rate("Dunk Low", 5).unwrap();
    store.delete(first.id()).unwrap();

    let second = store.resolve_or_create("dunk low").unwrap();
    assert_ne!(second.id(), first.id());
    assert!(second.ratings().is_empty());
    assert_eq!(second.fit_score(), 0.0);
}

#[test]
fn rate_composes_resolve_and_append() {
    let store = ShoeStore::in_memory();
    store.rate("Ultraboost", 4).unwrap();
    let record = store.rate("ULTRABOOST", 2).unwrap();

    assert_eq!(record.name(), "Ultraboost");
    assert_eq!(record.ratings().len(), 2);
    assert_eq!(record.fit_score(), 3.0);
    assert_eq!(store.list().unwrap().len(), 1);
}
