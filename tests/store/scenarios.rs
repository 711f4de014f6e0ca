//! End-to-end scenarios against a fresh in-memory store.

use fitscore::{Rating, ShoeId, ShoeRepository, ShoeStore, StoreError};

#[test]
fn empty_store_lists_nothing() {
    let store = ShoeStore::in_memory();
    assert_eq!(store.list().unwrap(), Vec::new());
}

#[test]
fn first_rating_creates_and_scores() {
    let store = ShoeStore::in_memory();

    let shoe = store.resolve_or_create("AJ 1 Mid Cool Blue").unwrap();
    assert_eq!(shoe.id(), ShoeId::new(1));
    assert!(shoe.ratings().is_empty());
    assert_eq!(shoe.fit_score(), 0.0);

    let rated = store.append_rating(ShoeId::new(1), 5).unwrap();
    assert_eq!(rated.ratings(), &[Rating::new(5).unwrap()]);
    assert_eq!(rated.fit_score(), 5.0);

    assert_eq!(store.get(ShoeId::new(1)).unwrap(), rated);
}

#[test]
fn case_variants_resolve_to_one_record() {
    let store = ShoeStore::in_memory();
    let ids: Vec<ShoeId> = ["Shoe", "shoe", "SHOE", "sHoE", "  Shoe  "]
        .iter()
        .map(|name| store.resolve_or_create(name).unwrap().id())
        .collect();

    assert!(ids.iter().all(|id| *id == ids[0]));
    assert_eq!(store.list().unwrap().len(), 1);
    assert_eq!(store.get(ids[0]).unwrap().name(), "Shoe");
}

#[test]
fn score_is_mean_after_every_append() {
    let store = ShoeStore::in_memory();
    let id = store.resolve_or_create("Air Max 1").unwrap().id();

    let values = [3, 1, 4, 1, 5, 2, 5, 3];
    for (i, value) in values.iter().enumerate() {
        let record = store.append_rating(id, *value).unwrap();
        let seen = &values[..=i];
        let mean = seen.iter().sum::<i64>() as f64 / seen.len() as f64;
        assert_eq!(record.fit_score(), mean);

        let history: Vec<i64> = record.ratings().iter().map(|r| r.value() as i64).collect();
        assert_eq!(history, seen);
    }
}

#[test]
fn out_of_range_rating_changes_nothing() {
    let store = ShoeStore::in_memory();
    let id = store.resolve_or_create("Superstar").unwrap().id();
    let before = store.append_rating(id, 2).unwrap();

    for value in [0, 6, -1, 100] {
        assert_eq!(
            store.append_rating(id, value),
            Err(StoreError::InvalidRating(value))
        );
    }

    assert_eq!(store.get(id).unwrap(), before);
}

#[test]
fn get_missing_is_not_found() {
    let store = ShoeStore::in_memory();
    store.rate("Club C 85", 3).unwrap();
    assert_eq!(
        store.get(ShoeId::new(999)),
        Err(StoreError::NotFound(ShoeId::new(999)))
    );
}

#[test]
fn append_to_missing_is_not_found() {
    let store = ShoeStore::in_memory();
    assert_eq!(
        store.append_rating(ShoeId::new(3), 4),
        Err(StoreError::NotFound(ShoeId::new(3)))
    );
}

#[test]
fn delete_one_of_five() {
    let store = ShoeStore::in_memory();
    for i in 0..5 {
        store.rate(&format!("Shoe {}", i), 3).unwrap();
    }

    store.delete(ShoeId::new(1)).unwrap();

    let remaining = store.list().unwrap();
    assert_eq!(remaining.len(), 4);
    assert!(remaining.iter().all(|shoe| shoe.id() != ShoeId::new(1)));
}

#[test]
fn list_is_ordered_by_id() {
    let store = ShoeStore::in_memory();
    for name in ["Zoom Fly", "Alphafly", "Metaspeed", "Endorphin"] {
        store.resolve_or_create(name).unwrap();
    }
    let ids: Vec<u64> = store.list().unwrap().iter().map(|s| s.id().value()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn blank_name_is_invalid() {
    let store = ShoeStore::in_memory();
    assert!(matches!(
        store.resolve_or_create(""),
        Err(StoreError::InvalidName(_))
    ));
    assert!(matches!(store.rate(" \t ", 3), Err(StoreError::InvalidName(_))));
    assert!(store.list().unwrap().is_empty());
}
