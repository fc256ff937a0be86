//! Appends, capacity and max size bounds

use crate::common::*;

#[test]
fn can_add_to_empty() {
    let mut fixture = fixture();
    assert!(fixture.collection().unwrap().is_empty());
    assert_eq!(fixture.collection().unwrap().len(), 0);

    fixture.add_entries(1).unwrap();

    let collection = fixture.collection().unwrap();
    assert!(!collection.is_empty());
    assert_eq!(collection.len(), 1);
}

#[test]
fn can_add_five_values() {
    let fixture = fixture_with(5);
    assert_eq!(fixture.collection().unwrap().len(), 5);
}

#[test]
fn filler_values_in_range() {
    let fixture = fixture_with(50);
    assert!(fixture
        .collection()
        .unwrap()
        .iter()
        .all(|v| (0..seqcheck::FILLER_MAX).contains(v)));
}

#[test]
fn max_size_bounds_size_at_0_1_5_10() {
    let mut fixture = fixture();
    let mut expected = 0;
    for step in [0, 1, 4, 5] {
        if step > 0 {
            fixture.add_entries(step).unwrap();
        }
        expected += step;
        let collection = fixture.collection().unwrap();
        assert_eq!(collection.len(), expected);
        assert!(collection.max_size() >= collection.len());
        tracing::info!("max size {} >= {} entries", collection.max_size(), collection.len());
    }
}

#[test]
fn capacity_bounds_size_at_0_1_5_10() {
    let mut fixture = fixture();
    for step in [0, 1, 4, 5] {
        if step > 0 {
            fixture.add_entries(step).unwrap();
        }
        assert_bounds(fixture.collection().unwrap());
    }
    assert_eq!(fixture.collection().unwrap().len(), 10);
}

#[test]
fn max_size_matches_allocation_bound() {
    let fixture = fixture();
    assert_eq!(
        fixture.collection().unwrap().max_size(),
        seqcheck::max_len_for::<i32>()
    );
}

#[test]
fn push_back_adds_value() {
    let mut fixture = fixture_with(10);
    let value = fixture.next_value();
    let collection = fixture.collection_mut().unwrap();
    let start_size = collection.len();

    collection.push_back(value);

    assert!(collection.len() > start_size);
    assert_eq!(collection.len(), 11);
    assert_eq!(collection.last(), Some(&value));
}
