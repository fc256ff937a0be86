//! Clear and erase

use crate::common::*;

#[test]
fn clear_erases() {
    let mut fixture = fixture_with(10);
    let collection = fixture.collection_mut().unwrap();

    collection.clear();

    assert_eq!(collection.len(), 0);
    assert_bounds(collection);
}

#[test]
fn erase_full_range() {
    let mut fixture = fixture_with(10);
    let collection = fixture.collection_mut().unwrap();

    assert_eq!(collection.erase(..).unwrap(), 10);
    assert_eq!(collection.len(), 0);
}

#[test]
fn erase_partial_range_shifts_tail() {
    let mut fixture = fixture_with(10);
    let collection = fixture.collection_mut().unwrap();
    let mut expected = collection.clone();
    expected.drain(3..7);

    assert_eq!(collection.erase(3..7).unwrap(), 4);
    assert_eq!(*collection, expected);
}

#[test]
fn erase_empty_range_removes_nothing() {
    let mut fixture = fixture_with(5);
    let collection = fixture.collection_mut().unwrap();

    assert_eq!(collection.erase(2..2).unwrap(), 0);
    assert_eq!(collection.len(), 5);
}

#[test]
fn erase_past_end_is_rejected() {
    let mut fixture = fixture_with(5);
    let collection = fixture.collection_mut().unwrap();

    let err = collection.erase(2..9).unwrap_err();
    assert_eq!(
        err,
        SequenceError::InvalidRange {
            start: 2,
            end: 9,
            len: 5
        }
    );
    assert_eq!(collection.len(), 5);
}
