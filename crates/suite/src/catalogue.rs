//! The scenario catalogue
//!
//! Each scenario receives a freshly set-up fixture and owns it until teardown.
//! Scenarios are generic over the container so the same catalogue runs
//! against every backend.

use seqcheck_core::{check, check_eq, expect_error, CheckResult, CollectionFixture, Sequence};
use tracing::info;

use crate::scenario::Scenario;

/// Element count used by the out-of-range scenario
const INDEXED_LEN: usize = 20;
/// Index read by the out-of-range scenario
const INDEX_PAST_END: usize = 25;

/// All registered scenarios, in execution order
pub fn catalogue<S: Sequence<Item = i32>>() -> Vec<Scenario<S>> {
    vec![
        Scenario::positive(
            "handle_is_not_null",
            "a freshly set-up fixture holds a container",
            handle_is_not_null::<S>,
        ),
        Scenario::positive(
            "is_empty_on_create",
            "a new container is empty with size 0",
            is_empty_on_create::<S>,
        ),
        Scenario::positive(
            "can_add_to_empty",
            "adding one value to an empty container gives size 1",
            can_add_to_empty::<S>,
        ),
        Scenario::positive(
            "can_add_five_values",
            "adding five values gives size 5",
            can_add_five_values::<S>,
        ),
        Scenario::positive(
            "max_size_bounds_size",
            "max size is at least size for 0, 1, 5 and 10 entries",
            max_size_bounds_size::<S>,
        ),
        Scenario::positive(
            "capacity_bounds_size",
            "capacity is at least size for 0, 1, 5 and 10 entries",
            capacity_bounds_size::<S>,
        ),
        Scenario::positive(
            "resize_increases_size",
            "resizing past the current size grows the container",
            resize_increases_size::<S>,
        ),
        Scenario::positive(
            "resize_decreases_size",
            "resizing below the current size shrinks the container",
            resize_decreases_size::<S>,
        ),
        Scenario::positive(
            "resize_to_zero",
            "resizing to zero empties the container",
            resize_to_zero::<S>,
        ),
        Scenario::positive("clear_erases", "clear empties the container", clear_erases::<S>),
        Scenario::positive(
            "handle_valid_after_clear",
            "the handle stays valid and non-null after clear",
            handle_valid_after_clear::<S>,
        ),
        Scenario::positive(
            "erase_full_range",
            "erasing begin..end empties the container",
            erase_full_range::<S>,
        ),
        Scenario::positive(
            "reserve_grows_capacity_not_size",
            "reserve increases capacity but not size",
            reserve_grows_capacity_not_size::<S>,
        ),
        Scenario::positive(
            "push_back_adds_value",
            "appending after 10 entries gives size 11",
            push_back_adds_value::<S>,
        ),
        Scenario::negative(
            "at_out_of_range",
            "checked access past the end signals out-of-range",
            at_out_of_range::<S>,
        ),
        Scenario::negative(
            "reserve_length_too_long",
            "reserving one past max size signals an allocation limit",
            reserve_length_too_long::<S>,
        ),
        Scenario::negative(
            "reserve_capacity_overflow",
            "reserving usize::MAX signals an allocation limit",
            reserve_capacity_overflow::<S>,
        ),
    ]
}

fn handle_is_not_null<S: Sequence<Item = i32>>(fixture: &mut CollectionFixture<S>) -> CheckResult {
    check!(fixture.handle().is_some(), "fixture handle is null after setup");
    Ok(())
}

fn is_empty_on_create<S: Sequence<Item = i32>>(fixture: &mut CollectionFixture<S>) -> CheckResult {
    let collection = fixture.collection()?;
    check!(collection.is_empty());
    check_eq!(collection.len(), 0);
    Ok(())
}

fn can_add_to_empty<S: Sequence<Item = i32>>(fixture: &mut CollectionFixture<S>) -> CheckResult {
    check!(fixture.collection()?.is_empty());
    check_eq!(fixture.collection()?.len(), 0);

    fixture.add_entries(1)?;

    let collection = fixture.collection()?;
    check!(!collection.is_empty());
    check_eq!(collection.len(), 1);
    Ok(())
}

fn can_add_five_values<S: Sequence<Item = i32>>(fixture: &mut CollectionFixture<S>) -> CheckResult {
    fixture.add_entries(5)?;
    check_eq!(fixture.collection()?.len(), 5);
    Ok(())
}

/// Grow the container through 0, 1, 5 and 10 entries, checking `bound` at each step
fn at_growth_steps<S, F>(fixture: &mut CollectionFixture<S>, label: &str, bound: F) -> CheckResult
where
    S: Sequence<Item = i32>,
    F: Fn(&S) -> usize,
{
    check_eq!(fixture.collection()?.len(), 0);
    for step in [0, 1, 4, 5] {
        if step > 0 {
            fixture.add_entries(step)?;
        }
        let collection = fixture.collection()?;
        let (limit, size) = (bound(collection), collection.len());
        check!(limit >= size, "{} {} < size {}", label, limit, size);
        info!("{} {} >= {} entries", label, limit, size);
    }
    Ok(())
}

fn max_size_bounds_size<S: Sequence<Item = i32>>(fixture: &mut CollectionFixture<S>) -> CheckResult {
    at_growth_steps(fixture, "max size", S::max_size)
}

fn capacity_bounds_size<S: Sequence<Item = i32>>(fixture: &mut CollectionFixture<S>) -> CheckResult {
    at_growth_steps(fixture, "capacity", S::capacity)
}

fn resize_increases_size<S: Sequence<Item = i32>>(
    fixture: &mut CollectionFixture<S>,
) -> CheckResult {
    let collection = fixture.collection_mut()?;
    let start_size = collection.len();

    collection.resize_default(10);

    check!(collection.len() > start_size);
    check_eq!(collection.len(), 10);
    check!(
        (start_size..10).all(|i| collection.at(i) == Ok(&0)),
        "grown slots are not default-valued"
    );
    info!("size {} > {} before resize", collection.len(), start_size);
    Ok(())
}

fn resize_decreases_size<S: Sequence<Item = i32>>(
    fixture: &mut CollectionFixture<S>,
) -> CheckResult {
    fixture.add_entries(10)?;
    let collection = fixture.collection_mut()?;
    let start_size = collection.len();

    collection.resize_default(5);

    check!(collection.len() < start_size);
    check_eq!(collection.len(), 5);
    info!("size {} < {} before resize", collection.len(), start_size);
    Ok(())
}

fn resize_to_zero<S: Sequence<Item = i32>>(fixture: &mut CollectionFixture<S>) -> CheckResult {
    fixture.add_entries(10)?;
    let collection = fixture.collection_mut()?;

    collection.resize_default(0);

    check_eq!(collection.len(), 0);
    check!(collection.is_empty());
    Ok(())
}

fn clear_erases<S: Sequence<Item = i32>>(fixture: &mut CollectionFixture<S>) -> CheckResult {
    fixture.add_entries(10)?;
    let collection = fixture.collection_mut()?;

    collection.clear();

    check_eq!(collection.len(), 0);
    info!(capacity = collection.capacity(), "cleared");
    Ok(())
}

fn handle_valid_after_clear<S: Sequence<Item = i32>>(
    fixture: &mut CollectionFixture<S>,
) -> CheckResult {
    fixture.add_entries(10)?;
    fixture.collection_mut()?.clear();

    check!(fixture.handle().is_some(), "handle released by clear");
    check!(fixture.collection()?.is_empty());

    // The container stays usable through the same handle
    fixture.add_entries(1)?;
    check_eq!(fixture.collection()?.len(), 1);
    Ok(())
}

fn erase_full_range<S: Sequence<Item = i32>>(fixture: &mut CollectionFixture<S>) -> CheckResult {
    fixture.add_entries(10)?;
    let collection = fixture.collection_mut()?;

    let removed = collection.erase(..)?;

    check_eq!(removed, 10);
    check_eq!(collection.len(), 0);
    Ok(())
}

fn reserve_grows_capacity_not_size<S: Sequence<Item = i32>>(
    fixture: &mut CollectionFixture<S>,
) -> CheckResult {
    fixture.add_entries(10)?;
    let collection = fixture.collection_mut()?;
    let start_size = collection.len();
    let start_capacity = collection.capacity();
    let target = start_capacity.max(20) + 1;

    collection.reserve_total(target)?;

    check!(
        collection.capacity() > start_capacity,
        "capacity {} did not grow past {}",
        collection.capacity(),
        start_capacity
    );
    check!(collection.capacity() >= target);
    check_eq!(collection.len(), start_size);
    info!(
        start_size,
        start_capacity,
        size = collection.len(),
        capacity = collection.capacity(),
        "reserved"
    );
    Ok(())
}

fn push_back_adds_value<S: Sequence<Item = i32>>(
    fixture: &mut CollectionFixture<S>,
) -> CheckResult {
    fixture.add_entries(10)?;
    let value = fixture.next_value();
    let collection = fixture.collection_mut()?;
    let start_size = collection.len();

    collection.push_back(value);

    check!(collection.len() > start_size);
    check_eq!(collection.len(), 11);
    check_eq!(collection.last(), Some(&value));
    info!("size was {} and now it is {}", start_size, collection.len());
    Ok(())
}

fn at_out_of_range<S: Sequence<Item = i32>>(fixture: &mut CollectionFixture<S>) -> CheckResult {
    let collection = fixture.collection_mut()?;
    collection.resize_default(INDEXED_LEN);

    let err = expect_error(
        collection.at(INDEX_PAST_END),
        "out-of-range error",
        |e| e.is_out_of_range(),
    )?;

    info!(%err, "checked access rejected");
    Ok(())
}

fn reserve_length_too_long<S: Sequence<Item = i32>>(
    fixture: &mut CollectionFixture<S>,
) -> CheckResult {
    let collection = fixture.collection_mut()?;
    let request = collection.max_size().saturating_add(1);

    let err = expect_error(
        collection.reserve_total(request),
        "allocation-limit error",
        |e| e.is_allocation_limit(),
    )?;

    check_eq!(collection.len(), 0);
    info!(%err, "too long");
    Ok(())
}

fn reserve_capacity_overflow<S: Sequence<Item = i32>>(
    fixture: &mut CollectionFixture<S>,
) -> CheckResult {
    fixture.add_entries(10)?;
    let collection = fixture.collection_mut()?;

    expect_error(
        collection.reserve_total(usize::MAX),
        "allocation-limit error",
        |e| e.is_allocation_limit(),
    )?;

    check_eq!(collection.len(), 10);
    Ok(())
}
