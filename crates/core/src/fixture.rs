//! Per-case fixture owning a fresh container
//!
//! Every scenario gets its own [`CollectionFixture`]: `setup` constructs an
//! empty container behind an owned handle, and dropping the fixture is the
//! teardown (clear, then release the handle). Teardown therefore runs whether
//! the scenario passed, failed or panicked. Each teardown emits a
//! `"fixture teardown"` trace event carrying `cleared` (elements present when
//! the case ended) and `remaining` (elements left after clearing).

use tracing::trace;

use crate::error::{CheckError, CheckResult};
use crate::filler::Filler;
use crate::sequence::Sequence;

/// Exclusively owned container for the duration of one scenario
pub struct CollectionFixture<S: Sequence> {
    collection: Option<Box<S>>,
    filler: Filler,
}

impl<S: Sequence<Item = i32>> CollectionFixture<S> {
    /// Construct a fresh, empty container with filler from the process seed
    pub fn setup() -> Self {
        Self::with_filler(Filler::from_process_seed())
    }

    /// Construct a fresh, empty container with an explicit filler stream
    pub fn with_filler(filler: Filler) -> Self {
        trace!(container = std::any::type_name::<S>(), "fixture setup");
        CollectionFixture {
            collection: Some(Box::new(S::new_empty())),
            filler,
        }
    }

    /// The owned handle; `None` only once torn down
    pub fn handle(&self) -> Option<&S> {
        self.collection.as_deref()
    }

    /// The container, or a fixture error if the handle was released
    pub fn collection(&self) -> CheckResult<&S> {
        self.collection.as_deref().ok_or_else(released)
    }

    /// Mutable access to the container
    pub fn collection_mut(&mut self) -> CheckResult<&mut S> {
        self.collection.as_deref_mut().ok_or_else(released)
    }

    /// Append `count` filler values
    ///
    /// # Errors
    ///
    /// `CheckError::Fixture` if `count` is zero or the handle was released.
    pub fn add_entries(&mut self, count: usize) -> CheckResult {
        if count == 0 {
            return Err(CheckError::Fixture(
                "add_entries requires a positive count".to_string(),
            ));
        }
        let collection = self.collection.as_deref_mut().ok_or_else(released)?;
        for _ in 0..count {
            collection.push_back(self.filler.next_value());
        }
        Ok(())
    }

    /// Draw one filler value without appending it
    pub fn next_value(&mut self) -> i32 {
        self.filler.next_value()
    }
}

fn released() -> CheckError {
    CheckError::Fixture("collection handle already released".to_string())
}

impl<S: Sequence> Drop for CollectionFixture<S> {
    fn drop(&mut self) {
        if let Some(mut collection) = self.collection.take() {
            let cleared = collection.len();
            collection.clear();
            trace!(
                container = std::any::type_name::<S>(),
                cleared,
                remaining = collection.len(),
                "fixture teardown"
            );
        }
    }
}
