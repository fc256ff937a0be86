//! Collection contract tests
//!
//! Mirrors the scenario catalogue through libtest, one module per behavior:
//! - lifecycle: construction, handle validity, teardown
//! - growth: appends, capacity and max size bounds
//! - resize: growing, shrinking, resizing to zero
//! - removal: clear and erase
//! - reserve: capacity reservation and allocation limits
//! - access: bounds-checked indexing
//! - properties: proptest over random operation sequences
//! - catalogue: the runner over every backend


mod growth;
mod lifecycle;
mod properties;
mod removal;
