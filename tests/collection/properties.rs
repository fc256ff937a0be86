//! Property tests over random operation sequences.
//!
//! Every operation is applied to the container under test and to a plain
//! length model; after each step the container must agree with the model and
//! satisfy the capacity and max size bounds.

use std::collections::VecDeque;

use proptest::prelude::*;
use seqcheck::{Filler, Sequence, SequenceError};

use crate::common::assert_bounds;

// ============================================================================
// STRATEGIES
// ============================================================================

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Resize(usize),
    Clear,
    Erase(usize, usize),
    Reserve(usize),
    At(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..seqcheck::FILLER_MAX).prop_map(Op::Push),
        1 => (0usize..64).prop_map(Op::Resize),
        1 => Just(Op::Clear),
        1 => (0usize..48, 0usize..48).prop_map(|(a, b)| Op::Erase(a, b)),
        1 => (0usize..128).prop_map(Op::Reserve),
        2 => (0usize..48).prop_map(Op::At),
    ]
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(op_strategy(), 0..64)
}

// ============================================================================
// MODEL CHECK
// ============================================================================

fn check_against_model<S: Sequence<Item = i32>>(ops: &[Op]) -> Result<(), TestCaseError> {
    let mut seq = S::new_empty();
    let mut len = 0usize;
    prop_assert!(seq.is_empty());

    for op in ops {
        match *op {
            Op::Push(v) => {
                seq.push_back(v);
                len += 1;
                prop_assert_eq!(seq.last(), Some(&v));
            }
            Op::Resize(n) => {
                seq.resize_default(n);
                len = n;
            }
            Op::Clear => {
                seq.clear();
                len = 0;
            }
            Op::Erase(a, b) => {
                let result = seq.erase(a..b);
                if a <= b && b <= len {
                    prop_assert_eq!(result, Ok(b - a));
                    len -= b - a;
                } else {
                    let is_invalid_range = matches!(result, Err(SequenceError::InvalidRange { .. }));
                    prop_assert!(is_invalid_range);
                }
            }
            Op::Reserve(n) => {
                let before = seq.capacity();
                prop_assert!(seq.reserve_total(n).is_ok());
                prop_assert!(seq.capacity() >= n);
                prop_assert!(seq.capacity() >= before);
            }
            Op::At(i) => {
                let result = seq.at(i);
                prop_assert_eq!(result.is_ok(), i < len);
                if let Err(e) = result {
                    prop_assert!(e.is_out_of_range());
                }
            }
        }
        prop_assert_eq!(seq.len(), len);
        prop_assert_eq!(seq.is_empty(), len == 0);
        assert_bounds(&seq);
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_vec_matches_length_model(ops in ops_strategy()) {
        check_against_model::<Vec<i32>>(&ops)?;
    }

    #[test]
    fn prop_vec_deque_matches_length_model(ops in ops_strategy()) {
        check_against_model::<VecDeque<i32>>(&ops)?;
    }

    /// n appends grow the size by exactly n.
    #[test]
    fn prop_appends_add_exactly_n(start in 0usize..32, n in 0usize..32, seed in any::<u64>()) {
        let mut filler = Filler::with_seed(seed);
        let mut seq: Vec<i32> = Sequence::new_empty();
        seq.resize_default(start);
        for _ in 0..n {
            seq.push_back(filler.next_value());
        }
        prop_assert_eq!(seq.len(), start + n);
    }

    /// Resizing lands on exactly the requested size, from any starting size.
    #[test]
    fn prop_resize_sets_exact_size(start in 0usize..64, target in 0usize..64) {
        let mut seq: Vec<i32> = Sequence::new_empty();
        seq.resize_default(start);
        seq.resize_default(target);
        prop_assert_eq!(seq.len(), target);
        prop_assert!(seq.capacity() >= target);
    }

    /// Checked access fails exactly at and past the current size.
    #[test]
    fn prop_at_fails_iff_index_past_end(len in 0usize..64, index in 0usize..128) {
        let mut seq: VecDeque<i32> = Sequence::new_empty();
        seq.resize_default(len);
        let result = seq.at(index);
        if index < len {
            prop_assert_eq!(result, Ok(&0));
        } else {
            prop_assert_eq!(result, Err(SequenceError::OutOfRange { index, len }));
        }
    }

    /// Reservations past max size never change the container.
    #[test]
    fn prop_oversized_reserve_rejected(len in 0usize..16, excess in 1usize..1024) {
        let mut seq: Vec<i32> = Sequence::new_empty();
        seq.resize_default(len);
        let capacity = seq.capacity();
        let request = seq.max_size().saturating_add(excess);
        prop_assert!(seq.reserve_total(request).unwrap_err().is_allocation_limit());
        prop_assert_eq!(seq.len(), len);
        prop_assert_eq!(seq.capacity(), capacity);
    }
}
