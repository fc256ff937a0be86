//! Filler values for populated containers
//!
//! Scenarios fill containers with arbitrary values in `0..FILLER_MAX`. The
//! values are never asserted against, but runs stay reproducible: one seed is
//! fixed per process, and every [`Filler`] derives its own stream from that
//! seed and a process-wide stream counter.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use once_cell::sync::OnceCell;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::limits::FILLER_MAX;

static PROCESS_SEED: OnceCell<u64> = OnceCell::new();
static STREAM_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Initialise the process seed, once
///
/// The first call wins: `Some(seed)` fixes the seed, `None` derives it from
/// the clock. Later calls return the seed already in effect.
pub fn init_seed(seed: Option<u64>) -> u64 {
    *PROCESS_SEED.get_or_init(|| {
        let seed = seed.unwrap_or_else(clock_seed);
        debug!(seed, "process seed initialised");
        seed
    })
}

/// The process seed, initialising it from the clock if nobody has yet
pub fn process_seed() -> u64 {
    init_seed(None)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Deterministic source of filler values
#[derive(Debug, Clone)]
pub struct Filler {
    rng: StdRng,
}

impl Filler {
    /// Next stream derived from the process seed
    pub fn from_process_seed() -> Self {
        let stream = STREAM_COUNTER.fetch_add(1, Ordering::Relaxed);
        Self::with_seed(process_seed().wrapping_add(stream))
    }

    /// Stream with an explicit seed, independent of the process seed
    pub fn with_seed(seed: u64) -> Self {
        Filler {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Next value in `0..FILLER_MAX`
    pub fn next_value(&mut self) -> i32 {
        self.rng.gen_range(0..FILLER_MAX)
    }
}
