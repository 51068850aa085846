//! Parallel in-place sort.
//!
//! Ranges above a size threshold are partitioned around their midpoint
//! element; the left half is sorted on a freshly spawned scoped worker while
//! the right half is sorted on the calling thread, and the two sorted halves
//! are merged once the worker is joined. Below the threshold the range is
//! sorted sequentially. The call is synchronous: no worker outlives it.

mod driver;
mod merge;
mod partition;
mod sequential;

use std::sync::Mutex;

/// Tuning knobs for [`par_sort_with`]. [`TUNING`] holds the defaults.
#[derive(Clone, Copy, Debug)]
pub struct Tuning {
    /// Ranges shorter than this are sorted sequentially on the calling
    /// thread instead of being split.
    pub sequential_threshold: usize,
    /// Splits nested deeper than this stop spawning workers and recurse
    /// sequentially, capping live workers at `2^max_spawn_depth`.
    pub max_spawn_depth: usize,
    /// Sub-ranges at most this long are finished with insertion sort.
    pub insertion_threshold: usize,
}

pub const TUNING: Tuning = Tuning {
    sequential_threshold: 100_000,
    max_spawn_depth: 8,
    insertion_threshold: 24,
};

impl Default for Tuning {
    fn default() -> Self {
        TUNING
    }
}

/// Sorts `data` ascending in place with the default [`TUNING`].
///
/// The sort is not stable: equal elements may be reordered. If a comparison
/// panics on a worker thread, the panic is propagated to the caller and the
/// buffer's ordering is unspecified.
pub fn par_sort<T: Copy + Ord + Send>(data: &mut [T]) {
    par_sort_with(data, &TUNING);
}

/// Sorts `data` ascending in place with explicit [`Tuning`].
pub fn par_sort_with<T: Copy + Ord + Send>(data: &mut [T], tuning: &Tuning) {
    if data.len() < 2 {
        return;
    }

    let merge_scratch = Mutex::new(Vec::new());
    driver::sort_range(data, &merge_scratch, tuning, 0);
}
