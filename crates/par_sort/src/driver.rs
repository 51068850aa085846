//! Recursive driver: decides sequential fallback vs. parallel split, and
//! owns the spawn/join/merge discipline for the parallel case.

use std::panic;
use std::sync::{Mutex, PoisonError};
use std::thread;

use crate::{Tuning, merge, partition, sequential};

/// Sorts `data` ascending, spawning at most one scoped worker per split.
///
/// The worker sorts the left sub-range while the current thread sorts the
/// right one inline. Joining the worker is the only blocking point; a panic
/// payload from a dead worker is re-raised here instead of being swallowed.
/// Once both halves are sorted they are merged under `merge_scratch`'s lock,
/// which serializes sibling merges.
pub(crate) fn sort_range<T>(
    data: &mut [T],
    merge_scratch: &Mutex<Vec<T>>,
    tuning: &Tuning,
    depth: usize,
) where
    T: Copy + Ord + Send,
{
    // Splitting needs at least two elements.
    let cutoff = tuning.sequential_threshold.max(2);
    if data.len() < cutoff || depth >= tuning.max_spawn_depth {
        sequential::sort(data, tuning);
        return;
    }

    let pivot_pos = partition::split_around_midpoint(data);

    let spawned = {
        // The pivot sits in its sorted slot at `pivot_pos`; the worker and
        // the current thread each borrow one of the disjoint sub-slices
        // around it.
        let (left, rest) = data.split_at_mut(pivot_pos);
        let right = &mut rest[1..];

        thread::scope(|scope| {
            let worker = thread::Builder::new()
                .name("par-sort-worker".into())
                .spawn_scoped(scope, || sort_range(left, merge_scratch, tuning, depth + 1));

            match worker {
                Ok(handle) => {
                    sort_range(right, merge_scratch, tuning, depth + 1);
                    if let Err(payload) = handle.join() {
                        panic::resume_unwind(payload);
                    }
                    true
                }
                Err(err) => {
                    log::warn!("failed to spawn a sort worker: {err}");
                    false
                }
            }
        })
    };

    if !spawned {
        // The OS refused a thread; sort the would-be-spawned half on the
        // current thread instead. The right half still recurses and may
        // spawn again once resources free up.
        let (left, rest) = data.split_at_mut(pivot_pos);
        sequential::sort(left, tuning);
        sort_range(&mut rest[1..], merge_scratch, tuning, depth + 1);
    }

    // A poisoned lock means a sibling merge panicked, and that panic is
    // already unwinding through its own join chain.
    let mut scratch = merge_scratch.lock().unwrap_or_else(PoisonError::into_inner);
    merge::merge_adjacent(data, pivot_pos, &mut scratch);
}
