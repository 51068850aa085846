/// Merges the sorted runs `data[..mid]` and `data[mid..]` into one sorted
/// run, linear in `data.len()`.
///
/// The left run is copied into `scratch` and merged with the right run back
/// into `data` front to back; the write cursor can never overtake the right
/// read cursor. Ties are taken from the left run. Runs that are already in
/// order are detected up front and leave `scratch` untouched.
pub(crate) fn merge_adjacent<T: Copy + Ord>(data: &mut [T], mid: usize, scratch: &mut Vec<T>) {
    debug_assert!(mid <= data.len());
    if mid == 0 || mid == data.len() || data[mid - 1] <= data[mid] {
        return;
    }

    scratch.clear();
    scratch.extend_from_slice(&data[..mid]);

    let mut i = 0;
    let mut j = mid;
    let mut k = 0;
    while i < scratch.len() && j < data.len() {
        if scratch[i] <= data[j] {
            data[k] = scratch[i];
            i += 1;
        } else {
            data[k] = data[j];
            j += 1;
        }
        k += 1;
    }

    // Whatever remains of the right run is already in place.
    let rest = scratch.len() - i;
    data[k..k + rest].copy_from_slice(&scratch[i..]);
}
