/// Partitions `data` around its midpoint element and returns the pivot's
/// final position.
///
/// The midpoint element is swapped to the last slot, its value is read once,
/// and every other element is scanned against that fixed value: strictly
/// smaller elements end up in front, everything else (equal included) behind.
/// A final swap drops the pivot between the two groups, so `data[..p]` is
/// strictly less than `data[p]` and `data[p + 1..]` is greater or equal —
/// both strictly shorter than `data`, even when every element is equal.
pub(crate) fn split_around_midpoint<T: Copy + Ord>(data: &mut [T]) -> usize {
    let len = data.len();
    debug_assert!(len >= 2);

    data.swap(len / 2, len - 1);
    let pivot = data[len - 1];

    let mut boundary = 0;
    for i in 0..len - 1 {
        if data[i] < pivot {
            data.swap(i, boundary);
            boundary += 1;
        }
    }

    data.swap(boundary, len - 1);
    boundary
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::split_around_midpoint;

    fn check_boundary_contract(mut data: Vec<u64>) {
        let original = data.clone();
        let p = split_around_midpoint(&mut data);
        let pivot = data[p];

        assert!(data[..p].iter().all(|&x| x < pivot));
        assert!(data[p..].iter().all(|&x| x >= pivot));
        assert_eq!(p, original.iter().filter(|&&x| x < pivot).count());

        let mut sorted_in = original;
        sorted_in.sort_unstable();
        let mut sorted_out = data;
        sorted_out.sort_unstable();
        assert_eq!(sorted_out, sorted_in);
    }

    #[test]
    fn random_inputs_satisfy_the_boundary_contract() {
        let mut rng = StdRng::seed_from_u64(0x9A77_2026);
        for &size in &[2_usize, 3, 4, 5, 17, 64, 255, 1024] {
            check_boundary_contract((0..size).map(|_| rng.random::<u64>() % 50).collect());
            check_boundary_contract((0..size).map(|_| rng.random()).collect());
        }
    }

    #[test]
    fn all_equal_puts_the_boundary_first() {
        let mut data = vec![9_u64; 33];
        assert_eq!(split_around_midpoint(&mut data), 0);
        assert!(data.iter().all(|&x| x == 9));
    }

    #[test]
    fn two_elements() {
        let mut data = vec![2_u64, 1];
        assert_eq!(split_around_midpoint(&mut data), 0);
        assert_eq!(data, [1, 2]);

        let mut data = vec![1_u64, 2];
        assert_eq!(split_around_midpoint(&mut data), 1);
        assert_eq!(data, [1, 2]);
    }

    // The scan must compare against the pivot's own value. A predicate
    // derived from the pivot minus one would leave the 9s on the right.
    #[test]
    fn values_one_below_pivot_stay_left() {
        let mut data = vec![9_u64, 10, 9, 10, 9, 10, 9, 10, 9, 10, 9];
        let p = split_around_midpoint(&mut data);
        assert_eq!(p, 6);
        assert!(data[..6].iter().all(|&x| x == 9));
        assert!(data[6..].iter().all(|&x| x == 10));
    }
}
