//! Sequential fallback used below the parallel threshold: a median-of-3 (or
//! ninther, for long slices) quicksort over a Hoare partition, finishing
//! small sub-ranges with insertion sort. Duplicate-heavy slices that
//! degenerate the Hoare split are re-partitioned three ways.

use std::ptr;

use crate::Tuning;

pub(crate) fn sort<T: Copy + Ord>(data: &mut [T], tuning: &Tuning) {
    quick_sort_recursive(data, tuning.insertion_threshold);
}

fn quick_sort_recursive<T: Copy + Ord>(mut data: &mut [T], insertion_threshold: usize) {
    while data.len() > insertion_threshold {
        let len = data.len();
        let pivot = if len >= 2048 {
            choose_pivot_ninther(data)
        } else {
            choose_pivot_median3(data)
        };
        let split = partition_hoare(data, pivot) + 1;
        if split == len {
            let (lt, gt) = partition_3way(data, pivot);
            if lt == 0 && gt == len {
                return;
            }
            let (left, rest) = data.split_at_mut(lt);
            let (_, right) = rest.split_at_mut(gt - lt);
            if left.len() < right.len() {
                quick_sort_recursive(left, insertion_threshold);
                data = right;
            } else {
                quick_sort_recursive(right, insertion_threshold);
                data = left;
            }
            continue;
        }

        let (left, right) = data.split_at_mut(split);
        if left.len() < right.len() {
            quick_sort_recursive(left, insertion_threshold);
            data = right;
        } else {
            quick_sort_recursive(right, insertion_threshold);
            data = left;
        }
    }

    insertion_sort(data);
}

#[inline]
fn insertion_sort<T: Copy + Ord>(data: &mut [T]) {
    let len = data.len();
    if len < 2 {
        return;
    }

    for i in 1..len {
        let key = data[i];
        let mut j = i;
        // Hot loop: unchecked accesses remove repeated bounds checks.
        unsafe {
            while j > 0 {
                let prev = *data.get_unchecked(j - 1);
                if prev <= key {
                    break;
                }
                *data.get_unchecked_mut(j) = prev;
                j -= 1;
            }
            *data.get_unchecked_mut(j) = key;
        }
    }
}

#[inline]
fn median3<T: Copy + Ord>(a: T, b: T, c: T) -> T {
    if a < b {
        if b < c {
            b
        } else if a < c {
            c
        } else {
            a
        }
    } else if a < c {
        a
    } else if b < c {
        c
    } else {
        b
    }
}

#[inline]
fn choose_pivot_median3<T: Copy + Ord>(data: &[T]) -> T {
    let len = data.len();
    let a = data[0];
    let b = data[len >> 1];
    let c = data[len - 1];
    median3(a, b, c)
}

#[inline]
fn choose_pivot_ninther<T: Copy + Ord>(data: &[T]) -> T {
    if data.len() < 64 {
        return choose_pivot_median3(data);
    }

    let step = data.len() / 8;
    let m1 = median3(data[0], data[step], data[step * 2]);
    let mid = data.len() / 2;
    let m2 = median3(data[mid - step], data[mid], data[mid + step]);
    let r = data.len() - 1;
    let m3 = median3(data[r - step * 2], data[r - step], data[r]);
    median3(m1, m2, m3)
}

#[inline]
fn partition_hoare<T: Copy + Ord>(data: &mut [T], pivot: T) -> usize {
    debug_assert!(!data.is_empty());

    let ptr = data.as_mut_ptr();
    let mut i = 0usize;
    let mut j = data.len() - 1;

    unsafe {
        loop {
            while *ptr.add(i) < pivot {
                i += 1;
            }

            while *ptr.add(j) > pivot {
                j -= 1;
            }

            if i >= j {
                return j;
            }

            ptr::swap(ptr.add(i), ptr.add(j));
            i += 1;
            j -= 1;
        }
    }
}

#[inline]
fn partition_3way<T: Copy + Ord>(data: &mut [T], pivot: T) -> (usize, usize) {
    let ptr = data.as_mut_ptr();
    let mut lt = 0usize;
    let mut i = 0usize;
    let mut gt = data.len();

    unsafe {
        while i < gt {
            let v = *ptr.add(i);
            if v < pivot {
                ptr::swap(ptr.add(i), ptr.add(lt));
                i += 1;
                lt += 1;
            } else if v > pivot {
                gt -= 1;
                ptr::swap(ptr.add(i), ptr.add(gt));
            } else {
                i += 1;
            }
        }
    }

    (lt, gt)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::sort;
    use crate::TUNING;

    fn assert_sorts_like_std(data: &[u64]) {
        let mut actual = data.to_vec();
        sort(&mut actual, &TUNING);

        let mut expected = data.to_vec();
        expected.sort_unstable();

        assert_eq!(actual, expected, "input_len={}", data.len());
    }

    #[test]
    fn patterns() {
        let cases: [Vec<u64>; 6] = [
            Vec::new(),
            vec![42],
            (0..3000).collect(),
            (0..3000).rev().collect(),
            vec![7; 4096],
            (0..3000).map(|i| i % 7).collect(),
        ];

        for case in &cases {
            assert_sorts_like_std(case);
        }
    }

    #[test]
    fn fixed_seed_random_cases() {
        let mut rng = StdRng::seed_from_u64(0x5E90_2026);
        for &size in &[2_usize, 23, 24, 25, 100, 2047, 2048, 4096] {
            let data: Vec<u64> = (0..size).map(|_| rng.random()).collect();
            assert_sorts_like_std(&data);
        }
    }
}
