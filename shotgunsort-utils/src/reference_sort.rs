//! Produces the ascending target every shuffled candidate is compared against.

use rand::Rng;

/// Values are drawn from `0..ELEMENT_UPPER_BOUND`.
pub const ELEMENT_UPPER_BOUND: i32 = 100;

pub fn random_array<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<i32> {
    (0..len).map(|_| rng.gen_range(0..ELEMENT_UPPER_BOUND)).collect()
}

/// Sorts a copy of `array`, leaving the caller's buffer untouched.
pub fn sorted_copy(array: &[i32]) -> Vec<i32> {
    let mut target = array.to_vec();
    quicksort(&mut target);
    target
}

/// In-place quicksort. Recursion depth is bounded by the array length, which
/// never exceeds `MAX_ARRAY_LEN` here.
pub fn quicksort(arr: &mut [i32]) {
    if arr.len() <= 1 {
        return;
    }

    let pivot_idx = partition(arr);
    let (left, right) = arr.split_at_mut(pivot_idx);
    quicksort(left);
    quicksort(&mut right[1..]);
}

fn partition(arr: &mut [i32]) -> usize {
    let last = arr.len() - 1;
    let pivot = arr[last];
    let mut store = 0;
    for j in 0..last {
        if arr[j] <= pivot {
            arr.swap(store, j);
            store += 1;
        }
    }
    arr.swap(store, last);
    store
}
