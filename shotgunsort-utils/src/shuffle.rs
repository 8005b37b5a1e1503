use rand::Rng;

/// Swaps every position with one picked uniformly from the whole slice.
///
/// Not Fisher-Yates: the pick range never shrinks and may land on the index
/// itself, so the permutations are not equally likely.
pub fn shotgun_shuffle<T, R: Rng + ?Sized>(array: &mut [T], rng: &mut R) {
    let len = array.len();
    for i in 0..len {
        let j = rng.gen_range(0..len);
        array.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_shuffle_empty_and_single() {
        let mut rng = StdRng::seed_from_u64(1);

        let mut empty: Vec<i32> = vec![];
        shotgun_shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut single = vec![42];
        shotgun_shuffle(&mut single, &mut rng);
        assert_eq!(single, vec![42]);
    }

    #[test]
    fn test_shuffle_preserves_elements() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut array = vec![4, 8, 15, 16, 23, 42, 42];
        for _ in 0..1000 {
            shotgun_shuffle(&mut array, &mut rng);
            let mut check = array.clone();
            check.sort();
            assert_eq!(check, vec![4, 8, 15, 16, 23, 42, 42]);
        }
    }

    #[test]
    fn test_shuffle_reaches_every_permutation() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut seen = std::collections::HashSet::new();
        let mut array = vec![1, 2, 3];
        for _ in 0..2000 {
            shotgun_shuffle(&mut array, &mut rng);
            seen.insert(array.clone());
        }
        assert_eq!(seen.len(), 6);
    }
}
