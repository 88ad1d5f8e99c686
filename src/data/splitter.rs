// ============================================================
// Layer 4 - Random Partition Splitter
// ============================================================
// Shuffles rows and cuts them into two disjoint partitions.
// Used twice by the dataset builder:
//
//   all rows      → train (90%) / test (10%)
//   train rows    → train / validation (val_fraction, 0 by default)
//
// No stratification: with few rows per class, a class can end
// up missing from the test partition. That is accepted.
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom.

use rand::{seq::SliceRandom, Rng};

/// Fraction of all rows that go to the training partition
pub const TRAIN_FRACTION: f64 = 0.9;

/// Shuffle `rows` with the thread RNG and split into
/// (first, second) where `first` holds `round(len * first_fraction)` rows.
pub fn split_partition<T>(rows: Vec<T>, first_fraction: f64) -> (Vec<T>, Vec<T>) {
    split_with_rng(rows, first_fraction, &mut rand::thread_rng())
}

/// Same as [`split_partition`] with a caller-supplied RNG, so a
/// seeded generator gives a reproducible partition.
pub fn split_with_rng<T, R: Rng + ?Sized>(
    mut rows:       Vec<T>,
    first_fraction: f64,
    rng:            &mut R,
) -> (Vec<T>, Vec<T>) {
    rows.shuffle(rng);

    let total    = rows.len();
    let fraction = first_fraction.clamp(0.0, 1.0);
    let split_at = ((total as f64) * fraction).round() as usize;
    let split_at = split_at.min(total);

    let second = rows.split_off(split_at);

    tracing::debug!(
        "Partitioned {} rows into {} / {}",
        total,
        rows.len(),
        second.len(),
    );

    (rows, second)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_ninety_ten_split_sizes() {
        let rows: Vec<usize>  = (0..100).collect();
        let (train, test)     = split_partition(rows, TRAIN_FRACTION);
        assert_eq!(train.len(), 90);
        assert_eq!(test.len(),  10);
    }

    #[test]
    fn test_sizes_sum_and_disjoint() {
        let rows: Vec<usize> = (0..37).collect();
        let (train, test)    = split_partition(rows, TRAIN_FRACTION);
        assert_eq!(train.len() + test.len(), 37);

        let mut all: Vec<usize> = train.iter().chain(test.iter()).copied().collect();
        all.sort_unstable();
        assert_eq!(all, (0..37).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_rows() {
        let (train, test) = split_partition(Vec::<usize>::new(), TRAIN_FRACTION);
        assert!(train.is_empty());
        assert!(test.is_empty());
    }

    #[test]
    fn test_full_fraction_leaves_second_empty() {
        let rows: Vec<usize> = (0..10).collect();
        let (train, val)     = split_partition(rows, 1.0);
        assert_eq!(train.len(), 10);
        assert!(val.is_empty());
    }

    #[test]
    fn test_seeded_split_is_reproducible() {
        let a = split_with_rng((0..20).collect::<Vec<u32>>(), 0.5, &mut StdRng::seed_from_u64(7));
        let b = split_with_rng((0..20).collect::<Vec<u32>>(), 0.5, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }
}
