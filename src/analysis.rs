// Statistics extracted from one sample sequence: the arithmetic mean
// and a window-bounded cycle length.

#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

/// Per-sequence statistics, computed once per (seed, modulus) pair.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct SequenceStats {
    /// Arithmetic mean of the sequence.
    pub average_value: f64,
    /// Window-bounded cycle length, in 1 ..= sequence length.
    pub cycle_length: usize,
}

/// Distance from the last element back to its nearest earlier
/// occurrence, or the sequence length if no earlier occurrence exists
/// in the sampled window. Sequences of length 0 or 1 return their
/// length unchanged.
///
/// This is an approximation of the generator's period, bounded by the
/// window: it is not a proven minimal period and is only meaningful as
/// a comparative indicator between sequences of equal length.
pub fn cycle_length(sequence: &[u64]) -> usize {
    if sequence.len() <= 1 {
        return sequence.len();
    }

    let last_index = sequence.len() - 1;
    let target = sequence[last_index];

    for i in (0 .. last_index).rev() {
        if sequence[i] == target {
            return last_index - i;
        }
    }

    sequence.len()
}

/// Arithmetic mean over a single running f64 accumulator.
/// Summation is strictly left to right so rounding is reproducible.
pub fn mean(sequence: &[u64]) -> f64 {
    let mut sum = 0.0;
    for &value in sequence {
        sum += value as f64;
    }
    sum / sequence.len() as f64
}

/// Computes both statistics for one sample sequence.
pub fn analyze(sequence: &[u64]) -> SequenceStats {
    SequenceStats {
        average_value: mean(sequence),
        cycle_length: cycle_length(sequence),
    }
}

#[cfg(test)] mod tests {
    use super::*;

    #[test] fn cycle_length_of_degenerate_windows() {
        assert_eq!(0, cycle_length(&[]));
        assert_eq!(1, cycle_length(&[42]));
    }

    #[test] fn cycle_length_finds_nearest_prior_duplicate() {
        // Last element 2 recurs at index 1, distance 3.
        assert_eq!(3, cycle_length(&[1, 2, 4, 8, 2]));
        // Nearest of several occurrences wins.
        assert_eq!(1, cycle_length(&[9, 9, 9, 9]));
    }

    #[test] fn cycle_length_without_recurrence_is_window_length() {
        assert_eq!(5, cycle_length(&[1, 2, 3, 4, 5]));
    }

    #[test] fn cycle_length_bounds() {
        let mut lcg = crate::Lcg::new(0, 5, 9, 97);
        let sequence: Vec<u64> = (0 .. 1000).map(|_| lcg.next(97)).collect();
        let length = cycle_length(&sequence);
        assert!(length >= 1 && length <= sequence.len());
    }

    #[test] fn mean_of_constant_sequence_is_the_constant() {
        let sequence = [7u64; 1000];
        assert!((mean(&sequence) - 7.0).abs() < 1e-9);
    }

    #[test] fn mean_matches_left_to_right_reference() {
        let sequence: Vec<u64> = (0 .. 10_000).map(|i| i * 3 + 1).collect();
        let mut reference = 0.0f64;
        for &value in &sequence {
            reference += value as f64;
        }
        reference /= sequence.len() as f64;
        assert!((mean(&sequence) - reference).abs() < 1e-9);
    }

    #[test] fn analyze_combines_both_statistics() {
        let stats = analyze(&[1, 2, 1, 2]);
        assert_eq!(2, stats.cycle_length);
        assert!((stats.average_value - 1.5).abs() < 1e-9);
    }
}
