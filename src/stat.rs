//! NaN-skipping reductions over a numeric column.

use crate::{frame::workers::Workers, helpers::parallel::map_chunks};

/// Number of non-NaN values in `data`.
pub fn count(data: &[f64], workers: Workers) -> usize {
    map_chunks(data, workers, |chunk| {
        chunk.iter().filter(|v| !v.is_nan()).count()
    })
    .into_iter()
    .sum()
}

/// Sum of the non-NaN values in `data`.
pub fn sum(data: &[f64], workers: Workers) -> f64 {
    map_chunks(data, workers, |chunk| {
        chunk.iter().filter(|v| !v.is_nan()).sum::<f64>()
    })
    .into_iter()
    .sum()
}

/// Mean of the non-NaN values in `data`, NaN if there are none.
pub fn mean(data: &[f64], workers: Workers) -> f64 {
    let n = count(data, workers);
    if n == 0 {
        return f64::NAN;
    }
    sum(data, workers) / n as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workers(n: usize) -> Workers {
        Workers::new(n).unwrap()
    }

    #[test]
    fn test_count_skips_nan() {
        let data = [1.0, f64::NAN, 3.0, f64::NAN, 5.0];
        for n in 1..=8 {
            assert_eq!(count(&data, workers(n)), 3);
        }
        assert_eq!(count(&[], workers(4)), 0);
    }

    #[test]
    fn test_sum_skips_nan() {
        let data = [1.5, f64::NAN, 2.5, 4.0];
        for n in 1..=8 {
            assert_eq!(sum(&data, workers(n)), 8.0);
        }
        assert_eq!(sum(&[], workers(2)), 0.0);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[2.0, f64::NAN, 4.0], workers(3)), 3.0);
        assert!(mean(&[f64::NAN, f64::NAN], workers(2)).is_nan());
        assert!(mean(&[], workers(2)).is_nan());
    }
}
