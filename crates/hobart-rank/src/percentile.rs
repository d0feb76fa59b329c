//! Percentile ranks over optional composite scores.

use std::cmp::Ordering;

/// Percentile of a 1-based rank among `count` ranked entities.
///
/// Rank 1 maps to 1.0 and the last rank to 0.0; a lone entity is 1.0.
pub fn percentile_for_rank(rank: usize, count: usize) -> f64 {
    if count <= 1 {
        return 1.0;
    }
    1.0 - (rank.saturating_sub(1)) as f64 / (count - 1) as f64
}

/// Rank and percentile for each score, in input order.
///
/// Absent and non-finite scores get `None` and are excluded from the count.
/// Ranking is descending; equal scores keep their input order.
pub fn percentile_ranks(scores: &[Option<f64>]) -> Vec<Option<(usize, f64)>> {
    let mut order: Vec<(usize, f64)> = scores
        .iter()
        .enumerate()
        .filter_map(|(index, score)| score.filter(|s| s.is_finite()).map(|s| (index, s)))
        .collect();
    order.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let count = order.len();
    let mut ranks = vec![None; scores.len()];
    for (position, (index, _)) in order.into_iter().enumerate() {
        let rank = position + 1;
        ranks[index] = Some((rank, percentile_for_rank(rank, count)));
    }
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case(1, 3, 1.0)]
    #[case(2, 3, 0.5)]
    #[case(3, 3, 0.0)]
    #[case(1, 1, 1.0)]
    #[case(2, 5, 0.75)]
    fn test_percentile_for_rank(#[case] rank: usize, #[case] count: usize, #[case] expected: f64) {
        assert_relative_eq!(percentile_for_rank(rank, count), expected);
    }

    #[test]
    fn test_percentile_ranks_skip_absent() {
        let ranks = percentile_ranks(&[Some(40.0), None, Some(80.0), Some(f64::NAN), Some(60.0)]);
        assert_eq!(ranks[0], Some((3, 0.0)));
        assert_eq!(ranks[1], None);
        assert_eq!(ranks[2], Some((1, 1.0)));
        assert_eq!(ranks[3], None);
        assert_eq!(ranks[4], Some((2, 0.5)));
    }

    #[test]
    fn test_ties_keep_input_order() {
        let ranks = percentile_ranks(&[Some(50.0), Some(70.0), Some(50.0)]);
        assert_eq!(ranks[1].map(|r| r.0), Some(1));
        assert_eq!(ranks[0].map(|r| r.0), Some(2));
        assert_eq!(ranks[2].map(|r| r.0), Some(3));
    }

    #[test]
    fn test_empty() {
        assert!(percentile_ranks(&[]).is_empty());
        assert_eq!(percentile_ranks(&[None]), vec![None]);
    }
}
