//! Score-proportional allocation over the top-ranked entities.

use crate::ranking::ScoredEntity;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Default cap on the number of allocated positions.
pub const MAX_POSITIONS: usize = 8;

/// One allocated position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// Entity symbol
    pub symbol: String,
    /// Composite score
    pub composite: f64,
    /// Portfolio weight in percent
    pub weight: f64,
}

/// Allocate across the top `n` entities, with `n` capped at [`MAX_POSITIONS`].
pub fn allocate_top_n(entities: &[ScoredEntity], n: usize) -> Vec<Allocation> {
    allocate_with_cap(entities, n, MAX_POSITIONS)
}

/// Allocate across the top `min(n, cap)` entities by composite.
///
/// `cap` can only tighten the limit: the result never exceeds
/// [`MAX_POSITIONS`] positions.
///
/// Entities without a finite composite are skipped entirely. Weights are
/// `score / sum * 100`; if the selected scores sum to zero the weights are
/// equal.
pub fn allocate_with_cap(entities: &[ScoredEntity], n: usize, cap: usize) -> Vec<Allocation> {
    let mut scored: Vec<(&str, f64)> = entities
        .iter()
        .filter_map(|e| {
            e.composite
                .filter(|c| c.is_finite())
                .map(|c| (e.symbol.as_str(), c))
        })
        .collect();
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    scored.truncate(n.min(cap).min(MAX_POSITIONS));

    if scored.is_empty() {
        return Vec::new();
    }

    let sum: f64 = scored.iter().map(|(_, c)| c).sum();
    let equal = 100.0 / scored.len() as f64;
    scored
        .into_iter()
        .map(|(symbol, composite)| Allocation {
            symbol: symbol.to_string(),
            composite,
            weight: if sum > 0.0 {
                composite / sum * 100.0
            } else {
                equal
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn entities(scores: &[Option<f64>]) -> Vec<ScoredEntity> {
        scores
            .iter()
            .enumerate()
            .map(|(i, s)| ScoredEntity::new(format!("S{i}"), *s))
            .collect()
    }

    #[test]
    fn test_weights_proportional_to_score() {
        let allocation = allocate_top_n(&entities(&[Some(25.0), Some(75.0), None]), 5);
        assert_eq!(allocation.len(), 2);
        assert_eq!(allocation[0].symbol, "S1");
        assert_relative_eq!(allocation[0].weight, 75.0);
        assert_relative_eq!(allocation[1].weight, 25.0);
    }

    #[test]
    fn test_cap_at_eight() {
        let scores: Vec<_> = (1..=12).map(|i| Some(f64::from(i))).collect();
        let allocation = allocate_top_n(&entities(&scores), 20);
        assert_eq!(allocation.len(), MAX_POSITIONS);
        assert_eq!(allocation[0].symbol, "S11");
        let total: f64 = allocation.iter().map(|a| a.weight).sum();
        assert_relative_eq!(total, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_larger_cap_cannot_exceed_max_positions() {
        let scores: Vec<_> = (1..=12).map(|i| Some(f64::from(i))).collect();
        assert_eq!(allocate_with_cap(&entities(&scores), 20, 20).len(), MAX_POSITIONS);
        assert_eq!(allocate_with_cap(&entities(&scores), 20, 3).len(), 3);
    }

    #[test]
    fn test_zero_sum_falls_back_to_equal() {
        let allocation = allocate_top_n(&entities(&[Some(0.0), Some(0.0)]), 2);
        assert_relative_eq!(allocation[0].weight, 50.0);
        assert_relative_eq!(allocation[1].weight, 50.0);
    }

    #[test]
    fn test_nothing_to_allocate() {
        assert!(allocate_top_n(&entities(&[None, None]), 3).is_empty());
        assert!(allocate_top_n(&entities(&[Some(10.0)]), 0).is_empty());
    }
}
