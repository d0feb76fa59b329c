//! Ranking and classification of scored entities.

use crate::allocation::MAX_POSITIONS;
use crate::percentile::percentile_ranks;
use crate::tier::{RecommendationTier, TierThresholds};
use hobart_factors::Scorecard;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Ranking parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RankingConfig {
    /// Tier cut-offs
    pub thresholds: TierThresholds,
    /// Upper bound on allocation positions (default: 8)
    pub max_positions: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            thresholds: TierThresholds::default(),
            max_positions: MAX_POSITIONS,
        }
    }
}

/// An entity with its composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredEntity {
    /// Entity symbol
    pub symbol: String,
    /// Composite score, absent when unscorable
    pub composite: Option<f64>,
}

impl ScoredEntity {
    /// Create a new scored entity.
    pub fn new(symbol: impl Into<String>, composite: Option<f64>) -> Self {
        Self {
            symbol: symbol.into(),
            composite,
        }
    }
}

impl From<&Scorecard> for ScoredEntity {
    fn from(card: &Scorecard) -> Self {
        Self::new(card.symbol.clone(), card.composite)
    }
}

/// A ranked entity.
///
/// `rank` and `percentile` are `None` exactly when the tier is
/// [`RecommendationTier::InsufficientData`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntity {
    /// Entity symbol
    pub symbol: String,
    /// Composite score
    pub composite: Option<f64>,
    /// 1-based rank, 1 is the highest composite
    pub rank: Option<usize>,
    /// Percentile in [0, 1]
    pub percentile: Option<f64>,
    /// Recommendation tier
    pub tier: RecommendationTier,
}

impl RankedEntity {
    /// Whether this entity took part in the ranking.
    pub const fn is_ranked(&self) -> bool {
        self.rank.is_some()
    }
}

/// Rank with the default thresholds.
pub fn rank_and_classify(entities: &[ScoredEntity]) -> Vec<RankedEntity> {
    rank_with_config(entities, &RankingConfig::default())
}

/// Rank and tier every entity.
///
/// Ranked entities come first in rank order, followed by the unscorable ones
/// in input order.
pub fn rank_with_config(entities: &[ScoredEntity], config: &RankingConfig) -> Vec<RankedEntity> {
    let scores: Vec<Option<f64>> = entities.iter().map(|e| e.composite).collect();
    let ranks = percentile_ranks(&scores);

    let mut ranked: Vec<RankedEntity> = entities
        .iter()
        .zip(ranks)
        .map(|(entity, rank)| {
            let percentile = rank.map(|(_, p)| p);
            RankedEntity {
                symbol: entity.symbol.clone(),
                composite: rank.and(entity.composite),
                rank: rank.map(|(r, _)| r),
                percentile,
                tier: config.thresholds.classify(percentile),
            }
        })
        .collect();

    let unranked = ranked.iter().filter(|e| !e.is_ranked()).count();
    if unranked > 0 {
        debug!(unranked, total = entities.len(), "entities without composite");
    }

    ranked.sort_by_key(|e| e.rank.unwrap_or(usize::MAX));
    ranked
}
