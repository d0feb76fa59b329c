#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/hobart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod allocation;
pub mod layer;
pub mod percentile;
pub mod ranking;
pub mod tier;

pub use allocation::{Allocation, MAX_POSITIONS, allocate_top_n, allocate_with_cap};
pub use layer::{Layer, classify_layer, classify_snapshot};
pub use percentile::{percentile_for_rank, percentile_ranks};
pub use ranking::{RankedEntity, RankingConfig, ScoredEntity, rank_and_classify, rank_with_config};
pub use tier::{RecommendationTier, TierThresholds};
