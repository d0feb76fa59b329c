#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/hobart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod component;
pub mod composite;
pub mod extract;
pub mod growth;
pub mod moat;
pub mod momentum;
pub mod normalize;
pub mod profitability;
pub mod registry;
pub mod scorecard;
pub mod series;
pub mod valuation;

pub use component::{ComponentKind, ConfigurableComponent, ScoreComponent};
pub use composite::{ComponentScores, CompositeWeights, composite_score};
pub use moat::{MoatComponent, MoatDetails, MoatFactor};
pub use normalize::{average, clamp_score, normalize_percent, to_number};
pub use registry::{ComponentInfo, available_components, get_component_info};
pub use scorecard::{Scorecard, ScorecardEngine, ScoringConfig, compute_scorecard};
