//! Growth component
//!
//! Average of revenue growth and EPS growth, both in percent, clamped to
//! [0, 100]. Shrinking businesses score 0; anything above 100% growth
//! saturates.

use crate::component::{ComponentKind, ScoreComponent};
use crate::extract::{eps_growth, revenue_growth};
use crate::normalize::{average, clamp_score};
use hobart_data::FinancialSnapshot;

/// Growth scores top-line and bottom-line growth
#[derive(Debug, Default, Clone, Copy)]
pub struct GrowthComponent;

impl ScoreComponent for GrowthComponent {
    fn name(&self) -> &str {
        "growth"
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::Growth
    }

    fn score(&self, snapshot: &FinancialSnapshot) -> Option<f64> {
        average(&[revenue_growth(snapshot), eps_growth(snapshot)]).map(clamp_score)
    }
}
