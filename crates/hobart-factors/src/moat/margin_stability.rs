//! Margin Stability
//!
//! Penalizes dispersion of gross and operating margins across the most
//! recent income statements. Businesses with steady margins score near 100.

use crate::normalize::{average, clamp_score, population_std_dev, to_number};
use hobart_data::{FinancialSnapshot, IncomeReport};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration for the MarginStability factor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarginStabilityConfig {
    /// Most recent reports considered (default: 8)
    pub max_periods: usize,
    /// Valid periods required to score (default: 3)
    pub min_periods: usize,
    /// Points deducted per percentage point of std-dev (default: 10)
    pub penalty_scale: f64,
}

impl Default for MarginStabilityConfig {
    fn default() -> Self {
        Self {
            max_periods: 8,
            min_periods: 3,
            penalty_scale: 10.0,
        }
    }
}

/// Gross and operating margin of one report, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodMargins {
    /// Gross profit / revenue * 100
    pub gross: Option<f64>,
    /// Operating income / revenue * 100
    pub operating: Option<f64>,
}

impl PeriodMargins {
    /// Margins of a report; `None` when revenue is missing or zero.
    pub fn from_report(report: &IncomeReport) -> Option<Self> {
        let revenue = to_number(report.total_revenue.as_ref()).filter(|r| *r != 0.0)?;
        let margin = |value: Option<&serde_json::Value>| {
            to_number(value).map(|value| value / revenue * 100.0)
        };
        Some(Self {
            gross: margin(report.gross_profit.as_ref()),
            operating: margin(report.operating_income.as_ref()),
        })
    }
}

/// MarginStability scores how steady margins have been
#[derive(Debug, Clone, Default)]
pub struct MarginStabilityFactor {
    config: MarginStabilityConfig,
}

impl MarginStabilityFactor {
    /// Build with explicit parameters.
    pub const fn with_config(config: MarginStabilityConfig) -> Self {
        Self { config }
    }

    /// Current parameters.
    pub const fn config(&self) -> &MarginStabilityConfig {
        &self.config
    }

    /// Margins of every valid period among the most recent reports.
    pub fn valid_periods(&self, snapshot: &FinancialSnapshot) -> Vec<PeriodMargins> {
        snapshot
            .income_statement
            .iter()
            .take(self.config.max_periods)
            .filter_map(PeriodMargins::from_report)
            .collect()
    }

    /// Average of the gross and operating margin std-devs.
    pub fn penalty(&self, snapshot: &FinancialSnapshot) -> Option<f64> {
        let periods = self.valid_periods(snapshot);
        if periods.len() < self.config.min_periods {
            debug!(
                symbol = %snapshot.symbol,
                valid = periods.len(),
                required = self.config.min_periods,
                "too few income periods for margin stability"
            );
            return None;
        }
        let gross: Vec<f64> = periods.iter().filter_map(|p| p.gross).collect();
        let operating: Vec<f64> = periods.iter().filter_map(|p| p.operating).collect();
        average(&[population_std_dev(&gross), population_std_dev(&operating)])
    }

    /// Score in [0, 100].
    pub fn score(&self, snapshot: &FinancialSnapshot) -> Option<f64> {
        self.penalty(snapshot)
            .map(|penalty| clamp_score(100.0 - penalty * self.config.penalty_scale))
    }
}
