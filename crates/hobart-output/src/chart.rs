//! Chart specifications embedded in markdown reports.
//!
//! A chart is serialized to JSON and wrapped in a fenced block tagged
//! `chart`, which downstream renderers pick up.

use hobart_data::FinancialSnapshot;
use hobart_factors::series::{close_series, downsample, filter_series, format_date_label, sort_by_date};
use hobart_rank::{Allocation, RankedEntity};
use serde::{Deserialize, Serialize};

/// Points kept in a price chart.
pub const DEFAULT_PRICE_POINTS: usize = 60;

/// Chart type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Line chart
    Line,
    /// Bar chart
    Bar,
    /// Pie chart
    Pie,
}

/// One series of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Series label
    pub label: String,
    /// Values, aligned with the chart labels
    pub data: Vec<f64>,
}

/// A renderable chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Chart type
    #[serde(rename = "type")]
    pub kind: ChartKind,
    /// Chart title
    pub title: String,
    /// X-axis or slice labels
    pub labels: Vec<String>,
    /// Series
    pub datasets: Vec<Dataset>,
}

impl ChartSpec {
    /// Create a chart with a single dataset.
    pub fn single(
        kind: ChartKind,
        title: impl Into<String>,
        labels: Vec<String>,
        label: impl Into<String>,
        data: Vec<f64>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            labels,
            datasets: vec![Dataset {
                label: label.into(),
                data,
            }],
        }
    }

    /// Fenced `chart` block containing the JSON spec.
    pub fn to_block(&self) -> Result<String, serde_json::Error> {
        let json = serde_json::to_string(self)?;
        Ok(format!("```chart\n{json}\n```\n"))
    }

    /// Closing-price line chart, or `None` with fewer than two usable points.
    pub fn price_history(snapshot: &FinancialSnapshot, max_points: usize) -> Option<Self> {
        let sorted = sort_by_date(snapshot.prices());
        let (labels, values) = close_series(&sorted);
        let (labels, values) = filter_series(&labels, &values);
        if values.len() < 2 {
            return None;
        }
        let labels = downsample(&labels, max_points)
            .iter()
            .map(|raw| format_date_label(raw))
            .collect();
        let values = downsample(&values, max_points);
        Some(Self::single(
            ChartKind::Line,
            format!("{} price", snapshot.symbol),
            labels,
            "Close",
            values,
        ))
    }

    /// Bar chart of composite scores for ranked entities.
    pub fn composite_bars(title: impl Into<String>, ranked: &[RankedEntity]) -> Option<Self> {
        let (labels, data): (Vec<String>, Vec<f64>) = ranked
            .iter()
            .filter_map(|e| e.composite.map(|c| (e.symbol.clone(), c)))
            .unzip();
        (!data.is_empty()).then(|| Self::single(ChartKind::Bar, title, labels, "Composite", data))
    }

    /// Pie chart of allocation weights.
    pub fn allocation_pie(title: impl Into<String>, allocations: &[Allocation]) -> Option<Self> {
        if allocations.is_empty() {
            return None;
        }
        let labels = allocations.iter().map(|a| a.symbol.clone()).collect();
        let data = allocations
            .iter()
            .map(|a| (a.weight * 100.0).round() / 100.0)
            .collect();
        Some(Self::single(ChartKind::Pie, title, labels, "Weight %", data))
    }
}
