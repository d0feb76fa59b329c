//! Builder for assembling a snapshot from provider responses.

use crate::snapshot::{
    AnalystRatings, BasicFinancials, FinancialSnapshot, IncomeReport, Overview, PriceHistory,
    PriceQuote, PriceTargets,
};

/// Assembles a [`FinancialSnapshot`] from any mix of provider adapter outputs.
///
/// Later calls replace earlier sections, except for overviews, which are
/// merged field by field so that a second provider can fill gaps left by the
/// first.
#[derive(Debug, Default)]
pub struct SnapshotBuilder {
    snapshot: FinancialSnapshot,
}

impl SnapshotBuilder {
    /// Start a snapshot for `symbol`.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            snapshot: FinancialSnapshot::new(symbol),
        }
    }

    /// Set the current quote.
    pub fn quote(mut self, quote: PriceQuote) -> Self {
        self.snapshot.price = Some(quote);
        self
    }

    /// Add an overview, merging with any overview already set.
    pub fn overview(mut self, overview: Overview) -> Self {
        self.snapshot.overview = Some(match self.snapshot.overview.take() {
            Some(existing) => existing.merge(overview),
            None => overview,
        });
        self
    }

    /// Set the canonical metric map.
    pub fn basic_financials(mut self, financials: BasicFinancials) -> Self {
        self.snapshot.basic_financials = Some(financials);
        self
    }

    /// Set the price history.
    pub fn price_history(mut self, history: PriceHistory) -> Self {
        self.snapshot.price_history = Some(history);
        self
    }

    /// Set the income statement reports (most recent first).
    pub fn income_statement(mut self, reports: Vec<IncomeReport>) -> Self {
        self.snapshot.income_statement = reports;
        self
    }

    /// Set the analyst rating counts.
    pub fn analyst_ratings(mut self, ratings: AnalystRatings) -> Self {
        self.snapshot.analyst_ratings = Some(ratings);
        self
    }

    /// Set the analyst price targets.
    pub fn price_targets(mut self, targets: PriceTargets) -> Self {
        self.snapshot.price_targets = Some(targets);
        self
    }

    /// Finish the snapshot.
    pub fn build(self) -> FinancialSnapshot {
        self.snapshot
    }
}
