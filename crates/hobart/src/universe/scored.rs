//! A universe of scored snapshots.

use hobart_data::FinancialSnapshot;
use hobart_factors::{Scorecard, ScorecardEngine};
use hobart_output::EntitySummary;
use hobart_rank::{
    Allocation, Layer, RankedEntity, RankingConfig, ScoredEntity, allocate_with_cap,
    classify_snapshot, rank_with_config,
};
use std::collections::BTreeMap;
use tracing::debug;

/// One member of a [`ScoredUniverse`].
#[derive(Debug, Clone, PartialEq)]
pub struct UniverseEntry {
    /// Source snapshot.
    pub snapshot: FinancialSnapshot,
    /// Infrastructure layer.
    pub layer: Layer,
    /// Computed scorecard.
    pub scorecard: Scorecard,
}

impl UniverseEntry {
    /// Score and classify one snapshot.
    pub fn score(snapshot: FinancialSnapshot, engine: &ScorecardEngine) -> Self {
        let scorecard = engine.compute(&snapshot);
        let layer = classify_snapshot(&snapshot);
        Self {
            snapshot,
            layer,
            scorecard,
        }
    }

    /// Entity symbol.
    pub fn symbol(&self) -> &str {
        &self.snapshot.symbol
    }

    /// Ranking input for this entry.
    pub fn scored_entity(&self) -> ScoredEntity {
        ScoredEntity::from(&self.scorecard)
    }

    /// Report row for this entry.
    pub fn summary(&self) -> EntitySummary {
        EntitySummary::new(&self.snapshot, self.layer, self.scorecard.clone())
    }
}

/// Snapshots scored once, in input order.
#[derive(Debug, Clone, Default)]
pub struct ScoredUniverse {
    entries: Vec<UniverseEntry>,
}

impl ScoredUniverse {
    /// Score and classify every snapshot.
    pub fn new(snapshots: Vec<FinancialSnapshot>, engine: &ScorecardEngine) -> Self {
        let entries: Vec<UniverseEntry> = snapshots
            .into_iter()
            .map(|snapshot| UniverseEntry::score(snapshot, engine))
            .collect();
        debug!(entities = entries.len(), "scored universe");
        Self { entries }
    }

    /// Score with the default engine.
    pub fn from_snapshots(snapshots: Vec<FinancialSnapshot>) -> Self {
        Self::new(snapshots, &ScorecardEngine::default())
    }

    /// All entries in input order.
    pub fn entries(&self) -> &[UniverseEntry] {
        &self.entries
    }

    /// Whether the universe has no members.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for a symbol, ignoring ASCII case.
    pub fn get(&self, symbol: &str) -> Option<&UniverseEntry> {
        self.entries
            .iter()
            .find(|entry| entry.symbol().eq_ignore_ascii_case(symbol))
    }

    /// Scorecards in input order.
    pub fn scorecards(&self) -> Vec<&Scorecard> {
        self.entries.iter().map(|entry| &entry.scorecard).collect()
    }

    /// Ranking inputs in input order.
    pub fn scored_entities(&self) -> Vec<ScoredEntity> {
        self.entries.iter().map(UniverseEntry::scored_entity).collect()
    }

    /// Report rows in input order.
    pub fn summaries(&self) -> Vec<EntitySummary> {
        self.entries.iter().map(UniverseEntry::summary).collect()
    }

    /// Rank every entry.
    pub fn rank(&self, config: &RankingConfig) -> Vec<RankedEntity> {
        rank_with_config(&self.scored_entities(), config)
    }

    /// Allocate across the top `n` entries, capped by the config.
    pub fn allocate(&self, n: usize, config: &RankingConfig) -> Vec<Allocation> {
        allocate_with_cap(&self.scored_entities(), n, config.max_positions)
    }

    /// Sub-universe restricted to one layer.
    pub fn filter_layer(&self, layer: Layer) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|entry| entry.layer == layer)
                .cloned()
                .collect(),
        }
    }

    /// Symbols grouped by layer, in input order within each layer.
    pub fn group_by_layer(&self) -> BTreeMap<Layer, Vec<String>> {
        let mut groups: BTreeMap<Layer, Vec<String>> = BTreeMap::new();
        for entry in &self.entries {
            groups
                .entry(entry.layer)
                .or_default()
                .push(entry.symbol().to_string());
        }
        groups
    }

    /// Number of entries per layer.
    pub fn layer_counts(&self) -> BTreeMap<Layer, usize> {
        self.group_by_layer()
            .into_iter()
            .map(|(layer, symbols)| (layer, symbols.len()))
            .collect()
    }
}
