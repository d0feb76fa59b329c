//! Universe management for Hobart.
//!
//! A universe is a set of symbols. [`ScoredUniverse`] is a universe whose
//! members carry a snapshot, an infrastructure layer and a scorecard.

pub mod scored;

pub use scored::{ScoredUniverse, UniverseEntry};

/// Trait for stock universes.
pub trait Universe {
    /// Get all symbols in the universe.
    fn symbols(&self) -> Vec<String>;

    /// Check if a symbol is in the universe, ignoring ASCII case.
    fn contains(&self, symbol: &str) -> bool {
        self.symbols()
            .iter()
            .any(|s| s.eq_ignore_ascii_case(symbol))
    }

    /// Get the number of constituents.
    fn size(&self) -> usize {
        self.symbols().len()
    }
}

impl Universe for ScoredUniverse {
    fn symbols(&self) -> Vec<String> {
        self.entries()
            .iter()
            .map(|entry| entry.symbol().to_string())
            .collect()
    }
}

impl Universe for [String] {
    fn symbols(&self) -> Vec<String> {
        self.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hobart_data::FinancialSnapshot;

    #[test]
    fn test_universe_trait() {
        let universe = ScoredUniverse::from_snapshots(vec![
            FinancialSnapshot::new("NVDA"),
            FinancialSnapshot::new("AMD"),
        ]);

        assert!(universe.contains("nvda"));
        assert!(!universe.contains("NOTREAL"));
        assert_eq!(universe.size(), 2);
    }

    #[test]
    fn test_symbol_list_universe() {
        let symbols = vec!["AAPL".to_string(), "MSFT".to_string()];
        let universe: &[String] = &symbols;
        assert!(Universe::contains(universe, "msft"));
        assert_eq!(universe.size(), 2);
    }
}
