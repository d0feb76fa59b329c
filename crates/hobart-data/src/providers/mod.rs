//! Adapters from provider payloads to the canonical snapshot sections.
//!
//! Each adapter is a plain serde struct mirroring one provider endpoint, with
//! a `From` conversion into the matching [`crate::snapshot`] type. Provider
//! key drift is absorbed here so that metric extraction only ever sees the
//! canonical field names.

pub mod alpha_vantage;
pub mod finnhub;

pub use alpha_vantage::{
    AlphaVantageDailySeries, AlphaVantageGlobalQuote, AlphaVantageIncomeStatement,
    AlphaVantageOverview,
};
pub use finnhub::{
    FinnhubBasicFinancials, FinnhubPriceTarget, FinnhubProfile, FinnhubQuote,
    FinnhubRecommendation,
};
