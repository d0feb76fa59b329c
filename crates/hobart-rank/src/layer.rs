//! Infrastructure layer classification.
//!
//! A keyword heuristic over the entity's industry, sector, description and
//! name. Keywords match whole words, optionally pluralized, so "chips"
//! matches `chip` but "Chipotle" does not. Layers are tested in a fixed
//! priority order and the first match wins, so an accelerator vendor that
//! also mentions networking stays in Compute & Accelerators.

use hobart_data::FinancialSnapshot;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Infrastructure layers, in classification priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Layer {
    /// GPUs, CPUs and custom silicon
    ComputeAccelerators,

    /// Switching, optics and interconnect
    NetworkingInterconnect,

    /// Power, cooling and facilities
    DataCenterInfrastructure,

    /// Memory and storage media
    StorageMemory,

    /// Software, cloud and internet platforms
    PlatformsSoftware,

    /// Anything that matches no other layer
    Other,
}

impl Layer {
    /// Every layer in priority order.
    pub const ALL: [Self; 6] = [
        Self::ComputeAccelerators,
        Self::NetworkingInterconnect,
        Self::DataCenterInfrastructure,
        Self::StorageMemory,
        Self::PlatformsSoftware,
        Self::Other,
    ];

    /// Display name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ComputeAccelerators => "Compute & Accelerators",
            Self::NetworkingInterconnect => "Networking & Interconnect",
            Self::DataCenterInfrastructure => "Data Center Infrastructure",
            Self::StorageMemory => "Storage & Memory",
            Self::PlatformsSoftware => "Platforms & Software",
            Self::Other => "Other/Diversified",
        }
    }

    /// Lower-case keywords that place an entity in this layer.
    pub const fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::ComputeAccelerators => &[
                "semiconductor",
                "gpu",
                "graphics processing",
                "accelerator",
                "processor",
                "cpu",
                "custom silicon",
                "asic",
                "fpga",
                "chip",
            ],
            Self::NetworkingInterconnect => &[
                "network",
                "networking",
                "ethernet",
                "interconnect",
                "infiniband",
                "optical",
                "photonic",
                "switching",
                "router",
                "communications equipment",
            ],
            Self::DataCenterInfrastructure => &[
                "data center",
                "datacenter",
                "cooling",
                "thermal management",
                "power management",
                "electrical equipment",
                "server",
                "real estate investment trust",
            ],
            Self::StorageMemory => &[
                "storage",
                "memory",
                "dram",
                "nand",
                "flash",
                "hard disk",
                "solid state",
            ],
            Self::PlatformsSoftware => &[
                "software",
                "cloud",
                "platform",
                "internet",
                "saas",
                "prepackaged",
                "computer programming",
            ],
            Self::Other => &[],
        }
    }

    /// Classify free text, case-insensitively.
    pub fn classify(text: &str) -> Self {
        let words = words(text);
        Self::ALL
            .into_iter()
            .find(|layer| {
                layer
                    .keywords()
                    .iter()
                    .any(|kw| contains_keyword(&words, kw))
            })
            .unwrap_or(Self::Other)
    }
}

/// Lower-case alphanumeric words of `text`.
fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// `word` is `keyword` or its plural.
fn matches_word(word: &str, keyword: &str) -> bool {
    word.strip_prefix(keyword)
        .is_some_and(|rest| matches!(rest, "" | "s" | "es"))
}

/// The keyword's words appear consecutively; only the last may be plural.
fn contains_keyword(words: &[String], keyword: &str) -> bool {
    let parts: Vec<&str> = keyword.split(' ').collect();
    let Some((last, head)) = parts.split_last() else {
        return false;
    };
    words.windows(parts.len()).any(|window| {
        window.iter().zip(head).all(|(word, part)| word == part)
            && window.last().is_some_and(|word| matches_word(word, last))
    })
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Classify from the descriptive fields, joined as
/// `industry sector description name`.
pub fn classify_layer(
    industry: Option<&str>,
    sector: Option<&str>,
    description: Option<&str>,
    name: Option<&str>,
) -> Layer {
    let text = [industry, sector, description, name]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");
    Layer::classify(&text)
}

/// Classify a snapshot from its overview.
pub fn classify_snapshot(snapshot: &FinancialSnapshot) -> Layer {
    snapshot.overview.as_ref().map_or(Layer::Other, |o| {
        classify_layer(
            o.industry.as_deref(),
            o.sector.as_deref(),
            o.description.as_deref(),
            o.name.as_deref(),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hobart_data::Overview;
    use rstest::rstest;

    #[rstest]
    #[case("SEMICONDUCTORS & RELATED DEVICES", Layer::ComputeAccelerators)]
    #[case("Designs Ethernet switching platforms for cloud networks", Layer::NetworkingInterconnect)]
    #[case("Liquid cooling for hyperscale sites", Layer::DataCenterInfrastructure)]
    #[case("Enterprise all-flash storage arrays", Layer::StorageMemory)]
    #[case("SERVICES-PREPACKAGED SOFTWARE", Layer::PlatformsSoftware)]
    #[case("Regional grocery chain", Layer::Other)]
    #[case("", Layer::Other)]
    #[case("Restaurants Chipotle Mexican Grill", Layer::Other)]
    #[case("Produces television drama series", Layer::Other)]
    #[case("Community bank in San Fernando Valley", Layer::Other)]
    #[case("Publisher of the Observer newspaper", Layer::Other)]
    #[case("Basic materials", Layer::Other)]
    #[case("Designs AI chips and ASICs", Layer::ComputeAccelerators)]
    #[case("Rack servers for hyperscalers", Layer::DataCenterInfrastructure)]
    #[case("DRAM and NAND flash", Layer::StorageMemory)]
    #[case("Hyperscale data-center campuses", Layer::DataCenterInfrastructure)]
    fn test_classify(#[case] text: &str, #[case] expected: Layer) {
        assert_eq!(Layer::classify(text), expected);
    }

    #[test]
    fn test_priority_order_wins() {
        // matches networking, storage and software; networking comes first
        let text = "Cloud storage software over optical interconnect";
        assert_eq!(Layer::classify(text), Layer::NetworkingInterconnect);
    }

    #[test]
    fn test_classify_layer_joins_fields() {
        let layer = classify_layer(None, Some("TECHNOLOGY"), None, Some("Acme GPU Corp"));
        assert_eq!(layer, Layer::ComputeAccelerators);
    }

    #[test]
    fn test_classify_snapshot() {
        let mut snapshot = FinancialSnapshot::new("VRT");
        assert_eq!(classify_snapshot(&snapshot), Layer::Other);

        snapshot.overview = Some(Overview {
            industry: Some("Electrical Equipment & Parts".into()),
            description: Some("Critical digital infrastructure for data center operators".into()),
            ..Overview::default()
        });
        assert_eq!(classify_snapshot(&snapshot), Layer::DataCenterInfrastructure);
    }

    #[test]
    fn test_display() {
        assert_eq!(Layer::Other.to_string(), "Other/Diversified");
    }
}
