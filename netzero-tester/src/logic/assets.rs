use std::fs;
use std::path::{Path, PathBuf};

use netzero_game::{Decision, DecisionData, DecisionOption, Impact, RegionData};

/// Collection of immutable data required to run a sweep.
#[derive(Debug, Clone)]
pub struct TesterAssets {
    pub catalog: DecisionData,
    pub regions: RegionData,
}

impl TesterAssets {
    /// Load the repository assets, falling back to a built-in catalog when
    /// the files are missing or malformed.
    #[must_use]
    pub fn load_default() -> Self {
        Self::load_from(&Self::assets_data_root())
    }

    /// Load assets from an explicit directory, with the same fallbacks.
    #[must_use]
    pub fn load_from(dir: &Path) -> Self {
        let catalog = Self::load_catalog(dir).unwrap_or_else(|| {
            log::warn!("decisions.json unavailable, using fallback catalog");
            Self::fallback_catalog()
        });
        let regions = Self::load_regions(dir).unwrap_or_else(|| {
            log::warn!("regions.json unavailable, region report will be empty");
            RegionData::empty()
        });
        Self { catalog, regions }
    }

    fn assets_data_root() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("assets")
            .join("data")
    }

    fn load_catalog(dir: &Path) -> Option<DecisionData> {
        let json = fs::read_to_string(dir.join("decisions.json")).ok()?;
        let catalog = DecisionData::from_json(&json).ok()?;
        if catalog.is_empty() { None } else { Some(catalog) }
    }

    fn load_regions(dir: &Path) -> Option<RegionData> {
        let json = fs::read_to_string(dir.join("regions.json")).ok()?;
        RegionData::from_json(&json).ok()
    }

    /// Minimal in-code catalog so sweeps still run without asset files.
    #[must_use]
    pub fn fallback_catalog() -> DecisionData {
        let option = |id: &str, text: &str, impact: Impact| DecisionOption {
            id: id.to_string(),
            text: text.to_string(),
            impact,
        };
        DecisionData::from_decisions(vec![Decision {
            id: "fallback-energy".to_string(),
            title: "Energy Mix".to_string(),
            description: "Pick the direction of the global energy mix.".to_string(),
            options: vec![
                option(
                    "invest",
                    "Invest in renewables",
                    Impact {
                        temperature: -0.2,
                        co2: -10.0,
                        economy: -5.0,
                        environment: 20.0,
                        social: 0.0,
                    },
                ),
                option(
                    "defer",
                    "Defer the transition",
                    Impact {
                        temperature: 0.1,
                        co2: 5.0,
                        economy: 5.0,
                        environment: -8.0,
                        social: 2.0,
                    },
                ),
            ],
            consequences: Vec::new(),
        }])
    }
}
