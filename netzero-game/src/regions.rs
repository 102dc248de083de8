use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Qualitative risk band attached to a region or indicator reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(()),
        }
    }
}

/// Climate snapshot for one world region, display-only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionClimate {
    pub region: String,
    pub temperature: f64,
    pub co2_level: f64,
    #[serde(default)]
    pub sea_level: f64,
    #[serde(default)]
    pub forest_cover: f64,
    #[serde(default)]
    pub renewable_energy: f64,
    #[serde(default)]
    pub risk_level: RiskLevel,
}

/// Container for the regional climate catalog and companion insight strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RegionData {
    pub regions: Vec<RegionClimate>,
    #[serde(default)]
    pub insights: Vec<String>,
}

impl RegionData {
    /// Create empty region data (useful for tests)
    #[must_use]
    pub fn empty() -> Self {
        Self {
            regions: Vec::new(),
            insights: Vec::new(),
        }
    }

    /// Load region data from a JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into valid region data.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn get_by_region(&self, region: &str) -> Option<&RegionClimate> {
        self.regions.iter().find(|r| r.region == region)
    }
}
