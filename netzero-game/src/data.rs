use serde::{Deserialize, Serialize};

/// Signed indicator deltas applied when an option is selected
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Impact {
    #[serde(default)]
    pub temperature: f64,
    #[serde(default)]
    pub co2: f64,
    #[serde(default)]
    pub economy: f64,
    #[serde(default)]
    pub environment: f64,
    #[serde(default)]
    pub social: f64,
}

/// One selectable choice within a decision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionOption {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub impact: Impact,
}

/// A policy choice point in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub options: Vec<DecisionOption>,
    #[serde(default)]
    pub consequences: Vec<String>,
}

impl Decision {
    /// Find an option of this decision by id.
    #[must_use]
    pub fn option_by_id(&self, option_id: &str) -> Option<&DecisionOption> {
        self.options.iter().find(|opt| opt.id == option_id)
    }
}

/// Container for the full decision catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DecisionData {
    pub decisions: Vec<Decision>,
}

impl DecisionData {
    /// Create an empty catalog (useful for tests)
    #[must_use]
    pub fn empty() -> Self {
        Self {
            decisions: Vec::new(),
        }
    }

    /// Load a decision catalog from a JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into valid catalog data.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Create a catalog from pre-parsed decisions
    #[must_use]
    pub fn from_decisions(decisions: Vec<Decision>) -> Self {
        Self { decisions }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }
}
