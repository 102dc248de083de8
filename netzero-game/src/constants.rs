//! Centralized balance and tuning constants for NetZero game logic.
//!
//! These values define the deterministic math for the core simulation.
//! Keeping them together ensures that gameplay can only be adjusted via
//! code changes reviewed in version control, rather than through external
//! JSON assets.

// Logging keys -------------------------------------------------------------
pub(crate) const LOG_DECISION_PREFIX: &str = "log.decision.";

// Timeline -----------------------------------------------------------------
pub(crate) const BASE_YEAR: i32 = 2024;
pub(crate) const YEAR_STEP: i32 = 2;
pub(crate) const STORY_PROJECTION_YEARS: i32 = 25;

// Indicator bounds ---------------------------------------------------------
pub(crate) const TEMPERATURE_MIN: f64 = 0.8;
pub(crate) const TEMPERATURE_MAX: f64 = 4.0;
pub(crate) const CO2_MIN: f64 = 350.0;
pub(crate) const CO2_MAX: f64 = 600.0;
pub(crate) const SHARE_MIN: f64 = 0.0;
pub(crate) const SHARE_MAX: f64 = 100.0;

// Initial world ------------------------------------------------------------
pub(crate) const INITIAL_TEMPERATURE: f64 = 1.2;
pub(crate) const INITIAL_CO2: f64 = 420.0;
pub(crate) const INITIAL_RENEWABLE: f64 = 28.0;
pub(crate) const INITIAL_ECONOMY: f64 = 50.0;
pub(crate) const INITIAL_ENVIRONMENT: f64 = 40.0;
pub(crate) const INITIAL_SOCIAL: f64 = 55.0;

// Renewable share tuning ---------------------------------------------------
pub(crate) const RENEWABLE_ENVIRONMENT_COUPLING: f64 = 0.5;

// Scoring ------------------------------------------------------------------
pub(crate) const TEMPERATURE_SCORE_BASELINE: f64 = 1.0;
pub(crate) const TEMPERATURE_SCORE_SLOPE: f64 = 30.0;
pub(crate) const CO2_SCORE_BASELINE: f64 = 350.0;
pub(crate) const CO2_SCORE_SLOPE: f64 = 0.4;
pub(crate) const WEIGHT_TEMPERATURE: f64 = 0.3;
pub(crate) const WEIGHT_CO2: f64 = 0.3;
pub(crate) const WEIGHT_RENEWABLE: f64 = 0.2;
pub(crate) const WEIGHT_ENVIRONMENT: f64 = 0.2;

// Outcome thresholds -------------------------------------------------------
pub(crate) const OUTCOME_NET_ZERO_MIN: i32 = 80;
pub(crate) const OUTCOME_ON_TRACK_MIN: i32 = 60;
pub(crate) const OUTCOME_MIXED_MIN: i32 = 40;

// Display severity thresholds ----------------------------------------------
pub(crate) const TEMPERATURE_SEVERITY_CRITICAL: f64 = 2.0;
pub(crate) const TEMPERATURE_SEVERITY_HIGH: f64 = 1.5;
pub(crate) const RENEWABLE_SEVERITY_LOW: f64 = 70.0;
pub(crate) const RENEWABLE_SEVERITY_MEDIUM: f64 = 40.0;
pub(crate) const SCORE_SEVERITY_LOW: i32 = 70;
pub(crate) const SCORE_SEVERITY_MEDIUM: i32 = 40;
