use crate::error::{PulseError, PulseResult};
use serde::Deserialize;

/// Root application configuration. Loaded from environment variables
/// with the prefix `CAMPAIGN_PULSE__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Currency label for monetary metrics (spend, CPC, CPA).
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Knobs for the synthetic demonstration harness.
#[derive(Debug, Clone, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "default_demo_rows")]
    pub rows: usize,
    #[serde(default = "default_demo_revenue")]
    pub revenue: f64,
}

// Default functions
fn default_currency() -> String {
    "USD".to_string()
}
fn default_demo_rows() -> usize {
    30
}
fn default_demo_revenue() -> f64 {
    120_000.0
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            rows: default_demo_rows(),
            revenue: default_demo_revenue(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            demo: DemoConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> PulseResult<Self> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("CAMPAIGN_PULSE")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| PulseError::Config(e.to_string()))?;
        config
            .try_deserialize()
            .map_err(|e| PulseError::Config(e.to_string()))
    }
}
