use crate::{
    batch::{QualityDistribution, DEFAULT_PERIOD_MONTHS},
    customer_generator::CustomerBatchPreferences,
    types::SellerId,
};
use serde::{Deserialize, Serialize};

/// Run parameters for a seeding job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub seed: u64,
    #[serde(default = "default_customer_count")]
    pub customer_count: usize,
    #[serde(default = "default_review_count")]
    pub review_count: usize,
    pub seller_id: SellerId,
    #[serde(default)]
    pub quality_distribution: QualityDistribution,
    #[serde(default = "default_period_months")]
    pub timestamp_period_months: u32,
    #[serde(default)]
    pub customer_preferences: CustomerBatchPreferences,
}

fn default_customer_count() -> usize {
    10
}

fn default_review_count() -> usize {
    50
}

fn default_period_months() -> u32 {
    DEFAULT_PERIOD_MONTHS
}

impl GeneratorConfig {
    /// Load a JSON config file, e.g. `data/seed_config.json`.
    /// In tests, use GeneratorConfig::default_test().
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: GeneratorConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
        config
            .quality_distribution
            .validate()
            .map_err(|e| anyhow::anyhow!("{path}: {e}"))?;
        Ok(config)
    }

    /// Config with hardcoded defaults for use in unit tests.
    pub fn default_test() -> Self {
        Self {
            seed: 42,
            customer_count: default_customer_count(),
            review_count: default_review_count(),
            seller_id: "seller-123".into(),
            quality_distribution: QualityDistribution::default(),
            timestamp_period_months: DEFAULT_PERIOD_MONTHS,
            customer_preferences: CustomerBatchPreferences::default(),
        }
    }
}
