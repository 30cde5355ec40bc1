// Chart settings for the demo binary, optionally loaded from a JSON file.
use std::path::Path;

use serde::Deserialize;
use shared::models::MaSettings;

use crate::error::EngineError;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ChartSettings {
    /// Number of sample candles to generate.
    pub bars: usize,
    /// Seed for the sample data generator.
    pub seed: u64,
    /// Moving-average slots, rendered in order.
    pub overlays: Vec<MaSettings>,
}

impl Default for ChartSettings {
    fn default() -> Self {
        ChartSettings {
            bars: 300,
            seed: 42,
            overlays: MaSettings::chart_defaults(),
        }
    }
}

impl ChartSettings {
    pub fn from_json(raw: &str) -> Result<Self, EngineError> {
        let settings: ChartSettings = serde_json::from_str(raw)?;
        if settings.bars == 0 {
            return Err(EngineError::ConfigError(
                "bars must be at least 1".to_string(),
            ));
        }
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}
