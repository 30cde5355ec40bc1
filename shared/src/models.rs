use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One candle of the price series. Timestamps are strictly increasing across
/// a series; only `close` feeds the moving averages, the rest is chart data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// Moving-average variant selectable per overlay.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum MaType {
    Sma,
    Ema,
    Wma,
}

impl std::fmt::Display for MaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaType::Sma => write!(f, "SMA"),
            MaType::Ema => write!(f, "EMA"),
            MaType::Wma => write!(f, "WMA"),
        }
    }
}

/// User-adjustable settings for one moving-average overlay. Owned by the
/// presentation layer; the engine reads `period`, `ma_type` and `enabled`
/// per invocation. `color` is carried through untouched for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaSettings {
    pub period: usize,
    #[serde(rename = "type")]
    pub ma_type: MaType,
    pub color: String,
    pub enabled: bool,
}

impl MaSettings {
    /// The default chart configuration: three enabled SMA slots at
    /// periods 20, 50 and 200.
    pub fn chart_defaults() -> Vec<MaSettings> {
        vec![
            MaSettings {
                period: 20,
                ma_type: MaType::Sma,
                color: "#2962FF".to_string(),
                enabled: true,
            },
            MaSettings {
                period: 50,
                ma_type: MaType::Sma,
                color: "#FF6D00".to_string(),
                enabled: true,
            },
            MaSettings {
                period: 200,
                ma_type: MaType::Sma,
                color: "#00E676".to_string(),
                enabled: true,
            },
        ]
    }
}

/// One computed moving-average value, aligned to the source candle that
/// closed its window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaPoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

/// A chart-ready overlay: the computed series plus the identity the renderer
/// needs to draw and label it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaOverlay {
    pub name: String,
    pub parameters: serde_json::Value,
    pub color: String,
    pub points: Vec<MaPoint>,
}
