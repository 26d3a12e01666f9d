use serde::{Deserialize, Serialize};

use super::trade::TradeAction;

/// A recommendation shown on the AI Analysis panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisInsight {
    pub symbol: String,

    /// Recommended action
    pub signal: TradeAction,

    /// Confidence in 0..=1
    pub confidence: f64,

    /// One-line explanation of the signal
    pub reasoning: String,

    #[serde(default)]
    pub target_price: Option<f64>,
}

impl AnalysisInsight {
    pub fn new(
        symbol: impl Into<String>,
        signal: TradeAction,
        confidence: f64,
        reasoning: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into().to_uppercase(),
            signal,
            confidence,
            reasoning: reasoning.into(),
            target_price: None,
        }
    }

    pub fn with_target(mut self, target_price: f64) -> Self {
        self.target_price = Some(target_price);
        self
    }
}
