use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::DashboardError;

/// What a trade log entry (or an analysis signal) recommends or records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeAction {
    Buy,
    Sell,
    Hold,
}

impl TradeAction {
    /// `true` for actions that move money (BUY / SELL).
    pub fn is_executed(&self) -> bool {
        !matches!(self, TradeAction::Hold)
    }
}

impl std::fmt::Display for TradeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeAction::Buy => write!(f, "BUY"),
            TradeAction::Sell => write!(f, "SELL"),
            TradeAction::Hold => write!(f, "HOLD"),
        }
    }
}

impl FromStr for TradeAction {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BUY" => Ok(TradeAction::Buy),
            "SELL" => Ok(TradeAction::Sell),
            "HOLD" => Ok(TradeAction::Hold),
            _ => Err(DashboardError::UnknownAction(s.to_string())),
        }
    }
}

/// A single entry in the read-only trade log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: Uuid,

    pub timestamp: DateTime<Utc>,

    /// Instrument symbol, uppercased
    pub symbol: String,

    pub action: TradeAction,

    pub price: f64,

    pub quantity: f64,

    /// price × quantity at the time of the trade
    pub value: f64,

    /// Model confidence in 0..=1, when the trade came from a signal
    #[serde(default)]
    pub confidence: Option<f64>,

    #[serde(default)]
    pub reasoning: Option<String>,

    /// Realized P&L; only closing trades carry one
    #[serde(default)]
    pub pnl: Option<f64>,
}

impl Trade {
    pub fn new(
        timestamp: DateTime<Utc>,
        symbol: impl Into<String>,
        action: TradeAction,
        price: f64,
        quantity: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp,
            symbol: symbol.into().to_uppercase(),
            action,
            price,
            quantity,
            value: price * quantity,
            confidence: None,
            reasoning: None,
            pnl: None,
        }
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    pub fn with_reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = Some(reasoning.into());
        self
    }

    pub fn with_pnl(mut self, pnl: f64) -> Self {
        self.pnl = Some(pnl);
        self
    }
}
