use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An open position as shown on the dashboard.
///
/// P&L is stored, not derived on the fly, so a position can be displayed
/// exactly as it was captured. `mark_to_market` is the only thing that
/// recomputes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Instrument symbol, uppercased (e.g., "BTC-USD", "AAPL")
    pub symbol: String,

    pub entry_price: f64,

    /// Units held (always positive for a long position)
    pub quantity: f64,

    pub entry_time: DateTime<Utc>,

    /// Last observed price
    pub current_price: f64,

    /// Unrealized P&L in account currency
    pub pnl: f64,

    /// Unrealized P&L as a percentage of the entry price
    pub pnl_percent: f64,

    #[serde(default)]
    pub stop_loss: Option<f64>,

    #[serde(default)]
    pub take_profit: Option<f64>,
}

impl Position {
    /// Open a position at `entry_price`. Current price starts at the entry, so P&L is zero.
    pub fn open(
        symbol: impl Into<String>,
        entry_price: f64,
        quantity: f64,
        entry_time: DateTime<Utc>,
    ) -> Self {
        Self {
            symbol: symbol.into().to_uppercase(),
            entry_price,
            quantity,
            entry_time,
            current_price: entry_price,
            pnl: 0.0,
            pnl_percent: 0.0,
            stop_loss: None,
            take_profit: None,
        }
    }

    /// Attach stop-loss / take-profit levels (display only).
    pub fn with_limits(mut self, stop_loss: Option<f64>, take_profit: Option<f64>) -> Self {
        self.stop_loss = stop_loss;
        self.take_profit = take_profit;
        self
    }

    /// Builder form of [`Position::mark_to_market`].
    pub fn marked_at(mut self, price: f64) -> Self {
        self.mark_to_market(price);
        self
    }

    /// Update the current price and recompute P&L from it.
    pub fn mark_to_market(&mut self, price: f64) {
        self.current_price = price;
        self.pnl = (price - self.entry_price) * self.quantity;
        self.pnl_percent = if self.entry_price != 0.0 {
            (price - self.entry_price) / self.entry_price * 100.0
        } else {
            0.0
        };
    }

    /// Value of the position at the current price.
    #[must_use]
    pub fn market_value(&self) -> f64 {
        self.current_price * self.quantity
    }

    /// Value of the position at the entry price.
    #[must_use]
    pub fn cost_basis(&self) -> f64 {
        self.entry_price * self.quantity
    }
}
