use serde::{Deserialize, Serialize};

use super::position::Position;

/// Risk limits displayed on the Risk Management panel.
///
/// All percentages are in percent (5.0 = 5 %). Nothing in this crate
/// enforces them; they are shown next to the current exposure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskLimits {
    pub max_positions: u32,

    /// Share of the portfolio committed to one new position
    pub position_size_pct: f64,

    pub stop_loss_pct: f64,

    pub take_profit_pct: f64,

    /// Drawdown at which the bots would stop trading
    pub max_drawdown_pct: f64,

    /// Largest share of the portfolio a single position should hold
    pub concentration_limit_pct: f64,
}

impl Default for RiskLimits {
    fn default() -> Self {
        Self {
            max_positions: 5,
            position_size_pct: 10.0,
            stop_loss_pct: 5.0,
            take_profit_pct: 15.0,
            max_drawdown_pct: 20.0,
            concentration_limit_pct: 30.0,
        }
    }
}

/// How much of the portfolio one position represents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskExposure {
    pub symbol: String,
    pub market_value: f64,
    pub concentration_pct: f64,
    /// Concentration is above `RiskLimits::concentration_limit_pct`
    pub over_limit: bool,
}

impl RiskExposure {
    /// Exposure of `position` relative to `portfolio_value`. A non-positive
    /// portfolio value yields 0 % concentration.
    pub fn of(position: &Position, portfolio_value: f64, limits: &RiskLimits) -> Self {
        let market_value = position.market_value();
        let concentration_pct = if portfolio_value > 0.0 {
            market_value / portfolio_value * 100.0
        } else {
            0.0
        };
        Self {
            symbol: position.symbol.clone(),
            market_value,
            concentration_pct,
            over_limit: concentration_pct > limits.concentration_limit_pct,
        }
    }
}
