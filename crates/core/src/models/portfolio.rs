use serde::{Deserialize, Serialize};

use super::performance::PerformanceSummary;
use super::position::Position;

/// The dashboard's single piece of mutable state.
///
/// Built once at mount with the defaults below. The ticker overwrites
/// `total_pnl` and `daily_pnl`; nothing else changes it unless the host
/// explicitly hands in positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioData {
    /// Total account value
    pub total_value: f64,

    /// Cash not tied up in positions
    pub available_cash: f64,

    pub total_pnl: f64,

    pub daily_pnl: f64,

    /// Open positions. Starts empty; panels fall back to sample data while it is.
    pub positions: Vec<Position>,

    pub performance: PerformanceSummary,
}

impl PortfolioData {
    /// Sum of the unrealized P&L of every held position.
    #[must_use]
    pub fn unrealized_pnl(&self) -> f64 {
        self.positions.iter().map(|p| p.pnl).sum()
    }
}

impl Default for PortfolioData {
    fn default() -> Self {
        Self {
            total_value: 25_000.0,
            available_cash: 16_737.0,
            total_pnl: 0.0,
            daily_pnl: 0.0,
            positions: Vec::new(),
            performance: PerformanceSummary::default(),
        }
    }
}
