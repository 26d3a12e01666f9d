use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::portfolio::PortfolioData;
use crate::models::settings::DashboardSettings;
use crate::sources::jitter::JitterSource;

/// What one tick changed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickDelta {
    pub total_delta: f64,
    pub daily_delta: f64,
    /// `total_pnl` after the tick
    pub total_pnl: f64,
    /// `daily_pnl` after the tick
    pub daily_pnl: f64,
}

/// Random-walks the two P&L fields of the dashboard state.
///
/// Unbounded: no clamping, no mean reversion. Repeated ticks can drift
/// the figures arbitrarily far from where they started.
pub struct PnlSimulator {
    total_width: f64,
    daily_width: f64,
}

impl PnlSimulator {
    pub fn new(total_width: f64, daily_width: f64) -> Self {
        Self {
            total_width,
            daily_width,
        }
    }

    pub fn from_settings(settings: &DashboardSettings) -> Self {
        Self::new(settings.total_pnl_jitter, settings.daily_pnl_jitter)
    }

    /// Add one jitter sample to `total_pnl` and one to `daily_pnl`.
    /// No other field is touched.
    pub fn apply_tick(
        &self,
        portfolio: &mut PortfolioData,
        jitter: &mut dyn JitterSource,
    ) -> TickDelta {
        let total_delta = jitter.sample(self.total_width);
        let daily_delta = jitter.sample(self.daily_width);

        portfolio.total_pnl += total_delta;
        portfolio.daily_pnl += daily_delta;

        debug!(
            total_delta,
            daily_delta,
            total_pnl = portfolio.total_pnl,
            daily_pnl = portfolio.daily_pnl,
            "applied P&L jitter"
        );

        TickDelta {
            total_delta,
            daily_delta,
            total_pnl: portfolio.total_pnl,
            daily_pnl: portfolio.daily_pnl,
        }
    }
}

impl Default for PnlSimulator {
    fn default() -> Self {
        Self::from_settings(&DashboardSettings::default())
    }
}
