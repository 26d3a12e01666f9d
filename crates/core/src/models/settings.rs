use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::tab::Tab;
use crate::errors::DashboardError;

/// User-configurable dashboard settings, stored as JSON.
///
/// Fields missing from a settings file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Milliseconds between two ticks of the simulated P&L.
    pub tick_interval_ms: u64,

    /// Width of the uniform window each tick adds to `total_pnl`
    /// (100.0 means a delta in [-50, 50)).
    pub total_pnl_jitter: f64,

    /// Width of the uniform window each tick adds to `daily_pnl`.
    pub daily_pnl_jitter: f64,

    /// Prefix for monetary values (e.g., "$", "€").
    pub currency_symbol: String,

    /// Tab shown right after mount.
    pub initial_tab: Tab,
}

impl DashboardSettings {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Check every field; the error names the first offending one.
    pub fn validate(&self) -> Result<(), DashboardError> {
        if self.tick_interval_ms == 0 {
            return Err(DashboardError::InvalidSettings(
                "tick_interval_ms must be greater than zero".into(),
            ));
        }
        for (name, width) in [
            ("total_pnl_jitter", self.total_pnl_jitter),
            ("daily_pnl_jitter", self.daily_pnl_jitter),
        ] {
            if !width.is_finite() || width < 0.0 {
                return Err(DashboardError::InvalidSettings(format!(
                    "{name} must be a finite, non-negative number (got {width})"
                )));
            }
        }
        if self.currency_symbol.trim().is_empty() {
            return Err(DashboardError::InvalidSettings(
                "currency_symbol must not be empty".into(),
            ));
        }
        Ok(())
    }
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            tick_interval_ms: 5_000,
            total_pnl_jitter: 100.0,
            daily_pnl_jitter: 50.0,
            currency_symbol: "$".to_string(),
            initial_tab: Tab::default(),
        }
    }
}
