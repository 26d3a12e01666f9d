use serde::{Deserialize, Serialize};

use super::tab::Tab;

/// Notifications broadcast by a mounted dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum DashboardEvent {
    /// The simulated P&L moved. `sequence` counts ticks since mount, starting at 1.
    Tick {
        sequence: u64,
        total_pnl: f64,
        daily_pnl: f64,
    },

    TabSelected { tab: Tab },

    /// The ticker stopped; no further events follow.
    Unmounted { ticks: u64 },
}
