use serde::{Deserialize, Serialize};

/// Risk appetite a strategy is configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Conservative,
    #[default]
    Moderate,
    Aggressive,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Conservative => write!(f, "Conservative"),
            RiskLevel::Moderate => write!(f, "Moderate"),
            RiskLevel::Aggressive => write!(f, "Aggressive"),
        }
    }
}

/// Symbols the bots watch when nothing else is configured.
pub const DEFAULT_SYMBOLS: [&str; 5] = ["BTC-USD", "ETH-USD", "ADA-USD", "SOL-USD", "DOT-USD"];

/// Aggregate trading counters.
///
/// These are stored figures, not derived from the position list or the
/// trade log. Use `ConsistencyService` to see where they disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSummary {
    pub total_trades: u32,

    pub winning_trades: u32,

    /// Stored win rate, in percent
    pub win_rate: f64,

    /// Largest peak-to-trough decline, in percent
    pub max_drawdown: f64,

    pub risk_level: RiskLevel,

    pub symbols_traded: Vec<String>,
}

impl PerformanceSummary {
    /// Win rate implied by the counters: winning / total × 100, or 0 with no trades.
    #[must_use]
    pub fn computed_win_rate(&self) -> f64 {
        if self.total_trades > 0 {
            f64::from(self.winning_trades) / f64::from(self.total_trades) * 100.0
        } else {
            0.0
        }
    }
}

impl Default for PerformanceSummary {
    fn default() -> Self {
        Self {
            total_trades: 0,
            winning_trades: 0,
            win_rate: 0.0,
            max_drawdown: 0.0,
            risk_level: RiskLevel::default(),
            symbols_traded: DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// One way a performance summary disagrees with the records displayed next to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConsistencyIssue {
    /// More winning trades than trades in total.
    WinningExceedsTotal { winning: u32, total: u32 },

    /// Stored win rate does not match winning / total.
    WinRateMismatch { stored: f64, computed: f64 },

    /// A symbol appears in the trade log but not in `symbols_traded`.
    UnlistedSymbol { symbol: String },

    /// The trade log holds more executed trades than `total_trades` counts.
    TradeCountBelowLog { counted: u32, logged: usize },
}

impl std::fmt::Display for ConsistencyIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConsistencyIssue::WinningExceedsTotal { winning, total } => {
                write!(f, "{winning} winning trades out of only {total}")
            }
            ConsistencyIssue::WinRateMismatch { stored, computed } => {
                write!(f, "win rate shows {stored:.2}% but counters give {computed:.2}%")
            }
            ConsistencyIssue::UnlistedSymbol { symbol } => {
                write!(f, "{symbol} was traded but is not listed as a traded symbol")
            }
            ConsistencyIssue::TradeCountBelowLog { counted, logged } => {
                write!(f, "{counted} trades counted but {logged} executed trades logged")
            }
        }
    }
}
