use std::collections::BTreeSet;

use tracing::warn;

use crate::models::performance::{ConsistencyIssue, PerformanceSummary};
use crate::models::trade::Trade;

/// Largest gap (in percentage points) tolerated between the stored and computed win rate.
const WIN_RATE_TOLERANCE: f64 = 0.1;

/// Cross-checks a performance summary against the trade log shown beside it.
///
/// Read-only: it reports disagreements and never rewrites the summary. The
/// panels keep displaying the stored figures either way.
pub struct ConsistencyService;

impl ConsistencyService {
    pub fn new() -> Self {
        Self
    }

    /// Every disagreement between `summary` and `trades`, in a stable order:
    /// counter checks first, then unlisted symbols alphabetically, then the
    /// trade count.
    pub fn audit(&self, summary: &PerformanceSummary, trades: &[Trade]) -> Vec<ConsistencyIssue> {
        let mut issues = Vec::new();

        if summary.winning_trades > summary.total_trades {
            issues.push(ConsistencyIssue::WinningExceedsTotal {
                winning: summary.winning_trades,
                total: summary.total_trades,
            });
        }

        let computed = summary.computed_win_rate();
        if (summary.win_rate - computed).abs() > WIN_RATE_TOLERANCE {
            issues.push(ConsistencyIssue::WinRateMismatch {
                stored: summary.win_rate,
                computed,
            });
        }

        let listed: BTreeSet<&str> = summary.symbols_traded.iter().map(String::as_str).collect();
        let logged: BTreeSet<&str> = trades
            .iter()
            .filter(|t| t.action.is_executed())
            .map(|t| t.symbol.as_str())
            .collect();
        for symbol in logged.difference(&listed) {
            issues.push(ConsistencyIssue::UnlistedSymbol {
                symbol: symbol.to_string(),
            });
        }

        let executed = trades.iter().filter(|t| t.action.is_executed()).count();
        if executed > summary.total_trades as usize {
            issues.push(ConsistencyIssue::TradeCountBelowLog {
                counted: summary.total_trades,
                logged: executed,
            });
        }

        for issue in &issues {
            warn!(%issue, "performance summary inconsistent with trade log");
        }

        issues
    }
}

impl Default for ConsistencyService {
    fn default() -> Self {
        Self::new()
    }
}
