//! Hard-coded sample records the panels render when the host supplies none.
//!
//! The figures are fixed. They are not derived from one another, and the
//! performance summary deliberately disagrees with its own counters
//! (32 / 47 is 68.09 %, the summary says 68.5 %).

use std::borrow::Cow;

use chrono::{DateTime, TimeZone, Utc};

use crate::models::analysis::AnalysisInsight;
use crate::models::panel::ChartPoint;
use crate::models::performance::{PerformanceSummary, RiskLevel, DEFAULT_SYMBOLS};
use crate::models::portfolio::PortfolioData;
use crate::models::position::Position;
use crate::models::trade::{Trade, TradeAction};

/// Portfolio value the Risk Management panel measures concentration against.
pub const RISK_REFERENCE_VALUE: f64 = 25_000.0;

/// The portfolio as the panels display it. With no positions, the sample
/// positions and the sample performance summary stand in for the state's own.
pub fn with_fallback(portfolio: &PortfolioData) -> Cow<'_, PortfolioData> {
    if portfolio.positions.is_empty() {
        Cow::Owned(PortfolioData {
            positions: sample_positions(),
            performance: sample_performance(),
            ..portfolio.clone()
        })
    } else {
        Cow::Borrowed(portfolio)
    }
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

/// Two open crypto positions: BTC-USD (+$28.00) and ETH-USD (+$45.00).
pub fn sample_positions() -> Vec<Position> {
    vec![
        Position::open("BTC-USD", 43_200.0, 0.1, at(2024, 1, 15, 9, 30))
            .with_limits(Some(41_040.0), Some(49_680.0))
            .marked_at(43_480.0),
        Position::open("ETH-USD", 2_580.0, 1.5, at(2024, 1, 15, 10, 15))
            .with_limits(Some(2_451.0), Some(2_967.0))
            .marked_at(2_610.0),
    ]
}

/// Recent trade log, oldest first.
pub fn sample_trades() -> Vec<Trade> {
    vec![
        Trade::new(at(2024, 1, 13, 16, 45), "DOT-USD", TradeAction::Hold, 7.20, 0.0)
            .with_confidence(0.55)
            .with_reasoning("Mixed signals, waiting for confirmation"),
        Trade::new(at(2024, 1, 14, 11, 5), "ADA-USD", TradeAction::Sell, 0.52, 2_000.0)
            .with_confidence(0.62)
            .with_reasoning("Stop loss triggered")
            .with_pnl(-18.0),
        Trade::new(at(2024, 1, 14, 14, 20), "SOL-USD", TradeAction::Sell, 98.50, 10.0)
            .with_confidence(0.71)
            .with_reasoning("Take profit level reached")
            .with_pnl(42.0),
        Trade::new(at(2024, 1, 15, 9, 30), "BTC-USD", TradeAction::Buy, 43_200.0, 0.1)
            .with_confidence(0.82)
            .with_reasoning("Bullish momentum with RSI recovering from oversold"),
        Trade::new(at(2024, 1, 15, 10, 15), "ETH-USD", TradeAction::Buy, 2_580.0, 1.5)
            .with_confidence(0.76)
            .with_reasoning("Breakout above the 20-day moving average"),
    ]
}

pub fn sample_performance() -> PerformanceSummary {
    PerformanceSummary {
        total_trades: 47,
        winning_trades: 32,
        win_rate: 68.5,
        max_drawdown: 8.2,
        risk_level: RiskLevel::Moderate,
        symbols_traded: DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn sample_insights() -> Vec<AnalysisInsight> {
    vec![
        AnalysisInsight::new(
            "BTC-USD",
            TradeAction::Buy,
            0.82,
            "On-chain accumulation and positive funding rates",
        )
        .with_target(46_500.0),
        AnalysisInsight::new(
            "ETH-USD",
            TradeAction::Hold,
            0.64,
            "Consolidating below resistance at $2,650",
        ),
        AnalysisInsight::new("AAPL", TradeAction::Buy, 0.71, "Earnings beat with raised guidance")
            .with_target(198.0),
        AnalysisInsight::new(
            "TSLA",
            TradeAction::Sell,
            0.67,
            "Bearish momentum divergence on the daily chart",
        ),
    ]
}

/// Seven daily closes of the portfolio value.
pub fn sample_price_series() -> Vec<ChartPoint> {
    [
        ("2024-01-09", 9_650.0),
        ("2024-01-10", 9_720.0),
        ("2024-01-11", 9_810.0),
        ("2024-01-12", 9_760.0),
        ("2024-01-13", 9_890.0),
        ("2024-01-14", 9_940.0),
        ("2024-01-15", 10_000.0),
    ]
    .into_iter()
    .map(|(label, value)| ChartPoint {
        label: label.to_string(),
        value,
    })
    .collect()
}
