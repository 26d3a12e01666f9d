use tracing::debug;

use crate::models::panel::{MetricCard, Panel, Table, Tone};
use crate::models::portfolio::PortfolioData;
use crate::models::risk::{RiskExposure, RiskLimits};
use crate::models::tab::Tab;
use crate::services::format_service::{
    money, percent, price, quantity, signed_money, signed_percent, tone_of,
};
use crate::sources::samples;

/// Renders each tab's panel from the dashboard state.
///
/// Every render is a pure function of its input. Only Active Positions and
/// Performance Metrics read positions from the state, and both substitute
/// the sample set when that list is empty.
pub struct PanelService {
    currency_symbol: String,
}

impl PanelService {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    /// Render the panel for `tab`. Always exactly one panel.
    pub fn render(&self, tab: Tab, portfolio: &PortfolioData) -> Panel {
        debug!(tab = tab.id(), "rendering panel");
        match tab {
            Tab::PortfolioOverview => self.portfolio_overview(portfolio),
            Tab::ActivePositions => self.active_positions(portfolio),
            Tab::AiAnalysis => self.ai_analysis(),
            Tab::TradeHistory => self.trade_history(),
            Tab::PerformanceMetrics => self.performance_metrics(portfolio),
            Tab::RiskManagement => self.risk_management(),
        }
    }

    /// Headline figures from the live state plus the sample value history.
    pub fn portfolio_overview(&self, portfolio: &PortfolioData) -> Panel {
        let sym = self.currency_symbol.as_str();
        let mut panel = Panel::new(Tab::PortfolioOverview);
        panel.metrics = vec![
            MetricCard::new("Total Value", money(portfolio.total_value, sym)),
            MetricCard::new("Available Cash", money(portfolio.available_cash, sym)),
            MetricCard::new("Total P&L", signed_money(portfolio.total_pnl, sym))
                .with_tone(tone_of(portfolio.total_pnl)),
            MetricCard::new("Daily P&L", signed_money(portfolio.daily_pnl, sym))
                .with_tone(tone_of(portfolio.daily_pnl)),
        ];
        panel.chart = samples::sample_price_series();
        panel
    }

    /// Open positions; the two sample positions stand in for an empty list.
    pub fn active_positions(&self, portfolio: &PortfolioData) -> Panel {
        let view = samples::with_fallback(portfolio);
        let positions = &view.positions;

        let sym = self.currency_symbol.as_str();
        let unrealized = view.unrealized_pnl();

        let mut table = Table::new(&["Symbol", "Entry", "Current", "Qty", "P&L", "P&L %"]);
        for p in positions {
            table.push_row(vec![
                p.symbol.clone(),
                price(p.entry_price),
                price(p.current_price),
                quantity(p.quantity),
                signed_money(p.pnl, sym),
                signed_percent(p.pnl_percent),
            ]);
        }

        let mut panel = Panel::new(Tab::ActivePositions);
        panel.metrics = vec![
            MetricCard::new("Open Positions", positions.len().to_string()),
            MetricCard::new("Unrealized P&L", signed_money(unrealized, sym))
                .with_tone(tone_of(unrealized)),
        ];
        panel.table = Some(table);
        panel
    }

    pub fn ai_analysis(&self) -> Panel {
        let insights = samples::sample_insights();
        let avg_confidence = if insights.is_empty() {
            0.0
        } else {
            insights.iter().map(|i| i.confidence).sum::<f64>() / insights.len() as f64
        };

        let mut table = Table::new(&["Symbol", "Signal", "Confidence", "Target", "Reasoning"]);
        for insight in &insights {
            table.push_row(vec![
                insight.symbol.clone(),
                insight.signal.to_string(),
                percent(insight.confidence * 100.0),
                insight
                    .target_price
                    .map(|t| money(t, &self.currency_symbol))
                    .unwrap_or_else(|| "-".to_string()),
                insight.reasoning.clone(),
            ]);
        }

        let mut panel = Panel::new(Tab::AiAnalysis);
        panel.metrics = vec![
            MetricCard::new("Signals", insights.len().to_string()),
            MetricCard::new("Average Confidence", percent(avg_confidence * 100.0)),
        ];
        panel.table = Some(table);
        panel
    }

    /// Sample trade log, newest first.
    pub fn trade_history(&self) -> Panel {
        let sym = self.currency_symbol.as_str();
        let mut trades = samples::sample_trades();
        trades.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        let realized: f64 = trades.iter().filter_map(|t| t.pnl).sum();

        let mut table = Table::new(&["Time", "Symbol", "Action", "Price", "Qty", "Value", "P&L"]);
        for t in &trades {
            table.push_row(vec![
                t.timestamp.format("%Y-%m-%d %H:%M").to_string(),
                t.symbol.clone(),
                t.action.to_string(),
                price(t.price),
                quantity(t.quantity),
                money(t.value, sym),
                t.pnl
                    .map(|pnl| signed_money(pnl, sym))
                    .unwrap_or_else(|| "-".to_string()),
            ]);
        }

        let mut panel = Panel::new(Tab::TradeHistory);
        panel.metrics = vec![
            MetricCard::new("Trades", trades.len().to_string()),
            MetricCard::new("Realized P&L", signed_money(realized, sym))
                .with_tone(tone_of(realized)),
        ];
        panel.table = Some(table);
        panel
    }

    /// Performance counters. With no positions, shows the fixed sample summary
    /// and the sample positions' P&L instead of the state's own summary.
    pub fn performance_metrics(&self, portfolio: &PortfolioData) -> Panel {
        let view = samples::with_fallback(portfolio);
        let summary = &view.performance;

        let sym = self.currency_symbol.as_str();
        let unrealized = view.unrealized_pnl();

        let mut panel = Panel::new(Tab::PerformanceMetrics);
        panel.metrics = vec![
            MetricCard::new("Total Trades", summary.total_trades.to_string()),
            MetricCard::new("Winning Trades", summary.winning_trades.to_string()),
            MetricCard::new("Win Rate", percent(summary.win_rate)),
            MetricCard::new("Max Drawdown", percent(summary.max_drawdown)).with_tone(
                if summary.max_drawdown > 0.0 {
                    Tone::Negative
                } else {
                    Tone::Neutral
                },
            ),
            MetricCard::new("Risk Level", summary.risk_level.to_string()),
            MetricCard::new("Symbols Traded", summary.symbols_traded.join(", ")),
            MetricCard::new("Unrealized P&L", signed_money(unrealized, sym))
                .with_tone(tone_of(unrealized)),
        ];
        panel
    }

    /// Default risk limits and the sample positions' concentration.
    pub fn risk_management(&self) -> Panel {
        let sym = self.currency_symbol.as_str();
        let limits = RiskLimits::default();

        let mut table = Table::new(&["Symbol", "Market Value", "Concentration", "Status"]);
        for position in samples::sample_positions() {
            let exposure = RiskExposure::of(&position, samples::RISK_REFERENCE_VALUE, &limits);
            table.push_row(vec![
                exposure.symbol,
                money(exposure.market_value, sym),
                percent(exposure.concentration_pct),
                if exposure.over_limit { "OVER LIMIT" } else { "OK" }.to_string(),
            ]);
        }

        let mut panel = Panel::new(Tab::RiskManagement);
        panel.metrics = vec![
            MetricCard::new("Max Positions", limits.max_positions.to_string()),
            MetricCard::new("Position Size", percent(limits.position_size_pct)),
            MetricCard::new("Stop Loss", percent(limits.stop_loss_pct)),
            MetricCard::new("Take Profit", percent(limits.take_profit_pct)),
            MetricCard::new("Max Drawdown", percent(limits.max_drawdown_pct)),
            MetricCard::new("Concentration Limit", percent(limits.concentration_limit_pct)),
        ];
        panel.table = Some(table);
        panel
    }
}

impl Default for PanelService {
    fn default() -> Self {
        Self::new("$")
    }
}
