pub mod errors;
pub mod models;
pub mod runtime;
pub mod services;
pub mod sources;
pub mod storage;

use models::{
    panel::Panel,
    performance::ConsistencyIssue,
    portfolio::PortfolioData,
    position::Position,
    settings::DashboardSettings,
    tab::Tab,
};
use services::{
    consistency_service::ConsistencyService,
    panel_service::PanelService,
    pnl_simulator::{PnlSimulator, TickDelta},
};
use sources::jitter::JitterSource;
use sources::samples;
use tracing::debug;

use errors::DashboardError;

/// Main entry point for the trading dashboard core library.
///
/// Owns the one piece of mutable state (the portfolio snapshot), the
/// active tab, and the tick counter. Everything else is rendered on demand
/// from that state.
#[must_use]
pub struct TradingDashboard {
    portfolio: PortfolioData,
    settings: DashboardSettings,
    active_tab: Tab,
    tick_count: u64,
    panel_service: PanelService,
    pnl_simulator: PnlSimulator,
    consistency_service: ConsistencyService,
}

impl std::fmt::Debug for TradingDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TradingDashboard")
            .field("active_tab", &self.active_tab)
            .field("tick_count", &self.tick_count)
            .field("total_pnl", &self.portfolio.total_pnl)
            .field("daily_pnl", &self.portfolio.daily_pnl)
            .field("positions", &self.portfolio.positions.len())
            .finish()
    }
}

impl TradingDashboard {
    /// Create a dashboard with the mount-time portfolio defaults.
    pub fn new(settings: DashboardSettings) -> Result<Self, DashboardError> {
        settings.validate()?;
        Ok(Self::build(settings))
    }

    /// Create a dashboard with default settings.
    pub fn with_defaults() -> Self {
        Self::build(DashboardSettings::default())
    }

    fn build(settings: DashboardSettings) -> Self {
        Self {
            portfolio: PortfolioData::default(),
            active_tab: settings.initial_tab,
            tick_count: 0,
            panel_service: PanelService::new(settings.currency_symbol.clone()),
            pnl_simulator: PnlSimulator::from_settings(&settings),
            consistency_service: ConsistencyService::new(),
            settings,
        }
    }

    // ── Tabs ────────────────────────────────────────────────────────

    /// Make `tab` the active tab. Always succeeds; nothing else changes.
    pub fn select_tab(&mut self, tab: Tab) {
        debug!(from = self.active_tab.id(), to = tab.id(), "tab selected");
        self.active_tab = tab;
    }

    /// Select a tab by id or number (e.g. `"risk"`, `"6"`).
    /// Fails only when the id does not name a tab; the active tab is kept then.
    pub fn select_tab_id(&mut self, id: &str) -> Result<Tab, DashboardError> {
        let tab: Tab = id.parse()?;
        self.select_tab(tab);
        Ok(tab)
    }

    pub fn next_tab(&mut self) -> Tab {
        self.select_tab(self.active_tab.next());
        self.active_tab
    }

    pub fn previous_tab(&mut self) -> Tab {
        self.select_tab(self.active_tab.previous());
        self.active_tab
    }

    #[must_use]
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    // ── Ticking ─────────────────────────────────────────────────────

    /// Advance the simulated P&L by one tick.
    pub fn tick(&mut self, jitter: &mut dyn JitterSource) -> TickDelta {
        let delta = self.pnl_simulator.apply_tick(&mut self.portfolio, jitter);
        self.tick_count += 1;
        delta
    }

    /// Number of ticks applied since construction.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    // ── Rendering ───────────────────────────────────────────────────

    /// Render the active tab's panel.
    #[must_use]
    pub fn render_active_panel(&self) -> Panel {
        self.render(self.active_tab)
    }

    /// Render any tab's panel without changing the selection.
    #[must_use]
    pub fn render(&self, tab: Tab) -> Panel {
        self.panel_service.render(tab, &self.portfolio)
    }

    // ── State ───────────────────────────────────────────────────────

    #[must_use]
    pub fn portfolio(&self) -> &PortfolioData {
        &self.portfolio
    }

    /// Replace the open positions. An empty list brings the sample fallback back.
    pub fn set_positions(&mut self, positions: Vec<Position>) {
        debug!(count = positions.len(), "positions replaced");
        self.portfolio.positions = positions;
    }

    #[must_use]
    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    /// Compare the performance summary the Performance Metrics panel shows
    /// with the sample trade log. Reports only; neither side is changed.
    #[must_use]
    pub fn audit_performance(&self) -> Vec<ConsistencyIssue> {
        let view = samples::with_fallback(&self.portfolio);
        self.consistency_service
            .audit(&view.performance, &samples::sample_trades())
    }
}

impl Default for TradingDashboard {
    fn default() -> Self {
        Self::with_defaults()
    }
}
