//! Drives a [`TradingDashboard`] on a timer.
//!
//! Mounting moves the dashboard behind a lock and spawns one background
//! task that ticks it on a fixed interval. Every state change is broadcast
//! as a [`DashboardEvent`]. Unmounting (or dropping the handle) stops the
//! task; no tick can land after that.

use std::sync::Arc;

use tokio::sync::{broadcast, RwLock};
use tokio::task::JoinHandle;
use tokio::time::{self, Duration, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::errors::DashboardError;
use crate::models::event::DashboardEvent;
use crate::models::panel::Panel;
use crate::models::portfolio::PortfolioData;
use crate::models::position::Position;
use crate::models::tab::Tab;
use crate::sources::jitter::JitterSource;
use crate::TradingDashboard;

/// Buffered events per subscriber before it starts lagging.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Aborts the ticker when dropped.
struct TickerGuard(Option<JoinHandle<()>>);

impl Drop for TickerGuard {
    fn drop(&mut self) {
        if let Some(handle) = &self.0 {
            handle.abort();
        }
    }
}

/// A dashboard with its ticker running.
///
/// Must be created inside a tokio runtime.
pub struct MountedDashboard {
    state: Arc<RwLock<TradingDashboard>>,
    events: broadcast::Sender<DashboardEvent>,
    ticker: TickerGuard,
}

impl MountedDashboard {
    /// Start ticking `dashboard` every `settings.tick_interval_ms`.
    /// The first tick fires one full interval after mount.
    pub fn mount(dashboard: TradingDashboard, jitter: Box<dyn JitterSource>) -> Self {
        let period = dashboard.settings().tick_interval();
        let state = Arc::new(RwLock::new(dashboard));
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        let handle = tokio::spawn(run_ticker(
            Arc::clone(&state),
            events.clone(),
            jitter,
            period,
        ));
        info!(interval_ms = period.as_millis() as u64, "dashboard mounted");

        Self {
            state,
            events,
            ticker: TickerGuard(Some(handle)),
        }
    }

    /// Receive every event broadcast from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<DashboardEvent> {
        self.events.subscribe()
    }

    pub async fn select_tab(&self, tab: Tab) {
        self.state.write().await.select_tab(tab);
        // No subscribers is fine.
        let _ = self.events.send(DashboardEvent::TabSelected { tab });
    }

    /// Select by id or number; the active tab is unchanged on error.
    pub async fn select_tab_id(&self, id: &str) -> Result<Tab, DashboardError> {
        let tab: Tab = id.parse()?;
        self.select_tab(tab).await;
        Ok(tab)
    }

    pub async fn active_tab(&self) -> Tab {
        self.state.read().await.active_tab()
    }

    pub async fn render_active_panel(&self) -> Panel {
        self.state.read().await.render_active_panel()
    }

    pub async fn render(&self, tab: Tab) -> Panel {
        self.state.read().await.render(tab)
    }

    /// Copy of the current portfolio state.
    pub async fn snapshot(&self) -> PortfolioData {
        self.state.read().await.portfolio().clone()
    }

    pub async fn set_positions(&self, positions: Vec<Position>) {
        self.state.write().await.set_positions(positions);
    }

    pub async fn tick_count(&self) -> u64 {
        self.state.read().await.tick_count()
    }

    /// Stop the ticker and hand the dashboard back.
    ///
    /// Waits for the ticker task to finish, so the returned state is final.
    pub async fn unmount(self) -> Result<TradingDashboard, DashboardError> {
        let MountedDashboard {
            state,
            events,
            mut ticker,
        } = self;

        if let Some(handle) = ticker.0.take() {
            handle.abort();
            match handle.await {
                Ok(()) => {}
                Err(e) if e.is_cancelled() => {}
                Err(e) => return Err(e.into()),
            }
        }

        let dashboard = Arc::try_unwrap(state)
            .map_err(|_| DashboardError::Runtime("dashboard state is still shared".into()))?
            .into_inner();

        let ticks = dashboard.tick_count();
        let _ = events.send(DashboardEvent::Unmounted { ticks });
        info!(ticks, "dashboard unmounted");

        Ok(dashboard)
    }
}

async fn run_ticker(
    state: Arc<RwLock<TradingDashboard>>,
    events: broadcast::Sender<DashboardEvent>,
    mut jitter: Box<dyn JitterSource>,
    period: Duration,
) {
    let mut interval = time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;

        let event = {
            let mut dashboard = state.write().await;
            let delta = dashboard.tick(jitter.as_mut());
            DashboardEvent::Tick {
                sequence: dashboard.tick_count(),
                total_pnl: delta.total_pnl,
                daily_pnl: delta.daily_pnl,
            }
        };

        if events.send(event).is_err() {
            debug!("tick with no subscribers");
        }
    }
}
