//! # trading-dashboard
//!
//! Mounts the dashboard shell and prints the active panel every time the
//! simulated P&L ticks. Stops after `--ticks` ticks or on Ctrl-C.

use anyhow::{Context, Result};
use clap::Parser;
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};

use trading_dashboard_core::models::event::DashboardEvent;
use trading_dashboard_core::models::panel::Panel;
use trading_dashboard_core::models::settings::DashboardSettings;
use trading_dashboard_core::models::tab::Tab;
use trading_dashboard_core::runtime::mount::MountedDashboard;
use trading_dashboard_core::sources::jitter::{JitterSource, UniformJitter};
use trading_dashboard_core::storage::settings_store::SettingsStore;
use trading_dashboard_core::TradingDashboard;

#[derive(Parser)]
#[command(name = "trading-dashboard")]
#[command(about = "Terminal trading dashboard with simulated P&L", long_about = None)]
struct Cli {
    /// Settings file (JSON)
    #[arg(short, long)]
    config: Option<String>,

    /// Tab to show (overview, positions, analysis, trades, performance, risk or 1-6)
    #[arg(short, long)]
    tab: Option<String>,

    /// Stop after this many ticks (runs until Ctrl-C when omitted)
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(1..))]
    ticks: Option<u64>,

    /// Override the tick interval in milliseconds
    #[arg(short, long)]
    interval_ms: Option<u64>,

    /// Seed the P&L jitter for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print panels as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn load_settings(cli: &Cli) -> Result<DashboardSettings> {
    let mut settings = match &cli.config {
        Some(path) => SettingsStore::load_from_file(path)
            .with_context(|| format!("Failed to load settings from {path}"))?,
        None => DashboardSettings::default(),
    };

    if let Some(interval_ms) = cli.interval_ms {
        settings.tick_interval_ms = interval_ms;
    }
    if let Some(tab) = &cli.tab {
        settings.initial_tab = tab.parse::<Tab>().context("Invalid --tab")?;
    }

    settings.validate().context("Invalid settings")?;
    Ok(settings)
}

fn print_panel(panel: &Panel, json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string(panel).context("Failed to serialize panel")?;
        println!("{out}");
    } else {
        println!("{panel}");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for panels.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("trading_dashboard=info".parse()?)
                .add_directive("trading_dashboard_core=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let settings = load_settings(&cli)?;
    info!(
        tab = settings.initial_tab.id(),
        interval_ms = settings.tick_interval_ms,
        "starting trading dashboard"
    );

    let dashboard = TradingDashboard::new(settings)?;
    for issue in dashboard.audit_performance() {
        warn!("performance figures disagree: {issue}");
    }

    let jitter: Box<dyn JitterSource> = match cli.seed {
        Some(seed) => Box::new(UniformJitter::seeded(seed)),
        None => Box::new(UniformJitter::new()),
    };

    let mounted = MountedDashboard::mount(dashboard, jitter);
    let mut events = mounted.subscribe();
    print_panel(&mounted.render_active_panel().await, cli.json)?;

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Ok(DashboardEvent::Tick { sequence, .. }) => {
                    print_panel(&mounted.render_active_panel().await, cli.json)?;
                    if cli.ticks.is_some_and(|limit| sequence >= limit) {
                        break;
                    }
                }
                Ok(_) => {}
                Err(RecvError::Lagged(n)) => warn!("display lagged by {n} events"),
                Err(RecvError::Closed) => break,
            },
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted");
                break;
            }
        }
    }

    let dashboard = mounted.unmount().await?;
    let portfolio = dashboard.portfolio();
    info!(
        ticks = dashboard.tick_count(),
        total_pnl = portfolio.total_pnl,
        daily_pnl = portfolio.daily_pnl,
        "dashboard stopped"
    );

    Ok(())
}
