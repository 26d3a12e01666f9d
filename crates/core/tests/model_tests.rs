use chrono::{TimeZone, Utc};
use trading_dashboard_core::models::event::DashboardEvent;
use trading_dashboard_core::models::panel::{MetricCard, Panel, Table, Tone};
use trading_dashboard_core::models::performance::{PerformanceSummary, RiskLevel};
use trading_dashboard_core::models::portfolio::PortfolioData;
use trading_dashboard_core::models::position::Position;
use trading_dashboard_core::models::risk::{RiskExposure, RiskLimits};
use trading_dashboard_core::models::settings::DashboardSettings;
use trading_dashboard_core::models::tab::Tab;
use trading_dashboard_core::models::trade::{Trade, TradeAction};

fn t0() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
//  Tab
// ═══════════════════════════════════════════════════════════════════

mod tab {
    use super::*;

    #[test]
    fn six_tabs_in_order() {
        let ids: Vec<&str> = Tab::ALL.iter().map(|t| t.id()).collect();
        assert_eq!(
            ids,
            vec!["overview", "positions", "analysis", "trades", "performance", "risk"]
        );
    }

    #[test]
    fn default_is_overview() {
        assert_eq!(Tab::default(), Tab::PortfolioOverview);
    }

    #[test]
    fn display_is_title() {
        assert_eq!(Tab::AiAnalysis.to_string(), "AI Analysis");
        assert_eq!(Tab::RiskManagement.to_string(), "Risk Management");
    }

    #[test]
    fn parse_by_id_case_insensitive() {
        assert_eq!("risk".parse::<Tab>().unwrap(), Tab::RiskManagement);
        assert_eq!("  Trades ".parse::<Tab>().unwrap(), Tab::TradeHistory);
        assert_eq!("POSITIONS".parse::<Tab>().unwrap(), Tab::ActivePositions);
    }

    #[test]
    fn parse_by_number() {
        assert_eq!("1".parse::<Tab>().unwrap(), Tab::PortfolioOverview);
        assert_eq!("5".parse::<Tab>().unwrap(), Tab::PerformanceMetrics);
        assert!("0".parse::<Tab>().is_err());
        assert!("7".parse::<Tab>().is_err());
    }

    #[test]
    fn parse_unknown_fails() {
        assert!("settings".parse::<Tab>().is_err());
        assert!("".parse::<Tab>().is_err());
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let mut tab = Tab::TradeHistory;
        for _ in 0..Tab::ALL.len() {
            tab = tab.next();
        }
        assert_eq!(tab, Tab::TradeHistory);
    }

    #[test]
    fn serde_uses_id() {
        let json = serde_json::to_string(&Tab::PerformanceMetrics).unwrap();
        assert_eq!(json, "\"performance\"");
        let back: Tab = serde_json::from_str("\"analysis\"").unwrap();
        assert_eq!(back, Tab::AiAnalysis);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Position
// ═══════════════════════════════════════════════════════════════════

mod position {
    use super::*;

    #[test]
    fn open_starts_flat() {
        let p = Position::open("btc-usd", 43_200.0, 0.1, t0());
        assert_eq!(p.symbol, "BTC-USD");
        assert_eq!(p.current_price, 43_200.0);
        assert_eq!(p.pnl, 0.0);
        assert_eq!(p.pnl_percent, 0.0);
        assert!(p.stop_loss.is_none());
        assert!(p.take_profit.is_none());
    }

    #[test]
    fn mark_to_market_gain() {
        let mut p = Position::open("ETH-USD", 2_580.0, 1.5, t0());
        p.mark_to_market(2_610.0);
        assert!((p.pnl - 45.0).abs() < 1e-9);
        assert!((p.pnl_percent - 30.0 / 2_580.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn mark_to_market_loss() {
        let p = Position::open("SOL-USD", 100.0, 10.0, t0()).marked_at(95.0);
        assert!((p.pnl + 50.0).abs() < 1e-9);
        assert!((p.pnl_percent + 5.0).abs() < 1e-9);
    }

    #[test]
    fn zero_entry_price_has_zero_percent() {
        let p = Position::open("AIRDROP", 0.0, 100.0, t0()).marked_at(1.0);
        assert_eq!(p.pnl, 100.0);
        assert_eq!(p.pnl_percent, 0.0);
    }

    #[test]
    fn values() {
        let p = Position::open("BTC-USD", 43_200.0, 0.1, t0()).marked_at(43_480.0);
        assert!((p.cost_basis() - 4_320.0).abs() < 1e-9);
        assert!((p.market_value() - 4_348.0).abs() < 1e-9);
    }

    #[test]
    fn limits_builder() {
        let p = Position::open("BTC-USD", 100.0, 1.0, t0()).with_limits(Some(95.0), None);
        assert_eq!(p.stop_loss, Some(95.0));
        assert_eq!(p.take_profit, None);
    }

    #[test]
    fn deserialize_without_limits() {
        let json = r#"{
            "symbol": "BTC-USD", "entry_price": 1.0, "quantity": 2.0,
            "entry_time": "2024-01-15T09:30:00Z", "current_price": 1.5,
            "pnl": 1.0, "pnl_percent": 50.0
        }"#;
        let p: Position = serde_json::from_str(json).unwrap();
        assert_eq!(p.stop_loss, None);
        assert_eq!(p.entry_time, t0());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Trade
// ═══════════════════════════════════════════════════════════════════

mod trade {
    use super::*;

    #[test]
    fn value_is_price_times_quantity() {
        let t = Trade::new(t0(), "sol-usd", TradeAction::Sell, 98.5, 10.0);
        assert_eq!(t.symbol, "SOL-USD");
        assert!((t.value - 985.0).abs() < 1e-9);
        assert!(t.pnl.is_none());
    }

    #[test]
    fn builders() {
        let t = Trade::new(t0(), "BTC-USD", TradeAction::Buy, 1.0, 1.0)
            .with_confidence(0.8)
            .with_reasoning("breakout")
            .with_pnl(12.0);
        assert_eq!(t.confidence, Some(0.8));
        assert_eq!(t.reasoning.as_deref(), Some("breakout"));
        assert_eq!(t.pnl, Some(12.0));
    }

    #[test]
    fn ids_are_unique() {
        let a = Trade::new(t0(), "A", TradeAction::Buy, 1.0, 1.0);
        let b = Trade::new(t0(), "A", TradeAction::Buy, 1.0, 1.0);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn action_wire_format_is_uppercase() {
        assert_eq!(serde_json::to_string(&TradeAction::Hold).unwrap(), "\"HOLD\"");
        let a: TradeAction = serde_json::from_str("\"SELL\"").unwrap();
        assert_eq!(a, TradeAction::Sell);
    }

    #[test]
    fn action_parse_and_display() {
        assert_eq!("buy".parse::<TradeAction>().unwrap(), TradeAction::Buy);
        assert_eq!(TradeAction::Sell.to_string(), "SELL");
        assert!("short".parse::<TradeAction>().is_err());
    }

    #[test]
    fn hold_is_not_executed() {
        assert!(TradeAction::Buy.is_executed());
        assert!(TradeAction::Sell.is_executed());
        assert!(!TradeAction::Hold.is_executed());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  PerformanceSummary
// ═══════════════════════════════════════════════════════════════════

mod performance {
    use super::*;

    #[test]
    fn computed_win_rate() {
        let s = PerformanceSummary {
            total_trades: 4,
            winning_trades: 3,
            ..PerformanceSummary::default()
        };
        assert!((s.computed_win_rate() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn computed_win_rate_without_trades_is_zero() {
        assert_eq!(PerformanceSummary::default().computed_win_rate(), 0.0);
    }

    #[test]
    fn defaults() {
        let s = PerformanceSummary::default();
        assert_eq!(s.risk_level, RiskLevel::Moderate);
        assert_eq!(s.symbols_traded.len(), 5);
        assert_eq!(s.symbols_traded[0], "BTC-USD");
    }

    #[test]
    fn risk_level_wire_format() {
        assert_eq!(
            serde_json::to_string(&RiskLevel::Aggressive).unwrap(),
            "\"aggressive\""
        );
        assert_eq!(RiskLevel::Conservative.to_string(), "Conservative");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  PortfolioData
// ═══════════════════════════════════════════════════════════════════

mod portfolio {
    use super::*;

    #[test]
    fn mount_defaults() {
        let p = PortfolioData::default();
        assert_eq!(p.total_value, 25_000.0);
        assert_eq!(p.available_cash, 16_737.0);
        assert_eq!(p.total_pnl, 0.0);
        assert_eq!(p.daily_pnl, 0.0);
        assert!(p.positions.is_empty());
    }

    #[test]
    fn unrealized_sums_position_pnl() {
        let mut p = PortfolioData::default();
        p.positions = vec![
            Position::open("A", 10.0, 1.0, t0()).marked_at(12.0),
            Position::open("B", 10.0, 1.0, t0()).marked_at(9.0),
        ];
        assert!((p.unrealized_pnl() - 1.0).abs() < 1e-9);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Risk
// ═══════════════════════════════════════════════════════════════════

mod risk {
    use super::*;

    #[test]
    fn default_limits() {
        let l = RiskLimits::default();
        assert_eq!(l.max_positions, 5);
        assert_eq!(l.stop_loss_pct, 5.0);
        assert_eq!(l.take_profit_pct, 15.0);
        assert_eq!(l.concentration_limit_pct, 30.0);
    }

    #[test]
    fn exposure_flags_over_limit() {
        let limits = RiskLimits::default();
        let p = Position::open("BTC-USD", 100.0, 40.0, t0());
        let e = RiskExposure::of(&p, 10_000.0, &limits);
        assert!((e.concentration_pct - 40.0).abs() < 1e-9);
        assert!(e.over_limit);

        let small = Position::open("ETH-USD", 100.0, 10.0, t0());
        assert!(!RiskExposure::of(&small, 10_000.0, &limits).over_limit);
    }

    #[test]
    fn exposure_against_empty_portfolio() {
        let p = Position::open("BTC-USD", 100.0, 1.0, t0());
        let e = RiskExposure::of(&p, 0.0, &RiskLimits::default());
        assert_eq!(e.concentration_pct, 0.0);
        assert!(!e.over_limit);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Panel
// ═══════════════════════════════════════════════════════════════════

mod panel {
    use super::*;

    #[test]
    fn new_takes_tab_title() {
        let p = Panel::new(Tab::TradeHistory);
        assert_eq!(p.title, "Trade History");
        assert!(p.metrics.is_empty());
        assert!(p.table.is_none());
    }

    #[test]
    fn table_column_lookup() {
        let mut t = Table::new(&["Symbol", "P&L"]);
        t.push_row(vec!["BTC-USD".into(), "+$28.00".into()]);
        t.push_row(vec!["ETH-USD".into(), "+$45.00".into()]);
        assert_eq!(t.column("P&L"), vec!["+$28.00", "+$45.00"]);
        assert!(t.column("Missing").is_empty());
    }

    #[test]
    fn text_rendering() {
        let mut p = Panel::new(Tab::ActivePositions);
        p.metrics.push(MetricCard::new("Open Positions", "2"));
        let mut t = Table::new(&["Symbol", "P&L"]);
        t.push_row(vec!["BTC-USD".into(), "+$28.00".into()]);
        p.table = Some(t);

        let text = p.to_string();
        assert!(text.starts_with("== Active Positions =="));
        assert!(text.contains("Open Positions  2"));
        assert!(text.contains("Symbol   P&L"));
        assert!(text.contains("BTC-USD  +$28.00"));
    }

    #[test]
    fn multibyte_cells_align_by_chars() {
        let mut p = Panel::new(Tab::TradeHistory);
        let mut t = Table::new(&["Value", "Qty"]);
        t.push_row(vec!["€1.00".into(), "2".into()]);
        p.table = Some(t);

        let text = p.to_string();
        assert!(text.contains("\n  Value  Qty\n"));
        assert!(text.contains("\n  -----  ---\n"));
        assert!(text.contains("\n  €1.00  2\n"));
    }

    #[test]
    fn metric_lookup_and_tone() {
        let mut p = Panel::new(Tab::PortfolioOverview);
        p.metrics
            .push(MetricCard::new("Total P&L", "-$3.00").with_tone(Tone::Negative));
        assert_eq!(p.metric("Total P&L").unwrap().tone, Tone::Negative);
        assert!(p.metric("Nope").is_none());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Settings & events
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let s = DashboardSettings::default();
        assert_eq!(s.tick_interval_ms, 5_000);
        assert_eq!(s.total_pnl_jitter, 100.0);
        assert_eq!(s.daily_pnl_jitter, 50.0);
        assert_eq!(s.currency_symbol, "$");
        assert_eq!(s.initial_tab, Tab::PortfolioOverview);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn zero_interval_rejected() {
        let s = DashboardSettings {
            tick_interval_ms: 0,
            ..DashboardSettings::default()
        };
        assert!(s.validate().is_err());
    }

    #[test]
    fn bad_jitter_rejected() {
        for width in [-1.0, f64::NAN, f64::INFINITY] {
            let s = DashboardSettings {
                daily_pnl_jitter: width,
                ..DashboardSettings::default()
            };
            assert!(s.validate().is_err(), "width {width} accepted");
        }
    }

    #[test]
    fn zero_jitter_allowed() {
        let s = DashboardSettings {
            total_pnl_jitter: 0.0,
            daily_pnl_jitter: 0.0,
            ..DashboardSettings::default()
        };
        assert!(s.validate().is_ok());
    }

    #[test]
    fn blank_currency_rejected() {
        let s = DashboardSettings {
            currency_symbol: "  ".into(),
            ..DashboardSettings::default()
        };
        assert!(s.validate().is_err());
    }

    #[test]
    fn tick_event_wire_format() {
        let ev = DashboardEvent::Tick {
            sequence: 3,
            total_pnl: 1.5,
            daily_pnl: -0.5,
        };
        let json: serde_json::Value = serde_json::to_value(&ev).unwrap();
        assert_eq!(json["type"], "tick");
        assert_eq!(json["data"]["sequence"], 3);
    }
}
