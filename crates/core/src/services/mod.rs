pub mod consistency_service;
pub mod format_service;
pub mod panel_service;
pub mod pnl_simulator;
