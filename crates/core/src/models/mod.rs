pub mod analysis;
pub mod event;
pub mod panel;
pub mod performance;
pub mod portfolio;
pub mod position;
pub mod risk;
pub mod settings;
pub mod tab;
pub mod trade;
