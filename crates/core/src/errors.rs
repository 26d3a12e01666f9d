use thiserror::Error;

/// Unified error type for the entire trading-dashboard-core library.
///
/// The dashboard itself has nothing that can fail at runtime; errors only
/// come from its boundaries (parsing a tab id, loading settings, joining
/// the ticker task).
#[derive(Debug, Error)]
pub enum DashboardError {
    // ── Input ───────────────────────────────────────────────────────
    #[error("Unknown tab: {0}")]
    UnknownTab(String),

    #[error("Unknown trade action: {0}")]
    UnknownAction(String),

    // ── Configuration ───────────────────────────────────────────────
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── File I/O ───────────────────────────────────────────────────
    #[error("File I/O error: {0}")]
    FileIO(String),

    // ── Runtime ─────────────────────────────────────────────────────
    #[error("Ticker task failed: {0}")]
    Runtime(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for DashboardError {
    fn from(e: std::io::Error) -> Self {
        DashboardError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(e: serde_json::Error) -> Self {
        match e.classify() {
            serde_json::error::Category::Io => DashboardError::Serialization(e.to_string()),
            _ => DashboardError::Deserialization(e.to_string()),
        }
    }
}

impl From<tokio::task::JoinError> for DashboardError {
    fn from(e: tokio::task::JoinError) -> Self {
        DashboardError::Runtime(e.to_string())
    }
}
