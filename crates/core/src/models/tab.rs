use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::DashboardError;

/// The fixed set of dashboard tabs. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tab {
    #[default]
    #[serde(rename = "overview")]
    PortfolioOverview,
    #[serde(rename = "positions")]
    ActivePositions,
    #[serde(rename = "analysis")]
    AiAnalysis,
    #[serde(rename = "trades")]
    TradeHistory,
    #[serde(rename = "performance")]
    PerformanceMetrics,
    #[serde(rename = "risk")]
    RiskManagement,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 6] = [
        Tab::PortfolioOverview,
        Tab::ActivePositions,
        Tab::AiAnalysis,
        Tab::TradeHistory,
        Tab::PerformanceMetrics,
        Tab::RiskManagement,
    ];

    /// Short identifier used on the command line and in settings files.
    pub fn id(&self) -> &'static str {
        match self {
            Tab::PortfolioOverview => "overview",
            Tab::ActivePositions => "positions",
            Tab::AiAnalysis => "analysis",
            Tab::TradeHistory => "trades",
            Tab::PerformanceMetrics => "performance",
            Tab::RiskManagement => "risk",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::PortfolioOverview => "Portfolio Overview",
            Tab::ActivePositions => "Active Positions",
            Tab::AiAnalysis => "AI Analysis",
            Tab::TradeHistory => "Trade History",
            Tab::PerformanceMetrics => "Performance Metrics",
            Tab::RiskManagement => "Risk Management",
        }
    }

    /// 1-based position in the tab bar.
    pub fn number(&self) -> u8 {
        match self {
            Tab::PortfolioOverview => 1,
            Tab::ActivePositions => 2,
            Tab::AiAnalysis => 3,
            Tab::TradeHistory => 4,
            Tab::PerformanceMetrics => 5,
            Tab::RiskManagement => 6,
        }
    }

    /// Tab for a 1-based number, `None` outside 1..=6.
    pub fn from_number(num: u8) -> Option<Tab> {
        match num {
            1..=6 => Some(Tab::ALL[usize::from(num) - 1]),
            _ => None,
        }
    }

    /// Next tab, wrapping from the last to the first.
    pub fn next(&self) -> Tab {
        Tab::ALL[usize::from(self.number()) % Tab::ALL.len()]
    }

    /// Previous tab, wrapping from the first to the last.
    pub fn previous(&self) -> Tab {
        let idx = usize::from(self.number()) - 1;
        Tab::ALL[(idx + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl FromStr for Tab {
    type Err = DashboardError;

    /// Accepts a tab id (`"risk"`) or its number (`"6"`), case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        if let Ok(num) = needle.parse::<u8>() {
            return Tab::from_number(num).ok_or_else(|| DashboardError::UnknownTab(s.to_string()));
        }
        Tab::ALL
            .iter()
            .copied()
            .find(|tab| tab.id() == needle)
            .ok_or_else(|| DashboardError::UnknownTab(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_previous_wrap() {
        assert_eq!(Tab::RiskManagement.next(), Tab::PortfolioOverview);
        assert_eq!(Tab::PortfolioOverview.previous(), Tab::RiskManagement);
        assert_eq!(Tab::AiAnalysis.next(), Tab::TradeHistory);
        assert_eq!(Tab::AiAnalysis.previous(), Tab::ActivePositions);
    }

    #[test]
    fn numbers_match_display_order() {
        for (i, tab) in Tab::ALL.iter().enumerate() {
            assert_eq!(usize::from(tab.number()), i + 1);
            assert_eq!(Tab::from_number(tab.number()), Some(*tab));
        }
        assert_eq!(Tab::from_number(0), None);
        assert_eq!(Tab::from_number(7), None);
    }
}
