use serde::{Deserialize, Serialize};
use std::fmt;

use super::tab::Tab;

/// Colour hint for a rendered value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Negative,
    #[default]
    Neutral,
}

/// A single labelled figure ("Total P&L: +$28.00").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
    pub tone: Tone,
}

impl MetricCard {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            tone: Tone::Neutral,
        }
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }
}

/// Tabular body of a panel. Every row has one cell per header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Cells of the column named `header`, top to bottom.
    #[must_use]
    pub fn column(&self, header: &str) -> Vec<&str> {
        match self.headers.iter().position(|h| h == header) {
            Some(idx) => self
                .rows
                .iter()
                .filter_map(|row| row.get(idx).map(String::as_str))
                .collect(),
            None => Vec::new(),
        }
    }
}

/// One point of a panel chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// The rendered content of one tab.
///
/// The core computes every string; front ends only lay them out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub tab: Tab,
    pub title: String,
    pub metrics: Vec<MetricCard>,
    #[serde(default)]
    pub table: Option<Table>,
    #[serde(default)]
    pub chart: Vec<ChartPoint>,
}

impl Panel {
    pub fn new(tab: Tab) -> Self {
        Self {
            tab,
            title: tab.title().to_string(),
            metrics: Vec::new(),
            table: None,
            chart: Vec::new(),
        }
    }

    /// Value of the metric card with this label, if present.
    #[must_use]
    pub fn metric(&self, label: &str) -> Option<&MetricCard> {
        self.metrics.iter().find(|m| m.label == label)
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.title)?;

        let label_width = self.metrics.iter().map(|m| m.label.chars().count()).max().unwrap_or(0);
        for metric in &self.metrics {
            writeln!(f, "  {:<label_width$}  {}", metric.label, metric.value)?;
        }

        if let Some(table) = &self.table {
            let mut widths: Vec<usize> = table.headers.iter().map(|h| h.chars().count()).collect();
            for row in &table.rows {
                for (i, cell) in row.iter().enumerate() {
                    if let Some(w) = widths.get_mut(i) {
                        *w = (*w).max(cell.chars().count());
                    }
                }
            }
            writeln!(f)?;
            write_row(f, &table.headers, &widths)?;
            let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            write_row(f, &rule, &widths)?;
            for row in &table.rows {
                write_row(f, row, &widths)?;
            }
        }

        if !self.chart.is_empty() {
            writeln!(f)?;
            for point in &self.chart {
                writeln!(f, "  {}  {:.2}", point.label, point.value)?;
            }
        }

        Ok(())
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: &[String], widths: &[usize]) -> fmt::Result {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    writeln!(f, "  {}", line.join("  ").trim_end())
}
