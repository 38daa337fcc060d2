//! Selection state behind the comparison tray.
//!
//! Users pick items from a listing to compare; each picked item gets a line
//! color by position and can be hidden from the chart without being removed.

use serde::{Deserialize, Serialize};

use crate::labels::label_for;
use crate::timeseries::merge::{MergedRow, NamedSeries, merge_series};
use pullsar_types::{Level, ListItem};

/// Line colors assigned to compared items, in selection order.
pub const LINE_COLORS: [&str; 10] = [
    "#0284c7", // blue
    "#22c55e", // green
    "#ef4444", // red
    "#eab308", // yellow
    "#8b5cf6", // violet
    "#ec4899", // pink
    "#14b8a6", // teal
    "#f97316", // orange
    "#84cc16", // lime
    "#06b6d4", // cyan
];

/// An item picked for comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    /// The listing row as it was when picked.
    pub item: ListItem,
    /// Whether the item's line is drawn.
    pub visible: bool,
}

/// A series ready for a multi-line chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    /// Display label; also the column name in `ComparisonChart::rows`.
    pub label: String,
    /// Full entity name the series belongs to.
    pub name: String,
    /// Line color.
    pub color: &'static str,
}

/// Chart model for the comparison tray.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct ComparisonChart {
    /// Visible series in selection order.
    pub series: Vec<ChartSeries>,
    /// Date-sorted rows keyed by series label.
    pub rows: Vec<MergedRow>,
}

/// Ordered set of items picked for comparison, keyed by item name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ComparisonSet {
    level: Option<Level>,
    entries: Vec<ComparisonEntry>,
}

impl ComparisonSet {
    /// Empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `item` when absent, remove it when present.
    ///
    /// Returns true when the item is selected after the call.
    pub fn toggle(&mut self, item: ListItem) -> bool {
        if self.remove(&item.name) {
            return false;
        }
        self.entries.push(ComparisonEntry {
            item,
            visible: true,
        });
        true
    }

    /// Remove the item named `name`. Returns whether it was selected.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.item.name != name);
        self.entries.len() != before
    }

    /// Drop every selected item.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Clear the selection when the listing moves to another level.
    ///
    /// Items from different levels are never compared with each other.
    pub fn reset_for(&mut self, level: Level) {
        if self.level != Some(level) {
            self.entries.clear();
            self.level = Some(level);
        }
    }

    /// Whether an item named `name` is selected.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.item.name == name)
    }

    /// Number of selected items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is selected. The tray closes in that state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Selected items in selection order.
    #[must_use]
    pub fn entries(&self) -> &[ComparisonEntry] {
        &self.entries
    }

    /// Show or hide the line of the item named `name`.
    ///
    /// Returns the new visibility, or `None` when the item is not selected.
    pub fn toggle_visibility(&mut self, name: &str) -> Option<bool> {
        let entry = self.entries.iter_mut().find(|e| e.item.name == name)?;
        entry.visible = !entry.visible;
        Some(entry.visible)
    }

    /// Line color of the item named `name`.
    #[must_use]
    pub fn color_of(&self, name: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .position(|e| e.item.name == name)
            .map(|i| LINE_COLORS[i % LINE_COLORS.len()])
    }

    /// Build the chart of visible items, labelled for `level`.
    #[must_use]
    pub fn chart(&self, level: Level) -> ComparisonChart {
        let mut series = Vec::new();
        let mut inputs = Vec::new();
        for (i, entry) in self.entries.iter().enumerate() {
            if !entry.visible {
                continue;
            }
            let label = label_for(level, &entry.item.name).to_string();
            inputs.push(NamedSeries::from_chart(
                label.clone(),
                &entry.item.stats.chart_data,
            ));
            series.push(ChartSeries {
                label,
                name: entry.item.name.clone(),
                color: LINE_COLORS[i % LINE_COLORS.len()],
            });
        }
        ComparisonChart {
            series,
            rows: merge_series(inputs),
        }
    }
}
