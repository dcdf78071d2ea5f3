//! Bar-chart datasets built from the aggregation tables.
//!
//! The output mirrors the `data` object a chart.js bar chart takes, so a
//! front end can pass it through unchanged.

use serde::Serialize;

use crate::aggregate::{ComparisonTable, FrequencyTable};

/// Bar colors for the frequency chart, cycled per bar.
pub const FREQUENCY_COLORS: [&str; 2] = ["#ffc107", "#198754"];
/// Bar color of the title series.
pub const TITLE_COLOR: &str = "#0d6efd";
/// Bar color of the abstract series.
pub const ABSTRACT_COLOR: &str = "#6c757d";

/// One color for the whole series, or one per bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BarColor {
    /// Same color for every bar
    Single(String),
    /// Per-bar colors
    PerBar(Vec<String>),
}

/// One bar series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Legend label
    pub label: String,
    /// One value per chart label
    pub data: Vec<usize>,
    /// Bar fill
    pub background_color: BarColor,
}

/// Labels plus series for a bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarChart {
    /// Category labels, in table order
    pub labels: Vec<String>,
    /// Series drawn over the labels
    pub datasets: Vec<Dataset>,
}

impl BarChart {
    /// Entity frequency chart: one `Count` series.
    #[must_use]
    pub fn frequency(table: &FrequencyTable) -> Self {
        Self {
            labels: table.labels().map(str::to_string).collect(),
            datasets: vec![Dataset {
                label: "Count".to_string(),
                data: table.iter().map(|(_, count)| count).collect(),
                background_color: BarColor::PerBar(
                    FREQUENCY_COLORS.iter().map(|c| c.to_string()).collect(),
                ),
            }],
        }
    }

    /// Title vs abstract chart: `Title` and `Abstract` series.
    #[must_use]
    pub fn comparison(table: &ComparisonTable) -> Self {
        Self {
            labels: table.labels().map(str::to_string).collect(),
            datasets: vec![
                Dataset {
                    label: "Title".to_string(),
                    data: table.iter().map(|(_, c)| c.title).collect(),
                    background_color: BarColor::Single(TITLE_COLOR.to_string()),
                },
                Dataset {
                    label: "Abstract".to_string(),
                    data: table.iter().map(|(_, c)| c.abstract_).collect(),
                    background_color: BarColor::Single(ABSTRACT_COLOR.to_string()),
                },
            ],
        }
    }

    /// True when there is nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
