use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

use crate::data::filter::filter_selection;
use crate::data::model::{
    PreparedDataset, Record, SelectorOption, SelectorOptions, DEFAULT_PRODUCT_TYPE,
};

pub const X_AXIS_LABEL: &str = "week of the year";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    #[error("invalid metric '{metric}', expected 'price' or 'volume'")]
    InvalidMetric { metric: String },
}

// ---------------------------------------------------------------------------
// Metric – what the y axis shows
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Price,
    Volume,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::Price, Metric::Volume];

    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Price => "price",
            Metric::Volume => "volume",
        }
    }

    pub fn y_axis_label(self) -> &'static str {
        match self {
            Metric::Price => "Price",
            Metric::Volume => "Total Volume",
        }
    }

    /// Picker entries: `("price compare", price)`, `("volume compare", volume)`.
    pub fn options() -> Vec<SelectorOption<Metric>> {
        Metric::ALL
            .iter()
            .map(|&m| SelectorOption {
                label: format!("{} compare", m.as_str()),
                value: m,
            })
            .collect()
    }

    fn value_of(self, rec: &Record) -> f64 {
        match self {
            Metric::Price => rec.average_price,
            Metric::Volume => rec.total_volume,
        }
    }
}

impl FromStr for Metric {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price" => Ok(Metric::Price),
            "volume" => Ok(Metric::Volume),
            other => Err(ChartError::InvalidMetric {
                metric: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Selection – the three picker values of one request
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub year: i32,
    pub product_type: String,
    pub metric: Metric,
}

impl Selection {
    /// Earliest year, `"conventional"` (or the first type seen), price.
    pub fn initial(options: &SelectorOptions) -> Self {
        Selection {
            year: options.default_year().unwrap_or_default(),
            product_type: options
                .default_product_type()
                .unwrap_or(DEFAULT_PRODUCT_TYPE)
                .to_string(),
            metric: Metric::default(),
        }
    }

    pub fn resolve(&self, dataset: &PreparedDataset) -> ChartResult {
        resolve_metric(dataset, self.year, &self.product_type, self.metric)
    }
}

// ---------------------------------------------------------------------------
// Chart description handed to the renderer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HoverMode {
    #[default]
    Closest,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub week: u32,
    pub value: f64,
}

/// One line on the chart: every matching point of a single region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub region: String,
    pub points: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartResult {
    pub series: Vec<Series>,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub hover_mode: HoverMode,
}

impl ChartResult {
    fn empty(metric: Metric) -> Self {
        ChartResult {
            series: Vec::new(),
            x_axis_label: X_AXIS_LABEL.to_string(),
            y_axis_label: metric.y_axis_label().to_string(),
            hover_mode: HoverMode::Closest,
        }
    }
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

/// Build the chart for a selection, with the metric given as text.
///
/// Fails only for a metric other than `"price"` / `"volume"`. A year or
/// product type with no rows gives a chart with no series.
pub fn resolve(
    dataset: &PreparedDataset,
    year: i32,
    product_type: &str,
    metric: &str,
) -> Result<ChartResult, ChartError> {
    let metric: Metric = metric.parse()?;
    Ok(resolve_metric(dataset, year, product_type, metric))
}

/// One series per region, points in prepared (date) order.
pub fn resolve_metric(
    dataset: &PreparedDataset,
    year: i32,
    product_type: &str,
    metric: Metric,
) -> ChartResult {
    let mut by_region: IndexMap<&str, Vec<SeriesPoint>> = IndexMap::new();
    for rec in filter_selection(dataset, year, product_type) {
        by_region
            .entry(rec.region.as_str())
            .or_default()
            .push(SeriesPoint {
                week: rec.week,
                value: metric.value_of(rec),
            });
    }

    log::debug!(
        "Resolved {year}/{product_type}/{metric}: {} regions",
        by_region.len()
    );

    let mut chart = ChartResult::empty(metric);
    chart.series = by_region
        .into_iter()
        .map(|(region, points)| Series {
            region: region.to_string(),
            points,
        })
        .collect();
    chart
}
