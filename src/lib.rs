//! Avocado sales dashboard core.
//!
//! [`data`] loads and prepares the sales table once; [`chart::resolve`]
//! turns a (year, product type, metric) selection into one line series per
//! region. The viewer binary only draws what the resolver returns.

pub mod chart;
pub mod config;
pub mod data;

pub use chart::{
    resolve, resolve_metric, ChartError, ChartResult, Metric, Selection, Series, SeriesPoint,
};
pub use data::{load_file, prepare, DataError, PreparedDataset, SelectorOptions};
