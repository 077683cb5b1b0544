use avocadash::chart::{ChartResult, Metric, Selection};
use avocadash::data::{PreparedDataset, SelectorOption, SelectorOptions};

use crate::color::RegionColors;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Prepared once at startup, never modified.
    pub dataset: PreparedDataset,

    /// Year / product type choices derived from the dataset.
    pub options: SelectorOptions,

    pub metric_options: Vec<SelectorOption<Metric>>,

    /// Current picker values.
    pub selection: Selection,

    /// Chart for `selection` (cached).
    pub chart: ChartResult,

    pub colors: RegionColors,
}

impl AppState {
    pub fn new(dataset: PreparedDataset, options: SelectorOptions) -> Self {
        let selection = Selection::initial(&options);
        let chart = selection.resolve(&dataset);
        let colors = RegionColors::new(&dataset);
        log::info!(
            "Initial selection {}/{}/{}: {} regions",
            selection.year,
            selection.product_type,
            selection.metric,
            chart.series.len()
        );
        Self {
            dataset,
            options,
            metric_options: Metric::options(),
            selection,
            chart,
            colors,
        }
    }

    /// Apply new picker values; the chart is only rebuilt when they differ.
    pub fn select(&mut self, selection: Selection) {
        if selection == self.selection {
            return;
        }
        self.selection = selection;
        self.chart = self.selection.resolve(&self.dataset);
    }
}
