use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoint, PlotPoints};

use avocadash::chart::HoverMode;

use crate::state::AppState;

/// Legend entries toggle their line on click.
pub const LEGEND_HINT: &str = "Click a region name in the legend to hide or show it and compare regions";

// ---------------------------------------------------------------------------
// Region comparison plot (central panel)
// ---------------------------------------------------------------------------

/// Render one line per region for the current chart.
pub fn region_plot(ui: &mut Ui, state: &AppState) {
    let chart = &state.chart;

    ui.label(LEGEND_HINT);

    if chart.series.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No data for this selection");
        });
        return;
    }

    let plot = Plot::new("region_plot")
        .legend(Legend::default())
        .x_axis_label(chart.x_axis_label.as_str())
        .y_axis_label(chart.y_axis_label.as_str())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);

    let plot = match chart.hover_mode {
        HoverMode::Closest => plot.label_formatter(|name: &str, value: &PlotPoint| {
            if name.is_empty() {
                String::new()
            } else {
                format!("{name}\nweek {:.0}\n{:.2}", value.x, value.y)
            }
        }),
    };

    plot.show(ui, |plot_ui| {
        for series in &chart.series {
            let points: PlotPoints = series
                .points
                .iter()
                .map(|p| [f64::from(p.week), p.value])
                .collect();

            let line = Line::new(points)
                .name(&series.region)
                .color(state.colors.color_for(&series.region))
                .width(1.5);

            plot_ui.line(line);
        }
    });
}
