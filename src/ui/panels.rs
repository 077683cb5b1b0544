use eframe::egui::{self, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – selection widgets
// ---------------------------------------------------------------------------

/// Render the year / type / comparison pickers.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    // Edit a copy, then hand it back so the chart is rebuilt at most once.
    let mut selection = state.selection.clone();

    ui.strong("Year");
    egui::ComboBox::from_id_salt("year_picker")
        .selected_text(selection.year.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            for opt in &state.options.years {
                ui.selectable_value(&mut selection.year, opt.value, opt.label.as_str());
            }
        });
    ui.separator();

    ui.strong("Type");
    for opt in &state.options.product_types {
        ui.radio_value(
            &mut selection.product_type,
            opt.value.clone(),
            opt.label.as_str(),
        );
    }
    ui.separator();

    ui.strong("Comparison");
    for opt in &state.metric_options {
        ui.radio_value(&mut selection.metric, opt.value, opt.label.as_str());
    }

    state.select(selection);
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the header with dataset summary.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading(RichText::new("🥑 Avocado Analytics").strong());
        ui.separator();
        ui.label("Compare avocado prices and the number of avocados sold across U.S. regions");
    });
    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!("{} records loaded", state.dataset.len()));
        ui.separator();
        ui.label(format!("{} regions plotted", state.chart.series.len()));
    });
}
