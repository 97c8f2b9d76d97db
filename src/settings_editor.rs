use eframe::egui;

use crate::controller::VisibilityController;

/// Settings-panel widget: a single toggle bound to the persisted
/// preference. Changing it applies immediately to every open window.
pub fn settings_ui(ui: &mut egui::Ui, controller: &mut VisibilityController) {
    let mut hidden = controller.controls_hidden();
    if ui
        .checkbox(&mut hidden, "Hide native window controls")
        .changed()
    {
        apply_toggle(controller, hidden);
    }
}

/// A failed settings write is logged, not surfaced; the visual state
/// has already been applied when the save runs.
pub fn apply_toggle(controller: &mut VisibilityController, hidden: bool) {
    if let Err(err) = controller.apply_hidden(hidden) {
        tracing::warn!(error = %err, "could not persist settings from panel");
    }
}
