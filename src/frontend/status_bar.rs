//! Status bar panel: bottom bar showing the active page and plant count.

use egui::{Color32, KeyboardShortcut, Modifiers, RichText, Ui};

use crate::frontend::state::SharedState;
use crate::frontend::PAGE_SHORTCUT_KEYS;

/// Render the status bar.
pub fn render_status_bar(ui: &mut Ui, shared: &SharedState<'_>) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        // === Active page ===
        ui.colored_label(Color32::LIGHT_GREEN, "●");
        ui.label(RichText::new(format!("Page: {}", shared.current_page)).small());

        ui.separator();

        // === Plant count ===
        ui.label(RichText::new(format!("Plants: {}", shared.plants.len())).small());

        let hint = shortcut_hint(ui.ctx());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak(RichText::new(hint).small());
        });
    });
}

/// Page-switching hint in the platform's shortcut notation
pub fn shortcut_hint(ctx: &egui::Context) -> String {
    let format = |key| ctx.format_shortcut(&KeyboardShortcut::new(Modifiers::COMMAND, key));
    let first = PAGE_SHORTCUT_KEYS[0];
    let last = PAGE_SHORTCUT_KEYS[PAGE_SHORTCUT_KEYS.len() - 1];
    format!("{}..{} to switch pages", format(first), format(last))
}
