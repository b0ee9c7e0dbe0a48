//! Sidebar: logo, page menu, and the display controls.
//!
//! Reads the active page and reports clicks as actions; it never changes
//! the selection itself.

use egui::{Color32, Id, RichText, Ui};

use crate::frontend::navigation::{menu_item_class_for_selection, PageId};
use crate::frontend::state::{AppAction, SharedState};
use crate::frontend::widgets::MenuButton;

/// Fixed sidebar width in points
pub const SIDEBAR_WIDTH: f32 = 200.0;

/// Font scale change per click of the A-/A+ buttons
pub const FONT_SCALE_STEP: f32 = 0.1;

/// Stable id of the menu entry for `page`
pub fn menu_button_id(page: PageId) -> Id {
    Id::new("sidebar_menu").with(page.id())
}

/// Render the sidebar contents.
pub fn render_sidebar(ui: &mut Ui, shared: &SharedState<'_>) -> Vec<AppAction> {
    let mut actions = Vec::new();

    ui.add_space(16.0);
    render_logo(ui);
    ui.add_space(24.0);

    // === Menu ===
    for page in PageId::ALL {
        let class = menu_item_class_for_selection(shared.highlighted_page, page);
        let button = MenuButton::new(menu_button_id(page), page.menu_label(), class);
        if ui.add(button).clicked() {
            actions.push(AppAction::SelectPage(page));
        }
        ui.add_space(4.0);
    }

    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new("🌱").size(48.0));
    });

    // === Display controls (bottom) ===
    ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
        ui.add_space(8.0);
        let mut dark_mode = shared.dark_mode;
        let label = if dark_mode { "🌙 Dark" } else { "☀ Light" };
        if ui
            .toggle_value(&mut dark_mode, RichText::new(label).color(Color32::WHITE))
            .changed()
        {
            actions.push(AppAction::SetDarkMode(dark_mode));
        }

        ui.horizontal(|ui| {
            if ui.small_button("A-").on_hover_text("Smaller text").clicked() {
                actions.push(AppAction::SetFontScale(stepped_font_scale(
                    shared.font_scale,
                    -1,
                )));
            }
            ui.label(
                RichText::new(format!("{:.0}%", shared.font_scale * 100.0))
                    .small()
                    .color(Color32::WHITE),
            );
            if ui.small_button("A+").on_hover_text("Larger text").clicked() {
                actions.push(AppAction::SetFontScale(stepped_font_scale(
                    shared.font_scale,
                    1,
                )));
            }
        });
    });

    actions
}

/// Font scale `steps` clicks away from `current`, rounded to the step grid
pub fn stepped_font_scale(current: f32, steps: i32) -> f32 {
    let scaled = (current / FONT_SCALE_STEP).round() + steps as f32;
    scaled * FONT_SCALE_STEP
}

fn render_logo(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new("THE").small().color(Color32::WHITE));
        ui.label(
            RichText::new("DECARBONATOR")
                .heading()
                .strong()
                .color(Color32::WHITE),
        );
        ui.label(RichText::new("3000").color(Color32::LIGHT_GREEN));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_button_ids_are_distinct() {
        let ids: std::collections::HashSet<Id> =
            PageId::ALL.into_iter().map(menu_button_id).collect();
        assert_eq!(ids.len(), PageId::ALL.len());
    }

    #[test]
    fn test_stepped_font_scale() {
        assert!((stepped_font_scale(1.0, 1) - 1.1).abs() < 1e-5);
        assert!((stepped_font_scale(1.0, -1) - 0.9).abs() < 1e-5);
        assert!((stepped_font_scale(1.23, 1) - 1.3).abs() < 1e-5);
    }
}
