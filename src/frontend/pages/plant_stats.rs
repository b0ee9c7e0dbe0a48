//! Plant Stats page - one card per plant plus the "Add Plant" button
//!
//! The page only reads the plant slice; appending goes through
//! [`AppAction::AddPlant`].

use egui::{Id, RichText, Ui};

use super::Page;
use crate::frontend::state::{AppAction, SharedState};
use crate::frontend::widgets::{ActionButton, PlantCard, ValueDisplay, ACCENT_GREEN};

/// Stable id of the "Add Plant" button
pub fn add_plant_button_id() -> Id {
    Id::new("plant_stats_add_plant")
}

/// State specific to the Plant Stats page
#[derive(Default)]
pub struct PlantStatsPageState {
    /// Id of the highlighted card
    pub selected: Option<u32>,
}

impl PlantStatsPageState {
    /// Select a card, or clear the selection when it is clicked again
    pub fn toggle_selected(&mut self, id: u32) {
        self.selected = if self.selected == Some(id) {
            None
        } else {
            Some(id)
        };
    }
}

pub struct PlantStatsPage;

impl Page for PlantStatsPage {
    type State = PlantStatsPageState;

    fn render(
        state: &mut Self::State,
        shared: &SharedState<'_>,
        ui: &mut Ui,
    ) -> Vec<AppAction> {
        let mut actions = Vec::new();

        ui.horizontal(|ui| {
            ui.add(ValueDisplay::new("Plants", shared.plants.len()).with_color(ACCENT_GREEN));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let button = ActionButton::new(
                    add_plant_button_id(),
                    RichText::new("➕ Add Plant").strong(),
                );
                if ui.add(button).clicked() {
                    actions.push(AppAction::AddPlant);
                }
            });
        });
        ui.add_space(8.0);

        if shared.plants.is_empty() {
            ui.weak("No plants yet.");
            return actions;
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for plant in shared.plants {
                    let selected = state.selected == Some(plant.id);
                    if ui.add(PlantCard::new(plant).selected(selected)).clicked() {
                        state.toggle_selected(plant.id);
                    }
                    ui.add_space(6.0);
                }
            });

        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_selected() {
        let mut state = PlantStatsPageState::default();
        state.toggle_selected(2);
        assert_eq!(state.selected, Some(2));
        state.toggle_selected(1);
        assert_eq!(state.selected, Some(1));
        state.toggle_selected(1);
        assert_eq!(state.selected, None);
    }
}
