//! Map page - placeholder until plant locations exist

use egui::{RichText, Ui};

use super::Page;
use crate::frontend::state::{AppAction, SharedState};

#[derive(Default)]
pub struct MapPageState;

pub struct MapPage;

impl Page for MapPage {
    type State = MapPageState;

    fn render(
        _state: &mut Self::State,
        _shared: &SharedState<'_>,
        ui: &mut Ui,
    ) -> Vec<AppAction> {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.set_min_height(240.0);
            ui.vertical_centered(|ui| {
                ui.add_space(80.0);
                ui.label(RichText::new("🗺").size(40.0));
                ui.weak("No plant locations to show.");
            });
        });

        Vec::new()
    }
}
