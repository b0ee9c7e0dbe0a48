//! Dashboard page - landing view with shortcuts to the other pages
//!
//! Takes no data from the session.

use egui::{RichText, Ui};

use super::Page;
use crate::frontend::navigation::PageId;
use crate::frontend::state::{AppAction, SharedState};
use crate::frontend::widgets::LabeledSeparator;

/// State specific to the Dashboard page
#[derive(Default)]
pub struct DashboardPageState {
    /// Whether the intro text is collapsed
    pub intro_hidden: bool,
}

pub struct DashboardPage;

impl Page for DashboardPage {
    type State = DashboardPageState;

    fn render(
        state: &mut Self::State,
        _shared: &SharedState<'_>,
        ui: &mut Ui,
    ) -> Vec<AppAction> {
        let mut actions = Vec::new();

        if !state.intro_hidden {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new("Welcome to THE DECARBONATOR 3000").strong());
                ui.label("Track your plants and see how much carbon they take in.");
                if ui.small_button("Hide").clicked() {
                    state.intro_hidden = true;
                }
            });
            ui.add_space(12.0);
        }

        ui.add(LabeledSeparator::new("Go to"));
        ui.horizontal_wrapped(|ui| {
            for page in PageId::ALL.into_iter().filter(|p| *p != PageId::Dashboard) {
                if ui.button(page.content_title()).clicked() {
                    actions.push(AppAction::SelectPage(page));
                }
            }
        });

        actions
    }
}
