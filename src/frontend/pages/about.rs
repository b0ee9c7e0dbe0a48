//! About page - project blurb and build info

use egui::{RichText, Ui};

use super::Page;
use crate::frontend::state::{AppAction, SharedState};
use crate::frontend::widgets::ValueDisplay;

#[derive(Default)]
pub struct AboutPageState;

pub struct AboutPage;

impl Page for AboutPage {
    type State = AboutPageState;

    fn render(
        _state: &mut Self::State,
        _shared: &SharedState<'_>,
        ui: &mut Ui,
    ) -> Vec<AppAction> {
        ui.label(RichText::new("THE DECARBONATOR 3000").heading().strong());
        ui.label("A small dashboard for keeping an eye on the plants that soak up our carbon.");
        ui.add_space(12.0);
        ui.add(ValueDisplay::new("Version", env!("CARGO_PKG_VERSION")));
        ui.add(ValueDisplay::new("License", env!("CARGO_PKG_LICENSE")));

        Vec::new()
    }
}
