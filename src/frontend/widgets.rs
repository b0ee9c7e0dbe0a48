//! Custom widgets for the dashboard UI
//!
//! # Widgets
//!
//! - [`MenuButton`] - Full-width sidebar entry styled by its menu class
//! - [`ActionButton`] - Button with a stable id
//! - [`PlantCard`] - Clickable card showing one plant
//! - [`ValueDisplay`] - Formatted value with label
//! - [`LabeledSeparator`] - Horizontal separator with centered label

use egui::{Color32, Id, Response, RichText, Sense, Stroke, Ui, Widget};

use crate::frontend::navigation::MENU_ITEM_ACTIVE_CLASS;
use crate::types::Plant;

/// Sidebar background
pub const SIDEBAR_GREEN: Color32 = Color32::from_rgb(46, 125, 50);

/// Fill of the active menu entry
pub const MENU_ACTIVE_FILL: Color32 = Color32::from_rgb(200, 230, 201);

/// Text color of the active menu entry
pub const MENU_ACTIVE_TEXT: Color32 = Color32::from_rgb(27, 94, 32);

/// Accent used for highlighted cards
pub const ACCENT_GREEN: Color32 = Color32::from_rgb(102, 187, 106);

const MENU_BUTTON_HEIGHT: f32 = 36.0;

/// A sidebar menu entry
///
/// Interacts under a caller-supplied id so the entry keeps its identity
/// across frames regardless of what is laid out before it.
pub struct MenuButton {
    id: Id,
    label: String,
    class: &'static str,
}

impl MenuButton {
    /// Create a menu entry with the class computed for it
    pub fn new(id: Id, label: impl Into<String>, class: &'static str) -> Self {
        Self {
            id,
            label: label.into(),
            class,
        }
    }

    pub fn is_active(&self) -> bool {
        self.class == MENU_ITEM_ACTIVE_CLASS
    }

    /// Fill and text colors for the entry's class
    pub fn colors(&self) -> (Color32, Color32) {
        if self.is_active() {
            (MENU_ACTIVE_FILL, MENU_ACTIVE_TEXT)
        } else {
            (Color32::TRANSPARENT, Color32::WHITE)
        }
    }
}

impl Widget for MenuButton {
    fn ui(self, ui: &mut Ui) -> Response {
        let (fill, text_color) = self.colors();
        let size = egui::vec2(ui.available_width(), MENU_BUTTON_HEIGHT);
        let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
        let response = ui.interact(rect, self.id, Sense::click());

        if ui.is_rect_visible(rect) {
            let fill = if !self.is_active() && response.hovered() {
                ui.visuals().widgets.hovered.weak_bg_fill
            } else {
                fill
            };
            ui.painter().rect_filled(rect, 4.0, fill);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                &self.label,
                egui::TextStyle::Button.resolve(ui.style()),
                text_color,
            );
        }

        response
    }
}

/// A regular button that interacts under a fixed id
pub struct ActionButton {
    id: Id,
    label: RichText,
}

impl ActionButton {
    pub fn new(id: Id, label: impl Into<RichText>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

impl Widget for ActionButton {
    fn ui(self, ui: &mut Ui) -> Response {
        let padding = ui.spacing().button_padding;
        let galley = egui::WidgetText::from(self.label).into_galley(
            ui,
            None,
            f32::INFINITY,
            egui::TextStyle::Button,
        );
        let (rect, _) = ui.allocate_exact_size(galley.size() + 2.0 * padding, Sense::hover());
        let response = ui.interact(rect, self.id, Sense::click());

        if ui.is_rect_visible(rect) {
            let visuals = ui.style().interact(&response);
            ui.painter().rect_filled(rect, 4.0, visuals.weak_bg_fill);
            ui.painter()
                .galley(rect.min + padding, galley, visuals.text_color());
        }

        response
    }
}

/// A card for one plant
pub struct PlantCard<'a> {
    plant: &'a Plant,
    selected: bool,
}

impl<'a> PlantCard<'a> {
    pub fn new(plant: &'a Plant) -> Self {
        Self {
            plant,
            selected: false,
        }
    }

    /// Outline the card as selected
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl Widget for PlantCard<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let mut frame = egui::Frame::group(ui.style());
        if self.selected {
            frame = frame.stroke(Stroke::new(2.0, ACCENT_GREEN));
        }

        let response = frame
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(RichText::new("🌿").size(20.0));
                    ui.label(RichText::new(&self.plant.name).heading().strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.weak(format!("#{}", self.plant.id));
                    });
                });
                ui.label(&self.plant.description);
            })
            .response;

        response.interact(Sense::click())
    }
}

/// A widget for displaying a value with a label
pub struct ValueDisplay {
    label: String,
    value: String,
    color: Option<Color32>,
}

impl ValueDisplay {
    /// Create a new value display
    pub fn new(label: impl Into<String>, value: impl ToString) -> Self {
        Self {
            label: label.into(),
            value: value.to_string(),
            color: None,
        }
    }

    /// Set the color of the value
    pub fn with_color(mut self, color: Color32) -> Self {
        self.color = Some(color);
        self
    }
}

impl Widget for ValueDisplay {
    fn ui(self, ui: &mut Ui) -> Response {
        ui.horizontal(|ui| {
            ui.label(format!("{}:", self.label));

            if let Some(color) = self.color {
                ui.colored_label(color, self.value);
            } else {
                ui.strong(self.value);
            }
        })
        .response
    }
}

/// A horizontal separator with a label
pub struct LabeledSeparator {
    label: String,
}

impl LabeledSeparator {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Widget for LabeledSeparator {
    fn ui(self, ui: &mut Ui) -> Response {
        ui.horizontal(|ui| {
            ui.separator();
            ui.label(&self.label);
            ui.separator();
        })
        .response
    }
}
