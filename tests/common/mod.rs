//! Common test utilities and helpers

#![allow(dead_code)] // Test utilities may not all be used in every test file

pub mod builders;

use decarbonator_dashboard::frontend::AppAction;
use decarbonator_dashboard::DecarbonatorApp;
use egui::{Event, Modifiers, PointerButton, Pos2, Rect};

/// Logical screen size used for headless frames
pub const SCREEN_SIZE: egui::Vec2 = egui::vec2(1100.0, 720.0);

/// Lay out one headless frame and return the actions it produced
pub fn render_frame(app: &mut DecarbonatorApp) -> Vec<AppAction> {
    HeadlessUi::new().frame(app, Vec::new())
}

/// A persistent egui context that feeds synthetic input to the app
///
/// Widget interaction is resolved against the previous frame's layout, so
/// the same context has to be reused across frames.
pub struct HeadlessUi {
    ctx: egui::Context,
}

impl HeadlessUi {
    pub fn new() -> Self {
        Self {
            ctx: egui::Context::default(),
        }
    }

    /// Run one frame with `events` and return the actions it produced
    pub fn frame(&mut self, app: &mut DecarbonatorApp, events: Vec<Event>) -> Vec<AppAction> {
        let input = egui::RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, SCREEN_SIZE)),
            events,
            ..Default::default()
        };

        let mut actions = Vec::new();
        let _ = self.ctx.run(input, |ctx| {
            actions = app.render(ctx);
        });
        actions
    }

    /// Rect of the widget with `id` as laid out in the last frame
    pub fn widget_rect(&self, id: egui::Id) -> Option<Rect> {
        self.ctx.read_response(id).map(|response| response.rect)
    }

    /// Lay out a frame, then press and release the primary button over the
    /// widget with `id`. Returns the actions of the release frame.
    pub fn click(&mut self, app: &mut DecarbonatorApp, id: egui::Id) -> Vec<AppAction> {
        self.frame(app, Vec::new());
        let pos = self
            .widget_rect(id)
            .unwrap_or_else(|| panic!("widget {id:?} was not laid out"))
            .center();

        let button = |pressed| Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        };

        let pressed = self.frame(app, vec![Event::PointerMoved(pos), button(true)]);
        assert!(pressed.is_empty(), "press alone emitted {pressed:?}");
        self.frame(app, vec![button(false)])
    }
}

impl Default for HeadlessUi {
    fn default() -> Self {
        Self::new()
    }
}
