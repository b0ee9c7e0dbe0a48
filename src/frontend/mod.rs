//! Frontend module for egui UI
//!
//! # Architecture
//!
//! [`DecarbonatorApp`] owns the [`SessionState`] (active page + plants) and
//! the persisted [`AppState`]. Every frame it lays out three regions:
//!
//! - a fixed green sidebar on the left ([`sidebar`])
//! - a status bar along the bottom ([`status_bar`])
//! - the content area, whose page is picked by [`pages::dispatch`]
//!
//! The sidebar and pages only borrow state. They return [`AppAction`]s which
//! are applied after the frame has been laid out.

pub mod navigation;
pub mod pages;
pub mod sidebar;
pub mod state;
pub mod status_bar;
pub mod widgets;

pub use navigation::{
    menu_item_class, menu_item_class_for_id, menu_item_class_for_selection, PageId, PageSelector,
};
pub use pages::{dispatch, dispatch_id, ContentView, Page, PageStates};
pub use state::{AppAction, SessionState, SharedState};

use egui::{Color32, RichText};

use crate::config::AppState;

/// Keys that, with Ctrl/Cmd, select the pages in sidebar order
pub const PAGE_SHORTCUT_KEYS: [egui::Key; 4] = [
    egui::Key::Num1,
    egui::Key::Num2,
    egui::Key::Num3,
    egui::Key::Num4,
];

/// Main application state for the dashboard
pub struct DecarbonatorApp {
    session: SessionState,
    app_state: AppState,
    page_states: PageStates,
}

impl DecarbonatorApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>, app_state: AppState) -> Self {
        apply_font_scale(&cc.egui_ctx, app_state.ui_preferences.font_scale);
        apply_visuals(&cc.egui_ctx, app_state.ui_preferences.dark_mode);

        Self::with_state(SessionState::new(), app_state)
    }

    /// Build the app without a window (used by tests)
    pub fn with_state(session: SessionState, app_state: AppState) -> Self {
        Self {
            session,
            app_state,
            page_states: PageStates::default(),
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Apply one action emitted by the sidebar, a page, or a shortcut
    pub fn handle_action(&mut self, action: AppAction) {
        if self.session.apply(action) {
            return;
        }

        match action {
            AppAction::SetDarkMode(dark_mode) => {
                tracing::debug!("Dark mode set to {}", dark_mode);
                self.app_state.ui_preferences.dark_mode = dark_mode;
            }
            AppAction::SetFontScale(scale) => {
                self.app_state.ui_preferences.set_font_scale(scale);
                tracing::debug!(
                    "Font scale set to {}",
                    self.app_state.ui_preferences.font_scale
                );
            }
            AppAction::SelectPage(_) | AppAction::AddPlant => {}
        }
    }

    fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        let pressed = ctx.input(|i| {
            if !i.modifiers.command_only() {
                return None;
            }
            PAGE_SHORTCUT_KEYS
                .iter()
                .position(|key| i.key_pressed(*key))
        });

        if let Some(page) = pressed.and_then(|index| PageId::from_shortcut(index + 1)) {
            self.handle_action(AppAction::SelectPage(page));
        }
    }

    /// Lay out one frame and return the actions the UI produced
    pub fn render(&mut self, ctx: &egui::Context) -> Vec<AppAction> {
        let mut actions = Vec::new();
        let shared = self.session.shared(&self.app_state.ui_preferences);

        egui::SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(sidebar::SIDEBAR_WIDTH)
            .frame(egui::Frame::side_top_panel(&ctx.style()).fill(widgets::SIDEBAR_GREEN))
            .show(ctx, |ui| {
                actions.extend(sidebar::render_sidebar(ui, &shared));
            });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            status_bar::render_status_bar(ui, &shared);
        });

        let page_states = &mut self.page_states;
        let view = self.session.content();
        egui::CentralPanel::default().show(ctx, |ui| {
            let page = view.page();
            ui.label(
                RichText::new(page.content_title())
                    .heading()
                    .strong()
                    .size(28.0),
            );
            ui.label(RichText::new(page.content_subtitle()).color(Color32::GRAY));
            ui.separator();
            ui.add_space(8.0);

            actions.extend(pages::render_content(page_states, view, &shared, ui));
        });

        actions
    }
}

/// Scale egui's default text styles by `scale`
fn apply_font_scale(ctx: &egui::Context, scale: f32) {
    let mut style = (*ctx.style()).clone();
    style.text_styles = egui::Style::default().text_styles;
    style.text_styles.iter_mut().for_each(|(_, font_id)| {
        font_id.size *= scale;
    });
    ctx.set_style(style);
}

fn apply_visuals(ctx: &egui::Context, dark_mode: bool) {
    if dark_mode {
        ctx.set_visuals(egui::Visuals::dark());
    } else {
        ctx.set_visuals(egui::Visuals::light());
    }
}

impl eframe::App for DecarbonatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard_shortcuts(ctx);

        let before = self.app_state.ui_preferences.clone();
        for action in self.render(ctx) {
            self.handle_action(action);
        }
        let prefs = &self.app_state.ui_preferences;
        if prefs.dark_mode != before.dark_mode {
            apply_visuals(ctx, prefs.dark_mode);
        }
        if prefs.font_scale != before.font_scale {
            apply_font_scale(ctx, prefs.font_scale);
        }

        if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
            self.app_state.update_window_size(rect.width(), rect.height());
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        tracing::info!(
            "Session ended with {} plants on page {}",
            self.session.plants().len(),
            self.session.current_page()
        );

        if let Err(e) = self.app_state.save() {
            tracing::warn!("Failed to save app state: {}", e);
        }
    }
}
