//! Shared state types for the frontend
//!
//! This module defines the session state owned by the root view, the
//! read-only view of it that pages borrow, and the actions pages return
//! instead of mutating state directly.

use crate::config::UiPreferences;
use crate::frontend::navigation::{PageId, PageSelector};
use crate::frontend::pages::{dispatch, ContentView};
use crate::types::{Plant, PlantList};

/// Read-only state handed to the sidebar and pages
#[derive(Debug, Clone, Copy)]
pub struct SharedState<'a> {
    /// Page whose content is shown
    pub current_page: PageId,
    /// Highlighted menu entry; `None` after an unrecognized identifier
    pub highlighted_page: Option<PageId>,
    /// Current plant sequence
    pub plants: &'a [Plant],
    /// Whether dark visuals are active
    pub dark_mode: bool,
    /// Current font scale factor
    pub font_scale: f32,
}

/// Actions that any view can emit
///
/// Views return `Vec<AppAction>`; the root applies them once the frame's
/// UI has been laid out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppAction {
    /// Switch the main content to another page
    SelectPage(PageId),
    /// Append one synthetic plant
    AddPlant,
    /// Toggle dark visuals (persisted preference)
    SetDarkMode(bool),
    /// Change the font scale (persisted preference, clamped on apply)
    SetFontScale(f32),
}

/// Session state: active page plus the plant list
///
/// Lives as long as the window. Nothing here is persisted.
#[derive(Debug, Clone)]
pub struct SessionState {
    selector: PageSelector,
    plants: PlantList,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// Fresh session: dashboard selected, seeded plants
    pub fn new() -> Self {
        Self::with_plants(PlantList::seeded())
    }

    pub fn with_plants(plants: PlantList) -> Self {
        Self {
            selector: PageSelector::new(),
            plants,
        }
    }

    pub fn current_page(&self) -> PageId {
        self.selector.current()
    }

    pub fn selector(&self) -> &PageSelector {
        &self.selector
    }

    pub fn plants(&self) -> &PlantList {
        &self.plants
    }

    /// Select a page by typed identifier
    pub fn set_page(&mut self, page: PageId) {
        self.selector.select(page);
    }

    /// Select a page by string identifier
    ///
    /// Unknown identifiers show the dashboard with no menu entry highlighted.
    pub fn set_page_id(&mut self, id: &str) {
        self.selector.select_id(id);
    }

    /// Append one plant
    pub fn add_plant(&mut self) -> &Plant {
        self.plants.add_plant()
    }

    pub fn menu_item_class(&self, target: PageId) -> &'static str {
        self.selector.menu_item_class(target)
    }

    /// Content for the active page
    pub fn content(&self) -> ContentView<'_> {
        dispatch(self.current_page(), &self.plants)
    }

    /// Apply a session-level action
    ///
    /// Returns `false` for actions the session does not own (preferences).
    pub fn apply(&mut self, action: AppAction) -> bool {
        match action {
            AppAction::SelectPage(page) => {
                self.set_page(page);
                true
            }
            AppAction::AddPlant => {
                self.add_plant();
                true
            }
            AppAction::SetDarkMode(_) | AppAction::SetFontScale(_) => false,
        }
    }

    pub fn shared(&self, preferences: &UiPreferences) -> SharedState<'_> {
        SharedState {
            current_page: self.current_page(),
            highlighted_page: self.selector.highlighted(),
            plants: self.plants.as_slice(),
            dark_mode: preferences.dark_mode,
            font_scale: preferences.font_scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let session = SessionState::new();
        assert_eq!(session.current_page(), PageId::Dashboard);
        assert_eq!(session.plants().len(), 2);
        assert_eq!(session.content(), ContentView::Dashboard);
    }

    #[test]
    fn test_apply_actions() {
        let mut session = SessionState::new();
        assert!(session.apply(AppAction::SelectPage(PageId::Map)));
        assert_eq!(session.current_page(), PageId::Map);

        assert!(session.apply(AppAction::AddPlant));
        assert_eq!(session.plants().len(), 3);

        assert!(!session.apply(AppAction::SetDarkMode(false)));
        assert!(!session.apply(AppAction::SetFontScale(1.5)));
        assert_eq!(session.current_page(), PageId::Map);
        assert_eq!(session.plants().len(), 3);
    }

    #[test]
    fn test_shared_borrows_current_plants() {
        let mut session = SessionState::new();
        session.add_plant();
        let shared = session.shared(&UiPreferences::default());
        assert_eq!(shared.plants.len(), 3);
        assert_eq!(shared.current_page, PageId::Dashboard);
        assert_eq!(shared.highlighted_page, Some(PageId::Dashboard));
        assert!(shared.dark_mode);
    }
}
