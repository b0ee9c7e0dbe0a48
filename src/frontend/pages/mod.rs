//! Page modules for the frontend
//!
//! Each page implements the Page trait, receiving shared state read-only
//! and returning actions instead of mutating state directly.
//!
//! The content dispatcher ([`dispatch`]) maps the active [`PageId`] to a
//! [`ContentView`], which carries exactly the data that page is allowed
//! to see.

mod about;
mod dashboard;
mod map;
mod plant_stats;

pub use about::{AboutPage, AboutPageState};
pub use dashboard::{DashboardPage, DashboardPageState};
pub use map::{MapPage, MapPageState};
pub use plant_stats::{add_plant_button_id, PlantStatsPage, PlantStatsPageState};

use egui::Ui;

use crate::frontend::navigation::PageId;
use crate::frontend::state::{AppAction, SharedState};
use crate::types::{Plant, PlantList};

/// Trait for page components
///
/// # Example
///
/// ```ignore
/// #[derive(Default)]
/// pub struct MyPageState {
///     selection: Option<u32>,
/// }
///
/// pub struct MyPage;
///
/// impl Page for MyPage {
///     type State = MyPageState;
///
///     fn render(
///         state: &mut Self::State,
///         shared: &SharedState<'_>,
///         ui: &mut Ui,
///     ) -> Vec<AppAction> {
///         let mut actions = Vec::new();
///         if ui.button("Add").clicked() {
///             actions.push(AppAction::AddPlant);
///         }
///         actions
///     }
/// }
/// ```
pub trait Page {
    /// Page-specific UI state (selections, toggles)
    ///
    /// Owned by the main app and kept across frames and page switches.
    type State: Default;

    /// Render the page into the content area and return any actions
    fn render(state: &mut Self::State, shared: &SharedState<'_>, ui: &mut Ui) -> Vec<AppAction>;
}

/// What the content area shows, with the data that view receives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentView<'a> {
    Dashboard,
    PlantStats { plants: &'a [Plant] },
    Map,
    About,
}

impl ContentView<'_> {
    /// Page this view belongs to
    pub fn page(&self) -> PageId {
        match self {
            ContentView::Dashboard => PageId::Dashboard,
            ContentView::PlantStats { .. } => PageId::PlantStats,
            ContentView::Map => PageId::Map,
            ContentView::About => PageId::About,
        }
    }
}

/// Pick the view for the active page
pub fn dispatch(page: PageId, plants: &PlantList) -> ContentView<'_> {
    match page {
        PageId::Dashboard => ContentView::Dashboard,
        PageId::PlantStats => ContentView::PlantStats {
            plants: plants.as_slice(),
        },
        PageId::Map => ContentView::Map,
        PageId::About => ContentView::About,
    }
}

/// Pick the view for a raw identifier; unknown identifiers show the dashboard
pub fn dispatch_id<'a>(id: &str, plants: &'a PlantList) -> ContentView<'a> {
    dispatch(PageId::resolve(id), plants)
}

/// Per-page UI state, kept while other pages are shown
#[derive(Default)]
pub struct PageStates {
    pub dashboard: DashboardPageState,
    pub plant_stats: PlantStatsPageState,
    pub map: MapPageState,
    pub about: AboutPageState,
}

/// Render the dispatched view
pub fn render_content(
    states: &mut PageStates,
    view: ContentView<'_>,
    shared: &SharedState<'_>,
    ui: &mut Ui,
) -> Vec<AppAction> {
    match view {
        ContentView::Dashboard => DashboardPage::render(&mut states.dashboard, shared, ui),
        ContentView::PlantStats { plants } => {
            let shared = SharedState { plants, ..*shared };
            PlantStatsPage::render(&mut states.plant_stats, &shared, ui)
        }
        ContentView::Map => MapPage::render(&mut states.map, shared, ui),
        ContentView::About => AboutPage::render(&mut states.about, shared, ui),
    }
}
