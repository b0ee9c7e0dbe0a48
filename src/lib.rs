//! # Decarbonator Dashboard
//!
//! A small single-window dashboard for THE DECARBONATOR 3000: a green
//! sidebar switches the content area between Dashboard, Plant Stats, Map and
//! About pages, and the Plant Stats page lists plants that can be appended to
//! with a button.
//!
//! ## Architecture
//!
//! - **Session state**: active page and plant list, owned by the root view and
//!   changed only through [`AppAction`]s
//! - **Navigation**: a closed [`PageId`] enum, the page selector, and the
//!   menu-class derivation used to highlight the active entry
//! - **Content dispatch**: [`frontend::dispatch`] maps the active page to a
//!   [`frontend::ContentView`] carrying the data that page may read
//! - **Frontend**: eframe/egui rendering of the sidebar, status bar and pages
//!
//! ## Configuration
//!
//! UI preferences (theme, font scale, window size) are stored under the
//! platform data directory in `dev.decarbonator.dashboard/app_state.json`.
//! The active page and the plants are never persisted.
//!
//! ## Example
//!
//! ```ignore
//! use decarbonator_dashboard::{config::AppState, frontend::DecarbonatorApp};
//!
//! fn main() -> eframe::Result<()> {
//!     let app_state = AppState::load_or_default();
//!     eframe::run_native(
//!         "Decarbonator 3000",
//!         eframe::NativeOptions::default(),
//!         Box::new(|cc| Ok(Box::new(DecarbonatorApp::new(cc, app_state)))),
//!     )
//! }
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod frontend;
pub mod types;

// Re-export commonly used types
pub use app::DecarbonatorApp;
pub use config::{AppState, UiPreferences};
pub use error::{DashboardError, Result};
pub use frontend::{AppAction, PageId, SessionState};
pub use types::{Plant, PlantList};
