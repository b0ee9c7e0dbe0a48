//! Page identifiers and the page selector
//!
//! The sidebar and the content dispatcher both read the selector. String
//! identifiers (`"dashboard"`, `"plant-stats"`, ...) are only parsed at the
//! edge; everything inside the app works with [`PageId`].

use std::fmt;
use std::str::FromStr;

/// Class of a menu entry that is not the active page
pub const MENU_ITEM_CLASS: &str = "menu-item";

/// Class of the menu entry for the active page
pub const MENU_ITEM_ACTIVE_CLASS: &str = "menu-item active";

/// Identifier of a main-content page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageId {
    #[default]
    Dashboard,
    PlantStats,
    Map,
    About,
}

impl PageId {
    /// All pages in sidebar order
    pub const ALL: [PageId; 4] = [
        PageId::Dashboard,
        PageId::PlantStats,
        PageId::Map,
        PageId::About,
    ];

    /// Stable string identifier
    pub fn id(&self) -> &'static str {
        match self {
            PageId::Dashboard => "dashboard",
            PageId::PlantStats => "plant-stats",
            PageId::Map => "map",
            PageId::About => "about",
        }
    }

    /// Parse a string identifier
    ///
    /// `"prediction"` is the older name of the map page and maps to
    /// [`PageId::Map`].
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "dashboard" => Some(PageId::Dashboard),
            "plant-stats" => Some(PageId::PlantStats),
            "map" | "prediction" => Some(PageId::Map),
            "about" => Some(PageId::About),
            _ => None,
        }
    }

    /// Parse a string identifier, falling back to the dashboard
    pub fn resolve(id: &str) -> Self {
        Self::from_id(id).unwrap_or_else(|| {
            tracing::debug!("Unknown page identifier {:?}, showing dashboard", id);
            PageId::default()
        })
    }

    /// Label on the sidebar button
    pub fn menu_label(&self) -> &'static str {
        match self {
            PageId::Dashboard => "DASHBOARD",
            PageId::PlantStats => "PLANT STATS",
            PageId::Map => "Map",
            PageId::About => "ABOUT US",
        }
    }

    /// Heading of the content area
    pub fn content_title(&self) -> &'static str {
        match self {
            PageId::Dashboard => "Dashboard Page",
            PageId::PlantStats => "Plant Stats Page",
            PageId::Map => "Map Page",
            PageId::About => "About Us Page",
        }
    }

    /// Sub-heading of the content area
    pub fn content_subtitle(&self) -> &'static str {
        match self {
            PageId::Dashboard => "คุณกำลังอยู่ที่หน้า Dashboard",
            PageId::PlantStats => "คุณกำลังอยู่ที่หน้า Plant Stats",
            PageId::Map => "คุณกำลังอยู่ที่หน้า Map",
            PageId::About => "คุณกำลังอยู่ที่หน้า About Us",
        }
    }

    /// Page bound to the Ctrl/Cmd+<n> shortcut, 1-based
    pub fn from_shortcut(n: usize) -> Option<Self> {
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when parsing an identifier outside the closed set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page identifier: {0:?}")]
pub struct UnknownPage(pub String);

impl FromStr for PageId {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| UnknownPage(s.to_string()))
    }
}

/// Menu class for `target` given the active page
pub fn menu_item_class(current: PageId, target: PageId) -> &'static str {
    if current == target {
        MENU_ITEM_ACTIVE_CLASS
    } else {
        MENU_ITEM_CLASS
    }
}

/// Menu class for a raw identifier
///
/// Identifiers outside the closed set never highlight.
pub fn menu_item_class_for_id(current: PageId, target_id: &str) -> &'static str {
    match PageId::from_id(target_id) {
        Some(target) => menu_item_class(current, target),
        None => MENU_ITEM_CLASS,
    }
}

/// Menu class for `target` given the highlighted page, if any
///
/// `None` means the last selection was not a known page, so nothing is
/// highlighted.
pub fn menu_item_class_for_selection(
    highlighted: Option<PageId>,
    target: PageId,
) -> &'static str {
    match highlighted {
        Some(current) => menu_item_class(current, target),
        None => MENU_ITEM_CLASS,
    }
}

/// Holds the active page
///
/// `selected` is `None` after an unrecognized identifier: the content falls
/// back to the dashboard but no menu entry is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSelector {
    selected: Option<PageId>,
}

impl Default for PageSelector {
    fn default() -> Self {
        Self {
            selected: Some(PageId::default()),
        }
    }
}

impl PageSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page whose content is shown
    pub fn current(&self) -> PageId {
        self.selected.unwrap_or_default()
    }

    /// Page whose menu entry is highlighted
    pub fn highlighted(&self) -> Option<PageId> {
        self.selected
    }

    pub fn select(&mut self, page: PageId) {
        if self.selected != Some(page) {
            tracing::debug!("Page changed: {} -> {}", self.current(), page);
        }
        self.selected = Some(page);
    }

    /// Select by string identifier
    ///
    /// Unknown identifiers show the dashboard and clear the highlight.
    pub fn select_id(&mut self, id: &str) {
        match PageId::from_id(id) {
            Some(page) => self.select(page),
            None => {
                tracing::debug!("Unknown page identifier {:?}, showing dashboard", id);
                self.selected = None;
            }
        }
    }

    pub fn is_active(&self, page: PageId) -> bool {
        self.selected == Some(page)
    }

    pub fn menu_item_class(&self, target: PageId) -> &'static str {
        menu_item_class_for_selection(self.selected, target)
    }
}
