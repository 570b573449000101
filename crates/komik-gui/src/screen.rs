pub mod detail;
pub mod list;

use iced::Size;

use komik_core::session::BrowseEvent;

/// Actions that a screen can request from the app.
///
/// Screens return these from `update()` instead of mutating shared state;
/// the app interprets them in one place.
#[derive(Debug, Clone)]
pub enum Action {
    /// No side-effect.
    None,
    /// Feed an event to the browse session.
    Browse(BrowseEvent),
    ToggleTheme,
    ToggleLanguage,
    /// Copy the open title to the clipboard.
    CopyTitle,
}

/// List layout, chosen from the window shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Two-column grid of cards.
    #[default]
    Portrait,
    /// One row per title with rating and synopsis.
    Landscape,
}

impl Orientation {
    pub fn from_size(size: Size) -> Self {
        if size.width > size.height {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }
}
