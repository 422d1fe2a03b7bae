//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for animations and fetch polling
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Force quit without confirmation
    ForceQuit,
    /// Transition from splash to main app
    SplashComplete,

    // ─────────────────────────────────────────────────────────────────────────
    // Gallery Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move to the next card in the grid
    NextCard,
    /// Move to the previous card in the grid
    PrevCard,
    /// Move one row down in the grid
    NextRow,
    /// Move one row up in the grid
    PrevRow,
    /// Jump to the first card
    FirstCard,
    /// Jump to the last card
    LastCard,

    // ─────────────────────────────────────────────────────────────────────────
    // Feed
    // ─────────────────────────────────────────────────────────────────────────
    /// Fetch the feed and rebuild the gallery
    FetchFeed,

    // ─────────────────────────────────────────────────────────────────────────
    // Overlay & Dialogs
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the detail overlay for the selected card
    OpenEntry,
    /// Open the detail overlay for the card at a grid index (mouse)
    OpenEntryAt(usize),
    /// Close the current modal
    CloseModal,
    /// Open the help dialog showing key bindings
    OpenHelp,
    /// Open the quit confirmation dialog
    OpenQuitDialog,

    // ─────────────────────────────────────────────────────────────────────────
    // Overlay Scrolling
    // ─────────────────────────────────────────────────────────────────────────
    /// Scroll the explanation text up one line
    ScrollUp,
    /// Scroll the explanation text down one line
    ScrollDown,
    /// Scroll the explanation text up one page
    PageUp,
    /// Scroll the explanation text down one page
    PageDown,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::SplashComplete => write!(f, "SplashComplete"),
            Action::NextCard => write!(f, "NextCard"),
            Action::PrevCard => write!(f, "PrevCard"),
            Action::NextRow => write!(f, "NextRow"),
            Action::PrevRow => write!(f, "PrevRow"),
            Action::FirstCard => write!(f, "FirstCard"),
            Action::LastCard => write!(f, "LastCard"),
            Action::FetchFeed => write!(f, "FetchFeed"),
            Action::OpenEntry => write!(f, "OpenEntry"),
            Action::OpenEntryAt(i) => write!(f, "OpenEntryAt({})", i),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::ScrollUp => write!(f, "ScrollUp"),
            Action::ScrollDown => write!(f, "ScrollDown"),
            Action::PageUp => write!(f, "PageUp"),
            Action::PageDown => write!(f, "PageDown"),
        }
    }
}
