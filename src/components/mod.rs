//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod entry_dialog;
pub mod gallery;
pub mod help_dialog;
pub mod layout;
pub mod quit_dialog;
pub mod splash;

pub use entry_dialog::{DialogHit, EntryDialog};
pub use gallery::{draw_main_screen, GalleryComponent, MainRenderContext};
pub use help_dialog::HelpDialog;
pub use layout::{calculate_main_layout, centered_popup};
pub use quit_dialog::QuitDialog;
pub use splash::SplashComponent;
