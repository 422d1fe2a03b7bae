//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `DomainState` - Fetched feed data and gallery placeholder state
//! - `Overlay` - The single detail overlay and its media slot
//! - `ModalStack` - Modal overlay management

pub mod entry;
pub mod facts;
pub mod gallery;
pub mod modal;
pub mod overlay;
pub mod ui;

// Re-export commonly used types
pub use entry::{GalleryEntry, Media};
pub use gallery::{DomainState, GalleryState};
pub use modal::{Modal, ModalStack};
pub use overlay::{MediaSlot, Overlay, VideoFrame};
pub use ui::AppMode;
