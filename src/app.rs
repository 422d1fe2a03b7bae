//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! App is intentionally lean - it coordinates between components but
//! does not contain business logic itself.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_main_screen, DialogHit, EntryDialog, GalleryComponent, HelpDialog, MainRenderContext,
    QuitDialog, SplashComponent,
};
use crate::config::Config;
use crate::model::facts;
use crate::model::{AppMode, DomainState, GalleryState, Modal, ModalStack, Overlay};
use crate::services::{FetchOutcome, FetchRunner};
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, Frame};

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Current application mode
    pub mode: AppMode,

    /// Domain state (fetched feed data)
    pub domain: DomainState,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// The single detail overlay, created once and reused
    pub overlay: Overlay,

    /// Background feed fetch runner
    pub fetch_runner: FetchRunner,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: Option<String>,

    /// Fact shown in the header, chosen once at startup
    pub fact: &'static str,

    /// Loaded configuration
    pub config: Config,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub splash: SplashComponent,
    pub gallery: GalleryComponent,
    pub entry_dialog: EntryDialog,
    pub help_dialog: HelpDialog,
    pub quit_dialog: QuitDialog,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new App instance
    pub fn new() -> App {
        let config = Config::load_or_default();
        let mut gallery = GalleryComponent::new();
        gallery.hd_thumbnails = config.hd_thumbnails;

        App {
            mode: AppMode::Splash,
            domain: DomainState::new(),
            modals: ModalStack::new(),
            overlay: Overlay::new(),
            fetch_runner: FetchRunner::new(),
            should_quit: false,
            status_message: None,
            // One fact per launch, chosen before the first frame
            fact: facts::random_fact(),
            config,
            splash: SplashComponent::new(),
            gallery,
            entry_dialog: EntryDialog::new(),
            help_dialog: HelpDialog::default(),
            quit_dialog: QuitDialog,
        }
    }

    /// Apply the outcome of a completed fetch to the gallery.
    fn apply_fetch_outcome(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Entries(entries) if entries.is_empty() => {
                log::info!("feed fetch completed with an empty list");
                self.domain.gallery = GalleryState::Empty;
                self.status_message = None;
            }
            FetchOutcome::Entries(entries) => {
                log::info!("feed fetch completed with {} entries", entries.len());
                self.status_message = Some(format!("Loaded {} entries", entries.len()));
                self.domain.entries = entries;
                self.domain.gallery = GalleryState::Loaded;
                self.gallery.select_first();
            }
            FetchOutcome::Failed(detail) => {
                // Diagnostic detail stays in the log; the user sees only
                // the generic placeholder.
                log::error!("feed fetch failed: {}", detail);
                self.domain.gallery = GalleryState::Error;
                self.status_message = None;
            }
        }
    }

    /// Open the detail overlay for the entry at a gallery index.
    fn open_entry(&mut self, index: usize) {
        let Some(entry) = self.domain.entries.get(index) else {
            return;
        };

        self.gallery.selected = index;
        self.overlay.open(entry);
        if self.modals.top() != Some(&Modal::EntryDetail) {
            self.modals.push(Modal::EntryDetail);
        }
    }

    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::EntryDetail => self.entry_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.splash.init()?;
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match self.mode {
            AppMode::Splash => self.splash.handle_key_event(key),
            AppMode::Running => {
                if let Some(modal) = self.modals.top().cloned() {
                    self.handle_modal_key_event(&modal, key)
                } else {
                    self.gallery.handle_key_event(key)
                }
            }
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if self.mode != AppMode::Running {
            return Ok(None);
        }
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return Ok(None);
        }

        match self.modals.top() {
            Some(Modal::EntryDetail) => {
                match self.entry_dialog.hit_test(mouse.column, mouse.row) {
                    DialogHit::CloseControl | DialogHit::Backdrop => Ok(Some(Action::CloseModal)),
                    DialogHit::Content => Ok(None),
                }
            }
            Some(_) => Ok(None),
            None => Ok(self
                .gallery
                .card_at(mouse.column, mouse.row)
                .map(Action::OpenEntryAt)),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                if self.mode == AppMode::Splash && self.splash.is_complete() {
                    return Ok(Some(Action::SplashComplete));
                }
                // Poll the background fetch
                if let Some(outcome) = self.fetch_runner.poll() {
                    self.apply_fetch_outcome(outcome);
                }
            }
            Action::SplashComplete => {
                self.mode = AppMode::Running;
            }
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            // ─────────────────────────────────────────────────────────────────
            // Navigation (delegate to GalleryComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::NextCard => self.gallery.next(self.domain.entries.len()),
            Action::PrevCard => self.gallery.previous(self.domain.entries.len()),
            Action::NextRow => self.gallery.next_row(self.domain.entries.len()),
            Action::PrevRow => self.gallery.previous_row(self.domain.entries.len()),
            Action::FirstCard => self.gallery.select_first(),
            Action::LastCard => self.gallery.select_last(self.domain.entries.len()),

            // ─────────────────────────────────────────────────────────────────
            // Feed
            // ─────────────────────────────────────────────────────────────────
            Action::FetchFeed => {
                if self.fetch_runner.is_pending() {
                    // Overlapping requests are not deduplicated; the newest
                    // one's outcome wins.
                    log::warn!("fetch already in flight, starting another");
                }
                log::info!("fetching feed from {}", self.config.feed_url);
                self.status_message = None;
                self.domain.begin_fetch();
                self.fetch_runner.spawn(self.config.feed_url.clone());
            }

            // ─────────────────────────────────────────────────────────────────
            // Overlay & Dialogs
            // ─────────────────────────────────────────────────────────────────
            Action::OpenEntry => self.open_entry(self.gallery.selected),
            Action::OpenEntryAt(index) => self.open_entry(index),
            Action::CloseModal => {
                // Closing with nothing open is a safe no-op
                if self.modals.top() == Some(&Modal::EntryDetail) {
                    self.overlay.close();
                }
                self.modals.pop();
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }

            // ─────────────────────────────────────────────────────────────────
            // Overlay Scrolling
            // ─────────────────────────────────────────────────────────────────
            Action::ScrollUp => self.overlay.scroll_up(1),
            Action::ScrollDown => self.overlay.scroll_down(1),
            Action::PageUp => self.overlay.scroll_up(10),
            Action::PageDown => self.overlay.scroll_down(10),
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.mode {
            AppMode::Splash => self.splash.draw(frame, area)?,
            AppMode::Running => {
                let ctx = MainRenderContext {
                    domain: &self.domain,
                    fact: self.fact,
                    status_message: self.status_message.as_deref(),
                };
                draw_main_screen(frame, area, &mut self.gallery, &ctx)?;

                // Draw modal overlay if active
                if let Some(modal) = self.modals.top().cloned() {
                    match modal {
                        Modal::EntryDetail => {
                            self.entry_dialog.draw_with(frame, area, &self.overlay)?
                        }
                        Modal::Help => self.help_dialog.draw(frame, area)?,
                        Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GalleryEntry, MediaSlot};

    fn feed_entries(n: usize) -> Vec<GalleryEntry> {
        (0..n)
            .map(|i| GalleryEntry {
                title: format!("Entry {}", i),
                date: format!("2024-01-{:02}", i + 1),
                media_type: "image".to_string(),
                url: format!("https://example.com/{}.jpg", i),
                ..Default::default()
            })
            .collect()
    }

    fn running_app() -> App {
        let mut app = App::new();
        app.mode = AppMode::Running;
        app
    }

    #[test]
    fn successful_fetch_populates_cards_in_feed_order() {
        let mut app = running_app();
        app.domain.begin_fetch();

        app.apply_fetch_outcome(FetchOutcome::Entries(feed_entries(4)));

        assert_eq!(app.domain.gallery, GalleryState::Loaded);
        assert_eq!(app.domain.entries.len(), 4);
        let titles: Vec<&str> = app.domain.entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Entry 0", "Entry 1", "Entry 2", "Entry 3"]);
        assert_eq!(app.gallery.selected, 0);
    }

    #[test]
    fn empty_feed_shows_the_no_images_placeholder() {
        let mut app = running_app();
        app.domain.begin_fetch();

        app.apply_fetch_outcome(FetchOutcome::Entries(Vec::new()));

        assert_eq!(app.domain.gallery, GalleryState::Empty);
        assert!(app.domain.entries.is_empty());
    }

    #[test]
    fn failed_fetch_shows_the_error_placeholder_and_stays_retriggerable() {
        let mut app = running_app();
        app.domain.begin_fetch();

        app.apply_fetch_outcome(FetchOutcome::Failed("feed returned HTTP 404".to_string()));

        assert_eq!(app.domain.gallery, GalleryState::Error);
        assert!(app.domain.entries.is_empty());

        // The fetch action remains usable after a failure
        app.domain.begin_fetch();
        assert_eq!(app.domain.gallery, GalleryState::Loading);
    }

    #[test]
    fn a_new_fetch_drops_the_previous_cards() {
        let mut app = running_app();
        app.apply_fetch_outcome(FetchOutcome::Entries(feed_entries(3)));
        assert_eq!(app.domain.entries.len(), 3);

        app.domain.begin_fetch();
        assert!(app.domain.entries.is_empty());
        assert_eq!(app.domain.gallery, GalleryState::Loading);
    }

    #[test]
    fn opening_an_entry_reveals_the_overlay() {
        let mut app = running_app();
        app.apply_fetch_outcome(FetchOutcome::Entries(feed_entries(2)));

        app.update(Action::OpenEntryAt(1)).unwrap();

        assert!(app.overlay.is_open());
        assert_eq!(app.overlay.title, "Entry 1");
        assert_eq!(app.modals.top(), Some(&Modal::EntryDetail));
        assert!(matches!(app.overlay.media, MediaSlot::Image { .. }));
    }

    #[test]
    fn opening_past_the_end_does_nothing() {
        let mut app = running_app();
        app.apply_fetch_outcome(FetchOutcome::Entries(feed_entries(2)));

        app.update(Action::OpenEntryAt(9)).unwrap();

        assert!(!app.overlay.is_open());
        assert!(app.modals.is_empty());
    }

    #[test]
    fn close_modal_hides_the_overlay_and_is_a_no_op_when_closed() {
        let mut app = running_app();
        app.apply_fetch_outcome(FetchOutcome::Entries(feed_entries(1)));

        app.update(Action::OpenEntry).unwrap();
        assert!(app.overlay.is_open());

        app.update(Action::CloseModal).unwrap();
        assert!(!app.overlay.is_open());
        assert!(app.modals.is_empty());

        // Escape with nothing open has no observable effect
        app.update(Action::CloseModal).unwrap();
        assert!(!app.overlay.is_open());
        assert!(app.modals.is_empty());
    }

    #[test]
    fn the_startup_fact_comes_from_the_fixed_list() {
        let app = App::new();
        assert!(facts::SPACE_FACTS.contains(&app.fact));
    }
}
