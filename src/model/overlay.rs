//! Overlay state machine for the full-size entry view
//!
//! A single overlay instance is created at application start and reused for
//! every card; open and close are explicit operations and closing an
//! already-closed overlay is a safe no-op.

use crate::model::entry::{GalleryEntry, Media};

/// Contents of the overlay's media slot, rebuilt on every open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MediaSlot {
    /// Full-size image; source prefers the high-resolution field.
    Image { src: String },
    /// Embedded video frame.
    Video(VideoFrame),
    /// Plain link for unrecognized media types.
    Link { url: String },
    /// Nothing loaded.
    #[default]
    Empty,
}

/// Embedded video frame.
///
/// Re-assigning the source to itself forces the embedded player to unload,
/// which is how playback is stopped on close.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFrame {
    pub src: String,
    pub playing: bool,
}

impl VideoFrame {
    pub fn new(src: String) -> Self {
        Self { src, playing: true }
    }

    /// Reset the frame source to stop playback.
    pub fn reset(&mut self) {
        let src = std::mem::take(&mut self.src);
        self.src = src;
        self.playing = false;
    }
}

/// The single detail overlay.
#[derive(Debug, Default)]
pub struct Overlay {
    visible: bool,
    pub title: String,
    pub date: String,
    pub explanation: String,
    pub media: MediaSlot,
    /// Scroll offset into the explanation text
    pub scroll: usize,
}

impl Overlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.visible
    }

    /// Populate the overlay from an entry and reveal it.
    ///
    /// Prior media content is cleared first. Title, date, and explanation
    /// are stored as plain text.
    pub fn open(&mut self, entry: &GalleryEntry) {
        self.media = MediaSlot::Empty;
        self.scroll = 0;

        self.title = entry.title.clone();
        self.date = entry.formatted_date();
        self.explanation = entry.explanation.clone();

        self.media = match entry.media() {
            Media::Image { .. } => MediaSlot::Image {
                src: entry.full_source(),
            },
            Media::Video { url, .. } => MediaSlot::Video(VideoFrame::new(url)),
            Media::Other { url } => MediaSlot::Link { url },
        };

        self.visible = true;
    }

    /// Hide the overlay, stopping video playback if a frame is present.
    ///
    /// Closing an already-closed overlay does nothing.
    pub fn close(&mut self) {
        if !self.visible {
            return;
        }

        if let MediaSlot::Video(frame) = &mut self.media {
            frame.reset();
        }

        self.visible = false;
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_add(lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(media_type: &str, url: &str, hdurl: Option<&str>) -> GalleryEntry {
        GalleryEntry {
            title: "Comet over the ridge".to_string(),
            date: "2024-05-11".to_string(),
            explanation: "A bright comet photographed at dusk.".to_string(),
            media_type: media_type.to_string(),
            url: url.to_string(),
            hdurl: hdurl.map(String::from),
            thumbnail_url: None,
        }
    }

    #[test]
    fn opening_an_image_entry_prefers_the_hd_source() {
        let mut overlay = Overlay::new();
        overlay.open(&entry(
            "image",
            "https://example.com/std.jpg",
            Some("https://example.com/hd.jpg"),
        ));

        assert!(overlay.is_open());
        assert_eq!(
            overlay.media,
            MediaSlot::Image {
                src: "https://example.com/hd.jpg".to_string()
            }
        );
        assert_eq!(overlay.title, "Comet over the ridge");
        assert_eq!(overlay.date, "May 11, 2024");
    }

    #[test]
    fn opening_an_image_entry_falls_back_to_the_standard_source() {
        let mut overlay = Overlay::new();
        overlay.open(&entry("image", "https://example.com/std.jpg", None));

        assert_eq!(
            overlay.media,
            MediaSlot::Image {
                src: "https://example.com/std.jpg".to_string()
            }
        );
    }

    #[test]
    fn opening_a_video_entry_points_the_frame_at_the_url() {
        let mut overlay = Overlay::new();
        overlay.open(&entry("video", "https://example.com/embed/xyz", None));

        match &overlay.media {
            MediaSlot::Video(frame) => {
                assert_eq!(frame.src, "https://example.com/embed/xyz");
                assert!(frame.playing);
            }
            other => panic!("expected a video frame, got {:?}", other),
        }
    }

    #[test]
    fn unrecognized_media_becomes_a_plain_link() {
        let mut overlay = Overlay::new();
        overlay.open(&entry("interactive", "https://example.com/panorama", None));

        assert_eq!(
            overlay.media,
            MediaSlot::Link {
                url: "https://example.com/panorama".to_string()
            }
        );
    }

    #[test]
    fn closing_resets_the_video_frame() {
        let mut overlay = Overlay::new();
        overlay.open(&entry("video", "https://example.com/embed/xyz", None));
        overlay.close();

        assert!(!overlay.is_open());
        match &overlay.media {
            MediaSlot::Video(frame) => {
                assert_eq!(frame.src, "https://example.com/embed/xyz");
                assert!(!frame.playing);
            }
            other => panic!("expected a video frame, got {:?}", other),
        }
    }

    #[test]
    fn closing_when_already_closed_is_a_no_op() {
        let mut overlay = Overlay::new();
        assert!(!overlay.is_open());

        overlay.close();
        assert!(!overlay.is_open());

        overlay.open(&entry("image", "https://example.com/std.jpg", None));
        overlay.close();
        overlay.close();
        assert!(!overlay.is_open());
    }

    #[test]
    fn reopening_clears_prior_media_and_scroll() {
        let mut overlay = Overlay::new();
        overlay.open(&entry("video", "https://example.com/embed/xyz", None));
        overlay.scroll_down(5);
        overlay.close();

        overlay.open(&entry("image", "https://example.com/std.jpg", None));
        assert_eq!(overlay.scroll, 0);
        assert!(matches!(overlay.media, MediaSlot::Image { .. }));
    }
}
