//! Data models for gallery entries sourced from the feed

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single entry from the picture-of-the-day feed.
///
/// Every field is optional on the wire; missing values degrade to empty
/// display strings rather than failing deserialization. Entries are never
/// mutated after the fetch that produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub media_type: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub hdurl: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

/// Media variant for an entry, carrying only the fields each case needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Media {
    Image {
        url: String,
        hdurl: Option<String>,
    },
    Video {
        url: String,
        thumbnail_url: Option<String>,
    },
    /// Unrecognized media type; only the plain URL is usable.
    Other { url: String },
}

/// Treat absent and empty-string optionals the same way.
fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|s| !s.is_empty()).map(String::from)
}

impl GalleryEntry {
    /// Project the raw `media_type` string into its tagged variant.
    pub fn media(&self) -> Media {
        match self.media_type.as_str() {
            "image" => Media::Image {
                url: self.url.clone(),
                hdurl: non_empty(&self.hdurl),
            },
            "video" => Media::Video {
                url: self.url.clone(),
                thumbnail_url: non_empty(&self.thumbnail_url),
            },
            _ => Media::Other {
                url: self.url.clone(),
            },
        }
    }

    /// Thumbnail source for the gallery card.
    ///
    /// Images use the standard URL, falling back to high-res (or the other
    /// way around when `prefer_hd` is set); videos use the feed-provided
    /// thumbnail, possibly absent; other types have no thumbnail media.
    pub fn card_source(&self, prefer_hd: bool) -> Option<String> {
        match self.media() {
            Media::Image { url, hdurl } => {
                let standard = if url.is_empty() { None } else { Some(url) };
                if prefer_hd {
                    hdurl.or(standard)
                } else {
                    standard.or(hdurl)
                }
            }
            Media::Video { thumbnail_url, .. } => thumbnail_url,
            Media::Other { .. } => None,
        }
    }

    /// Full-size source for the overlay: prefers `hdurl`, falls back to
    /// `url`, then empty.
    pub fn full_source(&self) -> String {
        non_empty(&self.hdurl).unwrap_or_else(|| self.url.clone())
    }

    /// Badge glyph for the card's media type.
    pub fn icon(&self) -> &str {
        match self.media_type.as_str() {
            "image" => "🖼",
            "video" => "🎬",
            _ => "🔗",
        }
    }

    /// Entry date formatted for display, falling back to the raw feed
    /// string when it is not an ISO date.
    pub fn formatted_date(&self) -> String {
        match NaiveDate::parse_from_str(&self.date, "%Y-%m-%d") {
            Ok(date) => date.format("%b %d, %Y").to_string(),
            Err(_) => self.date.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_entry() -> GalleryEntry {
        GalleryEntry {
            title: "Pillars of Creation".to_string(),
            date: "2024-03-01".to_string(),
            explanation: "Columns of cold gas.".to_string(),
            media_type: "image".to_string(),
            url: "https://example.com/pillars.jpg".to_string(),
            hdurl: Some("https://example.com/pillars_hd.jpg".to_string()),
            thumbnail_url: None,
        }
    }

    #[test]
    fn media_maps_the_three_cases() {
        let mut entry = image_entry();
        assert!(matches!(entry.media(), Media::Image { .. }));

        entry.media_type = "video".to_string();
        assert!(matches!(entry.media(), Media::Video { .. }));

        entry.media_type = "interactive".to_string();
        assert!(matches!(entry.media(), Media::Other { .. }));
    }

    #[test]
    fn full_source_prefers_hd() {
        let entry = image_entry();
        assert_eq!(entry.full_source(), "https://example.com/pillars_hd.jpg");
    }

    #[test]
    fn full_source_falls_back_to_standard_url() {
        let mut entry = image_entry();
        entry.hdurl = None;
        assert_eq!(entry.full_source(), "https://example.com/pillars.jpg");

        // An empty hd field counts as absent.
        entry.hdurl = Some(String::new());
        assert_eq!(entry.full_source(), "https://example.com/pillars.jpg");
    }

    #[test]
    fn card_source_for_images_prefers_standard_url() {
        let entry = image_entry();
        assert_eq!(
            entry.card_source(false),
            Some("https://example.com/pillars.jpg".to_string())
        );
        assert_eq!(
            entry.card_source(true),
            Some("https://example.com/pillars_hd.jpg".to_string())
        );
    }

    #[test]
    fn card_source_for_videos_uses_the_feed_thumbnail() {
        let entry = GalleryEntry {
            media_type: "video".to_string(),
            url: "https://example.com/embed/abc".to_string(),
            thumbnail_url: Some("https://example.com/thumb.jpg".to_string()),
            ..Default::default()
        };
        assert_eq!(
            entry.card_source(false),
            Some("https://example.com/thumb.jpg".to_string())
        );

        let bare = GalleryEntry {
            media_type: "video".to_string(),
            url: "https://example.com/embed/abc".to_string(),
            ..Default::default()
        };
        assert_eq!(bare.card_source(false), None);
    }

    #[test]
    fn missing_fields_deserialize_to_empty_values() {
        let entry: GalleryEntry =
            serde_json::from_str(r#"{"media_type": "image"}"#).expect("entry should parse");
        assert_eq!(entry.title, "");
        assert_eq!(entry.date, "");
        assert_eq!(entry.url, "");
        assert_eq!(entry.hdurl, None);
        assert_eq!(entry.full_source(), "");
    }

    #[test]
    fn formatted_date_falls_back_to_the_raw_string() {
        let mut entry = image_entry();
        assert_eq!(entry.formatted_date(), "Mar 01, 2024");

        entry.date = "sometime in March".to_string();
        assert_eq!(entry.formatted_date(), "sometime in March");
    }
}
