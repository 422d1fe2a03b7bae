//! Feed body parsing and validation

use crate::model::GalleryEntry;

/// Parse a feed response body into entries.
///
/// The body must be a JSON array of entry objects. An empty array parses
/// successfully and is distinct from a malformed body; the caller decides
/// what an empty feed means.
pub fn parse_feed(body: &str) -> Result<Vec<GalleryEntry>, String> {
    serde_json::from_str::<Vec<GalleryEntry>>(body)
        .map_err(|e| format!("Failed to parse feed body: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_feed_parses_in_order() {
        let body = r#"[
            {"title": "First", "date": "2024-01-01", "explanation": "a",
             "media_type": "image", "url": "https://example.com/1.jpg"},
            {"title": "Second", "date": "2024-01-02", "explanation": "b",
             "media_type": "video", "url": "https://example.com/embed/2",
             "thumbnail_url": "https://example.com/2_thumb.jpg"},
            {"title": "Third", "date": "2024-01-03", "explanation": "c",
             "media_type": "image", "url": "https://example.com/3.jpg",
             "hdurl": "https://example.com/3_hd.jpg"}
        ]"#;

        let entries = parse_feed(body).expect("feed should parse");
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].title, "First");
        assert_eq!(entries[1].title, "Second");
        assert_eq!(entries[2].title, "Third");
        assert_eq!(
            entries[2].hdurl.as_deref(),
            Some("https://example.com/3_hd.jpg")
        );
    }

    #[test]
    fn empty_array_is_valid_and_distinct_from_failure() {
        let entries = parse_feed("[]").expect("empty feed should parse");
        assert!(entries.is_empty());
    }

    #[test]
    fn entries_with_missing_optional_fields_still_parse() {
        let entries = parse_feed(r#"[{"media_type": "image"}]"#).expect("entry should parse");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "");
        assert_eq!(entries[0].hdurl, None);
    }

    #[test]
    fn malformed_body_is_an_error() {
        assert!(parse_feed("not json").is_err());
        assert!(parse_feed("{\"title\": \"not a list\"}").is_err());
    }
}
