use serde::{Deserialize, Serialize};

use crate::model::{FONT_SIZE_DEFAULT, FONT_SIZE_MAX, FONT_SIZE_MIN};

pub(crate) const DARK_MODE_KEY: &str = "darkMode";
pub(crate) const FONT_SIZE_KEY: &str = "fontSize";
pub(crate) const BOOKMARKS_KEY: &str = "bookmarks";
pub(crate) const READING_HISTORY_KEY: &str = "readingHistory";

/// Display preferences, loaded once at startup and written back on every
/// change. Handed to the root render as a plain value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ReaderConfig {
    pub(crate) dark_mode: bool,
    pub(crate) font_size: u32,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            font_size: FONT_SIZE_DEFAULT,
        }
    }
}

/// The single last-read record. Overwritten wholesale on every position
/// update.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReadingHistory {
    pub(crate) chapter_id: u32,
    pub(crate) position: f64,
}

pub(crate) fn parse_dark_mode(raw: Option<&str>) -> bool {
    matches!(raw, Some("true"))
}

/// Absent or unparseable values fall back to the default size; parseable
/// values outside the working range are pulled back to the nearest bound.
pub(crate) fn parse_font_size(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .map(|value| value.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX))
        .unwrap_or(FONT_SIZE_DEFAULT)
}

pub(crate) fn parse_bookmarks(raw: Option<&str>) -> Vec<u32> {
    raw.and_then(|value| serde_json::from_str(value).ok())
        .unwrap_or_default()
}

pub(crate) fn parse_reading_history(raw: Option<&str>) -> Option<ReadingHistory> {
    raw.and_then(|value| serde_json::from_str(value).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_mode_only_true_enables() {
        assert!(parse_dark_mode(Some("true")));
        assert!(!parse_dark_mode(Some("false")));
        assert!(!parse_dark_mode(Some("TRUE")));
        assert!(!parse_dark_mode(None));
    }

    #[test]
    fn font_size_garbage_falls_back_to_default() {
        assert_eq!(parse_font_size(Some("abc")), 16);
        assert_eq!(parse_font_size(Some("")), 16);
        assert_eq!(parse_font_size(None), 16);
    }

    #[test]
    fn font_size_is_clamped_to_working_range() {
        assert_eq!(parse_font_size(Some("18")), 18);
        assert_eq!(parse_font_size(Some("99")), 24);
        assert_eq!(parse_font_size(Some("4")), 12);
    }

    #[test]
    fn bookmarks_tolerate_bad_json() {
        assert_eq!(parse_bookmarks(Some("[1,5,3]")), vec![1, 5, 3]);
        assert!(parse_bookmarks(Some("not json")).is_empty());
        assert!(parse_bookmarks(None).is_empty());
    }

    #[test]
    fn reading_history_uses_camel_case_keys() {
        let record = parse_reading_history(Some(r#"{"chapterId":4,"position":812.5}"#))
            .expect("record should parse");
        assert_eq!(record.chapter_id, 4);
        assert_eq!(record.position, 812.5);
        assert!(parse_reading_history(Some("{}")).is_none());
        assert!(parse_reading_history(None).is_none());

        let raw = serde_json::to_string(&record).expect("record should serialize");
        assert!(raw.contains("\"chapterId\":4"));
    }
}
