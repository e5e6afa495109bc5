//! localStorage access for each persisted unit. Loads tolerate absent or
//! malformed values; saves are best-effort and a missing storage backend is
//! a silent no-op.

use crate::persisted::{
    parse_bookmarks, parse_dark_mode, parse_font_size, parse_reading_history, ReaderConfig,
    ReadingHistory, BOOKMARKS_KEY, DARK_MODE_KEY, FONT_SIZE_KEY, READING_HISTORY_KEY,
};

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

fn read_key(key: &str) -> Option<String> {
    storage().and_then(|storage| storage.get_item(key).ok().flatten())
}

fn write_key(key: &str, value: &str) {
    let Some(storage) = storage() else {
        return;
    };
    let _ = storage.set_item(key, value);
}

pub(crate) fn load_config() -> ReaderConfig {
    ReaderConfig {
        dark_mode: parse_dark_mode(read_key(DARK_MODE_KEY).as_deref()),
        font_size: parse_font_size(read_key(FONT_SIZE_KEY).as_deref()),
    }
}

pub(crate) fn save_config(config: &ReaderConfig) {
    write_key(DARK_MODE_KEY, if config.dark_mode { "true" } else { "false" });
    write_key(FONT_SIZE_KEY, &config.font_size.to_string());
}

pub(crate) fn load_bookmarks() -> Vec<u32> {
    parse_bookmarks(read_key(BOOKMARKS_KEY).as_deref())
}

pub(crate) fn save_bookmarks(bookmarks: &[u32]) {
    let Ok(raw) = serde_json::to_string(bookmarks) else {
        return;
    };
    write_key(BOOKMARKS_KEY, &raw);
}

pub(crate) fn load_reading_history() -> Option<ReadingHistory> {
    parse_reading_history(read_key(READING_HISTORY_KEY).as_deref())
}

pub(crate) fn save_reading_history(record: &ReadingHistory) {
    let Ok(raw) = serde_json::to_string(record) else {
        return;
    };
    write_key(READING_HISTORY_KEY, &raw);
}
