use wasm_bindgen::JsValue;

use crate::model::View;

/// Maps a URL fragment to a view. Evaluated exactly once at startup;
/// anything unrecognized falls back to the home view.
pub(crate) fn parse_location(fragment: &str) -> View {
    let raw = fragment.trim().trim_start_matches('#');
    if raw == "about" {
        return View::About;
    }
    if let Some(rest) = raw.strip_prefix("chapter-") {
        if let Ok(id) = rest.parse::<u32>() {
            if id > 0 {
                return View::Chapter(id);
            }
        }
    }
    View::Home
}

pub(crate) fn format_location(view: &View) -> String {
    match view {
        View::Home => "#home".to_string(),
        View::About => "#about".to_string(),
        View::Chapter(id) => format!("#chapter-{id}"),
    }
}

pub(crate) fn current_fragment() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    window.location().hash().unwrap_or_default()
}

/// Rewrites the fragment in place. `replaceState` keeps the history stack
/// flat; the hash setter is the fallback when history is unavailable.
pub(crate) fn replace_fragment(fragment: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let path = location.pathname().unwrap_or_default();
    let search = location.search().unwrap_or_default();
    let new_url = format!("{path}{search}{fragment}");
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&new_url));
    } else {
        let _ = location.set_hash(fragment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_fragment_parses() {
        assert_eq!(parse_location("#about"), View::About);
    }

    #[test]
    fn chapter_fragment_parses_positive_ids() {
        assert_eq!(parse_location("#chapter-5"), View::Chapter(5));
        assert_eq!(parse_location("#chapter-1"), View::Chapter(1));
    }

    #[test]
    fn garbage_fragments_fall_back_to_home() {
        assert_eq!(parse_location(""), View::Home);
        assert_eq!(parse_location("#bogus"), View::Home);
        assert_eq!(parse_location("#chapter-0"), View::Home);
        assert_eq!(parse_location("#chapter-"), View::Home);
        assert_eq!(parse_location("#chapter-abc"), View::Home);
        assert_eq!(parse_location("#chapter-2x"), View::Home);
    }

    #[test]
    fn format_round_trips_through_parse() {
        for view in [View::Home, View::About, View::Chapter(7)] {
            assert_eq!(parse_location(&format_location(&view)), view);
        }
    }
}
