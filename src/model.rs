use serde::Deserialize;

pub(crate) const FONT_SIZE_MIN: u32 = 12;
pub(crate) const FONT_SIZE_MAX: u32 = 24;
pub(crate) const FONT_SIZE_DEFAULT: u32 = 16;

/// One chapter of the loaded book. `content` is an HTML blob rendered
/// verbatim into the chapter body.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub(crate) struct Chapter {
    pub(crate) id: u32,
    pub(crate) title: String,
    pub(crate) content: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum View {
    Home,
    About,
    Chapter(u32),
}

pub(crate) fn find_chapter(chapters: &[Chapter], id: u32) -> Option<&Chapter> {
    chapters.iter().find(|chapter| chapter.id == id)
}

/// Markup-stripped prefix of a chapter body, used for home-view teasers.
pub(crate) fn plain_excerpt(content: &str, max_chars: usize) -> String {
    let mut out = String::new();
    let mut taken = 0usize;
    let mut in_tag = false;
    for ch in content.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => {
                if taken == max_chars {
                    break;
                }
                out.push(ch);
                taken += 1;
            }
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chapter(id: u32) -> Chapter {
        Chapter {
            id,
            title: format!("Chapter {id}"),
            content: String::new(),
        }
    }

    #[test]
    fn find_chapter_matches_by_id() {
        let chapters = vec![chapter(1), chapter(2), chapter(3)];
        assert_eq!(find_chapter(&chapters, 2).map(|c| c.id), Some(2));
        assert!(find_chapter(&chapters, 9).is_none());
    }

    #[test]
    fn excerpt_strips_tags_and_truncates() {
        let body = "<p>The road <em>north</em> out of the valley</p>";
        assert_eq!(plain_excerpt(body, 100), "The road north out of the valley");
        assert_eq!(plain_excerpt(body, 8), "The road");
    }

    #[test]
    fn excerpt_of_plain_text_is_identity() {
        assert_eq!(plain_excerpt("no tags here", 100), "no tags here");
    }
}
