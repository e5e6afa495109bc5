//! Scroll-completion tracking, bookmarks, and the last-read record. The
//! math and set logic are pure; the hooks wrap them with browser glue.

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::persisted::ReadingHistory;
use crate::persisted_store;

/// Delay before restoring a stored scroll offset, so the chapter body has
/// rendered and the page has its final height.
pub(crate) const RESTORE_DELAY_MS: u32 = 100;

/// How far through the page the viewport is, quantized to whole percentage
/// points. An unscrollable page (document no taller than the viewport)
/// keeps the previous value.
pub(crate) fn completion_percent(
    scroll_y: f64,
    document_height: f64,
    viewport_height: f64,
    previous: f64,
) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable == 0.0 {
        return previous;
    }
    ((scroll_y / scrollable) * 100.0).round()
}

pub(crate) fn toggle_bookmark(bookmarks: &mut Vec<u32>, chapter_id: u32) {
    if let Some(index) = bookmarks.iter().position(|id| *id == chapter_id) {
        bookmarks.remove(index);
    } else {
        bookmarks.push(chapter_id);
    }
}

pub(crate) fn is_bookmarked(bookmarks: &[u32], chapter_id: u32) -> bool {
    bookmarks.contains(&chapter_id)
}

fn scroll_metrics() -> Option<(f64, f64, f64)> {
    let window = web_sys::window()?;
    let scroll_y = window.scroll_y().ok()?;
    let document_height = window.document()?.body()?.scroll_height() as f64;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    Some((scroll_y, document_height, viewport_height))
}

fn sample_completion(previous: f64) -> f64 {
    match scroll_metrics() {
        Some((scroll_y, document_height, viewport_height)) => {
            completion_percent(scroll_y, document_height, viewport_height, previous)
        }
        None => previous,
    }
}

pub(crate) fn scroll_to_top() {
    scroll_to(0.0);
}

fn scroll_to(y: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    window.scroll_to_with_x_and_y(0.0, y);
}

fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or_default()
}

/// Live completion percentage, updated on every scroll event. The mut-ref
/// mirror gives the long-lived listener the current value without going
/// through a render.
#[hook]
pub(crate) fn use_reading_progress() -> f64 {
    let completion = use_state(|| 0.0_f64);
    let completion_live = use_mut_ref(|| 0.0_f64);
    {
        let completion = completion.clone();
        use_effect_with((), move |_| {
            let apply = move || {
                let previous = *completion_live.borrow();
                let next = sample_completion(previous);
                if next != previous {
                    *completion_live.borrow_mut() = next;
                    completion.set(next);
                }
            };
            apply();
            let listener = web_sys::window()
                .map(|window| EventListener::new(&window, "scroll", move |_| apply()));
            move || drop(listener)
        });
    }
    *completion
}

#[derive(Clone)]
pub(crate) struct Bookmarks {
    inner: UseStateHandle<Vec<u32>>,
}

impl Bookmarks {
    pub(crate) fn is_bookmarked(&self, chapter_id: u32) -> bool {
        is_bookmarked(&self.inner, chapter_id)
    }

    pub(crate) fn toggle(&self, chapter_id: u32) {
        let mut next = (*self.inner).clone();
        toggle_bookmark(&mut next, chapter_id);
        persisted_store::save_bookmarks(&next);
        self.inner.set(next);
    }
}

#[hook]
pub(crate) fn use_bookmarks() -> Bookmarks {
    let inner = use_state(persisted_store::load_bookmarks);
    Bookmarks { inner }
}

#[derive(Clone)]
pub(crate) struct ReadingHistoryStore {
    inner: UseStateHandle<Option<ReadingHistory>>,
}

impl ReadingHistoryStore {
    pub(crate) fn last_read(&self) -> Option<ReadingHistory> {
        *self.inner
    }

    pub(crate) fn update_position(&self, chapter_id: u32) {
        let record = ReadingHistory {
            chapter_id,
            position: scroll_offset(),
        };
        persisted_store::save_reading_history(&record);
        self.inner.set(Some(record));
    }

    /// Scrolls back to the stored offset, but only when the stored record
    /// belongs to the given chapter. Deferred so the body renders first;
    /// fire-and-forget, a stale callback is a redundant scroll at worst.
    pub(crate) fn restore_position(&self, chapter_id: u32) {
        let Some(record) = self.last_read() else {
            return;
        };
        if record.chapter_id != chapter_id {
            return;
        }
        Timeout::new(RESTORE_DELAY_MS, move || scroll_to(record.position)).forget();
    }
}

#[hook]
pub(crate) fn use_reading_history() -> ReadingHistoryStore {
    let inner = use_state(persisted_store::load_reading_history);
    ReadingHistoryStore { inner }
}
