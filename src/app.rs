use gloo::events::EventListener;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::content;
use crate::model::{find_chapter, plain_excerpt, Chapter, View};
use crate::persisted_store;
use crate::reading::{self, use_bookmarks, use_reading_history, use_reading_progress};
use crate::router;
use crate::state::ReaderState;

const FEATURED_CHAPTER_IDS: [u32; 3] = [1, 6, 12];
const EXCERPT_CHARS: usize = 150;

/// Chapter whose scroll position gets recorded: only one that exists in
/// the loaded collection.
fn tracked_chapter(view: View, chapters: &[Chapter]) -> Option<u32> {
    match view {
        View::Chapter(id) => find_chapter(chapters, id).map(|chapter| chapter.id),
        _ => None,
    }
}

/// Applies a navigation command; when it takes effect the fragment is
/// rewritten in place, the viewport resets, and the new state is committed.
fn nav_callback<F>(reader: UseStateHandle<ReaderState>, mutate: F) -> Callback<MouseEvent>
where
    F: Fn(&mut ReaderState) -> bool + 'static,
{
    Callback::from(move |event: MouseEvent| {
        event.prevent_default();
        let mut next = (*reader).clone();
        if mutate(&mut next) {
            router::replace_fragment(&next.fragment());
            reading::scroll_to_top();
            reader.set(next);
        }
    })
}

/// Applies a preference command and persists the config when it changed.
fn setting_callback<F>(reader: UseStateHandle<ReaderState>, mutate: F) -> Callback<MouseEvent>
where
    F: Fn(&mut ReaderState) -> bool + 'static,
{
    Callback::from(move |_: MouseEvent| {
        let mut next = (*reader).clone();
        if mutate(&mut next) {
            persisted_store::save_config(&next.config);
            reader.set(next);
        }
    })
}

#[function_component(App)]
pub(crate) fn app() -> Html {
    let reader = use_state(|| {
        ReaderState::from_fragment(&router::current_fragment(), persisted_store::load_config())
    });
    let chapters = use_state(Vec::<Chapter>::new);
    let loading = use_state(|| true);
    let bookmarks = use_bookmarks();
    let history = use_reading_history();
    let completion = use_reading_progress();

    // One-shot content load. A failure just leaves the collection empty.
    {
        let chapters = chapters.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match content::fetch_chapters().await {
                    Ok(loaded) => {
                        gloo::console::log!("chapters loaded", loaded.len());
                        chapters.set(loaded);
                    }
                    Err(err) => gloo::console::error!("failed to load chapters", err),
                }
                loading.set(false);
            });
            || ()
        });
    }

    // Normalize the fragment once at startup; afterwards state drives the
    // URL, never the other way around. If the initial fragment points at
    // the last-read chapter, pick up where the reader left off.
    {
        let reader = reader.clone();
        let history = history.clone();
        use_effect_with((), move |_| {
            router::replace_fragment(&reader.fragment());
            if let View::Chapter(id) = reader.view {
                history.restore_position(id);
            }
            || ()
        });
    }

    // While a loaded chapter is open, every scroll overwrites the last-read
    // record. The not-found view must not clobber a valid record, so ids
    // missing from the collection are never tracked.
    {
        let history = history.clone();
        let tracked = tracked_chapter(reader.view, &chapters);
        use_effect_with(tracked, move |tracked| {
            let listener = match tracked {
                Some(id) => {
                    let id = *id;
                    web_sys::window().map(|window| {
                        EventListener::new(&window, "scroll", move |_| history.update_position(id))
                    })
                }
                None => None,
            };
            move || drop(listener)
        });
    }

    let state = (*reader).clone();
    let chapter_count = chapters.len();

    let on_menu_toggle = {
        let reader = reader.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*reader).clone();
            next.toggle_menu();
            reader.set(next);
        })
    };
    let on_menu_close = {
        let reader = reader.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*reader).clone();
            next.close_menu();
            reader.set(next);
        })
    };
    let on_dark_toggle = setting_callback(reader.clone(), |state| {
        state.toggle_dark_mode();
        true
    });
    let on_font_increase = setting_callback(reader.clone(), ReaderState::increase_font_size);
    let on_font_decrease = setting_callback(reader.clone(), ReaderState::decrease_font_size);
    let on_home = nav_callback(reader.clone(), ReaderState::go_home);
    let on_about = nav_callback(reader.clone(), ReaderState::go_about);
    let go_chapter = {
        let reader = reader.clone();
        move |id: u32| {
            nav_callback(reader.clone(), move |state| state.go_chapter(id, chapter_count))
        }
    };
    let on_resume = {
        let reader = reader.clone();
        let history = history.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            let Some(record) = history.last_read() else {
                return;
            };
            let mut next = (*reader).clone();
            if next.go_chapter(record.chapter_id, chapter_count) {
                router::replace_fragment(&next.fragment());
                reading::scroll_to_top();
                reader.set(next);
                history.restore_position(record.chapter_id);
            }
        })
    };

    let sidebar_class = if state.menu_open {
        classes!("sidebar", "open")
    } else {
        classes!("sidebar")
    };
    let sidebar = html! {
        <aside class={sidebar_class}>
            <a href="#home" onclick={on_home.clone()}>{ "Home" }</a>
            <a href="#about" onclick={on_about.clone()}>{ "About" }</a>
            <hr />
            { for chapters.iter().map(|chapter| {
                let active = state.view == View::Chapter(chapter.id);
                let marker = if bookmarks.is_bookmarked(chapter.id) { " \u{2605}" } else { "" };
                html! {
                    <a
                        href={format!("#chapter-{}", chapter.id)}
                        class={if active { "active" } else { "" }}
                        onclick={go_chapter(chapter.id)}
                    >
                        { format!("{}. {}{}", chapter.id, chapter.title, marker) }
                    </a>
                }
            }) }
        </aside>
    };

    let body = if *loading {
        html! { <div class="spinner">{ "Loading chapters\u{2026}" }</div> }
    } else {
        match state.view {
            View::Home => {
                let resume = history.last_read().filter(|record| {
                    record.chapter_id as usize <= chapter_count && record.chapter_id > 0
                });
                html! {
                    <>
                        <h2>{ "The Lantern Road" }</h2>
                        { resume.map(|record| html! {
                            <p>
                                <a href={format!("#chapter-{}", record.chapter_id)} onclick={on_resume}>
                                    { format!("Resume reading \u{2014} chapter {}", record.chapter_id) }
                                </a>
                            </p>
                        }).unwrap_or_default() }
                        { for FEATURED_CHAPTER_IDS.iter().filter_map(|id| find_chapter(&chapters, *id)).map(|chapter| html! {
                            <div class="teaser">
                                <h3>{ format!("Chapter {}: {}", chapter.id, chapter.title) }</h3>
                                <p>{ format!("{}\u{2026}", plain_excerpt(&chapter.content, EXCERPT_CHARS)) }</p>
                                <a href={format!("#chapter-{}", chapter.id)} onclick={go_chapter(chapter.id)}>
                                    { "Read chapter" }
                                </a>
                            </div>
                        }) }
                        if chapter_count > 0 {
                            <p><a href="#chapter-1" onclick={go_chapter(1)}>{ "Begin Reading" }</a></p>
                        }
                    </>
                }
            }
            View::About => html! {
                <>
                    <h2>{ "About this book" }</h2>
                    <p>{ "A serialized novel, published one chapter at a time. \
                          Your place, bookmarks, and display preferences are kept \
                          in this browser only." }</p>
                </>
            },
            View::Chapter(id) => match find_chapter(&chapters, id) {
                Some(chapter) => {
                    let content =
                        Html::from_html_unchecked(AttrValue::from(chapter.content.clone()));
                    let bookmarked = bookmarks.is_bookmarked(id);
                    let on_bookmark = {
                        let bookmarks = bookmarks.clone();
                        Callback::from(move |_: MouseEvent| bookmarks.toggle(id))
                    };
                    let prev_id = id.saturating_sub(1);
                    let next_id = id + 1;
                    let has_prev = prev_id >= 1;
                    let has_next = (next_id as usize) <= chapter_count;
                    html! {
                        <>
                            <button
                                class="bookmark-toggle"
                                onclick={on_bookmark}
                                title={if bookmarked { "Remove bookmark" } else { "Bookmark this chapter" }}
                            >
                                { if bookmarked { "\u{2605}" } else { "\u{2606}" } }
                            </button>
                            <h2>{ format!("Chapter {}: {}", chapter.id, chapter.title) }</h2>
                            <div
                                class="chapter-body"
                                style={format!("font-size: {}px", state.config.font_size)}
                            >
                                { content }
                            </div>
                            <nav class="chapter-nav">
                                <a
                                    href={format!("#chapter-{prev_id}")}
                                    class={if has_prev { "" } else { "disabled" }}
                                    onclick={go_chapter(prev_id)}
                                >
                                    { "\u{2190} Previous" }
                                </a>
                                <a
                                    href={format!("#chapter-{next_id}")}
                                    class={if has_next { "" } else { "disabled" }}
                                    onclick={go_chapter(next_id)}
                                >
                                    { "Next \u{2192}" }
                                </a>
                            </nav>
                        </>
                    }
                }
                None => html! {
                    <>
                        <h2>{ "Chapter not found" }</h2>
                        <p>{ "That chapter isn't part of this book." }</p>
                        <p><a href="#chapter-1" onclick={go_chapter(1)}>{ "Return to Chapter 1" }</a></p>
                    </>
                },
            },
        }
    };

    let root_class = if state.config.dark_mode {
        classes!("reader", "dark")
    } else {
        classes!("reader")
    };

    html! {
        <div class={root_class}>
            <header class="reader-header">
                <button onclick={on_menu_toggle} title="Chapters">{ "\u{2630}" }</button>
                <h1>{ "Yomihon" }</h1>
                <button onclick={on_font_decrease} title="Smaller text">{ "A-" }</button>
                <button onclick={on_font_increase} title="Larger text">{ "A+" }</button>
                <button onclick={on_dark_toggle} title="Toggle dark mode">
                    { if state.config.dark_mode { "\u{2600}" } else { "\u{263D}" } }
                </button>
                <div class="progress-track">
                    <div class="progress-fill" style={format!("width: {completion}%")} />
                </div>
            </header>
            { sidebar }
            if state.menu_open {
                <div class="overlay" onclick={on_menu_close} />
            }
            <main class="reader-main">{ body }</main>
            <footer class="reader-footer">
                <a href="#home" onclick={on_home}>{ "Home" }</a>
                <a href="#about" onclick={on_about}>{ "About" }</a>
            </footer>
        </div>
    }
}
