use crate::api::Verse;
use crate::search::SearchState;
use dioxus::prelude::*;

#[component]
pub fn VerseList() -> Element {
    let search_state = use_context::<Signal<SearchState>>();
    let state = search_state();
    let show_hint = state.results.is_empty() && !state.loading;

    rsx! {
        div { class: "verse-list",
            for verse in state.results {
                VerseCard { key: "{verse.id}-{verse.verse_key}", verse: verse.clone() }
            }
            if show_hint {
                p { class: "idle-hint", "Enter keywords above and click Search to find verses." }
            }
        }
    }
}

#[component]
pub fn VerseCard(verse: Verse) -> Element {
    let text = verse.display_text();
    let label = verse.reference_label();

    rsx! {
        article { class: "verse-card",
            p { class: "verse-text", "{text}" }
            p { class: "verse-label", "{label}" }
        }
    }
}
