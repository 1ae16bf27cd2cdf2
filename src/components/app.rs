use crate::components::{use_toast_provider, NasheedPlayer, SearchForm, ToastViewport, VerseList};
use crate::config::FinderConfig;
use crate::playback::PlaybackState;
use crate::search::SearchState;
use dioxus::prelude::*;

/// Root layout. Owns the session state and hands it to children through context.
#[component]
pub fn AppShell() -> Element {
    let config = use_context_provider(FinderConfig::default);
    let search_state = use_signal(SearchState::default);
    let loop_tracks = config.loop_tracks;
    let playback = use_signal(move || PlaybackState::new(loop_tracks));

    use_context_provider(|| search_state);
    use_context_provider(|| playback);
    use_toast_provider(&config);

    rsx! {
        main { class: "finder-shell",
            h1 { class: "finder-title", "Tranquil Finder" }
            section { class: "finder-card",
                NasheedPlayer {}
                SearchForm {}
                VerseList {}
            }
            ToastViewport {}
        }
    }
}
