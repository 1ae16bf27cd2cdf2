use crate::api::QuranClient;
use crate::components::{Icon, ToastController};
use crate::config::FinderConfig;
use crate::search::{run_search, SearchState, SearchStore};
use dioxus::prelude::*;

impl SearchStore for Signal<SearchState> {
    fn update<R>(&mut self, f: impl FnOnce(&mut SearchState) -> R) -> R {
        self.with_mut(f)
    }
}

/// Query input plus submit button. Submitting spawns the request on the UI
/// executor; the response is applied only if no newer search started since.
#[component]
pub fn SearchForm() -> Element {
    let config = use_context::<FinderConfig>();
    let mut search_state = use_context::<Signal<SearchState>>();
    let mut toasts = use_context::<ToastController>();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let query = search_state.peek().query.clone();
        if query.trim().is_empty() {
            return;
        }

        let client = QuranClient::from_config(&config);
        spawn(async move {
            if let Some(notice) = run_search(&mut search_state, &client, &query).await {
                toasts.show(notice);
            }
        });
    };

    let state = search_state();
    let loading = state.loading;

    rsx! {
        form { class: "search-form", onsubmit: on_submit,
            input {
                r#type: "text",
                class: "search-input",
                placeholder: "Enter keywords or your situation...",
                aria_label: "Search keywords",
                value: "{state.query}",
                oninput: move |e| {
                    let value = e.value();
                    search_state.with_mut(|state| state.query = value);
                },
            }
            button { r#type: "submit", class: "search-button", disabled: loading,
                if loading {
                    Icon { name: "loader".to_string(), class: "icon".to_string() }
                    "Searching..."
                } else {
                    Icon { name: "search".to_string(), class: "icon icon-leading".to_string() }
                    "Search"
                }
            }
        }
    }
}
