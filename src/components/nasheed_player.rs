use crate::components::{ElementAudioSink, Icon};
use crate::nasheeds::NASHEEDS;
use crate::playback::PlaybackState;
use dioxus::prelude::*;

/// Track chooser and play/pause toggle.
#[component]
pub fn NasheedPlayer() -> Element {
    let mut playback = use_context::<Signal<PlaybackState>>();
    let state = playback();
    let playing = state.is_playing();
    let selected = state.current.map(|nasheed| nasheed.id).unwrap_or_default();
    let toggle_label = if playing { "Pause nasheed" } else { "Play nasheed" };
    let toggle_icon = if playing { "volume-x" } else { "volume-2" };

    rsx! {
        div { class: "player-row",
            select {
                class: "nasheed-select",
                aria_label: "Choose a nasheed",
                value: "{selected}",
                onchange: move |evt| {
                    let id = evt.value();
                    let mut sink = ElementAudioSink;
                    playback.with_mut(|state| state.select(&id, &mut sink));
                },
                option { value: "", disabled: true, selected: selected.is_empty(), "Choose a nasheed" }
                for nasheed in NASHEEDS.iter() {
                    option { key: "{nasheed.id}", value: "{nasheed.id}", "{nasheed.title}" }
                }
            }
            button {
                r#type: "button",
                class: "icon-button",
                aria_label: "{toggle_label}",
                onclick: move |_| {
                    let mut sink = ElementAudioSink;
                    playback.with_mut(|state| state.toggle(&mut sink));
                },
                Icon { name: toggle_icon.to_string(), class: "icon".to_string() }
            }
        }
    }
}
