//! Audio Manager - owns the one hidden audio element nasheeds play through.
//! The web build talks to an `HtmlAudioElement` directly; native webviews get a
//! small JavaScript bridge driven with JSON commands.

use crate::playback::AudioSink;

#[cfg(not(target_arch = "wasm32"))]
use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement};

#[cfg(target_arch = "wasm32")]
const AUDIO_ELEMENT_ID: &str = "tranquil-finder-audio";

/// Fetch the shared audio element, creating it on first use.
#[cfg(target_arch = "wasm32")]
pub fn get_or_create_audio_element() -> Option<HtmlAudioElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id(AUDIO_ELEMENT_ID) {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id(AUDIO_ELEMENT_ID);
    audio.set_attribute("preload", "auto").ok()?;
    document.body()?.append_child(&audio).ok()?;

    Some(audio)
}

#[cfg(not(target_arch = "wasm32"))]
const NATIVE_AUDIO_BOOTSTRAP_JS: &str = r#"
(() => {
  if (window.__tranquilAudioBridge) {
    return true;
  }

  const existing = document.getElementById("tranquil-finder-audio-native");
  const audio = existing || document.createElement("audio");
  if (!existing) {
    audio.id = "tranquil-finder-audio-native";
    audio.preload = "auto";
    audio.style.display = "none";
    audio.setAttribute("playsinline", "true");
    document.body.appendChild(audio);
  }

  const safePlay = async () => {
    try {
      await audio.play();
    } catch (err) {
      console.warn("nasheed playback failed", err);
    }
  };

  window.__tranquilAudioBridge = {
    apply(cmd) {
      if (!cmd || !cmd.type) return;
      switch (cmd.type) {
        case "load":
          audio.loop = !!cmd.looping;
          if (cmd.src && audio.getAttribute("src") !== cmd.src) {
            audio.src = cmd.src;
          }
          safePlay();
          break;
        case "play":
          safePlay();
          break;
        case "pause":
          audio.pause();
          break;
      }
    },
  };
  return true;
})();
"#;

#[cfg(not(target_arch = "wasm32"))]
fn native_audio_command(value: serde_json::Value) {
    let _ = document::eval(NATIVE_AUDIO_BOOTSTRAP_JS);
    let payload = serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string());
    let script = format!(
        r#"(function () {{
            const bridge = window.__tranquilAudioBridge;
            if (!bridge) return false;
            bridge.apply({payload});
            return true;
        }})();"#
    );
    let _ = document::eval(&script);
}

/// [`AudioSink`] backed by the page's audio element. Stateless: every call
/// looks the element up again, so it can be built fresh inside any handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementAudioSink;

#[cfg(target_arch = "wasm32")]
impl AudioSink for ElementAudioSink {
    fn load(&mut self, src: &str, looping: bool) {
        let Some(audio) = get_or_create_audio_element() else {
            tracing::warn!("audio element unavailable");
            return;
        };
        audio.set_loop(looping);
        audio.set_src(src);
        if let Err(error) = audio.play() {
            tracing::warn!(src, ?error, "nasheed playback failed");
        }
    }

    fn play(&mut self) {
        if let Some(audio) = get_or_create_audio_element() {
            if let Err(error) = audio.play() {
                tracing::warn!(?error, "resume failed");
            }
        }
    }

    fn pause(&mut self) {
        if let Some(audio) = get_or_create_audio_element() {
            if let Err(error) = audio.pause() {
                tracing::warn!(?error, "pause failed");
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl AudioSink for ElementAudioSink {
    fn load(&mut self, src: &str, looping: bool) {
        native_audio_command(serde_json::json!({
            "type": "load",
            "src": src,
            "looping": looping,
        }));
    }

    fn play(&mut self) {
        native_audio_command(serde_json::json!({ "type": "play" }));
    }

    fn pause(&mut self) {
        native_audio_command(serde_json::json!({ "type": "pause" }));
    }
}
