use serde::{Deserialize, Serialize};

use crate::markup::strip_markup;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Translation {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Verse {
    #[serde(default)]
    pub id: u64,
    #[serde(alias = "verseKey")]
    pub verse_key: String,
    #[serde(default, alias = "textUthmani")]
    pub text_uthmani: String,
    #[serde(default)]
    pub translations: Vec<Translation>,
}

impl Verse {
    /// First translation with markup removed, or the Uthmani text when the
    /// API sent no translation.
    pub fn display_text(&self) -> String {
        match self.translations.first() {
            Some(translation) => strip_markup(&translation.text),
            None => strip_markup(&self.text_uthmani),
        }
    }

    pub fn reference_label(&self) -> String {
        format!("Quran {}", self.verse_key)
    }
}

/// `{ "search": { "results": [...] } }`
#[derive(Debug, Deserialize, Default)]
pub struct SearchResponse {
    #[serde(default)]
    pub search: Option<SearchPayload>,
}

#[derive(Debug, Deserialize, Default)]
pub struct SearchPayload {
    #[serde(default)]
    pub results: Option<Vec<Verse>>,
}

impl SearchResponse {
    pub fn into_verses(self) -> Vec<Verse> {
        self.search
            .and_then(|payload| payload.results)
            .unwrap_or_default()
    }
}
