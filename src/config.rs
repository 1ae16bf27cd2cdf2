//! Compiled-in settings. There is no settings file and nothing is read from the
//! environment; the shell provides one `FinderConfig` through context.

pub const DEFAULT_API_BASE_URL: &str = "https://api.quran.com/api/v4";

#[derive(Debug, Clone, PartialEq)]
pub struct FinderConfig {
    pub api_base_url: String,
    pub language: String,
    pub notice_timeout_ms: u64,
    pub loop_tracks: bool,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            language: "en".to_string(),
            notice_timeout_ms: 5000,
            loop_tracks: true,
        }
    }
}
