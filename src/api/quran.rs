use crate::api::models::*;
use crate::config::FinderConfig;
use crate::error::{Result, SearchError};
use once_cell::sync::Lazy;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Anything that can turn a query into verses. The UI talks to [`QuranClient`];
/// tests plug in fakes.
#[allow(async_fn_in_trait)]
pub trait VerseSearch {
    async fn search_verses(&self, query: &str) -> Result<Vec<Verse>>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuranClient {
    pub base_url: String,
    pub language: String,
}

impl QuranClient {
    pub fn new(base_url: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            language: language.into(),
        }
    }

    pub fn from_config(config: &FinderConfig) -> Self {
        Self::new(config.api_base_url.clone(), config.language.clone())
    }

    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}/search?q={}&language={}",
            self.base_url,
            urlencoding::encode(query),
            urlencoding::encode(&self.language)
        )
    }
}

impl VerseSearch for QuranClient {
    async fn search_verses(&self, query: &str) -> Result<Vec<Verse>> {
        let url = self.search_url(query);
        tracing::debug!(%url, "verse search request");

        let response = HTTP_CLIENT.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(SearchError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        parse_search_response(&body)
    }
}

pub fn parse_search_response(body: &str) -> Result<Vec<Verse>> {
    let parsed: SearchResponse = serde_json::from_str(body)?;
    Ok(parsed.into_verses())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Answer exactly one HTTP request with `status` and `body`, handing back
    /// the raw request text.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 8192];
            let mut request = String::new();
            while !request.contains("\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.push_str(&String::from_utf8_lossy(&buf[..n]));
            }
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            request
        });
        (format!("http://{addr}"), handle)
    }

    #[tokio::test]
    async fn live_search_returns_verses_on_success() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"{"search":{"results":[{"id":160,"verse_key":"2:153","translations":[{"text":"<p>O you who believe...</p>"}]}]}}"#,
        )
        .await;
        let client = QuranClient::new(base_url, "en");

        let verses = client.search_verses("patience").await.unwrap();
        let request = server.await.unwrap();

        assert!(request.starts_with("GET /search?q=patience&language=en HTTP/1.1"), "{request}");
        assert_eq!(verses.len(), 1);
        assert_eq!(verses[0].display_text(), "O you who believe...");
    }

    #[tokio::test]
    async fn live_search_fails_on_error_status() {
        let (base_url, server) =
            serve_once("422 Unprocessable Entity", r#"{"status":422,"error":"q is missing"}"#).await;
        let client = QuranClient::new(base_url, "en");

        let result = client.search_verses("patience").await;
        server.await.unwrap();

        assert!(matches!(result, Err(SearchError::Status(422))), "{result:?}");
    }

    #[tokio::test]
    async fn live_search_fails_on_non_json_body() {
        let (base_url, server) = serve_once("200 OK", "<html>maintenance</html>").await;
        let client = QuranClient::new(base_url, "en");

        let result = client.search_verses("patience").await;
        server.await.unwrap();

        assert!(matches!(result, Err(SearchError::Decode(_))), "{result:?}");
    }

    #[test]
    fn search_url_encodes_query_and_language() {
        let client = QuranClient::new("https://api.quran.com/api/v4/", "en");
        assert_eq!(
            client.search_url("patience & prayer"),
            "https://api.quran.com/api/v4/search?q=patience%20%26%20prayer&language=en"
        );
        assert_eq!(
            client.search_url("?=#"),
            "https://api.quran.com/api/v4/search?q=%3F%3D%23&language=en"
        );
    }

    #[test]
    fn client_from_default_config_targets_public_api() {
        let client = QuranClient::from_config(&FinderConfig::default());
        assert_eq!(
            client.search_url("mercy"),
            "https://api.quran.com/api/v4/search?q=mercy&language=en"
        );
    }

    #[test]
    fn parses_results_in_order() {
        let body = r#"{
            "search": {
                "query": "patience",
                "total_results": 2,
                "results": [
                    {"id": 160, "verse_key": "2:153", "text_uthmani": "يَٰٓأَيُّهَا",
                     "translations": [{"text": "<p>O you who believe...</p>"}]},
                    {"id": 6230, "verse_key": "103:3", "text_uthmani": "إِلَّا",
                     "translations": [{"text": "and advise each other to <em>patience</em>."}]}
                ]
            }
        }"#;

        let verses = parse_search_response(body).unwrap();
        assert_eq!(verses.len(), 2);
        assert_eq!(verses[0].verse_key, "2:153");
        assert_eq!(verses[1].display_text(), "and advise each other to patience.");
    }

    #[test]
    fn empty_results_parse_to_empty_list() {
        let verses = parse_search_response(r#"{"search":{"results":[]}}"#).unwrap();
        assert!(verses.is_empty());
    }

    #[test]
    fn malformed_body_is_decode_error() {
        let err = parse_search_response("<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, SearchError::Decode(_)));

        let wrong_shape = parse_search_response(r#"{"search":{"results":[{"id":"x"}]}}"#);
        assert!(matches!(wrong_shape, Err(SearchError::Decode(_))));
    }
}
