//! Encyclopedia enrichment (Wikipedia)
//!
//! Looks up a longer description for an identified plant. The lookup is
//! best-effort: any failure yields `None` and the catalog description is used.
//!
//! Lookup order:
//! 1. REST summary endpoint, `extract` field
//! 2. Action API intro extract (plain text), truncated to 500 chars

/// External text must be longer than this to replace the catalog description
pub const MIN_EXTERNAL_DESCRIPTION_LEN: usize = 50;

/// Action API extracts are cut to this many characters
pub const MAX_EXTRACT_LEN: usize = 500;

/// Article title form: spaces become underscores
pub fn article_title(plant_name: &str) -> String {
    plant_name.trim().replace(' ', "_")
}

/// Link shown to the user for further reading
pub fn wiki_url(plant_name: &str) -> String {
    format!("https://en.wikipedia.org/wiki/{}", article_title(plant_name))
}

/// Pick the external description if it is long enough, else the catalog one
pub fn choose_description(catalog_description: &str, external: Option<&str>) -> String {
    match external {
        Some(text) if text.chars().count() > MIN_EXTERNAL_DESCRIPTION_LEN => text.to_string(),
        _ => catalog_description.to_string(),
    }
}

/// Cut an extract to `MAX_EXTRACT_LEN` characters, marking the cut with "..."
pub fn truncate_extract(extract: &str) -> String {
    if extract.chars().count() > MAX_EXTRACT_LEN {
        let cut: String = extract.chars().take(MAX_EXTRACT_LEN).collect();
        format!("{}...", cut)
    } else {
        extract.to_string()
    }
}

#[cfg(feature = "api")]
pub use client::WikipediaClient;

#[cfg(feature = "api")]
mod client {
    use std::time::Duration;

    use moka::future::Cache;
    use serde::Deserialize;

    use super::{article_title, truncate_extract, MIN_EXTERNAL_DESCRIPTION_LEN};
    use crate::config::WikipediaConfig;

    #[derive(Deserialize)]
    struct RestSummary {
        extract: Option<String>,
    }

    #[derive(Deserialize)]
    struct QueryResponse {
        query: Option<QueryPages>,
    }

    #[derive(Deserialize)]
    struct QueryPages {
        #[serde(default)]
        pages: std::collections::HashMap<String, QueryPage>,
    }

    #[derive(Deserialize)]
    struct QueryPage {
        extract: Option<String>,
    }

    /// Wikipedia summary lookup with a per-name cache
    #[derive(Clone)]
    pub struct WikipediaClient {
        http: reqwest::Client,
        rest_url: String,
        api_url: String,
        cache: Cache<String, Option<String>>,
    }

    impl WikipediaClient {
        pub fn new(config: &WikipediaConfig) -> anyhow::Result<Self> {
            let http = reqwest::Client::builder()
                .timeout(config.timeout)
                .user_agent(concat!("flora_identifier/", env!("CARGO_PKG_VERSION")))
                .build()?;

            let cache = Cache::builder()
                .max_capacity(1_000)
                .time_to_live(Duration::from_secs(3600))
                .build();

            Ok(Self {
                http,
                rest_url: config.rest_url.trim_end_matches('/').to_string(),
                api_url: config.api_url.clone(),
                cache,
            })
        }

        /// Longer description for `plant_name`, or `None` if unavailable
        pub async fn summary(&self, plant_name: &str) -> Option<String> {
            let key = plant_name.to_string();
            if let Some(cached) = self.cache.get(&key).await {
                tracing::debug!("Encyclopedia cache hit for {}", plant_name);
                return cached;
            }

            // Only answers are cached; transport failures are retried next time
            match self.fetch(plant_name).await {
                Ok(summary) => {
                    self.cache.insert(key, summary.clone()).await;
                    summary
                }
                Err(e) => {
                    tracing::error!("Error fetching Wikipedia summary for {}: {}", plant_name, e);
                    None
                }
            }
        }

        async fn fetch(&self, plant_name: &str) -> anyhow::Result<Option<String>> {
            let title = article_title(plant_name);
            let url = format!("{}/page/summary/{}", self.rest_url, urlencoding::encode(&title));

            let response = self.http.get(&url).send().await?;
            if response.status().is_success() {
                let summary: RestSummary = response.json().await?;
                return Ok(summary.extract.filter(|e| !e.trim().is_empty()));
            }

            tracing::debug!(
                "REST summary for {} returned {}, trying action API",
                plant_name,
                response.status()
            );
            self.fetch_intro_extract(plant_name).await
        }

        async fn fetch_intro_extract(&self, plant_name: &str) -> anyhow::Result<Option<String>> {
            let response = self
                .http
                .get(&self.api_url)
                .query(&[
                    ("action", "query"),
                    ("format", "json"),
                    ("titles", plant_name),
                    ("prop", "extracts"),
                    ("exintro", "1"),
                    ("explaintext", "1"),
                ])
                .send()
                .await?;

            if !response.status().is_success() {
                return Ok(None);
            }

            let body: QueryResponse = response.json().await?;
            let extract = body
                .query
                .into_iter()
                .flat_map(|q| q.pages.into_values())
                .filter_map(|page| page.extract)
                .find(|text| text.chars().count() > MIN_EXTERNAL_DESCRIPTION_LEN)
                .map(|text| truncate_extract(&text));

            Ok(extract)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wiki_url() {
        assert_eq!(wiki_url("Monstera deliciosa"), "https://en.wikipedia.org/wiki/Monstera_deliciosa");
        assert_eq!(wiki_url("Pothos"), "https://en.wikipedia.org/wiki/Pothos");
    }

    #[test]
    fn test_choose_description() {
        let catalog = "Short catalog text.";
        let long = "A".repeat(51);
        assert_eq!(choose_description(catalog, Some(&long)), long);
        assert_eq!(choose_description(catalog, Some(&"B".repeat(50))), catalog);
        assert_eq!(choose_description(catalog, None), catalog);
    }

    #[test]
    fn test_truncate_extract() {
        let short = "Leaves are green.";
        assert_eq!(truncate_extract(short), short);

        let long = "x".repeat(600);
        let cut = truncate_extract(&long);
        assert_eq!(cut.len(), 503);
        assert!(cut.ends_with("..."));

        // Multi-byte characters are counted, not bytes
        let accented = "é".repeat(500);
        assert_eq!(truncate_extract(&accented), accented);
    }

    #[cfg(feature = "api")]
    mod wiki_client {
        use std::collections::HashMap;
        use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
        use std::sync::Arc;
        use std::time::Duration;

        use axum::extract::{Path, Query, State};
        use axum::http::StatusCode;
        use axum::response::{IntoResponse, Json, Response};
        use axum::routing::get;
        use axum::Router;

        use crate::config::WikipediaConfig;
        use crate::encyclopedia::{WikipediaClient, MAX_EXTRACT_LEN};

        const MONSTERA_EXTRACT: &str = "Monstera deliciosa is a species of flowering plant native to tropical forests of southern Mexico.";

        /// Local stand-in for the two Wikipedia endpoints
        #[derive(Clone, Default)]
        struct FakeWiki {
            rest_hits: Arc<AtomicUsize>,
            api_hits: Arc<AtomicUsize>,
            broken: Arc<AtomicBool>,
        }

        async fn rest_summary(State(wiki): State<FakeWiki>, Path(title): Path<String>) -> Response {
            wiki.rest_hits.fetch_add(1, Ordering::SeqCst);
            if wiki.broken.load(Ordering::SeqCst) {
                return (StatusCode::OK, "<html>upstream hiccup</html>").into_response();
            }
            match title.as_str() {
                "Monstera_deliciosa" => Json(serde_json::json!({ "extract": MONSTERA_EXTRACT })).into_response(),
                _ => StatusCode::NOT_FOUND.into_response(),
            }
        }

        async fn action_api(
            State(wiki): State<FakeWiki>,
            Query(params): Query<HashMap<String, String>>,
        ) -> Json<serde_json::Value> {
            wiki.api_hits.fetch_add(1, Ordering::SeqCst);
            let extract = match params.get("titles").map(String::as_str) {
                Some("Ficus lyrata") => "f".repeat(600),
                _ => "Too short.".to_string(),
            };
            Json(serde_json::json!({ "query": { "pages": { "42": { "extract": extract } } } }))
        }

        async fn start(wiki: FakeWiki) -> WikipediaClient {
            let app = Router::new()
                .route("/rest/page/summary/:title", get(rest_summary))
                .route("/w/api.php", get(action_api))
                .with_state(wiki);

            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });

            WikipediaClient::new(&WikipediaConfig {
                rest_url: format!("http://{}/rest", addr),
                api_url: format!("http://{}/w/api.php", addr),
                timeout: Duration::from_secs(5),
            })
            .unwrap()
        }

        #[tokio::test]
        async fn test_rest_summary_used_as_is() {
            let wiki = FakeWiki::default();
            let client = start(wiki.clone()).await;

            let summary = client.summary("Monstera deliciosa").await;
            assert_eq!(summary.as_deref(), Some(MONSTERA_EXTRACT));
            assert_eq!(wiki.api_hits.load(Ordering::SeqCst), 0);
        }

        #[tokio::test]
        async fn test_missing_summary_falls_back_to_action_api() {
            let wiki = FakeWiki::default();
            let client = start(wiki.clone()).await;

            let summary = client.summary("Ficus lyrata").await.unwrap();
            assert_eq!(summary, format!("{}...", "f".repeat(MAX_EXTRACT_LEN)));
            assert_eq!(wiki.rest_hits.load(Ordering::SeqCst), 1);
            assert_eq!(wiki.api_hits.load(Ordering::SeqCst), 1);
        }

        #[tokio::test]
        async fn test_short_extract_is_ignored() {
            let client = start(FakeWiki::default()).await;
            assert_eq!(client.summary("Pilea peperomioides").await, None);
        }

        #[tokio::test]
        async fn test_second_lookup_is_cached() {
            let wiki = FakeWiki::default();
            let client = start(wiki.clone()).await;

            let first = client.summary("Monstera deliciosa").await;
            let second = client.summary("Monstera deliciosa").await;
            assert_eq!(first, second);
            assert_eq!(wiki.rest_hits.load(Ordering::SeqCst), 1);

            // Negative answers are cached too
            assert_eq!(client.summary("Pilea peperomioides").await, None);
            assert_eq!(client.summary("Pilea peperomioides").await, None);
            assert_eq!(wiki.api_hits.load(Ordering::SeqCst), 1);
        }

        #[tokio::test]
        async fn test_failed_lookup_is_retried() {
            let wiki = FakeWiki::default();
            wiki.broken.store(true, Ordering::SeqCst);
            let client = start(wiki.clone()).await;

            assert_eq!(client.summary("Monstera deliciosa").await, None);

            wiki.broken.store(false, Ordering::SeqCst);
            assert_eq!(client.summary("Monstera deliciosa").await.as_deref(), Some(MONSTERA_EXTRACT));
            assert_eq!(wiki.rest_hits.load(Ordering::SeqCst), 2);
        }
    }
}
