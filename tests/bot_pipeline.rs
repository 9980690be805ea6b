//! End-to-end tests for the /cari pipeline against a mock search provider.
//!
//! These cover the reply sequence the dispatcher produces without touching
//! Telegram or SerpApi.

use async_trait::async_trait;
use cari_bot::bot::{normalize_query, run_search};
use cari_bot::format;
use cari_bot::search::{SearchError, SearchProvider, SearchResult, SearchResults};
use std::sync::atomic::{AtomicUsize, Ordering};

enum MockOutcome {
    Results(Vec<SearchResult>),
    UpstreamError(String),
    Fault,
}

struct MockProvider {
    outcome: MockOutcome,
    calls: AtomicUsize,
}

impl MockProvider {
    fn new(outcome: MockOutcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SearchProvider for MockProvider {
    async fn search(&self, _query: &str) -> Result<SearchResults, SearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            MockOutcome::Results(items) => Ok(SearchResults {
                items: items.clone(),
            }),
            MockOutcome::UpstreamError(message) => Err(SearchError::Api(message.clone())),
            MockOutcome::Fault => Err(SearchError::Timeout),
        }
    }
}

fn resep_results() -> Vec<SearchResult> {
    vec![
        SearchResult {
            title: "Resep A".to_string(),
            link: "http://a".to_string(),
            snippet: "enak".to_string(),
        },
        SearchResult {
            title: "Resep B".to_string(),
            link: "http://b".to_string(),
            snippet: "gampang".to_string(),
        },
    ]
}

#[tokio::test]
async fn test_cari_nasi_goreng_end_to_end() {
    let provider = MockProvider::new(MockOutcome::Results(resep_results()));

    // The dispatcher first normalizes, then acknowledges, then searches.
    let query = normalize_query("nasi goreng").expect("query must survive normalization");

    let ack = format::acknowledgment(&query);
    assert!(ack.contains("nasi goreng"));

    let reply = run_search(&provider, &query).await;

    assert!(reply.starts_with("🔍 *Hasil Pencarian untuk: nasi goreng*"));
    assert!(reply.contains("http://a\n*Resep A*\n_enak_"));
    assert!(reply.contains("http://b\n*Resep B*\n_gampang_"));
    assert!(reply.find("Resep A").unwrap() < reply.find("Resep B").unwrap());
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_empty_query_never_reaches_the_provider() {
    let provider = MockProvider::new(MockOutcome::Results(resep_results()));

    // The handler replies with the usage hint and returns before searching.
    assert_eq!(normalize_query("   "), None);
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_upstream_error_is_surfaced_verbatim() {
    let provider = MockProvider::new(MockOutcome::UpstreamError(
        "Your account has run out of searches.".to_string(),
    ));

    let reply = run_search(&provider, "bakso").await;

    assert_eq!(
        reply,
        "Maaf, terjadi kesalahan dari SerpApi: Your account has run out of searches."
    );
}

#[tokio::test]
async fn test_no_results_message_is_exact() {
    let provider = MockProvider::new(MockOutcome::Results(vec![]));

    let reply = run_search(&provider, "xyzzy").await;

    assert_eq!(reply, format::NO_RESULTS);
}

#[tokio::test]
async fn test_fault_yields_exact_generic_message() {
    let provider = MockProvider::new(MockOutcome::Fault);

    let reply = run_search(&provider, "bakso").await;

    assert_eq!(reply, format::INTERNAL_ERROR);
}

#[tokio::test]
async fn test_same_query_same_response_is_byte_identical() {
    let provider = MockProvider::new(MockOutcome::Results(resep_results()));

    let first = run_search(&provider, "nasi goreng").await;
    let second = run_search(&provider, "nasi goreng").await;

    assert_eq!(first, second);
    assert_eq!(provider.call_count(), 2);
}
