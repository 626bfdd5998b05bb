use contracts::search::config::SearchConfig;
use contracts::search::response::decode_response_text;
use contracts::search::{DecodeMode, SearchError, SearchRequest, SearchResponse};
use gloo_net::http::Request;

/// HTTP client for the trademark search service.
///
/// Built once from configuration and provided through context; one call per
/// `search`, no retries or caching.
#[derive(Debug, Clone)]
pub struct TrademarkSearchClient {
    endpoint: String,
    sort_by: String,
    decode_mode: DecodeMode,
}

impl TrademarkSearchClient {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            sort_by: config.sort_by.clone(),
            decode_mode: config.decode_mode(),
        }
    }

    /// POST the request and normalize the response
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        let body = request.clone().with_sort_by(self.sort_by.as_str());
        log::debug!(
            "Searching '{}' page {} status {:?}",
            body.input_query,
            body.page,
            body.status
        );

        let response = Request::post(&self.endpoint)
            .header("Accept", "application/json, text/plain, */*")
            .json(&body)
            .map_err(|e| SearchError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(SearchError::RequestFailed {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        decode_response_text(&text, self.decode_mode)
    }
}
