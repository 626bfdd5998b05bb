//! Shareable links: `?query=<q>&page=<p>&status=<a,b>`

use serde::Deserialize;

use super::status::{join_statuses, split_statuses, StatusSet};
use super::view_state::ViewState;

/// Part of the view state that survives in a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareParams {
    pub query: String,
    pub page: u32,
    pub status: Option<StatusSet>,
}

impl Default for ShareParams {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            status: None,
        }
    }
}

impl From<&ViewState> for ShareParams {
    fn from(state: &ViewState) -> Self {
        Self {
            query: state.query.clone(),
            page: state.current_page,
            status: state.status_filter.clone(),
        }
    }
}

/// Raw query-string values before validation
#[derive(Debug, Deserialize)]
struct RawShareQuery {
    query: Option<String>,
    page: Option<String>,
    status: Option<String>,
}

impl ShareParams {
    /// Query string without the leading `?`.
    pub fn to_query_string(&self) -> String {
        let status = self
            .status
            .as_ref()
            .map(join_statuses)
            .unwrap_or_default();
        format!(
            "query={}&page={}&status={}",
            urlencoding::encode(&self.query),
            self.page.max(1),
            status
        )
    }
}

/// Builds a link to the current view. `base_url` is origin + path of the page.
pub fn encode(base_url: &str, state: &ViewState) -> String {
    let params = ShareParams::from(state);
    format!("{}?{}", base_url, params.to_query_string())
}

/// Reads share parameters from a page query string (leading `?` optional).
/// Missing or invalid values fall back to defaults.
pub fn decode(query_string: &str) -> ShareParams {
    let raw_qs = query_string.trim_start_matches('?');
    if raw_qs.is_empty() {
        return ShareParams::default();
    }

    let raw: RawShareQuery = match serde_qs::from_str(raw_qs) {
        Ok(raw) => raw,
        Err(e) => {
            log::warn!("Share link '{}' is not well-formed ({}), reading pairs one by one", raw_qs, e);
            salvage_pairs(raw_qs)
        }
    };

    let page = raw
        .page
        .as_deref()
        .and_then(|p| p.trim().parse::<u32>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1);

    ShareParams {
        query: raw.query.unwrap_or_default(),
        page,
        // `status=` must not turn into a one-element list with an empty name
        status: raw.status.as_deref().and_then(split_statuses),
    }
}

/// Reads each `key=value` pair on its own. The first readable value of a key
/// wins; pairs that still fail are skipped.
fn salvage_pairs(raw_qs: &str) -> RawShareQuery {
    let mut raw = RawShareQuery {
        query: None,
        page: None,
        status: None,
    };
    for pair in raw_qs.split('&').filter(|pair| !pair.is_empty()) {
        let single: RawShareQuery = match serde_qs::from_str(pair) {
            Ok(single) => single,
            Err(e) => {
                log::warn!("Skipping share link pair '{}': {}", pair, e);
                continue;
            }
        };
        raw.query = raw.query.or(single.query);
        raw.page = raw.page.or(single.page);
        raw.status = raw.status.or(single.status);
    }
    raw
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::status::StatusFilter;

    #[test]
    fn test_decode_defaults() {
        assert_eq!(decode(""), ShareParams::default());
        assert_eq!(decode("?"), ShareParams::default());

        let params = decode("?query=nike&page=abc");
        assert_eq!(params.query, "nike");
        assert_eq!(params.page, 1);
        assert_eq!(params.status, None);

        assert_eq!(decode("page=0").page, 1);
        assert_eq!(decode("page=-4").page, 1);
    }

    #[test]
    fn test_decode_empty_status_is_no_filter() {
        let params = decode("query=apple&page=2&status=");
        assert_eq!(params.status, None);
        assert_eq!(params.page, 2);
    }

    #[test]
    fn test_decode_status_list() {
        let params = decode("query=apple&status=pending,registered");
        let status = params.status.unwrap();
        assert!(status.contains(&StatusFilter::Pending));
        assert!(status.contains(&StatusFilter::Registered));
        assert_eq!(status.len(), 2);
    }

    #[test]
    fn test_decode_repeated_key_keeps_other_fields() {
        let params = decode("?query=x&page=2&status=pending&status=registered");
        assert_eq!(params.query, "x");
        assert_eq!(params.page, 2);
        assert_eq!(params.status, Some(StatusSet::from([StatusFilter::Pending])));
    }

    #[test]
    fn test_encode_format() {
        let state = ViewState::default()
            .apply_new_query("mickey mouse")
            .apply_filter(Some([StatusFilter::Pending].into_iter().collect()));
        assert_eq!(
            encode("https://example.com/", &state),
            "https://example.com/?query=mickey%20mouse&page=1&status=pending"
        );

        let state = ViewState::default().apply_new_query("x");
        assert!(encode("http://localhost:8080/", &state).ends_with("&status="));
    }

    #[test]
    fn test_round_trip() {
        let status: StatusSet = [StatusFilter::Abandoned, StatusFilter::Others]
            .into_iter()
            .collect();
        let state = ViewState::default()
            .apply_new_query("at&t wireless")
            .apply_filter(Some(status.clone()))
            .restore_page(6);

        let url = encode("https://example.com/search", &state);
        let (_, qs) = url.split_once('?').unwrap();
        let params = decode(qs);

        assert_eq!(params.query, "at&t wireless");
        assert_eq!(params.page, 6);
        assert_eq!(params.status, Some(status));
    }
}
