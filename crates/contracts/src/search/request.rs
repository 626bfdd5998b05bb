use serde::{Deserialize, Serialize};

use super::status::{StatusFilter, StatusSet};

/// Page size is fixed by the search service contract
pub const ROWS_PER_PAGE: u32 = 10;

pub const DEFAULT_SORT_BY: &str = "default";
pub const DEFAULT_SORT_ORDER: &str = "desc";

/// Тело POST-запроса к сервису поиска товарных знаков.
///
/// Field names follow the wire format. The filter lists the service
/// accepts but this client never narrows by are always sent empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub input_query: String,
    pub input_query_type: String,
    pub sort_by: String,
    pub status: Vec<StatusFilter>,
    pub exact_match: bool,
    pub date_query: bool,
    pub owners: Vec<String>,
    pub attorneys: Vec<String>,
    pub law_firms: Vec<String>,
    pub mark_description_description: Vec<String>,
    pub classes: Vec<String>,
    pub page: u32,
    pub rows: u32,
    pub sort_order: String,
    pub states: Vec<String>,
    pub counties: Vec<String>,
}

impl SearchRequest {
    /// Builds a request from user input.
    ///
    /// * `query` is trimmed; an empty query is still a valid request
    /// * `page` of `None` or `0` becomes page 1
    /// * `status` of `None` or an empty set means "no filter"
    pub fn build(query: &str, page: Option<u32>, status: Option<&StatusSet>) -> Self {
        Self {
            input_query: query.trim().to_string(),
            input_query_type: String::new(),
            sort_by: DEFAULT_SORT_BY.to_string(),
            status: status
                .map(|set| set.iter().copied().collect())
                .unwrap_or_default(),
            exact_match: false,
            date_query: false,
            owners: Vec::new(),
            attorneys: Vec::new(),
            law_firms: Vec::new(),
            mark_description_description: Vec::new(),
            classes: Vec::new(),
            page: page.unwrap_or(1).max(1),
            rows: ROWS_PER_PAGE,
            sort_order: DEFAULT_SORT_ORDER.to_string(),
            states: Vec::new(),
            counties: Vec::new(),
        }
    }

    pub fn with_sort_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = sort_by.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_trims_and_coerces_page() {
        let req = SearchRequest::build("  mickey mouse ", Some(0), None);
        assert_eq!(req.input_query, "mickey mouse");
        assert_eq!(req.page, 1);
        assert_eq!(req.rows, 10);
        assert!(req.status.is_empty());

        let req = SearchRequest::build("x", None, None);
        assert_eq!(req.page, 1);
    }

    #[test]
    fn test_empty_status_set_is_no_filter() {
        let empty = StatusSet::new();
        let req = SearchRequest::build("nike", Some(3), Some(&empty));
        assert!(req.status.is_empty());
        assert_eq!(req.page, 3);
    }

    #[test]
    fn test_wire_body() {
        let status: StatusSet = [StatusFilter::Pending, StatusFilter::Registered]
            .into_iter()
            .collect();
        let req = SearchRequest::build("tesla", Some(2), Some(&status));
        let body = serde_json::to_value(&req).unwrap();

        assert_eq!(
            body,
            json!({
                "input_query": "tesla",
                "input_query_type": "",
                "sort_by": "default",
                "status": ["registered", "pending"],
                "exact_match": false,
                "date_query": false,
                "owners": [],
                "attorneys": [],
                "law_firms": [],
                "mark_description_description": [],
                "classes": [],
                "page": 2,
                "rows": 10,
                "sort_order": "desc",
                "states": [],
                "counties": []
            })
        );
    }
}
