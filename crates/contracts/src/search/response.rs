use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::error::SearchError;
use super::status::StatusType;

/// Одна запись результата поиска (товарный знак)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrademarkRecord {
    pub id: String,
    pub mark_identification: String,
    pub current_owner: String,
    /// Unix seconds
    pub registration_date: Option<i64>,
    pub status_date: Option<i64>,
    pub renewal_date: Option<i64>,
    pub status_type: StatusType,
    pub descriptions: Vec<String>,
    pub class_codes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub hits: Vec<TrademarkRecord>,
    pub total_count: u64,
}

/// How tolerant response decoding is towards unexpected JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeMode {
    /// Unexpected shapes become zero results, broken hits are skipped
    #[default]
    Lenient,
    /// Unexpected shapes are reported as `SearchError::MalformedResponse`
    Strict,
}

impl DecodeMode {
    pub fn from_strict_flag(strict: bool) -> Self {
        if strict { DecodeMode::Strict } else { DecodeMode::Lenient }
    }
}

// Wire shapes of `hits.hits[]`

#[derive(Debug, Deserialize)]
struct RawHit {
    #[serde(rename = "_id", default)]
    id: String,
    #[serde(rename = "_source", default)]
    source: RawSource,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSource {
    mark_identification: Option<String>,
    current_owner: Option<String>,
    #[serde(deserialize_with = "lenient_timestamp")]
    registration_date: Option<i64>,
    #[serde(deserialize_with = "lenient_timestamp")]
    status_date: Option<i64>,
    #[serde(deserialize_with = "lenient_timestamp")]
    renewal_date: Option<i64>,
    status_type: Option<String>,
    mark_description_description: Option<Vec<String>>,
    class_codes: Option<Vec<String>>,
}

/// Accepts integer, float or numeric-string timestamps; anything else is `None`.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    })
}

impl RawHit {
    fn into_record(self) -> TrademarkRecord {
        let s = self.source;
        TrademarkRecord {
            id: self.id,
            mark_identification: s.mark_identification.unwrap_or_default(),
            current_owner: s.current_owner.unwrap_or_default(),
            registration_date: s.registration_date,
            status_date: s.status_date,
            renewal_date: s.renewal_date,
            status_type: s
                .status_type
                .as_deref()
                .map(StatusType::parse)
                .unwrap_or_default(),
            descriptions: s.mark_description_description.unwrap_or_default(),
            class_codes: s.class_codes.unwrap_or_default(),
        }
    }
}

/// Normalizes the service response into a `SearchResponse`.
///
/// Looks for `body.hits.hits` and `body.hits.total.value`; when there is no
/// `body` envelope the same paths are read from the document root.
pub fn decode_response(document: &Value, mode: DecodeMode) -> Result<SearchResponse, SearchError> {
    let envelope = document.get("body").unwrap_or(document);

    let raw_hits = match envelope.pointer("/hits/hits").and_then(Value::as_array) {
        Some(hits) => hits.as_slice(),
        None => {
            if mode == DecodeMode::Strict {
                return Err(SearchError::MalformedResponse(
                    "missing hits.hits array".to_string(),
                ));
            }
            log::debug!("Response has no hits.hits, treating as zero results");
            &[]
        }
    };

    let total_count = match total_value(envelope) {
        Some(total) => total,
        None => {
            if mode == DecodeMode::Strict {
                return Err(SearchError::MalformedResponse(
                    "missing hits.total.value".to_string(),
                ));
            }
            0
        }
    };

    let mut hits = Vec::with_capacity(raw_hits.len());
    for (index, raw) in raw_hits.iter().enumerate() {
        match RawHit::deserialize(raw) {
            Ok(hit) => hits.push(hit.into_record()),
            Err(e) if mode == DecodeMode::Strict => {
                return Err(SearchError::MalformedResponse(format!(
                    "hit #{}: {}",
                    index, e
                )));
            }
            Err(e) => log::warn!("Skipping undecodable hit #{}: {}", index, e),
        }
    }

    Ok(SearchResponse { hits, total_count })
}

/// Decodes a raw response body. In lenient mode a body that is not JSON at
/// all is treated like any other unexpected shape.
pub fn decode_response_text(text: &str, mode: DecodeMode) -> Result<SearchResponse, SearchError> {
    match serde_json::from_str::<Value>(text) {
        Ok(document) => decode_response(&document, mode),
        Err(e) if mode == DecodeMode::Strict => {
            Err(SearchError::MalformedResponse(format!("invalid JSON: {}", e)))
        }
        Err(e) => {
            log::warn!("Response is not valid JSON ({}), treating as zero results", e);
            Ok(SearchResponse::default())
        }
    }
}

// Older services report `hits.total` as a bare number.
fn total_value(envelope: &Value) -> Option<u64> {
    let total = envelope.pointer("/hits/total")?;
    total
        .get("value")
        .and_then(Value::as_u64)
        .or_else(|| total.as_u64())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "body": {
                "hits": {
                    "total": { "value": 23 },
                    "hits": [
                        {
                            "_id": "97123456",
                            "_source": {
                                "mark_identification": "TESLA MOTORS",
                                "current_owner": "Tesla, Inc.",
                                "registration_date": 1262304000,
                                "status_date": 1577836800.0,
                                "renewal_date": null,
                                "status_type": "registered",
                                "mark_description_description": ["Electric vehicles"],
                                "class_codes": ["012", "037"]
                            }
                        },
                        {
                            "_id": "88000001",
                            "_source": {
                                "mark_identification": "TESLA COIL",
                                "status_type": "dead"
                            }
                        }
                    ]
                }
            }
        })
    }

    #[test]
    fn test_decode_full_response() {
        let resp = decode_response(&sample(), DecodeMode::Lenient).unwrap();
        assert_eq!(resp.total_count, 23);
        assert_eq!(resp.hits.len(), 2);

        let first = &resp.hits[0];
        assert_eq!(first.id, "97123456");
        assert_eq!(first.current_owner, "Tesla, Inc.");
        assert_eq!(first.registration_date, Some(1262304000));
        assert_eq!(first.status_date, Some(1577836800));
        assert_eq!(first.renewal_date, None);
        assert_eq!(first.status_type, StatusType::Registered);
        assert_eq!(first.class_codes, vec!["012", "037"]);

        let second = &resp.hits[1];
        assert_eq!(second.status_type, StatusType::Other);
        assert!(second.descriptions.is_empty());
        assert_eq!(second.current_owner, "");
    }

    #[test]
    fn test_missing_hits_is_empty_not_error() {
        let resp = decode_response(&json!({ "body": {} }), DecodeMode::Lenient).unwrap();
        assert_eq!(resp, SearchResponse { hits: vec![], total_count: 0 });

        let resp = decode_response(&json!("nonsense"), DecodeMode::Lenient).unwrap();
        assert_eq!(resp.total_count, 0);
    }

    #[test]
    fn test_strict_mode_reports_shape() {
        let err = decode_response(&json!({ "body": {} }), DecodeMode::Strict).unwrap_err();
        assert!(matches!(err, SearchError::MalformedResponse(_)));

        assert!(decode_response(&sample(), DecodeMode::Strict).is_ok());
    }

    #[test]
    fn test_strict_mode_requires_total() {
        let doc = json!({ "body": { "hits": { "hits": [] } } });
        let err = decode_response(&doc, DecodeMode::Strict).unwrap_err();
        assert!(matches!(err, SearchError::MalformedResponse(ref msg) if msg.contains("hits.total")));

        let resp = decode_response(&doc, DecodeMode::Lenient).unwrap();
        assert_eq!(resp, SearchResponse::default());
    }

    #[test]
    fn test_lenient_skips_broken_hit() {
        let doc = json!({
            "hits": {
                "total": 2,
                "hits": [
                    { "_id": "1", "_source": { "class_codes": "not-a-list" } },
                    { "_id": "2", "_source": { "mark_identification": "OK" } }
                ]
            }
        });
        let resp = decode_response(&doc, DecodeMode::Lenient).unwrap();
        assert_eq!(resp.total_count, 2);
        assert_eq!(resp.hits.len(), 1);
        assert_eq!(resp.hits[0].id, "2");

        assert!(decode_response(&doc, DecodeMode::Strict).is_err());
    }

    #[test]
    fn test_decode_text_not_json() {
        let resp = decode_response_text("<html>oops</html>", DecodeMode::Lenient).unwrap();
        assert!(resp.hits.is_empty());
        assert!(decode_response_text("<html>oops</html>", DecodeMode::Strict).is_err());
    }
}
