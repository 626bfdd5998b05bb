use thiserror::Error;

/// Ошибки поиска товарных знаков
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// The service answered with a non-success status
    #[error("Failed to fetch trademarks: {status} {status_text}")]
    RequestFailed { status: u16, status_text: String },

    /// Only produced when strict decoding is enabled
    #[error("Unexpected response shape: {0}")]
    MalformedResponse(String),

    #[error("Failed to send request: {0}")]
    Transport(String),

    #[error("Failed to serialize request: {0}")]
    Serialize(String),
}
