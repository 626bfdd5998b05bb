use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Статус, по которому можно сузить поиск (значения фильтра в запросе)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    Registered,
    Pending,
    Abandoned,
    Others,
}

/// Set of selected statuses. `None` in state means "no filter".
pub type StatusSet = BTreeSet<StatusFilter>;

impl StatusFilter {
    pub const ALL: [StatusFilter; 4] = [
        StatusFilter::Registered,
        StatusFilter::Pending,
        StatusFilter::Abandoned,
        StatusFilter::Others,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::Registered => "registered",
            StatusFilter::Pending => "pending",
            StatusFilter::Abandoned => "abandoned",
            StatusFilter::Others => "others",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::Registered => "Registered",
            StatusFilter::Pending => "Pending",
            StatusFilter::Abandoned => "Abandoned",
            StatusFilter::Others => "Others",
        }
    }

    /// Цвет точки статуса, совпадает с цветом в таблице результатов
    pub fn color(&self) -> &'static str {
        match self {
            StatusFilter::Registered => StatusType::Registered.color(),
            StatusFilter::Pending => StatusType::Pending.color(),
            StatusFilter::Abandoned => StatusType::Abandoned.color(),
            StatusFilter::Others => StatusType::Other.color(),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "registered" => Ok(StatusFilter::Registered),
            "pending" => Ok(StatusFilter::Pending),
            "abandoned" => Ok(StatusFilter::Abandoned),
            "others" => Ok(StatusFilter::Others),
            other => Err(format!("Unknown status filter: {}", other)),
        }
    }
}

/// Lifecycle status of a single trademark record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatusType {
    Registered,
    Pending,
    Abandoned,
    #[default]
    #[serde(other)]
    Other,
}

impl StatusType {
    /// Lenient parse: anything unknown is `Other`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "registered" => StatusType::Registered,
            "pending" => StatusType::Pending,
            "abandoned" => StatusType::Abandoned,
            _ => StatusType::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusType::Registered => "Registered",
            StatusType::Pending => "Pending",
            StatusType::Abandoned => "Abandoned",
            StatusType::Other => "Other",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            StatusType::Registered => "#41B65C",
            StatusType::Pending => "#ECC53C",
            StatusType::Abandoned => "#EC3C3C",
            StatusType::Other => "#4380ec",
        }
    }
}

/// Joins a status set into the comma-separated form used in share links.
pub fn join_statuses(set: &StatusSet) -> String {
    set.iter()
        .map(StatusFilter::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

/// Splits a comma-separated status list. Empty input and unknown tokens
/// never produce entries; an empty result is `None`.
pub fn split_statuses(raw: &str) -> Option<StatusSet> {
    let set: StatusSet = raw
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| match token.parse::<StatusFilter>() {
            Ok(status) => Some(status),
            Err(e) => {
                log::warn!("Dropping status token '{}': {}", token, e);
                None
            }
        })
        .collect();

    if set.is_empty() { None } else { Some(set) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_type_unknown_is_other() {
        assert_eq!(StatusType::parse("registered"), StatusType::Registered);
        assert_eq!(StatusType::parse("PENDING"), StatusType::Pending);
        assert_eq!(StatusType::parse("cancelled"), StatusType::Other);

        let parsed: StatusType = serde_json::from_str("\"expired\"").unwrap();
        assert_eq!(parsed, StatusType::Other);
    }

    #[test]
    fn test_split_empty_is_none() {
        assert_eq!(split_statuses(""), None);
        assert_eq!(split_statuses(" , ,"), None);
        assert_eq!(split_statuses("bogus"), None);
    }

    #[test]
    fn test_split_and_join() {
        let set = split_statuses("pending,registered,pending").unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(join_statuses(&set), "registered,pending");
    }

    #[test]
    fn test_filter_serializes_lowercase() {
        let json = serde_json::to_string(&StatusFilter::Others).unwrap();
        assert_eq!(json, "\"others\"");
    }
}
