/// Formatting helpers for trademark rows
///
/// Keeps rendering of dates, descriptions and class lists consistent between
/// list and grid views.
use chrono::DateTime;

const DESCRIPTION_PREVIEW_CHARS: usize = 50;

/// Format unix seconds as YYYY-MM-DD (UTC)
/// Example: Some(1262304000) -> "2010-01-01", None or Some(0) -> "N/A"
pub fn format_timestamp(timestamp: Option<i64>) -> String {
    match timestamp {
        Some(secs) if secs != 0 => DateTime::from_timestamp(secs, 0)
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "N/A".to_string()),
        _ => "N/A".to_string(),
    }
}

/// First word of the mark, shown in the mark tile
pub fn first_word(text: &str) -> &str {
    text.split_whitespace().next().unwrap_or("")
}

/// First description cut to 50 characters, with a trailing ellipsis
pub fn description_preview(descriptions: &[String]) -> String {
    match descriptions.first() {
        Some(first) => {
            let preview: String = first.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
            format!("{}...", preview)
        }
        None => "No description available".to_string(),
    }
}

/// "Class 009, 042"
pub fn class_line(class_codes: &[String]) -> String {
    format!("Class {}", class_codes.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(Some(1262304000)), "2010-01-01");
        assert_eq!(format_timestamp(Some(1577923200)), "2020-01-02");
        assert_eq!(format_timestamp(None), "N/A");
        assert_eq!(format_timestamp(Some(0)), "N/A");
    }

    #[test]
    fn test_first_word() {
        assert_eq!(first_word("MICKEY MOUSE CLUB"), "MICKEY");
        assert_eq!(first_word(""), "");
    }

    #[test]
    fn test_description_preview() {
        let long = "Downloadable computer game software for use on mobile devices".to_string();
        let preview = description_preview(&[long]);
        assert_eq!(preview.chars().count(), 53);
        assert!(preview.starts_with("Downloadable computer game"));
        assert!(preview.ends_with("..."));

        assert_eq!(description_preview(&[]), "No description available");
    }

    #[test]
    fn test_class_line() {
        assert_eq!(
            class_line(&["009".to_string(), "042".to_string()]),
            "Class 009, 042"
        );
    }
}
