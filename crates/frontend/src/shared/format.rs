//! Display formatting helpers

use contracts::summarize::SummarizeResponse;

/// Capitalize the first letter of a string
/// Example: "brief" -> "Brief"
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Metadata line shown under a generated summary
pub fn summary_meta_line(response: &SummarizeResponse) -> String {
    let mut line = format!(
        "Style: {} | Model: {} | Tokens used: {}",
        capitalize_first(response.style.code()),
        response.model,
        response.tokens_used
    );
    if let Some(provider) = &response.provider {
        line.push_str(&format!(" | Provider: {}", provider));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::SummaryStyle;

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("brief"), "Brief");
        assert_eq!(capitalize_first("B"), "B");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_meta_line() {
        let response = SummarizeResponse {
            summary: "X".to_string(),
            style: SummaryStyle::Brief,
            model: "m1".to_string(),
            tokens_used: 42,
            provider: None,
        };
        let line = summary_meta_line(&response);
        assert!(line.contains("Brief"));
        assert!(line.contains("m1"));
        assert!(line.contains("42"));
        assert!(!line.contains("Provider"));
    }

    #[test]
    fn test_meta_line_with_provider() {
        let response = SummarizeResponse {
            summary: "s".to_string(),
            style: SummaryStyle::Bullets,
            model: "gemini-2.5-flash".to_string(),
            tokens_used: 7,
            provider: Some("Google Gemini".to_string()),
        };
        assert!(summary_meta_line(&response).contains("Provider: Google Gemini"));
    }
}
