//! Input text statistics and validation
//!
//! Counting rules: character count is the raw length of the input including
//! internal whitespace; word count is the number of non-empty
//! whitespace-delimited tokens after trimming.

use contracts::summarize::{MAX_TEXT_CHARS, MIN_TEXT_CHARS};

/// Upload allow-list, matched case-insensitively against the substring
/// after the last period in the filename
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["txt", "md", "json", "pdf"];

/// Maximum accepted upload size in bytes (5 MiB)
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextStats {
    pub chars: usize,
    pub words: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        Self {
            chars: text.chars().count(),
            words: text.split_whitespace().count(),
        }
    }

    /// The summarize action is available once the minimum length is reached
    pub fn can_summarize(&self) -> bool {
        self.chars >= MIN_TEXT_CHARS
    }
}

/// Validate trimmed input ahead of a summarize request.
///
/// Returns the user-facing rejection message; no request is issued on `Err`.
pub fn validate_for_summary(text: &str) -> Result<(), String> {
    if text.is_empty() {
        return Err("Please enter some text to summarize.".to_string());
    }
    let len = text.chars().count();
    if len < MIN_TEXT_CHARS {
        return Err(format!(
            "Text is too short. Please provide at least {} characters.",
            MIN_TEXT_CHARS
        ));
    }
    if len > MAX_TEXT_CHARS {
        return Err("Text is too long. Please limit to 50,000 characters.".to_string());
    }
    Ok(())
}

/// Validate an upload before any of its content is read
pub fn check_upload(file_name: &str, size: u64) -> Result<(), String> {
    let extension = file_name
        .rsplit('.')
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();

    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err("Invalid file type. Please upload .txt, .md, .pdf or .json files.".to_string());
    }

    if size > MAX_UPLOAD_BYTES {
        return Err("File is too large. Maximum size is 5MB.".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_ignores_extra_whitespace() {
        let stats = TextStats::of("  one   two\tthree\n four  ");
        assert_eq!(stats.words, 4);
    }

    #[test]
    fn test_char_count_is_raw_length() {
        let stats = TextStats::of("  ab  ");
        assert_eq!(stats.chars, 6);
        assert_eq!(stats.words, 1);
    }

    #[test]
    fn test_empty_text() {
        let stats = TextStats::of("");
        assert_eq!(stats.chars, 0);
        assert_eq!(stats.words, 0);
        assert!(!stats.can_summarize());
    }

    #[test]
    fn test_summarize_enabled_at_threshold() {
        assert!(!TextStats::of(&"a".repeat(49)).can_summarize());
        assert!(TextStats::of(&"a".repeat(50)).can_summarize());
    }

    #[test]
    fn test_validation_ladder() {
        assert!(validate_for_summary("").unwrap_err().contains("enter some text"));
        assert!(validate_for_summary("x").unwrap_err().contains("too short"));
        assert!(validate_for_summary(&"a".repeat(49))
            .unwrap_err()
            .contains("too short"));
        assert!(validate_for_summary(&"a".repeat(50)).is_ok());
        assert!(validate_for_summary(&"a".repeat(50_000)).is_ok());
        assert!(validate_for_summary(&"a".repeat(50_001))
            .unwrap_err()
            .contains("too long"));
    }

    #[test]
    fn test_upload_extension_allow_list() {
        assert!(check_upload("notes.txt", 10).is_ok());
        assert!(check_upload("README.MD", 10).is_ok());
        assert!(check_upload("data.Json", 10).is_ok());
        assert!(check_upload("paper.pdf", 10).is_ok());
        assert!(check_upload("image.png", 10).is_err());
        assert!(check_upload("archive.tar.gz", 10).is_err());
        assert!(check_upload("noextension", 10).is_err());
    }

    #[test]
    fn test_upload_size_limit() {
        assert!(check_upload("big.txt", MAX_UPLOAD_BYTES).is_ok());
        assert!(check_upload("big.txt", MAX_UPLOAD_BYTES + 1)
            .unwrap_err()
            .contains("too large"));
    }

    #[test]
    fn test_bad_extension_rejected_before_size() {
        // an oversized file with a bad extension reports the type error
        let err = check_upload("movie.mp4", MAX_UPLOAD_BYTES + 1).unwrap_err();
        assert!(err.contains("Invalid file type"));
    }
}
