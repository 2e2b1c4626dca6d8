use serde::{Deserialize, Serialize};

/// Summarization styles offered to the user and accepted by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryStyle {
    Brief,
    Detailed,
    Bullets,
}

impl SummaryStyle {
    /// Wire code sent in the `style` field
    pub fn code(&self) -> &'static str {
        match self {
            SummaryStyle::Brief => "brief",
            SummaryStyle::Detailed => "detailed",
            SummaryStyle::Bullets => "bullets",
        }
    }

    /// Human-readable button label
    pub fn label(&self) -> &'static str {
        match self {
            SummaryStyle::Brief => "Brief",
            SummaryStyle::Detailed => "Detailed",
            SummaryStyle::Bullets => "Bullet Points",
        }
    }

    /// All styles, in display order (the first one is the default)
    pub fn all() -> Vec<SummaryStyle> {
        vec![
            SummaryStyle::Brief,
            SummaryStyle::Detailed,
            SummaryStyle::Bullets,
        ]
    }

    /// Parse from a wire code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "brief" => Some(SummaryStyle::Brief),
            "detailed" => Some(SummaryStyle::Detailed),
            "bullets" => Some(SummaryStyle::Bullets),
            _ => None,
        }
    }
}

impl Default for SummaryStyle {
    fn default() -> Self {
        SummaryStyle::Brief
    }
}

impl ToString for SummaryStyle {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_codes() {
        assert_eq!(
            serde_json::to_string(&SummaryStyle::Brief).unwrap(),
            "\"brief\""
        );
        assert_eq!(
            serde_json::to_string(&SummaryStyle::Bullets).unwrap(),
            "\"bullets\""
        );
        assert_eq!(
            serde_json::from_str::<SummaryStyle>("\"detailed\"").unwrap(),
            SummaryStyle::Detailed
        );
    }

    #[test]
    fn test_from_code_matches_code() {
        for style in SummaryStyle::all() {
            assert_eq!(SummaryStyle::from_code(style.code()), Some(style));
        }
        assert_eq!(SummaryStyle::from_code("haiku"), None);
    }

    #[test]
    fn test_default_is_first() {
        assert_eq!(SummaryStyle::default(), SummaryStyle::all()[0]);
    }
}
