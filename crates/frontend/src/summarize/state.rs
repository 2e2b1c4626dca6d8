//! State types for the summarizer page

/// Mutually exclusive panels of the result region. The render path matches
/// on this value, so two panels can never be visible at once.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ResultPanel {
    #[default]
    Empty,
    Loading,
    Error(String),
    Success,
}

impl ResultPanel {
    pub fn is_loading(&self) -> bool {
        matches!(self, ResultPanel::Loading)
    }
}

/// Backend reachability as probed at startup
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiStatus {
    Connecting,
    Connected(String),
    Offline,
}

impl ApiStatus {
    /// Badge text
    pub fn label(&self) -> String {
        match self {
            ApiStatus::Connecting => "Connecting...".to_string(),
            ApiStatus::Connected(provider) => format!("✓ Connected - {}", provider),
            ApiStatus::Offline => "✗ Server Offline".to_string(),
        }
    }

    /// Badge CSS class
    pub fn css_class(&self) -> &'static str {
        match self {
            ApiStatus::Connecting => "api-badge",
            ApiStatus::Connected(_) => "api-badge connected",
            ApiStatus::Offline => "api-badge error",
        }
    }
}

/// Ticket pairing an in-flight summarize request with the state epoch that
/// issued it. `clear` and newer requests advance the epoch; a settled
/// request whose ticket is stale is discarded without touching state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestEpoch(u64);

impl RequestEpoch {
    pub fn next(self) -> Self {
        RequestEpoch(self.0.wrapping_add(1))
    }

    pub fn accepts(self, ticket: RequestEpoch) -> bool {
        self == ticket
    }
}
