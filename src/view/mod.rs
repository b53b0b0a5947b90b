//! Typed view model for the client flows.
//!
//! Flows never write to an output device. They describe what should be
//! shown through the [`View`] bindings, and a concrete view decides how.
//!
//! - [`Notice`] - One-off acknowledgement or error message
//! - [`ResultCard`] - Panel revealing a freshly generated short URL
//! - [`AnalyticsPanel`] - Analytics area with its loading and failure states

pub mod terminal;

pub use terminal::TerminalView;

pub const ANALYTICS_LOADING_TEXT: &str = "📊 Loading analytics...";
pub const ANALYTICS_REJECTED_TEXT: &str = "❌ Unable to fetch analytics";
pub const ANALYTICS_UNREACHABLE_TEXT: &str = "❌ Analytics service unavailable";

/// Message shown to the user and dismissed without further effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice::Success(message.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice::Error(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Notice::Success(message) | Notice::Error(message) => message,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

/// Result panel bindings: link text, link target and "open" target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
    pub link_text: String,
    pub link_href: String,
    pub open_href: String,
}

impl ResultCard {
    /// All three bindings point at the short URL.
    pub fn for_short_url(short_url: &str) -> Self {
        Self {
            link_text: short_url.to_string(),
            link_href: short_url.to_string(),
            open_href: short_url.to_string(),
        }
    }
}

/// Rendered analytics for one short link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsSummary {
    pub short_code: String,
    pub clicks: i64,
    /// Creation time already formatted for display.
    pub created_at: String,
    pub original_url: Option<String>,
}

/// State of the analytics area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsPanel {
    Loading,
    Ready(AnalyticsSummary),
    /// The service answered with a non-2xx status.
    Rejected,
    /// The service could not be reached or answered garbage.
    Unreachable,
}

impl AnalyticsPanel {
    /// Inline text for the non-data states.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            AnalyticsPanel::Loading => Some(ANALYTICS_LOADING_TEXT),
            AnalyticsPanel::Rejected => Some(ANALYTICS_REJECTED_TEXT),
            AnalyticsPanel::Unreachable => Some(ANALYTICS_UNREACHABLE_TEXT),
            AnalyticsPanel::Ready(_) => None,
        }
    }
}

/// Output bindings used by the flows.
///
/// # Implementations
///
/// - [`TerminalView`] - Coloured terminal output
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait View: Send + Sync {
    /// Shows a transient message.
    fn alert(&self, notice: &Notice);

    /// Reveals the result panel.
    fn show_result(&self, card: &ResultCard);

    /// Replaces the contents of the analytics area.
    fn render_analytics(&self, panel: &AnalyticsPanel);
}
