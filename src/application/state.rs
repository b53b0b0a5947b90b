//! Component state shared between the shorten and copy flows.

/// State carried across operations of one client session.
///
/// Written once per successful shorten, read by the copier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    last_short_url: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently generated short URL, if any.
    pub fn last_short_url(&self) -> Option<&str> {
        self.last_short_url.as_deref()
    }

    pub fn remember_short_url(&mut self, short_url: impl Into<String>) {
        self.last_short_url = Some(short_url.into());
    }
}
