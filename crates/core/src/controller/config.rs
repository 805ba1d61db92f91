/// Texts rendered by the controller itself.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Notices {
    /// System message shown after the transcript has been reset.
    pub new_conversation: String,
    /// Placeholder shown while waiting for an answer.
    pub loading: String,
    /// Shown when a request fails.
    pub request_failed: String,
}

impl Default for Notices {
    fn default() -> Self {
        Self {
            new_conversation: "🔄 New conversation started".to_owned(),
            loading: "⏳ Loading...".to_owned(),
            request_failed: "❌ Server error".to_owned(),
        }
    }
}

/// Builder for [`ControllerConfig`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ControllerConfigBuilder {
    max_messages: Option<usize>,
    notices: Notices,
}

impl ControllerConfigBuilder {
    /// Creates a builder with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many messages the transcript may hold before it is reset.
    /// Values below 1 are raised to 1.
    #[inline]
    pub fn with_max_messages(mut self, max_messages: usize) -> Self {
        self.max_messages = Some(max_messages);
        self
    }

    /// Sets the system message shown after a reset.
    #[inline]
    pub fn with_new_conversation_notice<S: Into<String>>(
        mut self,
        notice: S,
    ) -> Self {
        self.notices.new_conversation = notice.into();
        self
    }

    /// Sets the placeholder shown while waiting for an answer.
    #[inline]
    pub fn with_loading_notice<S: Into<String>>(mut self, notice: S) -> Self {
        self.notices.loading = notice.into();
        self
    }

    /// Sets the text shown when a request fails.
    #[inline]
    pub fn with_request_failed_notice<S: Into<String>>(
        mut self,
        notice: S,
    ) -> Self {
        self.notices.request_failed = notice.into();
        self
    }

    /// Builds the configuration.
    #[inline]
    pub fn build(self) -> ControllerConfig {
        ControllerConfig {
            max_messages: self.max_messages.unwrap_or(20).max(1),
            notices: self.notices,
        }
    }
}

/// Configuration for [`super::Controller`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ControllerConfig {
    pub(crate) max_messages: usize,
    pub(crate) notices: Notices,
}

impl ControllerConfig {
    /// Returns the maximum transcript length.
    #[inline]
    pub fn max_messages(&self) -> usize {
        self.max_messages
    }

    /// Returns the notices.
    #[inline]
    pub fn notices(&self) -> &Notices {
        &self.notices
    }
}

impl Default for ControllerConfig {
    #[inline]
    fn default() -> Self {
        ControllerConfigBuilder::new().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ControllerConfig::default();
        assert_eq!(config.max_messages(), 20);
        assert_eq!(config.notices(), &Notices::default());
    }

    #[test]
    fn test_max_messages_is_at_least_one() {
        let config = ControllerConfigBuilder::new().with_max_messages(0).build();
        assert_eq!(config.max_messages(), 1);
    }
}
