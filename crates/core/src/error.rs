use askbox_model::{ErrorKind, ServiceError};

/// A question could not be answered.
///
/// Network failures and unparsable replies end up here alike. The kind is
/// kept for diagnostics only.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("request failed ({kind}): {message}")]
pub struct RequestFailure {
    kind: ErrorKind,
    message: String,
}

impl RequestFailure {
    #[inline]
    pub(crate) fn from_service_error(err: &dyn ServiceError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }

    /// Returns the kind of the underlying service error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the message of the underlying service error.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}
