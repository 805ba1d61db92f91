use std::fmt::{self, Display};

/// The kind of error that occurred while asking a question.
///
/// Callers typically present every kind the same way, the distinction is
/// kept for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request never reached the service, or the connection broke.
    Transport,
    /// The service replied with a non-success status.
    Status,
    /// The reply could not be decoded as an answer.
    Decode,
    /// Any other errors.
    Other,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Transport => write!(f, "transport error"),
            ErrorKind::Status => write!(f, "bad status"),
            ErrorKind::Decode => write!(f, "decode error"),
            ErrorKind::Other => write!(f, "other error"),
        }
    }
}
