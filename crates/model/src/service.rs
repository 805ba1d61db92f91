use std::error::Error;

use crate::error::ErrorKind;
use crate::request::AskRequest;
use crate::response::AskResponse;

/// The error type for an answering service.
pub trait ServiceError: Error + Send + Sync + 'static {
    /// Returns the kind of this error.
    fn kind(&self) -> ErrorKind;
}

/// A type that represents a remote answering service.
///
/// Once the service is created, it should behave like a stateless object.
/// It can still have internal state, but callers should not rely on it,
/// and the service should be prepared for being dropped anytime.
pub trait AskService: Send + Sync {
    /// The error type that may be returned by the service.
    type Error: ServiceError;

    /// Sends a question and waits for the complete answer.
    ///
    /// Exactly one request is issued per call. Implementations must not
    /// retry on their own.
    fn ask(
        &self,
        req: &AskRequest,
    ) -> impl Future<Output = Result<AskResponse, Self::Error>> + Send + 'static;
}
