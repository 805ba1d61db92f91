use std::pin::Pin;
use std::sync::Arc;

use askbox_model::{AskRequest, AskResponse, AskService, ServiceError};
use tracing::Instrument;

type AskResult = Result<AskResponse, Box<dyn ServiceError>>;
type BoxedAskFuture = Pin<Box<dyn Future<Output = AskResult> + Send>>;
type HandlerFn = Arc<dyn Fn(AskRequest, u64) -> BoxedAskFuture + Send + Sync>;

/// A wrapper around an answering service that provides a type-erased
/// interface for the controller.
#[derive(Clone)]
pub struct ServiceClient {
    handler_fn: HandlerFn,
}

impl ServiceClient {
    #[inline]
    pub fn new<S: AskService + 'static>(service: S) -> Self {
        // We have to erase the type `S`, since the controller is generic
        // over its surface only.
        let handler_fn: HandlerFn = Arc::new(move |req, request_id| {
            let fut = service.ask(&req);
            Box::pin(
                async move {
                    trace!("sending a request: {:?}", req);
                    // Failures are reported by the caller, which knows
                    // what to do with them.
                    match fut.await {
                        Ok(resp) => {
                            trace!("got an answer: {} chars", resp.answer.len());
                            Ok(resp)
                        }
                        Err(err) => Err(Box::new(err) as Box<dyn ServiceError>),
                    }
                }
                .instrument(debug_span!("ask", request_id)),
            )
        });
        Self { handler_fn }
    }

    /// Sends a request and waits for the answer.
    ///
    /// # Cancel safety
    ///
    /// This method is cancel safe, dropping the future abandons the
    /// request.
    #[inline]
    pub async fn ask(&self, req: AskRequest, request_id: u64) -> AskResult {
        (self.handler_fn)(req, request_id).await
    }
}
