use std::sync::Arc;

use askbox_core::surface::Surface;
use askbox_core::{
    Controller, ControllerBuilder, ControllerConfig, Submission,
};
use askbox_model::{AskService, Message};
use tokio::sync::Mutex;

/// A session builder.
///
/// See [`Session`].
pub struct SessionBuilder {
    controller_builder: ControllerBuilder,
}

impl SessionBuilder {
    /// Creates a session builder with a specified answering service.
    pub fn with_ask_service<A: AskService + 'static>(service: A) -> Self {
        let controller_builder = ControllerBuilder::with_ask_service(service);
        Self { controller_builder }
    }

    /// Sets the controller configuration.
    #[inline]
    pub fn with_config(mut self, config: ControllerConfig) -> Self {
        self.controller_builder = self.controller_builder.with_config(config);
        self
    }

    /// Builds a new session rendering to `surface`.
    pub fn build<S: Surface>(self, surface: S) -> Session<S> {
        let controller = self.controller_builder.build(surface);
        Session {
            controller: Arc::new(Mutex::new(controller)),
        }
    }
}

/// A chat session, like a window that displays messages and has an input
/// box.
///
/// The session owns a controller and guards it, so that only one question
/// is in flight at any time. Clones share the same conversation.
pub struct Session<S> {
    controller: Arc<Mutex<Controller<S>>>,
}

impl<S> Clone for Session<S> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            controller: Arc::clone(&self.controller),
        }
    }
}

impl<S: Surface> Session<S> {
    /// Submits a question, waiting for any in-flight question first.
    ///
    /// Overlapping calls are served in the order they were made.
    pub async fn submit(&self, input: &str) -> Submission {
        let mut controller = self.controller.lock().await;
        controller.submit_question(input).await
    }

    /// Submits a question unless another one is still in flight, in which
    /// case the input is rejected with [`Submission::Busy`].
    pub async fn try_submit(&self, input: &str) -> Submission {
        let Ok(mut controller) = self.controller.try_lock() else {
            debug!("rejecting input, a question is in flight");
            return Submission::Busy;
        };
        controller.submit_question(input).await
    }

    /// Returns `true` if a question is in flight.
    #[inline]
    pub fn is_busy(&self) -> bool {
        self.controller.try_lock().is_err()
    }

    /// Returns a snapshot of the transcript.
    pub async fn transcript(&self) -> Vec<Message> {
        self.controller.lock().await.transcript().messages().to_vec()
    }

    /// Runs `f` with the surface, once no question is in flight.
    pub async fn with_surface<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        let controller = self.controller.lock().await;
        f(controller.surface())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use askbox_core::surface::MemorySurface;
    use askbox_model::Role;
    use askbox_test_service::TestAskService;
    use tokio::task::yield_now;

    use super::*;

    fn slow_service(answers: &[&str]) -> TestAskService {
        let mut service = TestAskService::default();
        for answer in answers {
            service.add_answer(*answer);
        }
        service.set_delay(Duration::from_millis(20));
        service
    }

    #[tokio::test]
    async fn test_overlapping_submissions_are_queued() {
        let service = slow_service(&["first answer", "second answer"]);
        let session = SessionBuilder::with_ask_service(service.clone())
            .build(MemorySurface::new());

        let (first, second) = tokio::join!(session.submit("first"), async {
            yield_now().await;
            session.submit("second").await
        });
        assert_eq!(first, Submission::Answered);
        assert_eq!(second, Submission::Answered);

        assert_eq!(
            session.transcript().await,
            vec![
                Message::user("first"),
                Message::assistant("first answer"),
                Message::user("second"),
                Message::assistant("second answer"),
            ]
        );
        // The second request saw the complete first exchange.
        assert_eq!(service.requests()[1].history.len(), 3);
        let contents = session
            .with_surface(|surface| {
                surface
                    .contents()
                    .into_iter()
                    .map(|(role, content)| (role, content.to_owned()))
                    .collect::<Vec<_>>()
            })
            .await;
        assert_eq!(contents.len(), 4);
        assert_eq!(contents[3], (Role::Assistant, "second answer".to_owned()));
    }

    #[tokio::test]
    async fn test_try_submit_rejects_while_busy() {
        let service = slow_service(&["first answer"]);
        let session = SessionBuilder::with_ask_service(service.clone())
            .build(MemorySurface::new());

        let (first, second) = tokio::join!(session.submit("first"), async {
            yield_now().await;
            assert!(session.is_busy());
            session.try_submit("second").await
        });
        assert_eq!(first, Submission::Answered);
        assert_eq!(second, Submission::Busy);

        assert!(!session.is_busy());
        assert_eq!(service.request_count(), 1);
        assert_eq!(session.transcript().await.len(), 2);
    }

    #[tokio::test]
    async fn test_try_submit_when_idle() {
        let service = slow_service(&["Hi"]);
        let session = SessionBuilder::with_ask_service(service)
            .build(MemorySurface::new());

        assert_eq!(session.try_submit("  ").await, Submission::Ignored);
        assert_eq!(session.try_submit("Hello").await, Submission::Answered);
        assert_eq!(
            session.transcript().await,
            vec![Message::user("Hello"), Message::assistant("Hi")]
        );
    }
}
