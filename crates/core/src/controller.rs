mod builder;
mod config;

use askbox_model::{AskRequest, Message, Role};

pub use builder::ControllerBuilder;
pub use config::{ControllerConfig, ControllerConfigBuilder, Notices};

use crate::RequestFailure;
use crate::conversation::{PushOutcome, Transcript};
use crate::service_client::ServiceClient;
use crate::surface::{Entry, EntryKind, NodeId, Surface};

/// What happened to a submitted question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// The input was empty after trimming, nothing happened.
    Ignored,
    /// The question overflowed the transcript and a new conversation was
    /// started. No request was sent.
    Reset,
    /// The service answered, the answer is now in the transcript.
    Answered,
    /// The request failed. Only the question was kept in the transcript.
    Failed(RequestFailure),
    /// Another submission was still in flight, the input was rejected.
    Busy,
}

/// Owns a conversation and keeps its surface in sync with it.
///
/// Each submission runs to completion before the next one may start, which
/// `&mut self` enforces. Hosts that accept input concurrently need to put
/// the controller behind a lock and decide whether overlapping input waits
/// or gets rejected.
pub struct Controller<S> {
    client: ServiceClient,
    config: ControllerConfig,
    transcript: Transcript,
    surface: S,
    next_request_id: u64,
}

impl<S: Surface> Controller<S> {
    /// Returns the current transcript.
    #[inline]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Returns the surface.
    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the surface mutably, e.g. to draw host-specific chrome.
    #[inline]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Submits a question typed by the user.
    ///
    /// The input is trimmed first, empty input is ignored. Otherwise the
    /// question is recorded and rendered, and unless the transcript
    /// overflows, exactly one request carrying the question and the
    /// transcript is sent. Failures are rendered but never recorded.
    ///
    /// An answer that no longer fits starts a new conversation holding
    /// only that answer, so the transcript never exceeds its maximum.
    pub async fn submit_question(&mut self, raw_input: &str) -> Submission {
        let question = raw_input.trim();
        if question.is_empty() {
            trace!("ignoring empty input");
            return Submission::Ignored;
        }

        self.surface.clear_input();
        self.render(EntryKind::Message, Role::User, question);
        if self.transcript.push(Message::user(question))
            == PushOutcome::Overflowed
        {
            self.start_new_conversation();
            return Submission::Reset;
        }

        let loading_text = self.config.notices.loading.clone();
        let loading =
            self.render(EntryKind::Loading, Role::Assistant, &loading_text);

        let request = AskRequest {
            question: question.to_owned(),
            history: self.transcript.messages().to_vec(),
        };
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        debug!(request_id, history_len = request.history.len(), "asking");

        let result = self.client.ask(request, request_id).await;
        self.surface.remove(loading);

        match result {
            Ok(resp) => {
                let answer = Message::assistant(resp.answer);
                if self.transcript.push(answer.clone())
                    == PushOutcome::Overflowed
                {
                    // Only reachable once failed questions have left
                    // unanswered user turns behind.
                    self.start_new_conversation();
                    self.transcript.push(answer.clone());
                }
                self.render(
                    EntryKind::Message,
                    Role::Assistant,
                    answer.content(),
                );
                Submission::Answered
            }
            Err(err) => {
                warn!(request_id, kind = %err.kind(), "request failed: {err}");
                let error_text = self.config.notices.request_failed.clone();
                self.render(EntryKind::Error, Role::Assistant, &error_text);
                Submission::Failed(RequestFailure::from_service_error(&*err))
            }
        }
    }

    fn start_new_conversation(&mut self) {
        info!(
            max_messages = self.transcript.max_len(),
            "transcript is full, starting a new conversation"
        );
        // The notice is shown only, it is never sent as history.
        let notice = self.config.notices.new_conversation.clone();
        self.transcript.clear();
        self.surface.clear();
        self.render(EntryKind::Notice, Role::System, &notice);
    }

    fn render(&mut self, kind: EntryKind, role: Role, content: &str) -> NodeId {
        let node = self.surface.append(Entry {
            kind,
            role,
            content,
        });
        self.surface.scroll_to_end();
        node
    }
}
