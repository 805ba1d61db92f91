//! A local fake answering service for testing purpose.

mod preset;

use std::error::Error as StdError;
use std::fmt::{self, Debug, Display, Formatter};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use askbox_model::{
    AskRequest, AskResponse, AskService, ErrorKind, ServiceError,
};
use tokio::time::sleep;

pub use preset::*;

#[derive(Debug)]
pub struct Error {
    #[allow(dead_code)]
    message: &'static str,
    kind: ErrorKind,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl StdError for Error {}

impl ServiceError for Error {
    #[inline]
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

#[derive(Default)]
struct Shared {
    next_reply: AtomicUsize,
    requests: Mutex<Vec<AskRequest>>,
}

/// A local fake answering service for testing purpose.
///
/// Before sending requests, you need to setup the script, which is how the
/// service should reply. Replies are consumed in call order, no matter what
/// the request contains. If there are no enough replies in the script, an
/// error will be returned.
///
/// Clones share the script position and the request log, so a test can keep
/// one clone around to inspect what the code under test has sent.
///
/// # Note
///
/// This type is not optimized for production use, requests are cloned
/// into the log. You should only use it for testing.
#[derive(Clone, Default)]
pub struct TestAskService {
    script: Vec<PresetReply>,
    delay: Option<Duration>,
    shared: Arc<Shared>,
}

impl TestAskService {
    #[inline]
    pub fn add_reply(&mut self, reply: PresetReply) {
        self.script.push(reply);
    }

    #[inline]
    pub fn add_answer<S: Into<String>>(&mut self, answer: S) {
        self.add_reply(PresetReply::answer(answer));
    }

    #[inline]
    pub fn add_failure(&mut self) {
        self.add_reply(PresetReply::Failure);
    }

    #[inline]
    pub fn set_delay(&mut self, duration: Duration) {
        self.delay = Some(duration);
    }

    /// Returns all requests received so far, oldest first.
    pub fn requests(&self) -> Vec<AskRequest> {
        self.shared.requests.lock().unwrap().clone()
    }

    /// Returns the number of requests received so far.
    #[inline]
    pub fn request_count(&self) -> usize {
        self.shared.next_reply.load(Ordering::SeqCst)
    }
}

impl AskService for TestAskService {
    type Error = crate::Error;

    fn ask(
        &self,
        req: &AskRequest,
    ) -> impl Future<Output = Result<AskResponse, Self::Error>> + Send + 'static
    {
        let reply_idx = self.shared.next_reply.fetch_add(1, Ordering::SeqCst);
        self.shared.requests.lock().unwrap().push(req.clone());

        let result = match self.script.get(reply_idx) {
            Some(PresetReply::Answer(answer)) => Ok(AskResponse {
                answer: answer.clone(),
            }),
            Some(PresetReply::Failure) => Err(Error {
                message: "preset failure",
                kind: ErrorKind::Transport,
            }),
            None => Err(Error {
                message: "no enough replies",
                kind: ErrorKind::Other,
            }),
        };
        let delay = self.delay.unwrap_or(Duration::from_millis(1));
        async move {
            sleep(delay).await;
            result
        }
    }
}
