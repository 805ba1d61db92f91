//! An answering service reached over HTTP.
//!
//! Questions are posted as JSON to `{base_url}/ask` and the service is
//! expected to reply with `{"answer": "..."}`.

#[macro_use]
extern crate tracing;

mod config;
mod proto;

use std::sync::Arc;

use askbox_model::{
    AskRequest, AskResponse, AskService, ErrorKind, ServiceError,
};
use reqwest::{Client, StatusCode, header};

pub use config::{HttpServiceConfig, HttpServiceConfigBuilder};
use proto::AnswerBody;

/// Error type for [`HttpAskService`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request could not be sent or the body could not be read.
    #[error("failed to reach the service: {0}")]
    Transport(#[from] reqwest::Error),
    /// The service replied with a non-success status.
    #[error("the service replied with {0}")]
    Status(StatusCode),
    /// The body is not a valid answer payload.
    #[error("invalid answer payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ServiceError for Error {
    #[inline]
    fn kind(&self) -> ErrorKind {
        match self {
            Error::Transport(_) => ErrorKind::Transport,
            Error::Status(_) => ErrorKind::Status,
            Error::Decode(_) => ErrorKind::Decode,
        }
    }
}

/// Answering service reached with a single JSON `POST` per question.
#[derive(Clone, Debug)]
pub struct HttpAskService {
    client: Client,
    config: Arc<HttpServiceConfig>,
}

impl HttpAskService {
    /// Creates a new `HttpAskService` with the given configuration.
    #[inline]
    pub fn new(config: HttpServiceConfig) -> Self {
        Self {
            client: Client::new(),
            config: Arc::new(config),
        }
    }
}

impl AskService for HttpAskService {
    type Error = Error;

    fn ask(
        &self,
        req: &AskRequest,
    ) -> impl Future<Output = Result<AskResponse, Self::Error>> + Send + 'static
    {
        let body = proto::create_body(req);
        let url = self.config.url();
        debug!(%url, history_len = req.history.len(), "posting question");
        let resp_fut = self
            .client
            .post(url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
            .json(&body)
            .send();

        async move {
            let resp = resp_fut.await?;
            let status = resp.status();
            if !status.is_success() {
                return Err(Error::Status(status));
            }

            let bytes = resp.bytes().await?;
            trace!("got answer payload: {} bytes", bytes.len());
            let body: AnswerBody = serde_json::from_slice(&bytes)?;
            Ok(AskResponse {
                answer: body.answer,
            })
        }
    }
}
