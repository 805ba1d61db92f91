use askbox_model::AskService;

use super::{Controller, ControllerConfig};
use crate::conversation::Transcript;
use crate::service_client::ServiceClient;
use crate::surface::Surface;

/// [`Controller`] builder.
pub struct ControllerBuilder {
    pub(crate) client: ServiceClient,
    pub(crate) config: ControllerConfig,
}

impl ControllerBuilder {
    /// Creates a new builder with the specified answering service.
    #[inline]
    pub fn with_ask_service<A: AskService + 'static>(service: A) -> Self {
        Self {
            client: ServiceClient::new(service),
            config: ControllerConfig::default(),
        }
    }

    /// Replaces the default configuration.
    #[inline]
    pub fn with_config(mut self, config: ControllerConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds a controller rendering to `surface`, with an empty
    /// transcript.
    #[inline]
    pub fn build<S: Surface>(self, surface: S) -> Controller<S> {
        let ControllerBuilder { client, config } = self;
        Controller {
            client,
            transcript: Transcript::with_max_len(config.max_messages),
            config,
            surface,
            next_request_id: 1,
        }
    }
}
