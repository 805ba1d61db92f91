use std::fmt::Debug;

/// Builder for [`HttpServiceConfig`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HttpServiceConfigBuilder {
    base_url: String,
    endpoint: Option<String>,
}

impl HttpServiceConfigBuilder {
    /// Creates a builder with the given base URL, e.g.
    /// `http://127.0.0.1:8000`.
    #[inline]
    pub fn with_base_url<S: Into<String>>(base_url: S) -> Self {
        Self {
            base_url: base_url.into(),
            endpoint: None,
        }
    }

    /// Sets a custom endpoint path.
    #[inline]
    pub fn with_endpoint<S: Into<String>>(mut self, endpoint: S) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Builds the configuration.
    #[inline]
    pub fn build(self) -> HttpServiceConfig {
        let endpoint = self.endpoint.unwrap_or_else(|| "/ask".to_string());
        let endpoint = if endpoint.starts_with('/') {
            endpoint
        } else {
            format!("/{endpoint}")
        };
        HttpServiceConfig {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            endpoint,
        }
    }
}

/// Configuration for [`crate::HttpAskService`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HttpServiceConfig {
    pub(crate) base_url: String,
    pub(crate) endpoint: String,
}

impl HttpServiceConfig {
    /// Returns the full URL requests are posted to.
    #[inline]
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, self.endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config =
            HttpServiceConfigBuilder::with_base_url("http://localhost:8000")
                .build();
        assert_eq!(config.url(), "http://localhost:8000/ask");
    }

    #[test]
    fn test_normalized_url() {
        let config =
            HttpServiceConfigBuilder::with_base_url("http://localhost:8000/")
                .with_endpoint("api/ask")
                .build();
        assert_eq!(config.url(), "http://localhost:8000/api/ask");
    }
}
