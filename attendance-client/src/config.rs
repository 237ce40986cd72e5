//! Client configuration

/// Configuration for connecting to the attendance backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8000")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Seed anti-forgery token; otherwise captured from the
    /// `csrftoken` response cookie on the first fetch
    pub csrf_token: Option<String>,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
            csrf_token: None,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the anti-forgery token
    pub fn with_csrf_token(mut self, token: impl Into<String>) -> Self {
        self.csrf_token = Some(token.into());
        self
    }

    /// Create an HTTP gateway from this configuration
    pub fn build_gateway(&self) -> super::HttpGateway {
        super::HttpGateway::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8000")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let config = ClientConfig::new("https://gym.example.com")
            .with_timeout(10)
            .with_csrf_token("abc123");
        assert_eq!(config.base_url, "https://gym.example.com");
        assert_eq!(config.timeout, 10);
        assert_eq!(config.csrf_token.as_deref(), Some("abc123"));
    }
}
