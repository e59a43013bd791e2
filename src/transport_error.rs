#[derive(Debug, thiserror::Error)]
pub(crate) enum TransportError {
  #[error("failed to decode response from {url}")]
  Decode {
    url: String,
    #[source]
    source: serde_json::Error,
  },
  #[error("request to {url} failed")]
  Request {
    url: String,
    #[source]
    source: reqwest::Error,
  },
  #[error("request to {url} returned status {status}")]
  Status {
    status: reqwest::StatusCode,
    url: String,
  },
  #[error("fetch throttle was closed")]
  ThrottleClosed,
}

impl TransportError {
  pub(crate) fn is_retryable(&self) -> bool {
    match self {
      Self::Decode { .. } | Self::ThrottleClosed => false,
      Self::Request { source, .. } => {
        source.is_timeout() || source.is_connect() || source.is_request()
      }
      Self::Status { status, .. } => {
        status.is_server_error()
          || *status == reqwest::StatusCode::TOO_MANY_REQUESTS
      }
    }
  }
}
