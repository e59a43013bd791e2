use super::*;

#[derive(Debug, thiserror::Error)]
pub(crate) enum FatalError {
  #[error("failed to fetch top story ids")]
  TopIds(#[source] TransportError),
}
