use super::*;

#[derive(Debug, thiserror::Error)]
pub(crate) enum StoryFailure {
  #[error("comment graph contains a cycle through item {id}")]
  Cycle { id: ItemId },
  #[error("frontier level {depth} did not complete within {timeout:?}")]
  LevelTimeout { depth: usize, timeout: Duration },
  #[error("story record is absent")]
  RootAbsent,
  #[error("failed to fetch story record")]
  RootFetch(#[source] TransportError),
  #[error("story did not complete within {timeout:?}")]
  Timeout { timeout: Duration },
}
