use super::*;

#[derive(Debug)]
pub(crate) struct SkippedStory {
  pub(crate) id: ItemId,
  pub(crate) reason: StoryFailure,
}
