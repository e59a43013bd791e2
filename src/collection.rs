use super::*;

#[derive(Debug, Default)]
pub(crate) struct Collection {
  pub(crate) skipped: Vec<SkippedStory>,
  pub(crate) stories: Vec<StoryNode>,
}

impl Collection {
  pub(crate) fn summary(&self) -> String {
    let collected = self.stories.len();

    match self.skipped.len() {
      0 => format!("collected {collected} stories"),
      skipped => format!("collected {collected} stories, skipped {skipped}"),
    }
  }
}
