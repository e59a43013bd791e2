use super::*;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub(crate) enum CyclePolicy {
  /// Drop the whole story.
  #[default]
  Abort,
  /// Ignore the back-edge and keep the rest of the tree.
  Skip,
}
