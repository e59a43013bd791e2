use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub(crate) struct StoryNode {
  pub(crate) author: Option<String>,
  pub(crate) comments: Vec<CommentNode>,
  pub(crate) descendants: u64,
  pub(crate) id: ItemId,
  pub(crate) score: u64,
  pub(crate) text: Option<String>,
  pub(crate) time: i64,
  pub(crate) title: String,
  pub(crate) url: Option<String>,
}

impl StoryNode {
  pub(crate) fn new(record: RawRecord, comments: Vec<CommentNode>) -> Self {
    Self {
      author: record.by,
      comments,
      descendants: record.descendants.unwrap_or_default(),
      id: record.id,
      score: record.score.unwrap_or_default(),
      text: record.text,
      time: record.time,
      title: record.title.unwrap_or_default(),
      url: record.url.filter(|url| !url.is_empty()),
    }
  }

  pub(crate) fn link(&self) -> String {
    self
      .url
      .clone()
      .unwrap_or_else(|| format!("https://news.ycombinator.com/item?id={}", self.id))
  }
}
