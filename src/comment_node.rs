use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub(crate) struct CommentNode {
  pub(crate) author: Option<String>,
  pub(crate) children: Vec<CommentNode>,
  pub(crate) dead: bool,
  pub(crate) deleted: bool,
  pub(crate) id: ItemId,
  pub(crate) text: Option<String>,
  pub(crate) time: i64,
}

impl From<&RawRecord> for CommentNode {
  fn from(record: &RawRecord) -> Self {
    Self {
      author: record.by.clone(),
      children: Vec::new(),
      dead: record.dead,
      deleted: record.deleted,
      id: record.id,
      text: record.text.clone(),
      time: record.time,
    }
  }
}

impl CommentNode {
  pub(crate) fn len(&self) -> usize {
    1 + self.children.iter().map(Self::len).sum::<usize>()
  }
}
