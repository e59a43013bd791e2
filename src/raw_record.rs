use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub(crate) struct RawRecord {
  pub(crate) by: Option<String>,
  #[serde(default)]
  pub(crate) dead: bool,
  #[serde(default)]
  pub(crate) deleted: bool,
  pub(crate) descendants: Option<u64>,
  pub(crate) id: ItemId,
  #[serde(default)]
  pub(crate) kids: Vec<ItemId>,
  pub(crate) score: Option<u64>,
  pub(crate) text: Option<String>,
  pub(crate) time: i64,
  pub(crate) title: Option<String>,
  pub(crate) url: Option<String>,
}

#[cfg(test)]
impl RawRecord {
  pub(crate) fn comment(id: ItemId, kids: &[ItemId]) -> Self {
    Self {
      by: Some(format!("user{id}")),
      dead: false,
      deleted: false,
      descendants: None,
      id,
      kids: kids.to_vec(),
      score: None,
      text: Some(format!("comment {id}")),
      time: 1_700_000_000 + i64::try_from(id).unwrap_or_default(),
      title: None,
      url: None,
    }
  }

  pub(crate) fn story(id: ItemId, kids: &[ItemId]) -> Self {
    Self {
      descendants: Some(u64::try_from(kids.len()).unwrap_or_default()),
      score: Some(100),
      text: None,
      title: Some(format!("Story {id}")),
      url: Some(format!("https://example.com/{id}")),
      ..Self::comment(id, kids)
    }
  }
}
