use super::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Lookup {
  Absent,
  Present(RawRecord),
}

impl Lookup {
  pub(crate) fn kids(&self) -> &[ItemId] {
    match self {
      Self::Absent => &[],
      Self::Present(record) => &record.kids,
    }
  }

  pub(crate) fn present(&self) -> Option<&RawRecord> {
    match self {
      Self::Absent => None,
      Self::Present(record) => Some(record),
    }
  }
}

impl From<Option<RawRecord>> for Lookup {
  fn from(record: Option<RawRecord>) -> Self {
    record.map_or(Self::Absent, Self::Present)
  }
}
