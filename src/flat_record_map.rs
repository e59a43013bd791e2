use super::*;

#[derive(Debug, Default)]
pub(crate) struct FlatRecordMap {
  records: HashMap<ItemId, Lookup>,
}

impl FlatRecordMap {
  pub(crate) fn contains(&self, id: ItemId) -> bool {
    self.records.contains_key(&id)
  }

  pub(crate) fn get(&self, id: ItemId) -> Option<&Lookup> {
    self.records.get(&id)
  }

  #[cfg(test)]
  pub(crate) fn ids(&self) -> HashSet<ItemId> {
    self.records.keys().copied().collect()
  }

  /// Records the result for `id`. A present record is never replaced by an
  /// absent one.
  pub(crate) fn insert(&mut self, id: ItemId, lookup: Lookup) {
    match (self.records.get(&id), &lookup) {
      (Some(Lookup::Present(_)), Lookup::Absent) => {}
      _ => {
        self.records.insert(id, lookup);
      }
    }
  }

  #[cfg(test)]
  pub(crate) fn is_empty(&self) -> bool {
    self.records.is_empty()
  }

  pub(crate) fn len(&self) -> usize {
    self.records.len()
  }

  pub(crate) fn present(&self, id: ItemId) -> Option<&RawRecord> {
    self.get(id).and_then(Lookup::present)
  }

  /// Whether `to` can be reached from `from` by following the child lists of
  /// records already in the map. Every ID reaches itself.
  pub(crate) fn reaches(&self, from: ItemId, to: ItemId) -> bool {
    let mut visited = HashSet::from([from]);

    let mut stack = vec![from];

    while let Some(id) = stack.pop() {
      if id == to {
        return true;
      }

      for &kid in self.get(id).map(Lookup::kids).unwrap_or_default() {
        if visited.insert(kid) {
          stack.push(kid);
        }
      }
    }

    false
  }
}
