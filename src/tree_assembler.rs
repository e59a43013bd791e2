use {super::*, std::mem};

pub(crate) struct TreeAssembler<'a> {
  map: &'a FlatRecordMap,
}

struct Slot {
  children: Vec<usize>,
  id: ItemId,
  node: Option<CommentNode>,
  parent: Option<usize>,
}

impl Slot {
  fn new(record: &RawRecord, parent: Option<usize>) -> Self {
    Self {
      children: Vec::new(),
      id: record.id,
      node: Some(CommentNode::from(record)),
      parent,
    }
  }
}

impl<'a> TreeAssembler<'a> {
  pub(crate) fn assemble(&self, roots: &[ItemId]) -> Vec<CommentNode> {
    let mut slots = Vec::new();

    let mut root_slots = Vec::new();

    for &id in roots {
      if let Some(record) = self.map.present(id) {
        root_slots.push(slots.len());
        slots.push(Slot::new(record, None));
      }
    }

    let mut stack = root_slots.clone();

    while let Some(index) = stack.pop() {
      let Some(record) = self.map.present(slots[index].id) else {
        continue;
      };

      for &kid in &record.kids {
        let Some(child) = self.map.present(kid) else {
          continue;
        };

        if Self::on_path(&slots, index, kid) {
          tracing::debug!(parent = record.id, kid, "not materializing back-edge");
          continue;
        }

        let child_index = slots.len();

        slots.push(Slot::new(child, Some(index)));
        slots[index].children.push(child_index);

        stack.push(child_index);
      }
    }

    // Children are always pushed after their parent, so walking backwards
    // finishes every subtree before the node that owns it.
    for index in (0..slots.len()).rev() {
      let children = mem::take(&mut slots[index].children)
        .into_iter()
        .filter_map(|child| slots[child].node.take())
        .collect::<Vec<_>>();

      if let Some(node) = slots[index].node.as_mut() {
        node.children = children;
      }
    }

    root_slots
      .into_iter()
      .filter_map(|index| slots[index].node.take())
      .collect()
  }

  pub(crate) fn new(map: &'a FlatRecordMap) -> Self {
    Self { map }
  }

  fn on_path(slots: &[Slot], from: usize, id: ItemId) -> bool {
    let mut current = Some(from);

    while let Some(index) = current {
      if slots[index].id == id {
        return true;
      }

      current = slots[index].parent;
    }

    false
  }
}
