use super::*;

/// Point lookups against the remote item store.
///
/// Implementations report a missing item as `Ok(Lookup::Absent)`; an `Err`
/// always means the lookup itself failed.
#[async_trait]
pub(crate) trait RecordSource: Send + Sync {
  async fn fetch_record(&self, id: ItemId) -> Result<Lookup, TransportError>;

  async fn fetch_top_ids(&self) -> Result<Vec<ItemId>, TransportError>;
}
