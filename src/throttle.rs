use {super::*, tokio::sync::Semaphore};

#[derive(Debug)]
pub(crate) struct Throttle {
  permits: Semaphore,
}

impl Throttle {
  pub(crate) fn new(limit: usize) -> Self {
    Self {
      permits: Semaphore::new(limit.max(1)),
    }
  }

  pub(crate) async fn run<S: RecordSource + ?Sized>(
    &self,
    source: &S,
    id: ItemId,
  ) -> Result<Lookup, TransportError> {
    let _permit = self
      .permits
      .acquire()
      .await
      .map_err(|_| TransportError::ThrottleClosed)?;

    source.fetch_record(id).await
  }
}
