use {
  super::*,
  std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
  },
};

#[derive(Debug, Default)]
pub(crate) struct MockSource {
  delays: HashMap<ItemId, Duration>,
  failures: HashSet<ItemId>,
  fetched: Mutex<Vec<ItemId>>,
  in_flight: AtomicUsize,
  latency: Duration,
  peak: AtomicUsize,
  records: HashMap<ItemId, RawRecord>,
  top_ids: Option<Vec<ItemId>>,
}

#[async_trait]
impl RecordSource for MockSource {
  async fn fetch_record(&self, id: ItemId) -> Result<Lookup, TransportError> {
    let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;

    self.peak.fetch_max(current, Ordering::SeqCst);

    self.fetched.lock().unwrap().push(id);

    let delay = self.delays.get(&id).copied().unwrap_or(self.latency);

    if !delay.is_zero() {
      tokio::time::sleep(delay).await;
    } else {
      tokio::task::yield_now().await;
    }

    self.in_flight.fetch_sub(1, Ordering::SeqCst);

    if self.failures.contains(&id) {
      return Err(Self::unavailable(format!("mock://item/{id}")));
    }

    Ok(Lookup::from(self.records.get(&id).cloned()))
  }

  async fn fetch_top_ids(&self) -> Result<Vec<ItemId>, TransportError> {
    self
      .top_ids
      .clone()
      .ok_or_else(|| Self::unavailable("mock://topstories".into()))
  }
}

impl MockSource {
  pub(crate) fn fetch_count(&self, id: ItemId) -> usize {
    self
      .fetched
      .lock()
      .unwrap()
      .iter()
      .filter(|fetched| **fetched == id)
      .count()
  }

  pub(crate) fn new() -> Self {
    Self {
      top_ids: Some(Vec::new()),
      ..Self::default()
    }
  }

  pub(crate) fn peak_in_flight(&self) -> usize {
    self.peak.load(Ordering::SeqCst)
  }

  pub(crate) fn total_fetches(&self) -> usize {
    self.fetched.lock().unwrap().len()
  }

  fn unavailable(url: String) -> TransportError {
    TransportError::Status {
      status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
      url,
    }
  }

  pub(crate) fn with_delay(mut self, id: ItemId, delay: Duration) -> Self {
    self.delays.insert(id, delay);
    self
  }

  pub(crate) fn with_failure(mut self, id: ItemId) -> Self {
    self.failures.insert(id);
    self
  }

  pub(crate) fn with_latency(mut self, latency: Duration) -> Self {
    self.latency = latency;
    self
  }

  pub(crate) fn with_record(mut self, record: RawRecord) -> Self {
    self.records.insert(record.id, record);
    self
  }

  pub(crate) fn with_top_ids(mut self, ids: &[ItemId]) -> Self {
    self.top_ids = Some(ids.to_vec());
    self
  }

  pub(crate) fn without_top_ids(mut self) -> Self {
    self.top_ids = None;
    self
  }
}
