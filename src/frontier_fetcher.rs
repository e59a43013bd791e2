use super::*;

pub(crate) struct FrontierFetcher<'a, S: ?Sized> {
  config: &'a FetchConfig,
  source: &'a S,
  throttle: &'a Throttle,
}

impl<'a, S: RecordSource + ?Sized> FrontierFetcher<'a, S> {
  pub(crate) async fn fetch(
    &self,
    roots: &[ItemId],
  ) -> Result<FlatRecordMap, StoryFailure> {
    let mut map = FlatRecordMap::default();

    let mut seen = HashSet::new();

    let mut frontier = roots
      .iter()
      .copied()
      .filter(|id| seen.insert(*id))
      .collect::<Vec<_>>();

    let mut depth = 0;

    while !frontier.is_empty() {
      for (id, lookup) in self.fetch_level(&frontier, depth).await? {
        map.insert(id, lookup);
      }

      let mut next = Vec::new();

      let mut queued = HashSet::new();

      for &parent in &frontier {
        let kids = map.get(parent).map(Lookup::kids).unwrap_or_default().to_vec();

        for kid in kids {
          if map.contains(kid) {
            if map.reaches(kid, parent) {
              match self.config.cycle_policy {
                CyclePolicy::Abort => return Err(StoryFailure::Cycle { id: kid }),
                CyclePolicy::Skip => {
                  tracing::warn!(parent, kid, "skipping cyclic child reference");
                }
              }
            } else {
              tracing::trace!(parent, kid, "child already fetched");
            }

            continue;
          }

          if queued.insert(kid) {
            next.push(kid);
          }
        }
      }

      tracing::trace!(depth, fetched = frontier.len(), next = next.len(), "frontier level complete");

      frontier = next;

      depth += 1;
    }

    Ok(map)
  }

  async fn fetch_level(
    &self,
    frontier: &[ItemId],
    depth: usize,
  ) -> Result<Vec<(ItemId, Lookup)>, StoryFailure> {
    let level = stream::iter(frontier.iter().copied())
      .map(|id| async move {
        let lookup = match self.throttle.run(self.source, id).await {
          Ok(lookup) => lookup,
          Err(error) => {
            tracing::warn!(id, %error, "fetch failed, treating item as absent");
            Lookup::Absent
          }
        };

        (id, lookup)
      })
      .buffer_unordered(self.config.concurrency.max(1))
      .collect::<Vec<_>>();

    match self.config.level_timeout {
      Some(timeout) => tokio::time::timeout(timeout, level)
        .await
        .map_err(|_| StoryFailure::LevelTimeout { depth, timeout }),
      None => Ok(level.await),
    }
  }

  pub(crate) fn new(
    source: &'a S,
    throttle: &'a Throttle,
    config: &'a FetchConfig,
  ) -> Self {
    Self {
      config,
      source,
      throttle,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  async fn fetch(
    source: &MockSource,
    config: &FetchConfig,
    roots: &[ItemId],
  ) -> Result<FlatRecordMap, StoryFailure> {
    let throttle = Throttle::new(config.concurrency);

    FrontierFetcher::new(source, &throttle, config)
      .fetch(roots)
      .await
  }

  #[tokio::test]
  async fn empty_roots_fetch_nothing() {
    let source = MockSource::new();

    let map = fetch(&source, &FetchConfig::default(), &[]).await.unwrap();

    assert!(map.is_empty());
    assert_eq!(source.total_fetches(), 0);
  }

  #[tokio::test]
  async fn collects_every_reachable_record() {
    let source = MockSource::new()
      .with_record(RawRecord::comment(1, &[2, 3]))
      .with_record(RawRecord::comment(2, &[4]))
      .with_record(RawRecord::comment(3, &[]))
      .with_record(RawRecord::comment(4, &[5]))
      .with_record(RawRecord::comment(5, &[]))
      .with_record(RawRecord::comment(99, &[]));

    let map = fetch(&source, &FetchConfig::default(), &[1]).await.unwrap();

    assert_eq!(map.ids(), HashSet::from([1, 2, 3, 4, 5]));
  }

  #[tokio::test]
  async fn absent_records_contribute_no_children() {
    let source = MockSource::new()
      .with_record(RawRecord::comment(1, &[2, 3]))
      .with_record(RawRecord::comment(2, &[]));

    let map = fetch(&source, &FetchConfig::default(), &[1]).await.unwrap();

    assert_eq!(map.get(3), Some(&Lookup::Absent));
    assert_eq!(map.len(), 3);
  }

  #[tokio::test]
  async fn transport_failures_degrade_to_absent() {
    let source = MockSource::new()
      .with_record(RawRecord::comment(1, &[2, 3]))
      .with_record(RawRecord::comment(2, &[4]))
      .with_record(RawRecord::comment(3, &[]))
      .with_record(RawRecord::comment(4, &[]))
      .with_failure(2);

    let map = fetch(&source, &FetchConfig::default(), &[1]).await.unwrap();

    assert_eq!(map.get(2), Some(&Lookup::Absent));
    assert!(map.present(3).is_some());
    assert!(!map.contains(4));
  }

  #[tokio::test]
  async fn shared_children_are_fetched_once() {
    let source = MockSource::new()
      .with_record(RawRecord::comment(1, &[3]))
      .with_record(RawRecord::comment(2, &[3]))
      .with_record(RawRecord::comment(3, &[]));

    let map = fetch(&source, &FetchConfig::default(), &[1, 2, 1]).await.unwrap();

    assert_eq!(map.ids(), HashSet::from([1, 2, 3]));
    assert_eq!(source.fetch_count(1), 1);
    assert_eq!(source.fetch_count(3), 1);
  }

  #[tokio::test]
  async fn cycles_abort_by_default() {
    let source = MockSource::new()
      .with_record(RawRecord::comment(1, &[2]))
      .with_record(RawRecord::comment(2, &[3]))
      .with_record(RawRecord::comment(3, &[1]));

    let error = fetch(&source, &FetchConfig::default(), &[1])
      .await
      .unwrap_err();

    assert!(matches!(error, StoryFailure::Cycle { id: 1 }));
  }

  #[tokio::test]
  async fn self_references_are_cycles() {
    let source = MockSource::new().with_record(RawRecord::comment(7, &[7]));

    let error = fetch(&source, &FetchConfig::default(), &[7])
      .await
      .unwrap_err();

    assert!(matches!(error, StoryFailure::Cycle { id: 7 }));
  }

  #[tokio::test]
  async fn cycles_closing_through_a_second_parent_abort() {
    let source = MockSource::new()
      .with_record(RawRecord::comment(1, &[2, 3]))
      .with_record(RawRecord::comment(2, &[4]))
      .with_record(RawRecord::comment(3, &[4]))
      .with_record(RawRecord::comment(4, &[3]));

    let error = fetch(&source, &FetchConfig::default(), &[1])
      .await
      .unwrap_err();

    assert!(matches!(error, StoryFailure::Cycle { id: 3 }));
  }

  #[tokio::test]
  async fn shared_descendants_are_not_cycles() {
    let source = MockSource::new()
      .with_record(RawRecord::comment(1, &[2, 3]))
      .with_record(RawRecord::comment(2, &[3]))
      .with_record(RawRecord::comment(3, &[4]))
      .with_record(RawRecord::comment(4, &[]));

    let map = fetch(&source, &FetchConfig::default(), &[1]).await.unwrap();

    assert_eq!(map.ids(), HashSet::from([1, 2, 3, 4]));
    assert_eq!(source.fetch_count(3), 1);
  }

  #[tokio::test]
  async fn cycles_terminate_when_skipped() {
    let source = MockSource::new()
      .with_record(RawRecord::comment(1, &[2]))
      .with_record(RawRecord::comment(2, &[1, 3]))
      .with_record(RawRecord::comment(3, &[]));

    let config = FetchConfig {
      cycle_policy: CyclePolicy::Skip,
      ..FetchConfig::default()
    };

    let map = fetch(&source, &config, &[1]).await.unwrap();

    assert_eq!(map.ids(), HashSet::from([1, 2, 3]));
    assert_eq!(source.fetch_count(1), 1);
  }

  #[tokio::test]
  async fn in_flight_fetches_respect_concurrency_bound() {
    let kids = (2..50).collect::<Vec<_>>();

    let mut source = MockSource::new()
      .with_latency(Duration::from_millis(5))
      .with_record(RawRecord::comment(1, &kids));

    for &kid in &kids {
      source = source.with_record(RawRecord::comment(kid, &[kid + 100]));
      source = source.with_record(RawRecord::comment(kid + 100, &[]));
    }

    let config = FetchConfig {
      concurrency: 4,
      ..FetchConfig::default()
    };

    let map = fetch(&source, &config, &[1]).await.unwrap();

    assert_eq!(map.len(), 1 + kids.len() * 2);
    assert!(source.peak_in_flight() <= 4);
    assert!(source.peak_in_flight() > 1);
  }

  #[tokio::test]
  async fn slow_levels_time_out() {
    let source = MockSource::new()
      .with_record(RawRecord::comment(1, &[2]))
      .with_record(RawRecord::comment(2, &[]))
      .with_delay(2, Duration::from_millis(500));

    let config = FetchConfig {
      level_timeout: Some(Duration::from_millis(50)),
      ..FetchConfig::default()
    };

    let error = fetch(&source, &config, &[1]).await.unwrap_err();

    assert!(matches!(error, StoryFailure::LevelTimeout { depth: 1, .. }));
  }
}
