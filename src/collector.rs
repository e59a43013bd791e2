use super::*;

pub(crate) struct Collector<S: ?Sized> {
  config: FetchConfig,
  source: Arc<S>,
  throttle: Throttle,
}

impl<S: RecordSource + ?Sized> Collector<S> {
  pub(crate) async fn build_story(
    &self,
    id: ItemId,
  ) -> Result<StoryNode, StoryFailure> {
    let build = self.build_story_unbounded(id);

    match self.config.story_timeout {
      Some(timeout) => tokio::time::timeout(timeout, build)
        .await
        .map_err(|_| StoryFailure::Timeout { timeout })?,
      None => build.await,
    }
  }

  async fn build_story_unbounded(
    &self,
    id: ItemId,
  ) -> Result<StoryNode, StoryFailure> {
    let lookup = self
      .throttle
      .run(self.source.as_ref(), id)
      .await
      .map_err(StoryFailure::RootFetch)?;

    let Lookup::Present(record) = lookup else {
      return Err(StoryFailure::RootAbsent);
    };

    let map =
      FrontierFetcher::new(self.source.as_ref(), &self.throttle, &self.config)
        .fetch(&record.kids)
        .await?;

    let comments = TreeAssembler::new(&map).assemble(&record.kids);

    tracing::info!(
      id,
      fetched = map.len(),
      comments = comments.iter().map(CommentNode::len).sum::<usize>(),
      "collected story"
    );

    Ok(StoryNode::new(record, comments))
  }

  pub(crate) async fn fetch_all(
    &self,
    limit: Option<usize>,
  ) -> Result<Collection, FatalError> {
    let top_ids = self
      .source
      .fetch_top_ids()
      .await
      .map_err(FatalError::TopIds)?;

    let mut seen = HashSet::new();

    let ids = top_ids
      .into_iter()
      .filter(|id| seen.insert(*id))
      .take(limit.unwrap_or(usize::MAX))
      .collect::<Vec<_>>();

    tracing::info!(stories = ids.len(), "collecting stories");

    let results = join_all(
      ids
        .iter()
        .map(|&id| async move { (id, self.build_story(id).await) }),
    )
    .await;

    let mut collection = Collection::default();

    for (id, result) in results {
      match result {
        Ok(story) => collection.stories.push(story),
        Err(reason) => {
          tracing::warn!(id, error = %reason, "skipping story");
          collection.skipped.push(SkippedStory { id, reason });
        }
      }
    }

    Ok(collection)
  }

  pub(crate) fn new(source: Arc<S>, config: FetchConfig) -> Self {
    Self {
      throttle: Throttle::new(config.concurrency),
      config,
      source,
    }
  }
}
