use super::*;

#[derive(Clone, Debug, clap::Args)]
pub(crate) struct FetchArguments {
  /// Base URL of the item API
  #[arg(long, env = "HN_API_BASE_URL", default_value = FetchConfig::DEFAULT_API_BASE_URL)]
  api_base_url: String,
  /// Maximum number of requests in flight
  #[arg(long, env = "HN_CONCURRENCY", default_value_t = FetchConfig::DEFAULT_CONCURRENCY)]
  concurrency: usize,
  /// Abandon a story when one level of its comment tree takes longer
  #[arg(long, env = "HN_LEVEL_TIMEOUT_SECS")]
  level_timeout_secs: Option<u64>,
  /// Story listing to archive
  #[arg(long, env = "HN_LIST", value_enum, default_value_t)]
  list: Category,
  /// What to do with a comment that references one of its ancestors
  #[arg(long, env = "HN_ON_CYCLE", value_enum, default_value_t)]
  on_cycle: CyclePolicy,
  /// Timeout for a single request
  #[arg(long, env = "HN_REQUEST_TIMEOUT_SECS", default_value_t = 30)]
  request_timeout_secs: u64,
  /// Retries for a request that failed transiently
  #[arg(long, env = "HN_RETRIES", default_value_t = 2)]
  retries: u32,
  /// Delay between retries
  #[arg(long, env = "HN_RETRY_DELAY_MS", default_value_t = 250)]
  retry_delay_ms: u64,
  /// Abandon a story that takes longer than this to collect
  #[arg(long, env = "HN_STORY_TIMEOUT_SECS")]
  story_timeout_secs: Option<u64>,
}

impl FetchArguments {
  pub(crate) fn config(&self) -> FetchConfig {
    FetchConfig {
      api_base_url: self.api_base_url.clone(),
      category: self.list,
      concurrency: self.concurrency,
      cycle_policy: self.on_cycle,
      level_timeout: self.level_timeout_secs.map(Duration::from_secs),
      request_timeout: Duration::from_secs(self.request_timeout_secs),
      retries: self.retries,
      retry_delay: Duration::from_millis(self.retry_delay_ms),
      story_timeout: self.story_timeout_secs.map(Duration::from_secs),
    }
  }
}
