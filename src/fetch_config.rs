use super::*;

#[derive(Clone, Debug)]
pub(crate) struct FetchConfig {
  pub(crate) api_base_url: String,
  pub(crate) category: Category,
  pub(crate) concurrency: usize,
  pub(crate) cycle_policy: CyclePolicy,
  pub(crate) level_timeout: Option<Duration>,
  pub(crate) request_timeout: Duration,
  pub(crate) retries: u32,
  pub(crate) retry_delay: Duration,
  pub(crate) story_timeout: Option<Duration>,
}

impl Default for FetchConfig {
  fn default() -> Self {
    Self {
      api_base_url: Self::DEFAULT_API_BASE_URL.into(),
      category: Category::default(),
      concurrency: Self::DEFAULT_CONCURRENCY,
      cycle_policy: CyclePolicy::default(),
      level_timeout: None,
      request_timeout: Duration::from_secs(30),
      retries: 2,
      retry_delay: Duration::from_millis(250),
      story_timeout: None,
    }
  }
}

impl FetchConfig {
  pub(crate) const DEFAULT_API_BASE_URL: &str =
    "https://hacker-news.firebaseio.com/v0";

  pub(crate) const DEFAULT_CONCURRENCY: usize = 32;

  pub(crate) fn validate(&self) -> Result {
    anyhow::ensure!(self.concurrency > 0, "concurrency must be at least 1");

    anyhow::ensure!(
      !self.api_base_url.trim().is_empty(),
      "api base url must not be empty"
    );

    Ok(())
  }
}
