use {super::*, serde::de::DeserializeOwned};

#[derive(Clone)]
pub(crate) struct Client {
  base_url: String,
  category: Category,
  client: reqwest::Client,
  retries: u32,
  retry_delay: Duration,
}

#[async_trait]
impl RecordSource for Client {
  async fn fetch_record(&self, id: ItemId) -> Result<Lookup, TransportError> {
    tracing::debug!(id, "fetching item");

    Ok(Lookup::from(
      self.get::<Option<RawRecord>>(&self.item_url(id)).await?,
    ))
  }

  async fn fetch_top_ids(&self) -> Result<Vec<ItemId>, TransportError> {
    self.get::<Vec<ItemId>>(&self.top_ids_url()).await
  }
}

impl Client {
  async fn get<T: DeserializeOwned>(
    &self,
    url: &str,
  ) -> Result<T, TransportError> {
    retry::with_retry(self.retries, self.retry_delay, || self.get_once(url))
      .await
  }

  async fn get_once<T: DeserializeOwned>(
    &self,
    url: &str,
  ) -> Result<T, TransportError> {
    let request_error = |source| TransportError::Request {
      url: url.to_string(),
      source,
    };

    let response = self.client.get(url).send().await.map_err(request_error)?;

    let status = response.status();

    if !status.is_success() {
      return Err(TransportError::Status {
        status,
        url: url.to_string(),
      });
    }

    let body = response.bytes().await.map_err(request_error)?;

    serde_json::from_slice(&body).map_err(|source| TransportError::Decode {
      url: url.to_string(),
      source,
    })
  }

  fn item_url(&self, id: ItemId) -> String {
    format!("{}/item/{id}.json", self.base_url)
  }

  pub(crate) fn new(config: &FetchConfig) -> Result<Self> {
    let client = reqwest::Client::builder()
      .timeout(config.request_timeout)
      .pool_max_idle_per_host(config.concurrency)
      .build()
      .context("failed to build http client")?;

    Ok(Self {
      base_url: config.api_base_url.trim_end_matches('/').to_string(),
      category: config.category,
      client,
      retries: config.retries,
      retry_delay: config.retry_delay,
    })
  }

  fn top_ids_url(&self) -> String {
    format!("{}/{}.json", self.base_url, self.category.endpoint())
  }
}
