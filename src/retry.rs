use super::*;

/// Runs `attempt` until it succeeds, fails with an error that is not
/// retryable, or has been retried `retries` times.
pub(crate) async fn with_retry<T, F, Fut>(
  retries: u32,
  delay: Duration,
  mut attempt: F,
) -> Result<T, TransportError>
where
  F: FnMut() -> Fut,
  Fut: Future<Output = Result<T, TransportError>>,
{
  let mut retried = 0;

  loop {
    match attempt().await {
      Ok(value) => return Ok(value),
      Err(error) if error.is_retryable() && retried < retries => {
        retried += 1;

        tracing::warn!(attempt = retried, %error, "retrying request");

        tokio::time::sleep(delay).await;
      }
      Err(error) => return Err(error),
    }
  }
}
