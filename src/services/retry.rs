use std::time::Duration;

use crate::services::provider_client::{CompletionProvider, ProviderError, ProviderRequest};

/// Bounded linear backoff for provider rate limiting. After failed
/// attempt `n` (1-based) the next attempt waits `n * base_delay`;
/// non-throttling errors are never retried.
#[derive(Clone, Copy, Debug)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            // A zero attempt budget would mean never calling at all.
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    fn backoff_after(&self, attempt: u32) -> Duration {
        self.base_delay * attempt
    }
}

/// Issues the provider call, retrying on rate-limit signals until the
/// attempt budget is spent. Attempts are strictly sequential: the next
/// one starts only after the previous failed and its backoff elapsed.
/// The single return value is the one terminal outcome; dropping the
/// returned future abandons any pending sleep or in-flight call.
pub async fn call_with_retry(
    provider: &dyn CompletionProvider,
    request: ProviderRequest,
    policy: RetryPolicy,
) -> Result<String, ProviderError> {
    let mut attempt = 1;
    loop {
        match provider.complete(request.clone()).await {
            Ok(text) => return Ok(text),
            Err(ProviderError::RateLimited(reason)) if attempt < policy.max_attempts => {
                let delay = policy.backoff_after(attempt);
                log::warn!(
                    "provider rate limited on attempt {}/{}, retrying in {}ms: {}",
                    attempt,
                    policy.max_attempts,
                    delay.as_millis(),
                    reason
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(err) => {
                log::error!("provider call failed on attempt {}: {}", attempt, err);
                return Err(err);
            }
        }
    }
}
