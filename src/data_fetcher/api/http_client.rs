//! HTTP client construction

use reqwest::Client;
use std::time::Duration;

/// Creates an HTTP client with the given request timeout and a bounded
/// idle connection pool.
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds() {
        assert!(create_http_client_with_timeout(5).is_ok());
    }
}
