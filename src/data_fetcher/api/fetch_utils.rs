//! Generic HTTP fetching with response caching and error classification

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument, warn};

use crate::data_fetcher::cache::HttpResponseCache;
use crate::error::AppError;

/// Maps a non-success status onto the error taxonomy
pub(super) fn status_error(status: StatusCode, url: &str) -> AppError {
    let status_code = status.as_u16();
    let reason = status.canonical_reason().unwrap_or("Unknown error");

    match status_code {
        404 => AppError::api_not_found(url),
        429 => AppError::api_rate_limit(reason, url),
        400..=499 => AppError::api_client_error(status_code, reason, url),
        502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
        _ => AppError::api_server_error(status_code, reason, url),
    }
}

/// Parses a response body, telling empty, non-JSON and mis-shaped bodies apart
pub(super) fn parse_body<T: DeserializeOwned>(body: &str, url: &str) -> Result<T, AppError> {
    serde_json::from_str::<T>(body).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, url);
        let trimmed = body.trim_start();
        if trimmed.is_empty() {
            AppError::api_no_data("Response body is empty", url)
        } else if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
            AppError::api_malformed_json("Response is not valid JSON", url)
        } else if e.is_syntax() || e.is_eof() {
            AppError::api_malformed_json(e.to_string(), url)
        } else {
            AppError::api_unexpected_structure(e.to_string(), url)
        }
    })
}

/// Fetches `url` and deserializes the body.
///
/// A fresh cached body is used when one exists; successful responses that
/// parse are cached for `ttl_seconds`. Failed requests are not retried, the
/// caller decides whether to fetch again.
#[instrument(skip(client, cache))]
pub(super) async fn fetch<T: DeserializeOwned>(
    client: &Client,
    cache: &HttpResponseCache,
    url: &str,
    ttl_seconds: u64,
) -> Result<T, AppError> {
    if let Some(cached) = cache.get(url).await {
        match serde_json::from_str::<T>(&cached) {
            Ok(parsed) => {
                debug!("Using cached HTTP response for URL: {url}");
                return Ok(parsed);
            }
            Err(e) => warn!("Failed to parse cached response for URL {}: {}", url, e),
        }
    }

    info!("Fetching data from URL: {url}");
    let response = client.get(url).send().await.map_err(|e| {
        error!("Request failed for URL {}: {}", url, e);
        if e.is_timeout() {
            AppError::network_timeout(url)
        } else if e.is_connect() {
            AppError::network_connection(url, e.to_string())
        } else {
            AppError::ApiFetch(e)
        }
    })?;

    let status = response.status();
    debug!("Response status: {status}");
    if !status.is_success() {
        error!("HTTP {} (URL: {})", status, url);
        return Err(status_error(status, url));
    }

    let body = response.text().await.map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url, e);
        AppError::ApiFetch(e)
    })?;
    debug!("Response length: {} bytes", body.len());

    let parsed = parse_body::<T>(&body, url)?;
    cache.insert(url.to_string(), body, ttl_seconds).await;
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let url = "http://x";
        assert!(matches!(
            status_error(StatusCode::NOT_FOUND, url),
            AppError::ApiNotFound { .. }
        ));
        assert!(matches!(
            status_error(StatusCode::TOO_MANY_REQUESTS, url),
            AppError::ApiRateLimit { .. }
        ));
        assert!(matches!(
            status_error(StatusCode::BAD_REQUEST, url),
            AppError::ApiClientError { status: 400, .. }
        ));
        assert!(matches!(
            status_error(StatusCode::BAD_GATEWAY, url),
            AppError::ApiServiceUnavailable { status: 502, .. }
        ));
        assert!(matches!(
            status_error(StatusCode::INTERNAL_SERVER_ERROR, url),
            AppError::ApiServerError { status: 500, .. }
        ));
    }

    #[test]
    fn test_body_classification() {
        let url = "http://x";
        assert!(matches!(
            parse_body::<Vec<u32>>("  ", url),
            Err(AppError::ApiNoData { .. })
        ));
        assert!(matches!(
            parse_body::<Vec<u32>>("<html>", url),
            Err(AppError::ApiMalformedJson { .. })
        ));
        assert!(matches!(
            parse_body::<Vec<u32>>("[1, 2", url),
            Err(AppError::ApiMalformedJson { .. })
        ));
        assert!(matches!(
            parse_body::<Vec<u32>>("{\"a\": 1}", url),
            Err(AppError::ApiUnexpectedStructure { .. })
        ));
        assert_eq!(parse_body::<Vec<u32>>("[1, 2]", url).unwrap(), vec![1, 2]);
    }
}
