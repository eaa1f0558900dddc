//! Single-shot HTTP GET with status and decoding error handling

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::constants::RESPONSE_PREVIEW_CHARS;
use crate::error::AppError;

/// GETs `url` once and decodes the body as JSON.
///
/// There is no retry: a transport failure, a non-2xx status or a body that
/// does not decode into `T` is returned as an error straight away.
#[instrument(skip(client))]
pub(super) async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return Err(if e.is_timeout() {
                AppError::network_timeout(url)
            } else if e.is_connect() {
                AppError::network_connection(url, e.to_string())
            } else {
                AppError::ApiFetch(e)
            });
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());
    let preview: String = response_text.chars().take(RESPONSE_PREVIEW_CHARS).collect();
    debug!("Response text (first {RESPONSE_PREVIEW_CHARS} chars): {preview}");

    decode_body(&response_text, url)
}

/// Decodes a response body, distinguishing an empty body, text that is not
/// JSON at all, and JSON of the wrong shape.
pub(super) fn decode_body<T: DeserializeOwned>(body: &str, url: &str) -> Result<T, AppError> {
    match serde_json::from_str::<T>(body) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            error!(
                "Response text (first 200 chars): {}",
                body.chars().take(200).collect::<String>()
            );

            let trimmed = body.trim_start();
            if trimmed.is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if e.is_syntax() || e.is_eof() {
                Err(AppError::api_malformed_json(
                    format!("Response contains invalid JSON and could not be decoded: {e}"),
                    url,
                ))
            } else {
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}
