use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be built or sent, or the connection failed.
    #[error("request failed")]
    Request(#[source] reqwest::Error),
    /// The server answered with a 4xx or 5xx status.
    #[error(
        "{} {} Error: {} for url: {url}",
        .status.as_u16(),
        status_class(.status),
        .status.canonical_reason().unwrap_or("Unknown")
    )]
    Status { status: StatusCode, url: String },
    /// The body could not be read or decoded.
    #[error("failed to read response body")]
    Body(#[source] reqwest::Error),
}

fn status_class(status: &StatusCode) -> &'static str {
    if status.is_client_error() {
        "Client"
    } else {
        "Server"
    }
}

/// Sends a single GET request to `url` and returns the decoded body.
///
/// No headers are added and nothing is retried. Redirects are followed with
/// the client's default policy; any 4xx or 5xx status at the end of the chain
/// is an error. The body is decoded with the charset declared by the response,
/// falling back to UTF-8.
pub async fn fetch_page(url: &str, timeout: Option<Duration>) -> Result<String, FetchError> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    let client = builder.build().map_err(FetchError::Request)?;

    let response = client.get(url).send().await.map_err(FetchError::Request)?;

    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        return Err(FetchError::Status {
            status,
            url: response.url().to_string(),
        });
    }

    response.text().await.map_err(FetchError::Body)
}
