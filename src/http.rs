use reqwest::{Client, Request};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{AppError, Result};

/// Sends a prepared request once and decodes a 2xx body as `T`.
///
/// Transport failures become `Network`, non-2xx statuses become `Http`,
/// and bodies that don't match `T` become `Decode`.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    client: &Client,
    request: Request,
) -> Result<T> {
    debug!("GET {}", request.url().path());

    let response = client.execute(request).await?;
    let status = response.status();

    if !status.is_success() {
        let error_text = response.text().await.unwrap_or_default();
        warn!("Request failed ({}): {}", status, error_text);
        return Err(AppError::Http {
            status: status.as_u16(),
            message: error_text.chars().take(200).collect(),
        });
    }

    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}
