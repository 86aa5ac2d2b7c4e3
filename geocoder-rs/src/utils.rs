use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::errors::GeocoderError;
use crate::types::Provider;

#[cfg(feature = "tracing")]
use tracing::{debug, instrument, warn};

/// Sends `request` and returns the status together with the raw body text.
#[cfg_attr(feature = "tracing", instrument(skip(request)))]
pub async fn send_request(
    provider: Provider,
    request: RequestBuilder,
) -> Result<(StatusCode, String), GeocoderError> {
    let res = request.send().await.map_err(|e| {
        #[cfg(feature = "tracing")]
        warn!(
            %provider,
            error = %e,
            is_connect = e.is_connect(),
            is_timeout = e.is_timeout(),
            "Provider request failed"
        );
        GeocoderError::transport(provider, e)
    })?;

    let status = res.status();
    let body = res
        .text()
        .await
        .map_err(|e| GeocoderError::transport(provider, e))?;

    #[cfg(feature = "tracing")]
    debug!(%provider, status = ?status, body = %body, "Provider responded");

    Ok((status, body))
}

/// Like [`send_request`], but insists on `200 OK` and decodes the body as JSON.
pub async fn get_json<T: DeserializeOwned>(
    provider: Provider,
    request: RequestBuilder,
) -> Result<T, GeocoderError> {
    let (status, body) = send_request(provider, request).await?;
    if status != StatusCode::OK {
        return Err(GeocoderError::Status {
            provider,
            status,
            body,
        });
    }
    parse_body(provider, body)
}

pub fn parse_body<T: DeserializeOwned>(provider: Provider, body: String) -> Result<T, GeocoderError> {
    match serde_json::from_str(&body) {
        Ok(value) => Ok(value),
        Err(source) => Err(GeocoderError::Decode {
            provider,
            source,
            body,
        }),
    }
}
