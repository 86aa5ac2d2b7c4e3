use std::error::Error as StdError;

use thiserror::Error;

use crate::types::Provider;

#[derive(Debug, Error)]
pub enum GeocoderError {
    #[error("TLS error connecting to {provider}: {source}")]
    Tls {
        provider: Provider,
        source: reqwest::Error,
    },

    #[error("request to {provider} failed: {source}")]
    Http {
        provider: Provider,
        source: reqwest::Error,
    },

    #[error("{provider} returned HTTP {status}: {body}")]
    Status {
        provider: Provider,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to parse JSON from {provider}: {source} - response: {body}")]
    Decode {
        provider: Provider,
        source: serde_json::Error,
        body: String,
    },
}

impl GeocoderError {
    /// The request URL is dropped: it can carry API keys, and the message reaches clients.
    pub(crate) fn transport(provider: Provider, source: reqwest::Error) -> Self {
        let source = source.without_url();
        if is_tls_failure(&source) {
            GeocoderError::Tls { provider, source }
        } else {
            GeocoderError::Http { provider, source }
        }
    }

    pub fn provider(&self) -> Provider {
        match self {
            GeocoderError::Tls { provider, .. }
            | GeocoderError::Http { provider, .. }
            | GeocoderError::Status { provider, .. }
            | GeocoderError::Decode { provider, .. } => *provider,
        }
    }
}

// reqwest has no dedicated TLS error kind, so look through the source chain.
fn is_tls_failure(err: &reqwest::Error) -> bool {
    let mut source: Option<&dyn StdError> = Some(err);
    while let Some(e) = source {
        if mentions_tls(&e.to_string()) {
            return true;
        }
        source = e.source();
    }
    false
}

fn mentions_tls(message: &str) -> bool {
    let message = message.to_ascii_lowercase();
    ["tls", "ssl", "certificate", "handshake"]
        .iter()
        .any(|needle| message.contains(needle))
}
