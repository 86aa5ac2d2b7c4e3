use crate::domain::{models::Coordinates, ports::geocoding::PostalCodeProvider};

/// Two postal code sources tried in order; the second is only asked when the first
/// comes back empty.
pub struct PostalFallbackChain<P, Q> {
    first: P,
    second: Q,
}

impl<P: PostalCodeProvider, Q: PostalCodeProvider> PostalFallbackChain<P, Q> {
    pub fn new(first: P, second: Q) -> Self {
        Self { first, second }
    }
}

impl<P: PostalCodeProvider, Q: PostalCodeProvider> PostalCodeProvider for PostalFallbackChain<P, Q> {
    fn name(&self) -> &'static str {
        "postal fallback chain"
    }

    async fn postal_code(&self, coordinates: Coordinates) -> Option<String> {
        if let Some(code) = attempt(&self.first, coordinates).await {
            return Some(code);
        }
        attempt(&self.second, coordinates).await
    }
}

async fn attempt<P: PostalCodeProvider>(provider: &P, coordinates: Coordinates) -> Option<String> {
    tracing::info!(provider = provider.name(), "postal code missing, trying fallback");

    let delay = provider.courtesy_delay();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    provider
        .postal_code(coordinates)
        .await
        .filter(|code| !code.is_empty())
}
