//! News ticker with the same fallback behaviour as job listings

use crate::core::{news::PulseUpdate, service::NewsService};
use crate::storage::fixtures;
use std::sync::Arc;

/// Pulse updates from the backend, or the bundled items when it has none
#[derive(Clone)]
pub struct PulseFeed {
    remote: Arc<dyn NewsService>,
    fallback: Arc<[PulseUpdate]>,
}

impl PulseFeed {
    /// Feed over `remote` with the bundled fallback items
    pub fn new(remote: Arc<dyn NewsService>) -> Self {
        Self::with_fallback(remote, fixtures::sample_pulse_updates())
    }

    /// Feed over `remote` with caller-supplied fallback items
    pub fn with_fallback(remote: Arc<dyn NewsService>, fallback: Vec<PulseUpdate>) -> Self {
        Self {
            remote,
            fallback: fallback.into(),
        }
    }

    /// Current pulse updates; never fails
    pub async fn pulse_updates(&self) -> Vec<PulseUpdate> {
        match self.remote.pulse_updates().await {
            Ok(updates) if !updates.is_empty() => updates,
            Ok(_) => {
                tracing::warn!("Backend returned no pulse updates, serving fallback items");
                self.fallback.to_vec()
            }
            Err(err) => {
                tracing::warn!(error = %err, "Pulse updates unavailable, serving fallback items");
                self.fallback.to_vec()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ClientError;
    use async_trait::async_trait;

    struct Silent;

    #[async_trait]
    impl NewsService for Silent {
        async fn pulse_updates(&self) -> Result<Vec<PulseUpdate>, ClientError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_empty_backend_serves_bundled_items() {
        let feed = PulseFeed::new(Arc::new(Silent));
        let updates = tokio_test::block_on(feed.pulse_updates());
        assert_eq!(updates, fixtures::sample_pulse_updates());
    }
}
