//! Small reference lists (categories, statuses) and the message counter.
//!
//! Loaded once, in parallel, and held read-only. There is no implicit
//! invalidation: settings edits made elsewhere are only observed through an
//! explicit [`MetadataCache::refresh`]. This staleness gap is inherited from
//! the dashboard and documented rather than papered over.

use std::future::Future;

use engage_api::ApiError;

use crate::store::StoreError;

/// Backend seam for the metadata cache.
pub trait MetadataBackend {
    fn categories(&self) -> impl Future<Output = Result<Vec<String>, ApiError>> + Send;

    fn statuses(&self) -> impl Future<Output = Result<Vec<String>, ApiError>> + Send;

    fn message_count(&self) -> impl Future<Output = Result<u64, ApiError>> + Send;
}

/// Read-only cache of the tenant's classification lists.
pub struct MetadataCache<B> {
    backend: B,
    categories: Vec<String>,
    statuses: Vec<String>,
    message_count: u64,
    loaded: bool,
}

impl<B: MetadataBackend> MetadataCache<B> {
    #[must_use]
    pub fn new(backend: B) -> Self {
        MetadataCache {
            backend,
            categories: Vec::new(),
            statuses: Vec::new(),
            message_count: 0,
            loaded: false,
        }
    }

    /// Fetches all three lists in parallel on first use; later calls are
    /// no-ops.
    ///
    /// # Errors
    ///
    /// [`StoreError::Backend`] if any of the three requests fails; nothing
    /// is cached in that case.
    pub async fn load(&mut self) -> Result<(), StoreError> {
        if self.loaded {
            return Ok(());
        }
        self.refresh().await
    }

    /// Unconditionally refetches, replacing the cached lists.
    ///
    /// # Errors
    ///
    /// [`StoreError::Backend`] if any of the three requests fails; the
    /// previously cached values are kept.
    pub async fn refresh(&mut self) -> Result<(), StoreError> {
        let fetched = tokio::try_join!(
            self.backend.categories(),
            self.backend.statuses(),
            self.backend.message_count(),
        );
        match fetched {
            Ok((categories, statuses, message_count)) => {
                self.categories = categories;
                self.statuses = statuses;
                self.message_count = message_count;
                self.loaded = true;
                Ok(())
            }
            Err(source) => {
                tracing::warn!(error = %source, "metadata fetch failed");
                Err(StoreError::Backend {
                    action: "fetch",
                    resource: "metadata",
                    source,
                })
            }
        }
    }

    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    #[must_use]
    pub fn statuses(&self) -> &[String] {
        &self.statuses
    }

    #[must_use]
    pub fn message_count(&self) -> u64 {
        self.message_count
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    use super::*;

    #[derive(Clone, Default)]
    struct FakeMetadata {
        calls: Arc<AtomicU32>,
        fail: Arc<std::sync::atomic::AtomicBool>,
    }

    impl MetadataBackend for FakeMetadata {
        async fn categories(&self) -> Result<Vec<String>, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail.load(Ordering::SeqCst) {
                return Err(ApiError::Status {
                    status: 500,
                    path: "api/settings/categories".to_owned(),
                });
            }
            Ok(vec!["Retail".to_owned(), "Wholesale".to_owned()])
        }

        async fn statuses(&self) -> Result<Vec<String>, ApiError> {
            Ok(vec!["New".to_owned(), "Active".to_owned()])
        }

        async fn message_count(&self) -> Result<u64, ApiError> {
            Ok(7)
        }
    }

    #[tokio::test]
    async fn load_populates_all_three_lists() {
        let mut cache = MetadataCache::new(FakeMetadata::default());
        cache.load().await.expect("load");

        assert_eq!(cache.categories(), ["Retail", "Wholesale"]);
        assert_eq!(cache.statuses(), ["New", "Active"]);
        assert_eq!(cache.message_count(), 7);
        assert!(cache.is_loaded());
    }

    #[tokio::test]
    async fn load_is_idempotent_until_refreshed() {
        let backend = FakeMetadata::default();
        let mut cache = MetadataCache::new(backend.clone());

        cache.load().await.expect("first load");
        cache.load().await.expect("second load is a no-op");
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);

        cache.refresh().await.expect("explicit refresh");
        assert_eq!(backend.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_values() {
        let backend = FakeMetadata::default();
        let mut cache = MetadataCache::new(backend.clone());
        cache.load().await.expect("load");

        backend.fail.store(true, Ordering::SeqCst);
        assert!(cache.refresh().await.is_err());
        assert_eq!(cache.categories(), ["Retail", "Wholesale"]);
    }
}
