//! Generic resource store: one in-memory collection synchronized against the
//! backend with refetch-after-mutation semantics.
//!
//! The original dashboard duplicated this logic per resource (leads and
//! engagements carried near-identical fetch/mutate hooks); here it is a single
//! store parameterized by entity and backend. Every mutating call that
//! succeeds is followed by a full refetch from page 1 — latency is traded for
//! consistency so the collection never diverges from the server.

use std::future::Future;

use engage_api::ApiError;
use engage_core::types::BulkField;
use engage_core::Pager;
use thiserror::Error;

use crate::seq::{SeqGuard, Ticket};

/// An entity with a stable string identifier.
pub trait Entity {
    fn id(&self) -> &str;
}

/// The seam between a store and the REST backend serving its resource.
///
/// `ApiClient` implements this once per resource; tests substitute in-memory
/// doubles.
pub trait ListBackend<T> {
    /// Creation payload (the server assigns ids and defaults).
    type NewItem;

    /// Resource noun used in error messages and logs, e.g. `"leads"`.
    fn resource(&self) -> &'static str;

    fn fetch_page(
        &self,
        page: u32,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<T>, ApiError>> + Send;

    fn create(&self, item: &Self::NewItem) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn bulk_update(
        &self,
        field: BulkField,
        value: &str,
        ids: &[String],
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn bulk_delete(&self, ids: &[String]) -> impl Future<Output = Result<(), ApiError>> + Send;
}

/// Errors surfaced by store operations.
///
/// The failing collection is always left untouched; the store additionally
/// records a human-readable message in [`Store::last_error`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to {action} {resource}: {source}")]
    Backend {
        action: &'static str,
        resource: &'static str,
        #[source]
        source: ApiError,
    },
}

/// In-memory collection for one resource type.
pub struct Store<T, B> {
    backend: B,
    items: Vec<T>,
    pager: Pager,
    page_size: u32,
    loading: bool,
    last_error: Option<String>,
    seq: SeqGuard,
}

impl<T: Entity, B: ListBackend<T>> Store<T, B> {
    #[must_use]
    pub fn new(backend: B, page_size: u32) -> Self {
        Store {
            backend,
            items: Vec::new(),
            pager: Pager::new(),
            page_size,
            loading: false,
            last_error: None,
            seq: SeqGuard::new(),
        }
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.iter().map(Entity::id)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    #[must_use]
    pub fn has_more(&self) -> bool {
        self.pager.has_more()
    }

    #[must_use]
    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    /// Starts pagination over from page 1 without touching the loaded items.
    ///
    /// The list controller calls this when the filter changes.
    pub fn reset_pager(&mut self) {
        self.pager.reset();
    }

    /// Replaces the collection with page 1.
    ///
    /// # Errors
    ///
    /// [`StoreError::Backend`] on any backend failure; the existing
    /// collection is left untouched.
    pub async fn fetch(&mut self) -> Result<(), StoreError> {
        self.pager.reset();
        self.fetch_current_page().await.map(|_| ())
    }

    /// Appends the next page, if any.
    ///
    /// Returns `Ok(false)` without issuing a request once a short page has
    /// been seen.
    ///
    /// # Errors
    ///
    /// [`StoreError::Backend`] on any backend failure.
    pub async fn fetch_next(&mut self) -> Result<bool, StoreError> {
        if self.pager.next_page().is_none() {
            return Ok(false);
        }
        self.fetch_current_page().await
    }

    /// Creates an entity, then refetches from page 1 so server-assigned
    /// fields (id, defaults) are reflected. No optimistic insert.
    ///
    /// # Errors
    ///
    /// [`StoreError::Backend`] if the create or the follow-up fetch fails.
    pub async fn create(&mut self, item: &B::NewItem) -> Result<(), StoreError> {
        self.loading = true;
        let result = self.backend.create(item).await;
        self.loading = false;
        match result {
            Ok(()) => self.fetch().await,
            Err(source) => Err(self.record_error("create", source)),
        }
    }

    /// Sets `field` to `value` on every id, then refetches.
    ///
    /// The backend cannot report partial success, so the call is treated as
    /// wholly failed on any error and the collection is resynchronized only
    /// on success.
    ///
    /// # Errors
    ///
    /// [`StoreError::Backend`] if the update or the follow-up fetch fails.
    pub async fn bulk_update(
        &mut self,
        field: BulkField,
        value: &str,
        ids: &[String],
    ) -> Result<(), StoreError> {
        self.loading = true;
        let result = self.backend.bulk_update(field, value, ids).await;
        self.loading = false;
        match result {
            Ok(()) => self.fetch().await,
            Err(source) => Err(self.record_error("bulk-update", source)),
        }
    }

    /// Deletes every id, then refetches.
    ///
    /// # Errors
    ///
    /// [`StoreError::Backend`] if the delete or the follow-up fetch fails.
    pub async fn bulk_delete(&mut self, ids: &[String]) -> Result<(), StoreError> {
        self.loading = true;
        let result = self.backend.bulk_delete(ids).await;
        self.loading = false;
        match result {
            Ok(()) => self.fetch().await,
            Err(source) => Err(self.record_error("bulk-delete", source)),
        }
    }

    async fn fetch_current_page(&mut self) -> Result<bool, StoreError> {
        let Some(page) = self.pager.next_page() else {
            return Ok(false);
        };
        let ticket = self.seq.issue();
        self.loading = true;
        let result = self.backend.fetch_page(page, self.page_size).await;
        self.loading = false;
        self.apply_fetch(ticket, page, result)
    }

    /// Applies a fetch completion to the collection.
    ///
    /// A completion carrying a superseded ticket is discarded. The `&mut`
    /// methods on this type serialize fetches, so tickets only go stale when
    /// the store is driven through a shared handle (one task per fetch over a
    /// locked store) where an older in-flight request can resolve after a
    /// newer one was issued.
    fn apply_fetch(
        &mut self,
        ticket: Ticket,
        page: u32,
        result: Result<Vec<T>, ApiError>,
    ) -> Result<bool, StoreError> {
        if !self.seq.is_current(ticket) {
            tracing::debug!(
                page,
                resource = self.backend.resource(),
                "discarding stale fetch completion"
            );
            return Ok(false);
        }

        match result {
            Ok(batch) => {
                self.pager.record(batch.len(), self.page_size);
                if page == 1 {
                    self.items = batch;
                } else {
                    self.items.extend(batch);
                }
                self.last_error = None;
                Ok(true)
            }
            Err(source) => Err(self.record_error("fetch", source)),
        }
    }

    fn record_error(&mut self, action: &'static str, source: ApiError) -> StoreError {
        let resource = self.backend.resource();
        tracing::warn!(action, resource, error = %source, "store operation failed");
        self.last_error = Some(format!("failed to {action} {resource}"));
        StoreError::Backend {
            action,
            resource,
            source,
        }
    }
}
