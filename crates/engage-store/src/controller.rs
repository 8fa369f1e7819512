//! Store + filter + selection wired together.
//!
//! This is the glue every list page assembled by hand in the dashboard: the
//! selection always operates on the *filtered* view, is intersected with the
//! surviving collection after every resynchronization, and is cleared after a
//! successful bulk action (but preserved on failure so the user can retry).

use engage_core::types::BulkField;
use engage_core::{filter_collection, FilterState, Filterable, Selection};

use crate::store::{Entity, ListBackend, Store, StoreError};

/// One list view: a resource store, its filter state, and its selection.
pub struct ListController<T, B> {
    store: Store<T, B>,
    filter: FilterState,
    selection: Selection<String>,
}

impl<T, B> ListController<T, B>
where
    T: Entity + Filterable,
    B: ListBackend<T>,
{
    #[must_use]
    pub fn new(backend: B, page_size: u32) -> Self {
        ListController {
            store: Store::new(backend, page_size),
            filter: FilterState::default(),
            selection: Selection::new(),
        }
    }

    #[must_use]
    pub fn store(&self) -> &Store<T, B> {
        &self.store
    }

    #[must_use]
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// The loaded collection narrowed by the current filter.
    #[must_use]
    pub fn filtered(&self) -> Vec<&T> {
        filter_collection(self.store.items(), &self.filter)
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.filter.search_query = query.into();
        self.store.reset_pager();
    }

    pub fn set_status_filter(&mut self, status: impl Into<String>) {
        self.filter.status_filter = status.into();
        self.store.reset_pager();
    }

    pub fn set_category_filter(&mut self, category: impl Into<String>) {
        self.filter.category_filter = category.into();
        self.store.reset_pager();
    }

    /// Selects exactly the currently visible (filtered) rows, or clears.
    pub fn select_all(&mut self, checked: bool) {
        let visible: Vec<String> = self
            .filtered()
            .into_iter()
            .map(|item| item.id().to_owned())
            .collect();
        self.selection.select_all(checked, visible);
    }

    pub fn toggle(&mut self, id: &str) {
        self.selection.toggle(id.to_owned());
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.is_selected(&id.to_owned())
    }

    /// True iff the filtered view is non-empty and fully selected.
    #[must_use]
    pub fn is_all_selected(&self) -> bool {
        let visible: Vec<String> = self
            .filtered()
            .into_iter()
            .map(|item| item.id().to_owned())
            .collect();
        self.selection.is_all_selected(visible.iter())
    }

    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    #[must_use]
    pub fn selected_ids(&self) -> Vec<String> {
        self.selection.ids()
    }

    /// Refetches from page 1 and intersects the selection with the result.
    ///
    /// # Errors
    ///
    /// [`StoreError::Backend`] on fetch failure; the selection is still
    /// intersected with whatever the store holds.
    pub async fn refresh(&mut self) -> Result<(), StoreError> {
        let result = self.store.fetch().await;
        self.sync_selection();
        result
    }

    /// Appends the next page, if any.
    ///
    /// # Errors
    ///
    /// [`StoreError::Backend`] on fetch failure.
    pub async fn load_more(&mut self) -> Result<bool, StoreError> {
        let result = self.store.fetch_next().await;
        self.sync_selection();
        result
    }

    /// Creates an entity and resynchronizes.
    ///
    /// # Errors
    ///
    /// [`StoreError::Backend`] if the create or the follow-up fetch fails.
    pub async fn create(&mut self, item: &B::NewItem) -> Result<(), StoreError> {
        let result = self.store.create(item).await;
        self.sync_selection();
        result
    }

    /// Applies `field = value` to the selected rows, then clears the
    /// selection on success. A no-op when nothing is selected or the value
    /// is empty.
    ///
    /// # Errors
    ///
    /// [`StoreError::Backend`] on failure; the selection is preserved so the
    /// action can be retried.
    pub async fn bulk_update(&mut self, field: BulkField, value: &str) -> Result<(), StoreError> {
        if value.is_empty() || self.selection.is_empty() {
            return Ok(());
        }
        let ids = self.selection.ids();
        let result = self.store.bulk_update(field, value, &ids).await;
        if result.is_ok() {
            self.selection.clear();
        }
        self.sync_selection();
        result
    }

    /// Deletes the selected rows, then clears the selection on success.
    /// A no-op when nothing is selected.
    ///
    /// # Errors
    ///
    /// [`StoreError::Backend`] on failure; the selection is preserved so the
    /// action can be retried.
    pub async fn bulk_delete(&mut self) -> Result<(), StoreError> {
        if self.selection.is_empty() {
            return Ok(());
        }
        let ids = self.selection.ids();
        let result = self.store.bulk_delete(&ids).await;
        if result.is_ok() {
            self.selection.clear();
        }
        self.sync_selection();
        result
    }

    /// Intersects the selection with ids still present in the collection so
    /// "N selected" never counts phantoms.
    fn sync_selection(&mut self) {
        let surviving: std::collections::HashSet<&str> = self.store.ids().collect();
        self.selection.retain(|id| surviving.contains(id.as_str()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::{FakeBackend, Row};

    fn sample_backend() -> FakeBackend {
        FakeBackend::with_rows(vec![
            Row::new("1", "Ann", "New", "Retail"),
            Row::new("2", "Bo", "Active", "Retail"),
            Row::new("3", "Cara", "Active", "Wholesale"),
        ])
    }

    #[tokio::test]
    async fn select_all_respects_the_filtered_view() {
        let mut ctl = ListController::new(sample_backend(), 100);
        ctl.refresh().await.expect("fetch");

        ctl.set_status_filter("Active");
        assert_eq!(ctl.filtered().len(), 2);

        ctl.select_all(true);
        assert_eq!(ctl.selected_count(), 2, "hidden rows must stay unselected");
        assert!(!ctl.is_selected("1"));
    }

    #[tokio::test]
    async fn selection_survives_irrelevant_refetch() {
        let mut ctl = ListController::new(sample_backend(), 100);
        ctl.refresh().await.expect("fetch");

        ctl.toggle("1");
        ctl.toggle("2");
        ctl.refresh().await.expect("refetch");

        assert_eq!(ctl.selected_count(), 2);
        assert!(ctl.is_selected("1"));
        assert!(ctl.is_selected("2"));
    }

    #[tokio::test]
    async fn selection_shrinks_when_rows_disappear_elsewhere() {
        let backend = sample_backend();
        let mut ctl = ListController::new(backend.clone(), 100);
        ctl.refresh().await.expect("fetch");

        ctl.toggle("1");
        ctl.toggle("2");
        // Row 2 is deleted by another client; the next refetch drops it.
        backend.state.lock().unwrap().rows.retain(|r| r.id != "2");
        ctl.refresh().await.expect("refetch");

        assert_eq!(ctl.selected_count(), 1);
        assert!(ctl.is_selected("1"));
        assert!(!ctl.is_selected("2"));
    }

    #[tokio::test]
    async fn filter_select_clear_scenario() {
        let backend = FakeBackend::with_rows(vec![
            Row::new("1", "Ann", "New", "Retail"),
            Row::new("2", "Bo", "Active", "Retail"),
        ]);
        let mut ctl = ListController::new(backend, 100);
        ctl.refresh().await.expect("fetch");

        ctl.set_status_filter("Active");
        let filtered = ctl.filtered();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "2");

        ctl.select_all(true);
        assert_eq!(ctl.selected_count(), 1);
        assert!(ctl.is_all_selected());

        // Clearing the filter widens the view; row 1 is not selected.
        ctl.set_status_filter("");
        assert_eq!(ctl.filtered().len(), 2);
        assert!(!ctl.is_all_selected());
    }

    #[tokio::test]
    async fn bulk_update_applies_to_selection_and_clears_it() {
        let mut ctl = ListController::new(sample_backend(), 100);
        ctl.refresh().await.expect("fetch");

        ctl.toggle("1");
        ctl.toggle("2");
        ctl.bulk_update(BulkField::Status, "Closed")
            .await
            .expect("bulk update");

        assert_eq!(ctl.selected_count(), 0, "selection clears on success");
        let closed: Vec<&Row> = ctl
            .store()
            .items()
            .iter()
            .filter(|r| r.status == "Closed")
            .collect();
        assert_eq!(closed.len(), 2);
    }

    #[tokio::test]
    async fn bulk_update_with_empty_value_is_a_no_op() {
        let backend = sample_backend();
        let mut ctl = ListController::new(backend.clone(), 100);
        ctl.refresh().await.expect("fetch");
        ctl.toggle("1");

        ctl.bulk_update(BulkField::Status, "").await.expect("no-op");
        assert_eq!(ctl.selected_count(), 1);
        assert_eq!(backend.fetch_calls(), 1, "no request issued");
    }

    #[tokio::test]
    async fn bulk_delete_clears_selection_and_collection_rows() {
        let mut ctl = ListController::new(sample_backend(), 100);
        ctl.refresh().await.expect("fetch");

        ctl.toggle("2");
        ctl.bulk_delete().await.expect("bulk delete");

        assert_eq!(ctl.selected_count(), 0);
        assert_eq!(ctl.store().items().len(), 2);
        assert!(ctl.store().items().iter().all(|r| r.id != "2"));
    }

    #[tokio::test]
    async fn failed_bulk_delete_preserves_selection_for_retry() {
        let backend = sample_backend();
        let mut ctl = ListController::new(backend.clone(), 100);
        ctl.refresh().await.expect("fetch");

        ctl.toggle("1");
        backend.state.lock().unwrap().fail_delete = true;
        let result = ctl.bulk_delete().await;

        assert!(result.is_err());
        assert_eq!(ctl.selected_count(), 1, "user can retry the delete");
        assert_eq!(ctl.store().items().len(), 3);
    }

    #[tokio::test]
    async fn filter_change_resets_pagination() {
        let rows: Vec<Row> = (0..5)
            .map(|i| Row::new(&format!("{i}"), &format!("n{i}"), "New", "Retail"))
            .collect();
        let mut ctl = ListController::new(FakeBackend::with_rows(rows), 2);
        ctl.refresh().await.expect("page 1");
        ctl.load_more().await.expect("page 2");
        assert_eq!(ctl.store().pager().next_page(), Some(3));

        ctl.set_search("n1");
        assert_eq!(ctl.store().pager().next_page(), Some(1));
    }
}
