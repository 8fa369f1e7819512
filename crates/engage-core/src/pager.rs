//! Page-cursor state machine for the infinite list loader.
//!
//! Pages are 1-based. Receiving a short page (fewer items than the requested
//! page size) is terminal for the current query; `reset` starts over from
//! page 1, which the list controller does whenever the filter changes.

/// Tracks which page to fetch next and whether the backend has more.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    page: u32,
    has_more: bool,
}

impl Pager {
    #[must_use]
    pub fn new() -> Self {
        Pager {
            page: 1,
            has_more: true,
        }
    }

    /// The page a subsequent fetch should request, or `None` once a short
    /// page has been seen.
    #[must_use]
    pub fn next_page(&self) -> Option<u32> {
        self.has_more.then_some(self.page)
    }

    #[must_use]
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Records the outcome of fetching the current page: a full page means
    /// another may follow, a short page is terminal.
    pub fn record(&mut self, returned: usize, page_size: u32) {
        self.has_more = returned == page_size as usize;
        if self.has_more {
            self.page += 1;
        }
    }

    /// Returns to page 1 with `has_more` true.
    pub fn reset(&mut self) {
        self.page = 1;
        self.has_more = true;
    }
}

impl Default for Pager {
    fn default() -> Self {
        Pager::new()
    }
}
