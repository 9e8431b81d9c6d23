//! Store traits for filtering and sorting

use crate::core::query::PageResult;

/// Trait for stores that support filtering, sorting and paging
///
/// Implement this trait for local datasets that can answer a query without
/// the backend. [`QueryableStore::query_page`] always runs the three steps in
/// the same order: filter, then sort, then paginate.
pub trait QueryableStore<T>: Send + Sync {
    /// Query type understood by the store
    type Query;

    /// Get all entities (unfiltered, unsorted)
    fn list_all(&self) -> Vec<T>;

    /// Keep the entities matching every constraint of the query
    fn apply_filters(&self, data: Vec<T>, query: &Self::Query) -> Vec<T>;

    /// Order the entities; must be stable
    fn apply_sort(&self, data: Vec<T>) -> Vec<T>;

    /// Page coordinates `(page, size)` requested by the query
    fn page_of(&self, query: &Self::Query) -> (usize, usize);

    /// Filter, sort and paginate a snapshot of the store
    fn query_page(&self, query: &Self::Query) -> PageResult<T> {
        let (page, size) = self.page_of(query);
        let filtered = self.apply_filters(self.list_all(), query);
        let sorted = self.apply_sort(filtered);
        PageResult::paginate(sorted, page, size)
    }
}
