//! Pagination utilities for service layer
//!
//! Pages are zero-based and fixed-size. A page past the end is simply empty.

const MAX_SQL_INT: u64 = i64::MAX as u64;

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 0-based page index
    pub page_index: u64,
    /// items per page
    pub page_size: u64,
}

impl Pagination {
    pub fn new(page_index: u64, page_size: u64) -> Self {
        Self { page_index, page_size }
    }

    /// `(page_index, page_size)` ready for SeaORM's `fetch_page`, or `None` when
    /// the page can never hold a row.
    ///
    /// SQL `LIMIT`/`OFFSET` are signed 64-bit: `page_size` is clamped to
    /// `i64::MAX` and a page whose offset does not fit is treated as past the end.
    pub fn normalize(self) -> Option<(u64, u64)> {
        if self.page_size == 0 {
            return None;
        }
        let size = self.page_size.min(MAX_SQL_INT);
        let offset = self.page_index.checked_mul(size)?;
        (offset <= MAX_SQL_INT).then_some((self.page_index, size))
    }

    /// Cut this page out of an already ordered result set.
    pub fn slice<T: Clone>(self, items: &[T]) -> Vec<T> {
        let Some((index, size)) = self.normalize() else { return Vec::new() };
        let start = usize::try_from(index * size).unwrap_or(usize::MAX);
        let size = usize::try_from(size).unwrap_or(usize::MAX);
        items.iter().skip(start).take(size).cloned().collect()
    }
}
