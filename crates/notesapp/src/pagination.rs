//! Page requests and the page envelope returned by listing.

use serde::{Deserialize, Serialize};

use crate::error::{NotesError, Result};

pub const DEFAULT_PER_PAGE: usize = 10;
pub const DEFAULT_MAX_PER_PAGE: usize = 100;

/// A 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub per_page: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl PageRequest {
    pub fn new(page: usize, per_page: usize) -> Self {
        Self { page, per_page }
    }

    /// Check bounds and clamp `per_page` to `max_per_page`.
    pub fn normalize(self, max_per_page: usize) -> Result<Self> {
        if self.page == 0 {
            return Err(NotesError::validation("page must be at least 1"));
        }
        if self.per_page == 0 {
            return Err(NotesError::validation("per_page must be at least 1"));
        }
        Ok(Self {
            page: self.page,
            per_page: self.per_page.min(max_per_page),
        })
    }

    /// Number of items to skip. Page 0 reads as page 1; huge page numbers
    /// saturate past the end.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }

    /// Slice an ordered sequence into this page.
    pub fn slice<T, I>(&self, items: I) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
    {
        items
            .into_iter()
            .skip(self.offset())
            .take(self.per_page)
            .collect()
    }
}

/// One page of results plus the total size of the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_page_is_rejected() {
        assert!(matches!(
            PageRequest::new(0, 10).normalize(100),
            Err(NotesError::Validation(_))
        ));
    }

    #[test]
    fn zero_per_page_is_rejected() {
        assert!(PageRequest::new(1, 0).normalize(100).is_err());
    }

    #[test]
    fn per_page_is_clamped() {
        let req = PageRequest::new(2, 500).normalize(100).unwrap();
        assert_eq!(req.per_page, 100);
        assert_eq!(req.offset(), 100);
    }

    #[test]
    fn slice_takes_requested_window() {
        let req = PageRequest::new(2, 3);
        assert_eq!(req.slice(1..=10), vec![4, 5, 6]);
    }

    #[test]
    fn unnormalized_page_zero_does_not_underflow() {
        let req = PageRequest::new(0, 3);
        assert_eq!(req.offset(), 0);
        assert_eq!(req.slice(1..=10), vec![1, 2, 3]);
    }

    #[test]
    fn slice_past_end_is_empty() {
        let req = PageRequest::new(usize::MAX, 10);
        assert!(req.slice(1..=10).is_empty());
    }
}
