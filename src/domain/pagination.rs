//! Offset/limit pagination shared by every list operation

use serde::Serialize;

use super::DomainError;

pub const DEFAULT_OFFSET: i64 = 0;
pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

/// A validated pagination window: `offset >= 0`, `1 <= limit <= 100`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    offset: usize,
    limit: usize,
}

impl PageRequest {
    pub fn new(offset: i64, limit: i64) -> Result<Self, DomainError> {
        if offset < 0 {
            return Err(DomainError::validation(
                "offset",
                "El offset debe ser mayor o igual a 0",
            ));
        }

        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(DomainError::validation(
                "limit",
                "El limit debe estar entre 1 y 100",
            ));
        }

        Ok(Self {
            offset: offset as usize,
            limit: limit as usize,
        })
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Slice an already ordered collection
    pub fn apply<T>(&self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        items.into_iter().skip(self.offset).take(self.limit).collect()
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET as usize,
            limit: DEFAULT_LIMIT as usize,
        }
    }
}

/// One page of results plus navigation flags
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub offset: usize,
    pub limit: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: usize, request: PageRequest) -> Self {
        Self {
            items,
            total,
            offset: request.offset,
            limit: request.limit,
            has_next: request.offset + request.limit < total,
            has_previous: request.offset > 0,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            offset: self.offset,
            limit: self.limit,
            has_next: self.has_next,
            has_previous: self.has_previous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_bounds() {
        assert!(PageRequest::new(0, 1).is_ok());
        assert!(PageRequest::new(0, 100).is_ok());
        assert!(PageRequest::new(500, 10).is_ok());
    }

    #[test]
    fn test_negative_offset() {
        let err = PageRequest::new(-1, 10).unwrap_err();
        assert_eq!(
            err.field_messages("offset"),
            Some(&["El offset debe ser mayor o igual a 0".to_string()][..])
        );
    }

    #[test]
    fn test_limit_out_of_range() {
        for limit in [0, -5, 101, 1000] {
            let err = PageRequest::new(0, limit).unwrap_err();
            assert!(err.field_messages("limit").is_some(), "limit {}", limit);
        }
    }

    #[test]
    fn test_offset_checked_before_limit() {
        let err = PageRequest::new(-1, 0).unwrap_err();
        assert!(err.field_messages("offset").is_some());
        assert!(err.field_messages("limit").is_none());
    }

    #[test]
    fn test_default_request() {
        let request = PageRequest::default();
        assert_eq!(request.offset(), 0);
        assert_eq!(request.limit(), 10);
    }

    #[test]
    fn test_apply_slices_window() {
        let request = PageRequest::new(2, 3).unwrap();
        assert_eq!(request.apply(0..10), vec![2, 3, 4]);

        let past_end = PageRequest::new(20, 3).unwrap();
        assert!(past_end.apply(0..10).is_empty());
    }

    #[test]
    fn test_single_page_flags() {
        let page = Page::new(vec!["superman"], 1, PageRequest::new(0, 10).unwrap());
        assert!(!page.has_next);
        assert!(!page.has_previous);
    }

    #[test]
    fn test_flags_follow_window() {
        for total in 0..30usize {
            for offset in 0..30i64 {
                for limit in [1i64, 5, 10] {
                    let request = PageRequest::new(offset, limit).unwrap();
                    let page: Page<()> = Page::new(vec![], total, request);
                    assert_eq!(page.has_next, (offset + limit) < total as i64);
                    assert_eq!(page.has_previous, offset > 0);
                }
            }
        }
    }

    #[test]
    fn test_map_keeps_envelope() {
        let page = Page::new(vec![1, 2], 5, PageRequest::new(2, 2).unwrap());
        let mapped = page.map(|n| n * 10);

        assert_eq!(mapped.items, vec![10, 20]);
        assert_eq!(mapped.total, 5);
        assert!(mapped.has_next);
        assert!(mapped.has_previous);
    }
}
