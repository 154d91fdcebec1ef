//! Pagination and search DTOs shared by the list endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query parameters for paginated, searchable listings.
///
/// Absent parameters take the documented defaults (page 1, ten records per
/// page). Parameters that are present but non-numeric or non-positive are
/// rejected with an invalid-parameter error by the query extractor.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ListParams {
    /// Page number (1-based)
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: u32,

    /// Number of items per page
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, message = "page_size must be at least 1"))]
    pub page_size: u32,

    /// Substring to match against the collection's searchable field
    pub search: Option<String>,
}

impl ListParams {
    /// Calculates the record offset for store queries.
    pub fn offset(&self) -> u64 {
        (u64::from(self.page) - 1) * u64::from(self.page_size)
    }

    /// Returns the slice limit for store queries.
    pub fn limit(&self) -> u32 {
        self.page_size
    }

    /// The search term, with an empty string treated as no search.
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|term| !term.is_empty())
    }
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    10
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
            search: None,
        }
    }
}

/// Derived description of a result page's position within the total
/// matching set. Pure arithmetic over its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMetadata {
    pub total_pages: u64,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

impl PageMetadata {
    /// Computes page metadata.
    ///
    /// `page_size` must already be validated to be at least 1; `page_number`
    /// may point past the last page, which simply yields no next page.
    pub fn compute(total_matching: u64, page_number: u32, page_size: u32) -> Self {
        let total_pages = total_matching.div_ceil(u64::from(page_size));
        Self {
            total_pages,
            has_previous_page: page_number > 1,
            has_next_page: u64::from(page_number) < total_pages,
        }
    }
}

/// Response envelope for list endpoints.
///
/// Field names and their order are a compatibility contract with existing
/// API consumers; do not rename or reorder them.
#[derive(Debug, Serialize)]
pub struct PageResult<T> {
    pub page_number: u32,
    pub page_size: u32,
    pub count: usize,
    pub total_pages: u64,
    pub has_previous_page: bool,
    pub has_next_page: bool,
    pub data: Vec<T>,
}

impl<T> PageResult<T> {
    /// Wraps one page of shaped records with its metadata.
    pub fn new(data: Vec<T>, params: &ListParams, total_matching: u64) -> Self {
        let metadata = PageMetadata::compute(total_matching, params.page, params.page_size);

        Self {
            page_number: params.page,
            page_size: params.page_size,
            count: data.len(),
            total_pages: metadata.total_pages,
            has_previous_page: metadata.has_previous_page,
            has_next_page: metadata.has_next_page,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn params(page: u32, page_size: u32) -> ListParams {
        ListParams {
            page,
            page_size,
            search: None,
        }
    }

    #[test]
    fn test_twenty_five_records_in_pages_of_ten() {
        let first = PageMetadata::compute(25, 1, 10);
        assert_eq!(first.total_pages, 3);
        assert!(!first.has_previous_page);
        assert!(first.has_next_page);

        let last = PageMetadata::compute(25, 3, 10);
        assert!(last.has_previous_page);
        assert!(!last.has_next_page);

        let beyond = PageMetadata::compute(25, 4, 10);
        assert_eq!(beyond.total_pages, 3);
        assert!(beyond.has_previous_page);
        assert!(!beyond.has_next_page);
    }

    #[test]
    fn test_empty_collection_has_zero_pages() {
        let metadata = PageMetadata::compute(0, 1, 10);
        assert_eq!(metadata.total_pages, 0);
        assert!(!metadata.has_previous_page);
        assert!(!metadata.has_next_page);
    }

    #[test]
    fn test_partial_last_page_counts_as_a_page() {
        assert_eq!(PageMetadata::compute(11, 1, 10).total_pages, 2);
        assert_eq!(PageMetadata::compute(10, 1, 10).total_pages, 1);
        assert_eq!(PageMetadata::compute(9, 1, 10).total_pages, 1);
    }

    #[test]
    fn test_offset_and_limit() {
        assert_eq!(params(1, 10).offset(), 0);
        assert_eq!(params(3, 10).offset(), 20);
        assert_eq!(params(2, 25).limit(), 25);
    }

    #[test]
    fn test_offset_does_not_overflow_wide_pages() {
        let wide = params(u32::MAX, u32::MAX);
        assert_eq!(
            wide.offset(),
            (u64::from(u32::MAX) - 1) * u64::from(u32::MAX)
        );
    }

    #[test]
    fn test_search_term_empty_means_no_search() {
        assert_eq!(params(1, 10).search_term(), None);

        let mut with_empty = params(1, 10);
        with_empty.search = Some(String::new());
        assert_eq!(with_empty.search_term(), None);

        let mut with_term = params(1, 10);
        with_term.search = Some("cola".to_string());
        assert_eq!(with_term.search_term(), Some("cola"));
    }

    #[test]
    fn test_envelope_keys_and_order_are_stable() {
        let result = PageResult::new(vec![1, 2], &params(1, 10), 2);
        let serialized = serde_json::to_string(&result).unwrap();
        assert_eq!(
            serialized,
            "{\"page_number\":1,\"page_size\":10,\"count\":2,\"total_pages\":1,\
             \"has_previous_page\":false,\"has_next_page\":false,\"data\":[1,2]}"
        );
    }

    #[test]
    fn test_envelope_count_tracks_data_length() {
        let result = PageResult::new(vec!["a", "b", "c"], &params(1, 10), 25);
        assert_eq!(result.count, 3);
        assert_eq!(result.total_pages, 3);
        assert!(result.has_next_page);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// total_pages is the ceiling of total_matching / page_size, and is
        /// zero exactly when nothing matches.
        #[test]
        fn prop_total_pages_is_ceiling(
            total_matching in 0u64..1_000_000,
            page_size in 1u32..10_000,
        ) {
            let metadata = PageMetadata::compute(total_matching, 1, page_size);
            let expected = total_matching.div_ceil(u64::from(page_size));

            prop_assert_eq!(metadata.total_pages, expected);
            prop_assert_eq!(metadata.total_pages == 0, total_matching == 0);
        }

        /// has_previous_page and has_next_page follow the page position.
        #[test]
        fn prop_previous_and_next_flags(
            total_matching in 0u64..100_000,
            page in 1u32..5_000,
            page_size in 1u32..1_000,
        ) {
            let metadata = PageMetadata::compute(total_matching, page, page_size);

            prop_assert_eq!(metadata.has_previous_page, page > 1);
            prop_assert_eq!(
                metadata.has_next_page,
                u64::from(page) < metadata.total_pages
            );
        }

        /// The last valid page never reports a next page, and every page
        /// before it does.
        #[test]
        fn prop_last_page_has_no_next(
            total_matching in 1u64..100_000,
            page_size in 1u32..1_000,
        ) {
            let total_pages = total_matching.div_ceil(u64::from(page_size));
            let last = u32::try_from(total_pages).unwrap_or(u32::MAX);

            let metadata = PageMetadata::compute(total_matching, last, page_size);
            prop_assert!(!metadata.has_next_page);

            if last > 1 {
                let before = PageMetadata::compute(total_matching, last - 1, page_size);
                prop_assert!(before.has_next_page);
            }
        }

        /// Pages past the end yield consistent metadata rather than errors.
        #[test]
        fn prop_beyond_last_page_is_consistent(
            total_matching in 0u64..10_000,
            page_size in 1u32..100,
            step in 1u32..100,
        ) {
            let total_pages = total_matching.div_ceil(u64::from(page_size));
            let beyond = u32::try_from(total_pages).unwrap_or(u32::MAX - 1).saturating_add(step);

            let metadata = PageMetadata::compute(total_matching, beyond, page_size);
            prop_assert_eq!(metadata.total_pages, total_pages);
            prop_assert!(!metadata.has_next_page);
        }
    }
}
