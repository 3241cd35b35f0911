//! Token-based pagination utilities for Compass API responses.

use serde::{Deserialize, Serialize};

use crate::error::{CompassError, Result};

/// Default page size for project search.
pub const DEFAULT_PROJECTS_PAGE_SIZE: u32 = 100;
/// Minimum page size accepted by project search.
pub const MINIMUM_PROJECTS_PAGE_SIZE: u32 = 1;
/// Maximum page size accepted by project search.
pub const MAXIMUM_PROJECTS_PAGE_SIZE: u32 = 500;
/// Minimum search offset a project-search page token may carry.
pub const MINIMUM_PROJECTS_SEARCH_OFFSET: u32 = 0;
/// Maximum search offset a project-search page token may carry.
pub const MAXIMUM_PROJECTS_SEARCH_OFFSET: u32 = 500;

/// One page of a cursor-based listing.
///
/// An absent `nextPageToken` means there are no further results.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPage<T> {
    /// The items on this page.
    #[serde(default = "Vec::new")]
    pub values: Vec<T>,
    /// Resumption token for the next page, if any.
    #[serde(default)]
    pub next_page_token: Option<String>,
}

impl<T> TokenPage<T> {
    /// Returns true if this page has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if a further page can be requested.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.next_page_token.is_some()
    }

    /// Returns an iterator over the items in this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }
}

impl<T> IntoIterator for TokenPage<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a TokenPage<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Clamp a project-search page size into the accepted range.
///
/// Out-of-range sizes are replaced by the nearest boundary with a warning,
/// never an error.
#[must_use]
pub fn clamp_page_size(page_size: u32) -> u32 {
    if page_size < MINIMUM_PROJECTS_PAGE_SIZE {
        tracing::warn!(
            page_size,
            minimum = MINIMUM_PROJECTS_PAGE_SIZE,
            "page_size is less than the minimum page size, defaulting to the minimum"
        );
        MINIMUM_PROJECTS_PAGE_SIZE
    } else if page_size > MAXIMUM_PROJECTS_PAGE_SIZE {
        tracing::warn!(
            page_size,
            maximum = MAXIMUM_PROJECTS_PAGE_SIZE,
            "page_size is greater than the maximum page size, defaulting to the maximum"
        );
        MAXIMUM_PROJECTS_PAGE_SIZE
    } else {
        page_size
    }
}

/// Validate a project-search page token before any request is sent.
///
/// The token must be a string of decimal digits whose value is a search
/// offset in `MINIMUM_PROJECTS_SEARCH_OFFSET..=MAXIMUM_PROJECTS_SEARCH_OFFSET`.
/// Returns the parsed offset.
///
/// # Errors
///
/// Returns [`CompassError::InvalidPageToken`] for any other shape; this is
/// a caller contract violation, never retried.
pub fn validate_search_offset(page_token: &str) -> Result<u32> {
    if page_token.is_empty() || !page_token.chars().all(|c| c.is_ascii_digit()) {
        return Err(CompassError::InvalidPageToken {
            token: page_token.to_string(),
            reason: format!(
                "expected a decimal search offset in the range {MINIMUM_PROJECTS_SEARCH_OFFSET} \
                 to {MAXIMUM_PROJECTS_SEARCH_OFFSET}"
            ),
        });
    }

    let offset: u64 = page_token.parse().map_err(|_| CompassError::InvalidPageToken {
        token: page_token.to_string(),
        reason: "offset does not fit in an integer".to_string(),
    })?;

    // Digits-only input cannot fall below the minimum offset of 0.
    if offset > u64::from(MAXIMUM_PROJECTS_SEARCH_OFFSET) {
        return Err(CompassError::InvalidPageToken {
            token: page_token.to_string(),
            reason: format!("offset is greater than the maximum search offset ({MAXIMUM_PROJECTS_SEARCH_OFFSET})"),
        });
    }

    Ok(offset as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_page_size_boundaries() {
        assert_eq!(clamp_page_size(MINIMUM_PROJECTS_PAGE_SIZE - 1), MINIMUM_PROJECTS_PAGE_SIZE);
        assert_eq!(clamp_page_size(MINIMUM_PROJECTS_PAGE_SIZE), MINIMUM_PROJECTS_PAGE_SIZE);
        assert_eq!(clamp_page_size(MAXIMUM_PROJECTS_PAGE_SIZE), MAXIMUM_PROJECTS_PAGE_SIZE);
        assert_eq!(clamp_page_size(MAXIMUM_PROJECTS_PAGE_SIZE + 1), MAXIMUM_PROJECTS_PAGE_SIZE);
        assert_eq!(clamp_page_size(42), 42);
    }

    #[test]
    fn test_validate_search_offset_accepts_range() {
        assert_eq!(validate_search_offset("0").unwrap(), 0);
        assert_eq!(validate_search_offset("500").unwrap(), 500);
        assert_eq!(validate_search_offset("250").unwrap(), 250);
    }

    #[test]
    fn test_validate_search_offset_rejects_non_decimal() {
        assert!(matches!(
            validate_search_offset("abcd"),
            Err(CompassError::InvalidPageToken { .. })
        ));
        // Signs are not decimal digits
        assert!(validate_search_offset("-1").is_err());
        assert!(validate_search_offset("+5").is_err());
        assert!(validate_search_offset("").is_err());
    }

    #[test]
    fn test_validate_search_offset_rejects_out_of_range() {
        assert!(matches!(
            validate_search_offset("501"),
            Err(CompassError::InvalidPageToken { .. })
        ));
        assert!(validate_search_offset("99999999999999999999").is_err());
    }

    #[test]
    fn test_token_page_deserializes_null_token() {
        let page: TokenPage<u32> =
            serde_json::from_str(r#"{"values":[1,2,3],"nextPageToken":null}"#).unwrap();
        assert_eq!(page.len(), 3);
        assert!(!page.has_more());
    }
}
