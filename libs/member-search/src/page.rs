//! Paging requests and page results.
//!
//! `PageRequest` validates its bounds on construction, so nonsensical
//! offsets and page sizes never reach the store. `Page` carries the bounded
//! content slice plus the total count of the unbounded set under the same
//! filter.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};

/// Sort direction for an explicitly requested order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDir {
    #[serde(rename = "asc")]
    Asc,
    #[serde(rename = "desc")]
    Desc,
}

/// The closed set of sortable projection fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    MemberId,
    Username,
    Age,
    TeamName,
}

/// One explicit ordering key.
///
/// Unpaged `search` leaves result order up to the backing store; paging
/// only behaves deterministically when the caller imposes an order here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    pub field: SortField,
    pub dir: SortDir,
}

/// A validated offset/limit window, optionally with an explicit order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    offset: u64,
    page_size: u64,
    order: Option<OrderBy>,
}

impl PageRequest {
    /// Validate paging bounds supplied by a caller.
    ///
    /// Signed inputs are deliberate: requests arrive from the outside world,
    /// and a negative offset must be rejected here rather than wrap into a
    /// huge unsigned value.
    ///
    /// # Errors
    /// Returns [`SearchError::InvalidArgument`] when `offset` is negative or
    /// `page_size` is not positive.
    pub fn new(offset: i64, page_size: i64) -> Result<Self> {
        let offset = u64::try_from(offset).map_err(|_| {
            SearchError::InvalidArgument(format!("offset must not be negative, got {offset}"))
        })?;
        let page_size = match u64::try_from(page_size) {
            Ok(size) if size > 0 => size,
            _ => {
                return Err(SearchError::InvalidArgument(format!(
                    "page size must be positive, got {page_size}"
                )));
            }
        };
        Ok(Self {
            offset,
            page_size,
            order: None,
        })
    }

    /// Request an explicit order for deterministic paging.
    #[must_use]
    pub fn with_order(mut self, field: SortField, dir: SortDir) -> Self {
        self.order = Some(OrderBy { field, dir });
        self
    }

    #[must_use]
    pub fn offset(&self) -> u64 {
        self.offset
    }

    #[must_use]
    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    #[must_use]
    pub fn order(&self) -> Option<OrderBy> {
        self.order
    }

    /// Total proven by a short page, if any.
    ///
    /// Fetching fewer rows than the page size means the data ran out, so
    /// `total = offset + fetched` and the count query can be skipped. The
    /// one blind spot: an empty page at a nonzero offset only proves
    /// `total <= offset`, so that case returns `None` and the count query
    /// must run.
    pub(crate) fn proven_total(&self, fetched: usize) -> Option<u64> {
        let fetched = u64::try_from(fetched).unwrap_or(u64::MAX);
        if fetched < self.page_size && (self.offset == 0 || fetched > 0) {
            Some(self.offset + fetched)
        } else {
            None
        }
    }
}

/// A bounded slice of a result set plus the total count of the unbounded
/// set under the same filter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total: u64,
    pub offset: u64,
    pub page_size: u64,
}

impl<T> Page<T> {
    pub(crate) fn assemble(content: Vec<T>, request: &PageRequest, total: u64) -> Self {
        let len = u64::try_from(content.len()).unwrap_or(u64::MAX);
        debug_assert!(len <= request.page_size());
        debug_assert!(total >= len);
        Self {
            content,
            total,
            offset: request.offset(),
            page_size: request.page_size(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// True when no further page exists under the same filter.
    #[must_use]
    pub fn is_last(&self) -> bool {
        let len = u64::try_from(self.content.len()).unwrap_or(u64::MAX);
        self.offset + len >= self.total
    }
}
