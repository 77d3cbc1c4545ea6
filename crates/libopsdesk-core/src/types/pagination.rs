use crate::types::SortDirection;
use serde::Serialize;
use thiserror::Error;

type Result<T> = std::result::Result<T, PaginationError>;

/// Largest page size the API accepts.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Pagination arguments, validated at construction so a document can never
/// be built from an out-of-range page request.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct PaginationArgs {
    page: u32,
    page_size: u32,
}

impl PaginationArgs {
    /// Requires `page >= 1` and `page_size` in `1..=1000`.
    pub fn new(page: u32, page_size: u32) -> Result<Self> {
        if page < 1 {
            return Err(PaginationError::PageOutOfRange { page });
        }
        if page_size < 1 || page_size > MAX_PAGE_SIZE {
            return Err(PaginationError::PageSizeOutOfRange { page_size });
        }
        Ok(Self { page, page_size })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }
}

impl Default for PaginationArgs {
    /// First page of 50, the API's defaults.
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 50,
        }
    }
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum PaginationError {
    #[error("Page must be >= 1 (got {page})")]
    PageOutOfRange { page: u32 },

    #[error("Page size must be between 1 and {MAX_PAGE_SIZE} (got {page_size})")]
    PageSizeOutOfRange { page_size: u32 },
}

/// Sort arguments for list queries.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SortArgs {
    /// Wire-format field name to sort by (e.g. `"createdAt"`).
    pub field: String,
    pub direction: SortDirection,
}

impl SortArgs {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn ascending(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }
}
