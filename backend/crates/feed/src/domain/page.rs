//! Pagination

/// Posts per page
pub const PAGE_SIZE: u64 = 2;

/// A 1-based page; anything absent or below 1 becomes page 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
}

impl PageRequest {
    pub fn new(page: Option<i64>) -> Self {
        let page = page
            .filter(|p| *p >= 1)
            .and_then(|p| u64::try_from(p).ok())
            .unwrap_or(1);
        Self { page }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(PAGE_SIZE)
    }

    pub fn limit(&self) -> u64 {
        PAGE_SIZE
    }
}
