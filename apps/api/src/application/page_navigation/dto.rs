use crate::domain::shared::pagination::{PAGE_SIZE, Pagination};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::Validate;

/// Pagination descriptor as supplied by a client, with defaults for absent fields.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Validate)]
#[ts(export)]
pub struct NavigationRequest {
    /// Page being displayed, 1-based (default 1). Out-of-range values are tolerated.
    #[serde(default = "default_current")]
    pub current: i64,

    /// Items per page (default 10)
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, message = "page_size must be at least 1"))]
    pub page_size: i64,

    /// Total number of items across all pages (default 0)
    #[serde(default)]
    #[validate(range(min = 0, message = "total must not be negative"))]
    pub total: i64,
}

fn default_current() -> i64 {
    1
}

fn default_page_size() -> i64 {
    PAGE_SIZE
}

impl From<NavigationRequest> for Pagination {
    fn from(request: NavigationRequest) -> Self {
        Pagination::new(request.current, request.page_size, request.total)
    }
}
