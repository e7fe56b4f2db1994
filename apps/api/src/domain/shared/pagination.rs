//! Pagination descriptor, page slicing and the visible page-number window.
//!
//! Every function here is total: out-of-range descriptors produce empty or
//! truncated results instead of errors. Callers that need stricter input
//! (the HTTP layer, for example) validate before calling in.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Number of items on a page of the picture list.
pub const PAGE_SIZE: i64 = 10;

/// Pages shown before the current one in a full window.
const WINDOW_BEFORE: i64 = 5;

/// Pages shown after the current one in a full window.
const WINDOW_AFTER: i64 = 4;

/// The `{current, page_size, total}` triple that fully determines pagination state.
///
/// `current` is 1-based and is allowed to point past the last page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Pagination {
    pub current: i64,
    pub page_size: i64,
    pub total: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current: 1,
            page_size: PAGE_SIZE,
            total: 0,
        }
    }
}

impl Pagination {
    pub fn new(current: i64, page_size: i64, total: i64) -> Self {
        Self {
            current,
            page_size,
            total,
        }
    }

    /// `ceil(total / page_size)`, or 0 for an empty or degenerate descriptor.
    pub fn page_count(&self) -> i64 {
        if self.total <= 0 || self.page_size <= 0 {
            return 0;
        }
        self.total / self.page_size + i64::from(self.total % self.page_size != 0)
    }

    /// Half-open index range `[start, end)` covered by the current page.
    ///
    /// Not clamped: `start` is negative for `current <= 0` and may exceed `total`.
    pub fn bounds(&self) -> (i64, i64) {
        let start = self.current.saturating_sub(1).saturating_mul(self.page_size);
        (start, start.saturating_add(self.page_size))
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.page_count()
    }
}

/// One page of items together with the descriptor that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PageList<T> {
    pub list: Vec<T>,
    pub pagination: Pagination,
}

impl<T: Clone> PageList<T> {
    /// Slice `items` for the page `current` of size `page_size`.
    ///
    /// Keeps every item whose index satisfies `start <= index < end`. The
    /// descriptor echoes `current` verbatim, even when the page is empty.
    pub fn slice(items: &[T], current: i64, page_size: i64) -> Self {
        let pagination = Pagination::new(current, page_size, items.len() as i64);
        let (start, end) = pagination.bounds();

        let list = items
            .iter()
            .enumerate()
            .filter(|(index, _)| {
                let index = *index as i64;
                index >= start && index < end
            })
            .map(|(_, item)| item.clone())
            .collect();

        Self { list, pagination }
    }
}

/// Page numbers to render as links, a window of about ten around `current`.
///
/// The window is anchored five pages before and four after `current`. Near
/// either end it is widened in the opposite direction so that more pages stay
/// visible, then clamped to `[1, page_count]`. Widening at the far end can
/// produce eleven pages.
pub fn page_window(pagination: &Pagination) -> Vec<i64> {
    let current = pagination.current;
    let page_count = pagination.page_count();

    let before_offset = current.saturating_sub(WINDOW_BEFORE);
    let mut left = before_offset.max(1);
    let mut right = current.saturating_add(WINDOW_AFTER).min(page_count);
    let after_offset = page_count
        .saturating_sub(current)
        .saturating_sub(WINDOW_BEFORE);

    if before_offset < 0 {
        right = page_count.min(right.saturating_sub(before_offset));
    }
    if after_offset < 0 {
        left = after_offset.saturating_add(left).max(1);
    }

    (left..=right).collect()
}

/// Everything a pagination control needs to draw itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PageNavigation {
    pub pagination: Pagination,
    pub page_count: i64,
    pub pages: Vec<i64>,
    /// Target of the "previous" arrow, `None` when it is disabled.
    pub previous: Option<i64>,
    /// Target of the "next" arrow, `None` when it is disabled.
    pub next: Option<i64>,
}

impl PageNavigation {
    pub fn from_pagination(pagination: Pagination) -> Self {
        Self {
            pagination,
            page_count: pagination.page_count(),
            pages: page_window(&pagination),
            previous: pagination.has_previous().then(|| pagination.current - 1),
            next: pagination.has_next().then(|| pagination.current + 1),
        }
    }

    pub fn previous_disabled(&self) -> bool {
        self.previous.is_none()
    }

    pub fn next_disabled(&self) -> bool {
        self.next.is_none()
    }
}
