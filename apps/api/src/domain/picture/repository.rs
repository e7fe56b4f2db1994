use super::entity::Picture;
use crate::domain::shared::pagination::PageList;

/// Read-only access to a fixed collection of pictures.
///
/// Implementations are total: a page past the end is an empty page, never an error.
#[cfg_attr(test, mockall::automock)]
pub trait PictureRepository: Send + Sync {
    /// Page `current` (1-based) of `page_size` pictures.
    fn list(&self, current: i64, page_size: i64) -> PageList<Picture>;
    fn find_by_id(&self, id: &str) -> Option<Picture>;
    fn count(&self) -> i64;
}
