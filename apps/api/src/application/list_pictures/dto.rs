use crate::domain::{
    picture::entity::Picture,
    shared::pagination::{PageList, PageNavigation, Pagination},
};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A page of pictures bundled with the navigation control state for it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GalleryPageResponse {
    pub list: Vec<Picture>,
    pub pagination: Pagination,
    pub navigation: PageNavigation,
}

impl From<PageList<Picture>> for GalleryPageResponse {
    fn from(page: PageList<Picture>) -> Self {
        let navigation = PageNavigation::from_pagination(page.pagination);
        Self {
            list: page.list,
            pagination: page.pagination,
            navigation,
        }
    }
}
