use super::dto::GalleryPageResponse;
use crate::domain::{
    picture::{entity::Picture, repository::PictureRepository},
    shared::pagination::{PAGE_SIZE, PageList},
};
use std::sync::Arc;

pub struct ListPicturesUseCase {
    repository: Arc<dyn PictureRepository>,
}

impl ListPicturesUseCase {
    pub fn new(repository: Arc<dyn PictureRepository>) -> Self {
        Self { repository }
    }

    /// Page `current` of the picture list, ten pictures per page.
    pub fn execute(&self, current: i64) -> PageList<Picture> {
        self.repository.list(current, PAGE_SIZE)
    }

    /// Same page as [`execute`](Self::execute), plus the navigation window derived from it.
    pub fn browse(&self, current: i64) -> GalleryPageResponse {
        self.execute(current).into()
    }
}
