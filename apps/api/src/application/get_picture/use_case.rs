use crate::domain::picture::{
    entity::Picture, errors::DomainError, repository::PictureRepository,
};
use std::sync::Arc;

pub struct GetPictureUseCase {
    repository: Arc<dyn PictureRepository>,
}

impl GetPictureUseCase {
    pub fn new(repository: Arc<dyn PictureRepository>) -> Self {
        Self { repository }
    }

    pub fn execute(&self, id: &str) -> Result<Picture, DomainError> {
        self.repository
            .find_by_id(id)
            .ok_or_else(|| DomainError::NotFound(format!("Picture {id} not found")))
    }
}
