use crate::{config::Config, domain::picture::repository::PictureRepository};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub picture_repo: Arc<dyn PictureRepository>,
}
