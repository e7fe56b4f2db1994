use crate::{
    config::Config,
    domain::{
        picture::{
            entity::{Picture, Variants, generate_url, thumbnail_name},
            repository::PictureRepository,
        },
        shared::pagination::PageList,
    },
};
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Fixed, in-memory picture dataset standing in for real storage.
///
/// Built once at startup from [`Config`] and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct InMemoryPictureRepository {
    pictures: Vec<Picture>,
}

impl InMemoryPictureRepository {
    pub fn new(pictures: Vec<Picture>) -> Self {
        Self { pictures }
    }

    /// Synthesize `config.mock_picture_count` pictures, each exposing every configured variant.
    pub fn from_config(config: &Config) -> Self {
        let thumbnail = thumbnail_name(
            config.picture_thumbnail.as_deref(),
            &config.picture_variants,
        );

        let pictures: Vec<Picture> = (0..config.mock_picture_count)
            .map(|position| {
                let id = picture_id(position);
                let pictures: Variants = config
                    .picture_variants
                    .iter()
                    .map(|variant| {
                        let url = generate_url(
                            &config.public_base_url,
                            &config.picture_partition,
                            variant,
                            &id,
                        );
                        (variant.clone(), url)
                    })
                    .collect();

                Picture {
                    id,
                    thumbnail: thumbnail.clone(),
                    pictures,
                }
            })
            .collect();

        info!(
            count = pictures.len(),
            partition = %config.picture_partition,
            "Mock picture dataset ready"
        );
        Self::new(pictures)
    }
}

/// Deterministic 32-hex identifier for the picture at `position`.
fn picture_id(position: usize) -> String {
    Uuid::from_u128(position as u128 + 1).simple().to_string()
}

impl PictureRepository for InMemoryPictureRepository {
    #[instrument(skip(self))]
    fn list(&self, current: i64, page_size: i64) -> PageList<Picture> {
        let page = PageList::slice(&self.pictures, current, page_size);
        debug!(
            "Listed {} of {} pictures for page {}",
            page.list.len(),
            page.pagination.total,
            current
        );
        page
    }

    fn find_by_id(&self, id: &str) -> Option<Picture> {
        self.pictures.iter().find(|p| p.id == id).cloned()
    }

    fn count(&self) -> i64 {
        self.pictures.len() as i64
    }
}
