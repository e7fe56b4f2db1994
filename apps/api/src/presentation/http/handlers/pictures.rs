use crate::{
    application::{
        get_picture::use_case::GetPictureUseCase,
        list_pictures::{dto::GalleryPageResponse, use_case::ListPicturesUseCase},
    },
    domain::{picture::entity::Picture, shared::pagination::PageList},
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use serde::Deserialize;
use tracing::{debug, info, instrument};

/// Query parameters for the picture list.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    /// Page to return, 1-based (default 1). Any integer is accepted.
    #[serde(default = "default_current")]
    current: i64,
}

fn default_current() -> i64 {
    1
}

/// Returns one page of ten pictures and the descriptor that produced it.
///
/// Pages past the end come back empty with `current` echoed unchanged.
#[instrument(skip(state, params))]
pub async fn list_pictures(
    State(state): State<AppState>,
    params: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<PageList<Picture>>, AppError> {
    let Query(params) = params?;
    let page = ListPicturesUseCase::new(state.picture_repo.clone()).execute(params.current);

    info!(
        "Picture page {} returned {} of {} pictures",
        params.current,
        page.list.len(),
        page.pagination.total
    );
    Ok(Json(page))
}

/// Same page as [`list_pictures`], with the navigation control state attached.
#[instrument(skip(state, params))]
pub async fn browse_gallery(
    State(state): State<AppState>,
    params: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<GalleryPageResponse>, AppError> {
    let Query(params) = params?;
    let response = ListPicturesUseCase::new(state.picture_repo.clone()).browse(params.current);

    debug!(pages = ?response.navigation.pages, "Gallery navigation computed");
    Ok(Json(response))
}

#[instrument(skip(state))]
pub async fn get_picture(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Picture>, AppError> {
    let picture = GetPictureUseCase::new(state.picture_repo.clone()).execute(&id)?;
    Ok(Json(picture))
}
