use crate::{
    application::page_navigation::{dto::NavigationRequest, use_case::PageNavigationUseCase},
    domain::shared::pagination::PageNavigation,
    presentation::http::errors::AppError,
};
use axum::{
    Json,
    extract::{Query, rejection::QueryRejection},
};
use tracing::{debug, instrument};

/// Computes the page window and arrow state for an arbitrary descriptor.
///
/// # Query Parameters
/// - `current`: page being displayed (default 1)
/// - `page_size`: items per page, at least 1 (default 10)
/// - `total`: total item count, not negative (default 0)
///
/// # Errors
/// Returns `AppError::BadRequest` for unparseable parameters and
/// `AppError::ValidationError` for out-of-range `page_size` or `total`.
#[instrument(skip(params))]
pub async fn get_navigation(
    params: Result<Query<NavigationRequest>, QueryRejection>,
) -> Result<Json<PageNavigation>, AppError> {
    let Query(request) = params?;
    let navigation = PageNavigationUseCase::execute(request)?;

    debug!(
        page_count = navigation.page_count,
        pages = ?navigation.pages,
        "Page window computed"
    );
    Ok(Json(navigation))
}
