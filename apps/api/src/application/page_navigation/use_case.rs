use super::dto::NavigationRequest;
use crate::domain::{picture::errors::DomainError, shared::pagination::PageNavigation};
use validator::Validate;

pub struct PageNavigationUseCase;

impl PageNavigationUseCase {
    /// Validate a client descriptor and compute the navigation control state for it.
    pub fn execute(request: NavigationRequest) -> Result<PageNavigation, DomainError> {
        request
            .validate()
            .map_err(|e| DomainError::ValidationError(e.to_string()))?;
        Ok(PageNavigation::from_pagination(request.into()))
    }
}
