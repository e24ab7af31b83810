use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::modules::identity::domain::CallerIdentity;
use crate::shared::errors::AppResult;

/// Port for the authentication collaborator.
///
/// Resolves the caller of the current request. Implementations return
/// `AppError::Unauthorized` when no caller can be established; the core never
/// falls back to a default identity.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn current_caller(&self) -> AppResult<CallerIdentity>;
}
