use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::identity::application::IdentityProvider;
use crate::modules::identity::domain::{CallerIdentity, UserRepository};
use crate::shared::errors::{AppError, AppResult};

/// Resolves the caller from a user id claim issued by the authentication
/// layer, confirming the user is known to the catalog.
pub struct ClaimsIdentityProvider {
    claimed_user_id: Option<Uuid>,
    users: Arc<dyn UserRepository>,
}

impl ClaimsIdentityProvider {
    pub fn new(claimed_user_id: Option<Uuid>, users: Arc<dyn UserRepository>) -> Self {
        Self {
            claimed_user_id,
            users,
        }
    }
}

#[async_trait]
impl IdentityProvider for ClaimsIdentityProvider {
    async fn current_caller(&self) -> AppResult<CallerIdentity> {
        let Some(user_id) = self.claimed_user_id else {
            return Err(AppError::Unauthorized(
                "Request carries no user claim".to_string(),
            ));
        };

        let user = self.users.find_by_id(user_id).await?.ok_or_else(|| {
            AppError::Unauthorized(format!("Claimed user {} is not known", user_id))
        })?;

        Ok(CallerIdentity::from(&user))
    }
}

/// Identity fixed at construction time
pub struct StaticIdentityProvider {
    caller: Option<CallerIdentity>,
}

impl StaticIdentityProvider {
    pub fn signed_in(caller: CallerIdentity) -> Self {
        Self {
            caller: Some(caller),
        }
    }

    pub fn anonymous() -> Self {
        Self { caller: None }
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn current_caller(&self) -> AppResult<CallerIdentity> {
        self.caller
            .clone()
            .ok_or_else(|| AppError::Unauthorized("No caller is signed in".to_string()))
    }
}
