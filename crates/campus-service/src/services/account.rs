//! Account service
//!
//! Resolves bearer tokens issued by the identity provider to profiles and
//! lets owners edit their own profile.

use campus_common::AppError;
use campus_core::{Account, DomainError, MAX_BIO_LENGTH, MAX_NAME_LENGTH};
use tracing::{debug, info, instrument};

use crate::dto::{CurrentAccountResponse, UpdateProfileRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::feedback::clean_text;

/// Account service
pub struct AccountService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AccountService<'a> {
    /// Create a new AccountService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Verify a token and load the caller's profile
    ///
    /// A valid token for an account without a profile is treated as invalid.
    #[instrument(skip(self, token))]
    pub async fn authenticate(&self, token: &str) -> ServiceResult<Account> {
        let account_id = self.ctx.jwt_service().verify(token)?;
        match self.ctx.account_repo().find_by_id(account_id).await? {
            Some(account) => Ok(account),
            None => {
                debug!(account_id = %account_id, "Token subject has no profile");
                Err(AppError::InvalidToken.into())
            }
        }
    }

    /// Edit the caller's name, bio, or image
    ///
    /// Only supplied fields change, and the store is written only when
    /// something actually differs.
    #[instrument(skip(self, caller, request), fields(caller = %caller.id))]
    pub async fn update_profile(
        &self,
        caller: &Account,
        request: UpdateProfileRequest,
    ) -> ServiceResult<CurrentAccountResponse> {
        let mut account = caller.clone();
        let mut changed = false;

        if let Some(full_name) = request.full_name {
            let full_name = clean_text("Full name", &full_name, MAX_NAME_LENGTH)?;
            if full_name != account.full_name {
                account.full_name = full_name;
                changed = true;
            }
        }

        if let Some(bio) = request.bio {
            let bio = Some(bio.trim().to_string()).filter(|b| !b.is_empty());
            if bio.as_ref().is_some_and(|b| b.chars().count() > MAX_BIO_LENGTH) {
                return Err(DomainError::ContentTooLong { max: MAX_BIO_LENGTH }.into());
            }
            if bio != account.bio {
                account.bio = bio;
                changed = true;
            }
        }

        if let Some(url) = request.profile_image_url {
            let url = Some(url.trim().to_string());
            if url != account.profile_image_url {
                account.profile_image_url = url;
                changed = true;
            }
        }

        if changed {
            self.ctx.account_repo().update_profile(&account).await?;
            info!(account_id = %account.id, "Profile updated");
        }

        Ok(CurrentAccountResponse::from(&account))
    }
}
