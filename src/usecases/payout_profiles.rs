use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::{
    entities::payout_profiles::{PayoutProfileEntity, UpsertPayoutProfileEntity},
    repositories::creator_program::CreatorProgramRepository,
    value_objects::{
        enums::payout_methods::PayoutMethod, payout_profiles::SavePayoutProfileModel,
    },
};

#[derive(Debug, Error)]
pub enum PayoutProfileError {
    #[error("creator not found")]
    CreatorNotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl PayoutProfileError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            PayoutProfileError::CreatorNotFound => StatusCode::NOT_FOUND,
            PayoutProfileError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type PayoutProfileResult<T> = std::result::Result<T, PayoutProfileError>;

#[derive(Debug, Serialize)]
pub struct PayoutProfileDto {
    pub method: PayoutMethod,
    pub account_holder_name: Option<String>,
    pub iban: Option<String>,
    pub paypal_email: Option<String>,
    pub stripe_account: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl From<PayoutProfileEntity> for PayoutProfileDto {
    fn from(value: PayoutProfileEntity) -> Self {
        Self {
            method: PayoutMethod::from_str(&value.method),
            account_holder_name: value.account_holder_name,
            iban: value.iban,
            paypal_email: value.paypal_email,
            stripe_account: value.stripe_account,
            updated_at: value.updated_at,
        }
    }
}

pub struct PayoutProfileUseCase<R>
where
    R: CreatorProgramRepository + Send + Sync + 'static,
{
    repository: Arc<R>,
}

impl<R> PayoutProfileUseCase<R>
where
    R: CreatorProgramRepository + Send + Sync + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn get_profile(&self, user_id: Uuid) -> PayoutProfileResult<Option<PayoutProfileDto>> {
        let creator_id = self.find_creator(user_id).await?;

        let profile = self
            .repository
            .find_payout_profile(creator_id)
            .await
            .map_err(|err| {
                error!(%user_id, db_error = ?err, "payout_profiles: failed to load profile");
                PayoutProfileError::Internal(err)
            })?;

        Ok(profile.map(PayoutProfileDto::from))
    }

    /// Full upsert: one profile per creator, previous values overwritten and
    /// unsupplied fields cleared.
    pub async fn save_profile(
        &self,
        user_id: Uuid,
        profile: SavePayoutProfileModel,
    ) -> PayoutProfileResult<()> {
        let creator_id = self.find_creator(user_id).await?;

        self.repository
            .upsert_payout_profile(UpsertPayoutProfileEntity {
                creator_id,
                method: profile.method.to_string(),
                account_holder_name: profile.account_holder_name,
                iban: profile.iban,
                paypal_email: profile.paypal_email,
                stripe_account: profile.stripe_account,
                updated_at: Utc::now(),
            })
            .await
            .map_err(|err| {
                error!(%user_id, db_error = ?err, "payout_profiles: failed to upsert profile");
                PayoutProfileError::Internal(err)
            })?;

        info!(
            %user_id,
            %creator_id,
            method = %profile.method,
            "payout_profiles: profile saved"
        );

        Ok(())
    }

    async fn find_creator(&self, user_id: Uuid) -> PayoutProfileResult<Uuid> {
        let creator = self
            .repository
            .find_creator_by_user_id(user_id)
            .await
            .map_err(|err| {
                error!(%user_id, db_error = ?err, "payout_profiles: failed to load creator");
                PayoutProfileError::Internal(err)
            })?
            .ok_or_else(|| {
                warn!(%user_id, "payout_profiles: no creator for user");
                PayoutProfileError::CreatorNotFound
            })?;

        Ok(creator.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    use crate::domain::{
        entities::creators::CreatorEntity,
        repositories::creator_program::MockCreatorProgramRepository,
        value_objects::enums::creator_statuses::CreatorStatus,
    };

    fn sample_creator(user_id: Uuid) -> CreatorEntity {
        CreatorEntity {
            id: Uuid::new_v4(),
            user_id,
            handle: "marco.lift".to_string(),
            status: CreatorStatus::Actif.to_string(),
            package_tier: 30,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn save_requires_an_existing_creator() {
        let user_id = Uuid::new_v4();

        let mut repository = MockCreatorProgramRepository::new();
        repository
            .expect_find_creator_by_user_id()
            .with(eq(user_id))
            .returning(|_| Ok(None));

        let usecase = PayoutProfileUseCase::new(Arc::new(repository));
        let err = usecase
            .save_profile(
                user_id,
                SavePayoutProfileModel {
                    method: PayoutMethod::Paypal,
                    account_holder_name: None,
                    iban: None,
                    paypal_email: Some("lea@example.com".to_string()),
                    stripe_account: None,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, PayoutProfileError::CreatorNotFound));
    }

    #[tokio::test]
    async fn save_clears_fields_not_supplied() {
        let user_id = Uuid::new_v4();
        let creator = sample_creator(user_id);
        let creator_id = creator.id;

        let mut repository = MockCreatorProgramRepository::new();
        repository
            .expect_find_creator_by_user_id()
            .returning(move |_| Ok(Some(creator.clone())));
        repository
            .expect_upsert_payout_profile()
            .withf(move |upsert| {
                upsert.creator_id == creator_id
                    && upsert.method == "paypal"
                    && upsert.iban.is_none()
                    && upsert.paypal_email.as_deref() == Some("lea@example.com")
            })
            .returning(|_| Ok(()));

        let usecase = PayoutProfileUseCase::new(Arc::new(repository));
        usecase
            .save_profile(
                user_id,
                SavePayoutProfileModel {
                    method: PayoutMethod::Paypal,
                    account_holder_name: None,
                    iban: None,
                    paypal_email: Some("lea@example.com".to_string()),
                    stripe_account: None,
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn get_profile_passes_through_absence() {
        let user_id = Uuid::new_v4();
        let creator = sample_creator(user_id);
        let creator_id = creator.id;

        let mut repository = MockCreatorProgramRepository::new();
        repository
            .expect_find_creator_by_user_id()
            .returning(move |_| Ok(Some(creator.clone())));
        repository
            .expect_find_payout_profile()
            .with(eq(creator_id))
            .returning(|_| Ok(None));

        let usecase = PayoutProfileUseCase::new(Arc::new(repository));
        let profile = usecase.get_profile(user_id).await.unwrap();

        assert!(profile.is_none());
    }
}
