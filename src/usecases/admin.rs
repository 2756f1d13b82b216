use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::{
    entities::creator_applications::CreatorApplicationEntity,
    repositories::creator_program::CreatorProgramRepository,
    value_objects::enums::application_statuses::ApplicationStatus,
};

#[derive(Debug, Error)]
pub enum AdminError {
    #[error("tracking not found")]
    TrackingNotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AdminError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            AdminError::TrackingNotFound => StatusCode::NOT_FOUND,
            AdminError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type AdminResult<T> = std::result::Result<T, AdminError>;

#[derive(Debug, Serialize)]
pub struct ApplicationDto {
    pub id: Uuid,
    pub creator_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub instagram_handle: Option<String>,
    pub motivation: Option<String>,
    pub status: ApplicationStatus,
    pub submitted_at: Option<DateTime<Utc>>,
}

impl From<CreatorApplicationEntity> for ApplicationDto {
    fn from(value: CreatorApplicationEntity) -> Self {
        Self {
            id: value.id,
            creator_id: value.creator_id,
            full_name: value.full_name,
            email: value.email,
            instagram_handle: value.instagram_handle,
            motivation: value.motivation,
            status: ApplicationStatus::from_str(&value.status),
            submitted_at: value.submitted_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApplicationStatusCountDto {
    pub status: ApplicationStatus,
    pub count: i64,
}

#[derive(Debug, Serialize)]
pub struct AdminDashboardDto {
    pub total_applications: i64,
    pub status_counts: Vec<ApplicationStatusCountDto>,
}

pub struct AdminUseCase<R>
where
    R: CreatorProgramRepository + Send + Sync + 'static,
{
    repository: Arc<R>,
}

impl<R> AdminUseCase<R>
where
    R: CreatorProgramRepository + Send + Sync + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Aggregates application counts locally over the closed
    /// [`ApplicationStatus::ALL`] set, so statuses with no rows still show
    /// up with a count of 0.
    pub async fn dashboard(&self) -> AdminResult<AdminDashboardDto> {
        let applications = self
            .repository
            .list_applications(None)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "admin: failed to list applications");
                AdminError::Internal(err)
            })?;

        let status_counts = ApplicationStatus::ALL
            .iter()
            .map(|status| ApplicationStatusCountDto {
                status: *status,
                count: applications
                    .iter()
                    .filter(|application| {
                        ApplicationStatus::from_str(&application.status) == *status
                    })
                    .count() as i64,
            })
            .collect();

        Ok(AdminDashboardDto {
            total_applications: applications.len() as i64,
            status_counts,
        })
    }

    pub async fn list_applications(
        &self,
        status: Option<ApplicationStatus>,
    ) -> AdminResult<Vec<ApplicationDto>> {
        let applications = self
            .repository
            .list_applications(status)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "admin: failed to list applications");
                AdminError::Internal(err)
            })?;

        Ok(applications.into_iter().map(ApplicationDto::from).collect())
    }

    /// Set-or-clear semantics: `None` clears the paid timestamp instead of
    /// preserving a previous value.
    pub async fn mark_tracking_paid(
        &self,
        tracking_id: Uuid,
        paid_at: Option<DateTime<Utc>>,
    ) -> AdminResult<()> {
        let updated = self
            .repository
            .mark_tracking_paid(tracking_id, paid_at)
            .await
            .map_err(|err| {
                error!(
                    %tracking_id,
                    db_error = ?err,
                    "admin: failed to update tracking payment"
                );
                AdminError::Internal(err)
            })?;

        if !updated {
            warn!(%tracking_id, "admin: tracking not found for payment update");
            return Err(AdminError::TrackingNotFound);
        }

        info!(
            %tracking_id,
            paid = paid_at.is_some(),
            "admin: tracking payment updated"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    use crate::domain::repositories::creator_program::MockCreatorProgramRepository;

    fn sample_application(status: ApplicationStatus) -> CreatorApplicationEntity {
        CreatorApplicationEntity {
            id: Uuid::new_v4(),
            creator_id: Uuid::new_v4(),
            full_name: "Lea Martin".to_string(),
            email: "lea@example.com".to_string(),
            instagram_handle: Some("@lea.move".to_string()),
            motivation: None,
            status: status.to_string(),
            submitted_at: Some(Utc::now()),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn dashboard_counts_cover_every_status() {
        let applications = vec![
            sample_application(ApplicationStatus::PendingReview),
            sample_application(ApplicationStatus::PendingReview),
            sample_application(ApplicationStatus::Approved),
        ];

        let mut repository = MockCreatorProgramRepository::new();
        repository
            .expect_list_applications()
            .with(eq(None::<ApplicationStatus>))
            .returning(move |_| Ok(applications.clone()));

        let usecase = AdminUseCase::new(Arc::new(repository));
        let dashboard = usecase.dashboard().await.unwrap();

        assert_eq!(dashboard.total_applications, 3);
        assert_eq!(dashboard.status_counts.len(), ApplicationStatus::ALL.len());

        let count_for = |status: ApplicationStatus| {
            dashboard
                .status_counts
                .iter()
                .find(|entry| entry.status == status)
                .unwrap()
                .count
        };
        assert_eq!(count_for(ApplicationStatus::Draft), 0);
        assert_eq!(count_for(ApplicationStatus::PendingReview), 2);
        assert_eq!(count_for(ApplicationStatus::Approved), 1);
        assert_eq!(count_for(ApplicationStatus::Rejected), 0);
    }

    #[tokio::test]
    async fn mark_paid_maps_missing_row_to_not_found() {
        let tracking_id = Uuid::new_v4();

        let mut repository = MockCreatorProgramRepository::new();
        repository
            .expect_mark_tracking_paid()
            .returning(|_, _| Ok(false));

        let usecase = AdminUseCase::new(Arc::new(repository));
        let err = usecase
            .mark_tracking_paid(tracking_id, Some(Utc::now()))
            .await
            .unwrap_err();

        assert!(matches!(err, AdminError::TrackingNotFound));
    }

    #[tokio::test]
    async fn mark_paid_forwards_the_clear_request() {
        let tracking_id = Uuid::new_v4();

        let mut repository = MockCreatorProgramRepository::new();
        repository
            .expect_mark_tracking_paid()
            .with(eq(tracking_id), eq(None::<DateTime<Utc>>))
            .returning(|_, _| Ok(true));

        let usecase = AdminUseCase::new(Arc::new(repository));
        usecase.mark_tracking_paid(tracking_id, None).await.unwrap();
    }
}
