use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::{
    entities::{
        creators::CreatorEntity, monthly_trackings::MonthlyTrackingEntity,
        rush_assets::InsertRushAssetEntity, video_assets::InsertVideoAssetEntity,
    },
    repositories::creator_program::CreatorProgramRepository,
    value_objects::{
        enums::video_asset_statuses::VideoAssetStatus,
        uploads::{RecordRushUploadModel, RecordVideoUploadModel},
    },
};

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("creator not found")]
    CreatorNotFound,
    #[error("tracking not found")]
    TrackingNotFound,
    #[error("tracking belongs to another creator")]
    Forbidden,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl UploadError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            UploadError::CreatorNotFound | UploadError::TrackingNotFound => StatusCode::NOT_FOUND,
            UploadError::Forbidden => StatusCode::FORBIDDEN,
            UploadError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UploadResult<T> = std::result::Result<T, UploadError>;

pub struct UploadsUseCase<R>
where
    R: CreatorProgramRepository + Send + Sync + 'static,
{
    repository: Arc<R>,
}

impl<R> UploadsUseCase<R>
where
    R: CreatorProgramRepository + Send + Sync + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn record_video_upload(
        &self,
        user_id: Uuid,
        upload: RecordVideoUploadModel,
    ) -> UploadResult<Uuid> {
        let (creator, tracking) = self
            .load_owned_tracking(user_id, upload.monthly_tracking_id)
            .await?;

        let asset_id = self
            .repository
            .create_video_asset(InsertVideoAssetEntity {
                monthly_tracking_id: tracking.id,
                creator_id: creator.id,
                video_type: upload.video_type.to_string(),
                file_url: upload.file_url,
                duration_seconds: upload.duration_seconds,
                resolution: upload.resolution,
                file_size_mb: upload.file_size_mb,
                status: VideoAssetStatus::PendingReview.to_string(),
            })
            .await
            .map_err(|err| {
                error!(
                    %user_id,
                    tracking_id = %tracking.id,
                    db_error = ?err,
                    "uploads: failed to create video asset"
                );
                UploadError::Internal(err)
            })?;

        info!(
            %user_id,
            tracking_id = %tracking.id,
            %asset_id,
            video_type = %upload.video_type,
            "uploads: video asset recorded for review"
        );

        Ok(asset_id)
    }

    pub async fn record_rush_upload(
        &self,
        user_id: Uuid,
        upload: RecordRushUploadModel,
    ) -> UploadResult<Uuid> {
        let (creator, tracking) = self
            .load_owned_tracking(user_id, upload.monthly_tracking_id)
            .await?;

        let asset_id = self
            .repository
            .create_rush_asset(InsertRushAssetEntity {
                monthly_tracking_id: tracking.id,
                creator_id: creator.id,
                file_name: upload.file_name,
                file_url: upload.file_url,
                file_size_mb: upload.file_size_mb,
            })
            .await
            .map_err(|err| {
                error!(
                    %user_id,
                    tracking_id = %tracking.id,
                    db_error = ?err,
                    "uploads: failed to create rush asset"
                );
                UploadError::Internal(err)
            })?;

        info!(
            %user_id,
            tracking_id = %tracking.id,
            %asset_id,
            "uploads: rush asset recorded"
        );

        Ok(asset_id)
    }

    /// Gate chain shared by both upload kinds: the creator must exist, the
    /// tracking row must exist, and the row must belong to that creator.
    /// Every failure happens before any write.
    async fn load_owned_tracking(
        &self,
        user_id: Uuid,
        tracking_id: Uuid,
    ) -> UploadResult<(CreatorEntity, MonthlyTrackingEntity)> {
        let creator = self
            .repository
            .find_creator_by_user_id(user_id)
            .await
            .map_err(|err| {
                error!(%user_id, db_error = ?err, "uploads: failed to load creator");
                UploadError::Internal(err)
            })?
            .ok_or_else(|| {
                warn!(%user_id, "uploads: no creator for user");
                UploadError::CreatorNotFound
            })?;

        let tracking = self
            .repository
            .find_tracking_by_id(tracking_id)
            .await
            .map_err(|err| {
                error!(
                    %user_id,
                    %tracking_id,
                    db_error = ?err,
                    "uploads: failed to load tracking"
                );
                UploadError::Internal(err)
            })?
            .ok_or_else(|| {
                warn!(%user_id, %tracking_id, "uploads: tracking not found");
                UploadError::TrackingNotFound
            })?;

        if tracking.creator_id != creator.id {
            warn!(
                %user_id,
                %tracking_id,
                owner_id = %tracking.creator_id,
                creator_id = %creator.id,
                "uploads: tracking owned by another creator"
            );
            return Err(UploadError::Forbidden);
        }

        Ok((creator, tracking))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mockall::predicate::eq;

    use crate::domain::{
        repositories::creator_program::MockCreatorProgramRepository,
        value_objects::{
            enums::{
                creator_statuses::CreatorStatus,
                tracking_payment_statuses::TrackingPaymentStatus, video_types::VideoType,
            },
            tracking::VideoTypeCount,
        },
    };

    fn sample_creator(user_id: Uuid) -> CreatorEntity {
        CreatorEntity {
            id: Uuid::new_v4(),
            user_id,
            handle: "lea.move".to_string(),
            status: CreatorStatus::Actif.to_string(),
            package_tier: 20,
            created_at: Utc::now(),
        }
    }

    fn sample_tracking(creator_id: Uuid) -> MonthlyTrackingEntity {
        MonthlyTrackingEntity {
            id: Uuid::new_v4(),
            creator_id,
            month: "2025-07".to_string(),
            quotas: VideoTypeCount::default(),
            delivered: VideoTypeCount::default(),
            monthly_credits: 25,
            payment_status: TrackingPaymentStatus::Pending.to_string(),
            paid_at: None,
            created_at: Utc::now(),
        }
    }

    fn video_upload(tracking_id: Uuid) -> RecordVideoUploadModel {
        RecordVideoUploadModel {
            monthly_tracking_id: tracking_id,
            video_type: VideoType::Ootd,
            file_url: "https://cdn.example.com/v/1.mp4".to_string(),
            duration_seconds: Some(42),
            resolution: Some("1080x1920".to_string()),
            file_size_mb: Some(87.5),
        }
    }

    #[tokio::test]
    async fn records_video_asset_as_pending_review() {
        let user_id = Uuid::new_v4();
        let creator = sample_creator(user_id);
        let tracking = sample_tracking(creator.id);
        let tracking_id = tracking.id;
        let asset_id = Uuid::new_v4();

        let mut repository = MockCreatorProgramRepository::new();
        let found_creator = creator.clone();
        repository
            .expect_find_creator_by_user_id()
            .with(eq(user_id))
            .returning(move |_| Ok(Some(found_creator.clone())));
        repository
            .expect_find_tracking_by_id()
            .with(eq(tracking_id))
            .returning(move |_| Ok(Some(tracking.clone())));
        repository
            .expect_create_video_asset()
            .withf(move |insert| {
                insert.status == "pending_review"
                    && insert.video_type == "OOTD"
                    && insert.monthly_tracking_id == tracking_id
            })
            .returning(move |_| Ok(asset_id));

        let usecase = UploadsUseCase::new(Arc::new(repository));
        let recorded = usecase
            .record_video_upload(user_id, video_upload(tracking_id))
            .await
            .unwrap();

        assert_eq!(recorded, asset_id);
    }

    #[tokio::test]
    async fn rejects_video_upload_for_unknown_creator() {
        let user_id = Uuid::new_v4();

        let mut repository = MockCreatorProgramRepository::new();
        repository
            .expect_find_creator_by_user_id()
            .with(eq(user_id))
            .returning(|_| Ok(None));

        // No create expectation: a write would panic the mock.
        let usecase = UploadsUseCase::new(Arc::new(repository));
        let err = usecase
            .record_video_upload(user_id, video_upload(Uuid::new_v4()))
            .await
            .unwrap_err();

        assert!(matches!(err, UploadError::CreatorNotFound));
    }

    #[tokio::test]
    async fn rejects_video_upload_for_unknown_tracking() {
        let user_id = Uuid::new_v4();
        let creator = sample_creator(user_id);

        let mut repository = MockCreatorProgramRepository::new();
        repository
            .expect_find_creator_by_user_id()
            .returning(move |_| Ok(Some(creator.clone())));
        repository
            .expect_find_tracking_by_id()
            .returning(|_| Ok(None));

        let usecase = UploadsUseCase::new(Arc::new(repository));
        let err = usecase
            .record_video_upload(user_id, video_upload(Uuid::new_v4()))
            .await
            .unwrap_err();

        assert!(matches!(err, UploadError::TrackingNotFound));
    }

    #[tokio::test]
    async fn rejects_upload_against_foreign_tracking() {
        let user_id = Uuid::new_v4();
        let creator = sample_creator(user_id);
        let foreign_tracking = sample_tracking(Uuid::new_v4());
        let tracking_id = foreign_tracking.id;

        let mut repository = MockCreatorProgramRepository::new();
        repository
            .expect_find_creator_by_user_id()
            .returning(move |_| Ok(Some(creator.clone())));
        repository
            .expect_find_tracking_by_id()
            .with(eq(tracking_id))
            .returning(move |_| Ok(Some(foreign_tracking.clone())));

        let usecase = UploadsUseCase::new(Arc::new(repository));
        let err = usecase
            .record_video_upload(user_id, video_upload(tracking_id))
            .await
            .unwrap_err();

        assert!(matches!(err, UploadError::Forbidden));
    }

    #[tokio::test]
    async fn rush_upload_shares_the_ownership_gate() {
        let user_id = Uuid::new_v4();
        let creator = sample_creator(user_id);
        let foreign_tracking = sample_tracking(Uuid::new_v4());
        let tracking_id = foreign_tracking.id;

        let mut repository = MockCreatorProgramRepository::new();
        repository
            .expect_find_creator_by_user_id()
            .returning(move |_| Ok(Some(creator.clone())));
        repository
            .expect_find_tracking_by_id()
            .returning(move |_| Ok(Some(foreign_tracking.clone())));

        let usecase = UploadsUseCase::new(Arc::new(repository));
        let err = usecase
            .record_rush_upload(
                user_id,
                RecordRushUploadModel {
                    monthly_tracking_id: tracking_id,
                    file_name: "rush-01.mov".to_string(),
                    file_url: "https://cdn.example.com/r/1.mov".to_string(),
                    file_size_mb: Some(512.0),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, UploadError::Forbidden));
    }
}
