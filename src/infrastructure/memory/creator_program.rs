use anyhow::{Result, bail};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::{
    entities::{
        creator_applications::CreatorApplicationEntity,
        creators::CreatorEntity,
        mixes::MixEntity,
        monthly_trackings::{InsertMonthlyTrackingEntity, MonthlyTrackingEntity},
        packages::PackageEntity,
        payout_profiles::{PayoutProfileEntity, UpsertPayoutProfileEntity},
        rush_assets::{InsertRushAssetEntity, RushAssetEntity},
        video_assets::{InsertVideoAssetEntity, VideoAssetEntity},
        video_rates::VideoRateEntity,
    },
    repositories::creator_program::CreatorProgramRepository,
    value_objects::{
        catalog,
        enums::{
            application_statuses::ApplicationStatus,
            tracking_payment_statuses::TrackingPaymentStatus,
        },
    },
};

/// Process-local store used when no database is configured. Collections
/// start empty apart from the static Reference Catalog, and honor the same
/// contract as the Postgres store, so the orchestration layer cannot tell
/// them apart. Not meant for anything beyond a single process.
pub struct CreatorProgramInMemory {
    creators: Mutex<Vec<CreatorEntity>>,
    applications: Mutex<Vec<CreatorApplicationEntity>>,
    trackings: Mutex<Vec<MonthlyTrackingEntity>>,
    video_assets: Mutex<Vec<VideoAssetEntity>>,
    rush_assets: Mutex<Vec<RushAssetEntity>>,
    payout_profiles: Mutex<Vec<PayoutProfileEntity>>,
    packages: Vec<PackageEntity>,
    mixes: Vec<MixEntity>,
    video_rates: Vec<VideoRateEntity>,
}

impl CreatorProgramInMemory {
    pub fn with_reference_catalog() -> Self {
        Self {
            creators: Mutex::new(Vec::new()),
            applications: Mutex::new(Vec::new()),
            trackings: Mutex::new(Vec::new()),
            video_assets: Mutex::new(Vec::new()),
            rush_assets: Mutex::new(Vec::new()),
            payout_profiles: Mutex::new(Vec::new()),
            packages: catalog::default_packages(),
            mixes: catalog::default_mixes(),
            video_rates: catalog::default_video_rates(),
        }
    }

    pub async fn seed_creator(&self, creator: CreatorEntity) {
        self.creators.lock().await.push(creator);
    }

    pub async fn seed_application(&self, application: CreatorApplicationEntity) {
        self.applications.lock().await.push(application);
    }
}

#[async_trait]
impl CreatorProgramRepository for CreatorProgramInMemory {
    async fn find_creator_by_user_id(&self, user_id: Uuid) -> Result<Option<CreatorEntity>> {
        let creators = self.creators.lock().await;
        Ok(creators
            .iter()
            .find(|creator| creator.user_id == user_id)
            .cloned())
    }

    async fn list_applications(
        &self,
        status: Option<ApplicationStatus>,
    ) -> Result<Vec<CreatorApplicationEntity>> {
        let applications = self.applications.lock().await;

        let mut results: Vec<CreatorApplicationEntity> = applications
            .iter()
            .filter(|application| match status {
                Some(status) => application.status == status.to_string(),
                None => true,
            })
            .cloned()
            .collect();

        results.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(results)
    }

    async fn list_packages(&self) -> Result<Vec<PackageEntity>> {
        Ok(self.packages.clone())
    }

    async fn list_mixes(&self) -> Result<Vec<MixEntity>> {
        Ok(self.mixes.clone())
    }

    async fn list_video_rates(&self) -> Result<Vec<VideoRateEntity>> {
        Ok(self.video_rates.clone())
    }

    async fn find_tracking_by_id(
        &self,
        tracking_id: Uuid,
    ) -> Result<Option<MonthlyTrackingEntity>> {
        let trackings = self.trackings.lock().await;
        Ok(trackings
            .iter()
            .find(|tracking| tracking.id == tracking_id)
            .cloned())
    }

    async fn list_trackings_by_creator(
        &self,
        creator_id: Uuid,
    ) -> Result<Vec<MonthlyTrackingEntity>> {
        let trackings = self.trackings.lock().await;

        let mut results: Vec<MonthlyTrackingEntity> = trackings
            .iter()
            .filter(|tracking| tracking.creator_id == creator_id)
            .cloned()
            .collect();

        results.sort_by(|a, b| a.month.cmp(&b.month));

        Ok(results)
    }

    async fn create_tracking(&self, insert_tracking: InsertMonthlyTrackingEntity) -> Result<Uuid> {
        let mut trackings = self.trackings.lock().await;

        // Same uniqueness rule the database enforces with a constraint.
        if trackings.iter().any(|tracking| {
            tracking.creator_id == insert_tracking.creator_id
                && tracking.month == insert_tracking.month
        }) {
            bail!(
                "tracking already exists for creator {} and month {}",
                insert_tracking.creator_id,
                insert_tracking.month
            );
        }

        let id = Uuid::new_v4();
        trackings.push(MonthlyTrackingEntity {
            id,
            creator_id: insert_tracking.creator_id,
            month: insert_tracking.month,
            quotas: insert_tracking.quotas,
            delivered: insert_tracking.delivered,
            monthly_credits: insert_tracking.monthly_credits,
            payment_status: insert_tracking.payment_status,
            paid_at: None,
            created_at: Utc::now(),
        });

        Ok(id)
    }

    async fn create_video_asset(&self, insert_video_asset: InsertVideoAssetEntity) -> Result<Uuid> {
        let mut video_assets = self.video_assets.lock().await;

        let id = Uuid::new_v4();
        video_assets.push(VideoAssetEntity {
            id,
            monthly_tracking_id: insert_video_asset.monthly_tracking_id,
            creator_id: insert_video_asset.creator_id,
            video_type: insert_video_asset.video_type,
            file_url: insert_video_asset.file_url,
            duration_seconds: insert_video_asset.duration_seconds,
            resolution: insert_video_asset.resolution,
            file_size_mb: insert_video_asset.file_size_mb,
            status: insert_video_asset.status,
            created_at: Utc::now(),
        });

        Ok(id)
    }

    async fn create_rush_asset(&self, insert_rush_asset: InsertRushAssetEntity) -> Result<Uuid> {
        let mut rush_assets = self.rush_assets.lock().await;

        let id = Uuid::new_v4();
        rush_assets.push(RushAssetEntity {
            id,
            monthly_tracking_id: insert_rush_asset.monthly_tracking_id,
            creator_id: insert_rush_asset.creator_id,
            file_name: insert_rush_asset.file_name,
            file_url: insert_rush_asset.file_url,
            file_size_mb: insert_rush_asset.file_size_mb,
            created_at: Utc::now(),
        });

        Ok(id)
    }

    async fn find_payout_profile(&self, creator_id: Uuid) -> Result<Option<PayoutProfileEntity>> {
        let payout_profiles = self.payout_profiles.lock().await;
        Ok(payout_profiles
            .iter()
            .find(|profile| profile.creator_id == creator_id)
            .cloned())
    }

    async fn upsert_payout_profile(&self, upsert_profile: UpsertPayoutProfileEntity) -> Result<()> {
        let mut payout_profiles = self.payout_profiles.lock().await;

        let id = payout_profiles
            .iter()
            .find(|profile| profile.creator_id == upsert_profile.creator_id)
            .map(|profile| profile.id)
            .unwrap_or_else(Uuid::new_v4);

        payout_profiles.retain(|profile| profile.creator_id != upsert_profile.creator_id);
        payout_profiles.push(PayoutProfileEntity {
            id,
            creator_id: upsert_profile.creator_id,
            method: upsert_profile.method,
            account_holder_name: upsert_profile.account_holder_name,
            iban: upsert_profile.iban,
            paypal_email: upsert_profile.paypal_email,
            stripe_account: upsert_profile.stripe_account,
            updated_at: upsert_profile.updated_at,
        });

        Ok(())
    }

    async fn mark_tracking_paid(
        &self,
        tracking_id: Uuid,
        paid_at: Option<DateTime<Utc>>,
    ) -> Result<bool> {
        let mut trackings = self.trackings.lock().await;

        match trackings
            .iter_mut()
            .find(|tracking| tracking.id == tracking_id)
        {
            Some(tracking) => {
                tracking.payment_status = match paid_at {
                    Some(_) => TrackingPaymentStatus::Paid.to_string(),
                    None => TrackingPaymentStatus::Pending.to_string(),
                };
                tracking.paid_at = paid_at;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::domain::value_objects::{
        enums::{creator_statuses::CreatorStatus, payout_methods::PayoutMethod},
        tracking::VideoTypeCount,
    };
    use crate::domain::value_objects::enums::video_types::VideoType;
    use crate::domain::value_objects::uploads::RecordVideoUploadModel;
    use crate::usecases::admin::AdminUseCase;
    use crate::usecases::uploads::{UploadError, UploadsUseCase};

    fn sample_creator() -> CreatorEntity {
        CreatorEntity {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            handle: "lea.move".to_string(),
            status: CreatorStatus::Actif.to_string(),
            package_tier: 20,
            created_at: Utc::now(),
        }
    }

    fn insert_tracking(creator_id: Uuid, month: &str) -> InsertMonthlyTrackingEntity {
        InsertMonthlyTrackingEntity {
            creator_id,
            month: month.to_string(),
            quotas: VideoTypeCount {
                ootd: 5,
                training: 5,
                before_after: 4,
                sports_80s: 3,
                cinematic: 3,
            },
            delivered: VideoTypeCount::default(),
            monthly_credits: 25,
            payment_status: TrackingPaymentStatus::Pending.to_string(),
        }
    }

    #[tokio::test]
    async fn starts_empty_except_for_the_reference_catalog() {
        let store = CreatorProgramInMemory::with_reference_catalog();

        assert!(store.list_applications(None).await.unwrap().is_empty());
        assert_eq!(store.list_packages().await.unwrap().len(), 4);
        assert_eq!(store.list_mixes().await.unwrap().len(), 4);
        assert_eq!(store.list_video_rates().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn rejects_second_tracking_for_the_same_month() {
        let store = CreatorProgramInMemory::with_reference_catalog();
        let creator_id = Uuid::new_v4();

        store
            .create_tracking(insert_tracking(creator_id, "2025-06"))
            .await
            .unwrap();

        let err = store
            .create_tracking(insert_tracking(creator_id, "2025-06"))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("already exists"));
    }

    #[tokio::test]
    async fn mark_paid_sets_and_clears_the_timestamp() {
        let store = CreatorProgramInMemory::with_reference_catalog();
        let tracking_id = store
            .create_tracking(insert_tracking(Uuid::new_v4(), "2025-06"))
            .await
            .unwrap();

        let paid_at = Utc::now();
        assert!(store
            .mark_tracking_paid(tracking_id, Some(paid_at))
            .await
            .unwrap());

        let tracking = store.find_tracking_by_id(tracking_id).await.unwrap().unwrap();
        assert_eq!(tracking.payment_status, "paid");
        assert_eq!(tracking.paid_at, Some(paid_at));

        assert!(store.mark_tracking_paid(tracking_id, None).await.unwrap());
        let tracking = store.find_tracking_by_id(tracking_id).await.unwrap().unwrap();
        assert_eq!(tracking.payment_status, "pending");
        assert!(tracking.paid_at.is_none());

        assert!(!store.mark_tracking_paid(Uuid::new_v4(), None).await.unwrap());
    }

    #[tokio::test]
    async fn upsert_replaces_the_whole_profile() {
        let store = CreatorProgramInMemory::with_reference_catalog();
        let creator_id = Uuid::new_v4();

        store
            .upsert_payout_profile(UpsertPayoutProfileEntity {
                creator_id,
                method: PayoutMethod::Iban.to_string(),
                account_holder_name: Some("Lea Martin".to_string()),
                iban: Some("FR7630006000011234567890189".to_string()),
                paypal_email: None,
                stripe_account: None,
                updated_at: Utc::now(),
            })
            .await
            .unwrap();

        store
            .upsert_payout_profile(UpsertPayoutProfileEntity {
                creator_id,
                method: PayoutMethod::Paypal.to_string(),
                account_holder_name: None,
                iban: None,
                paypal_email: Some("lea@example.com".to_string()),
                stripe_account: None,
                updated_at: Utc::now(),
            })
            .await
            .unwrap();

        let profile = store.find_payout_profile(creator_id).await.unwrap().unwrap();
        assert_eq!(profile.method, "paypal");
        assert!(profile.iban.is_none());
        assert!(profile.account_holder_name.is_none());
        assert_eq!(profile.paypal_email.as_deref(), Some("lea@example.com"));
    }

    #[tokio::test]
    async fn filters_applications_by_status() {
        let store = Arc::new(CreatorProgramInMemory::with_reference_catalog());

        for status in [
            ApplicationStatus::PendingReview,
            ApplicationStatus::PendingReview,
            ApplicationStatus::Approved,
        ] {
            store
                .seed_application(CreatorApplicationEntity {
                    id: Uuid::new_v4(),
                    creator_id: Uuid::new_v4(),
                    full_name: "Lea Martin".to_string(),
                    email: "lea@example.com".to_string(),
                    instagram_handle: None,
                    motivation: None,
                    status: status.to_string(),
                    submitted_at: Some(Utc::now()),
                    created_at: Utc::now(),
                })
                .await;
        }

        let usecase = AdminUseCase::new(Arc::clone(&store));

        let pending = usecase
            .list_applications(Some(ApplicationStatus::PendingReview))
            .await
            .unwrap();
        assert_eq!(pending.len(), 2);

        let dashboard = usecase.dashboard().await.unwrap();
        assert_eq!(dashboard.total_applications, 3);
        assert_eq!(dashboard.status_counts.len(), 4);
    }

    // The same orchestration flow exercised against mocks in the use-case
    // tests, run here against the real in-memory backend.
    #[tokio::test]
    async fn upload_orchestration_behaves_identically_on_this_backend() {
        let store = Arc::new(CreatorProgramInMemory::with_reference_catalog());
        let creator = sample_creator();
        let user_id = creator.user_id;
        let creator_id = creator.id;
        store.seed_creator(creator).await;

        let other_creator = sample_creator();
        let foreign_tracking_id = store
            .create_tracking(insert_tracking(other_creator.id, "2025-06"))
            .await
            .unwrap();

        let own_tracking_id = store
            .create_tracking(insert_tracking(creator_id, "2025-06"))
            .await
            .unwrap();

        let usecase = UploadsUseCase::new(Arc::clone(&store));

        let upload = |tracking_id| RecordVideoUploadModel {
            monthly_tracking_id: tracking_id,
            video_type: VideoType::Training,
            file_url: "https://cdn.example.com/v/2.mp4".to_string(),
            duration_seconds: Some(60),
            resolution: None,
            file_size_mb: None,
        };

        let err = usecase
            .record_video_upload(user_id, upload(foreign_tracking_id))
            .await
            .unwrap_err();
        assert!(matches!(err, UploadError::Forbidden));

        let err = usecase
            .record_video_upload(user_id, upload(Uuid::new_v4()))
            .await
            .unwrap_err();
        assert!(matches!(err, UploadError::TrackingNotFound));

        let asset_id = usecase
            .record_video_upload(user_id, upload(own_tracking_id))
            .await
            .unwrap();
        assert!(!asset_id.is_nil());
    }
}
