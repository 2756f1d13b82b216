use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::automock;
use uuid::Uuid;

use crate::domain::{
    entities::{
        creator_applications::CreatorApplicationEntity,
        creators::CreatorEntity,
        mixes::MixEntity,
        monthly_trackings::{InsertMonthlyTrackingEntity, MonthlyTrackingEntity},
        packages::PackageEntity,
        payout_profiles::{PayoutProfileEntity, UpsertPayoutProfileEntity},
        rush_assets::InsertRushAssetEntity,
        video_assets::InsertVideoAssetEntity,
        video_rates::VideoRateEntity,
    },
    value_objects::enums::application_statuses::ApplicationStatus,
};

/// The single persistence boundary for the creator program. Missing rows
/// are `Ok(None)`, never an error; only genuine I/O failure propagates.
/// Ownership rules (a tracking row belongs to one creator) are enforced by
/// the use-case layer, not here.
#[automock]
#[async_trait]
pub trait CreatorProgramRepository {
    async fn find_creator_by_user_id(&self, user_id: Uuid) -> Result<Option<CreatorEntity>>;

    async fn list_applications(
        &self,
        status: Option<ApplicationStatus>,
    ) -> Result<Vec<CreatorApplicationEntity>>;

    async fn list_packages(&self) -> Result<Vec<PackageEntity>>;

    async fn list_mixes(&self) -> Result<Vec<MixEntity>>;

    async fn list_video_rates(&self) -> Result<Vec<VideoRateEntity>>;

    async fn find_tracking_by_id(
        &self,
        tracking_id: Uuid,
    ) -> Result<Option<MonthlyTrackingEntity>>;

    async fn list_trackings_by_creator(
        &self,
        creator_id: Uuid,
    ) -> Result<Vec<MonthlyTrackingEntity>>;

    async fn create_tracking(&self, insert_tracking: InsertMonthlyTrackingEntity) -> Result<Uuid>;

    async fn create_video_asset(&self, insert_video_asset: InsertVideoAssetEntity) -> Result<Uuid>;

    async fn create_rush_asset(&self, insert_rush_asset: InsertRushAssetEntity) -> Result<Uuid>;

    async fn find_payout_profile(&self, creator_id: Uuid) -> Result<Option<PayoutProfileEntity>>;

    async fn upsert_payout_profile(&self, upsert_profile: UpsertPayoutProfileEntity) -> Result<()>;

    /// Set-or-clear: `Some(ts)` marks the row paid at `ts`, `None` clears the
    /// paid timestamp and resets the status. Returns whether a row matched.
    async fn mark_tracking_paid(
        &self,
        tracking_id: Uuid,
        paid_at: Option<DateTime<Utc>>,
    ) -> Result<bool>;
}
