use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::{OptionalExtension, RunQueryDsl, insert_into, prelude::*, update};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{
    entities::{
        creator_applications::CreatorApplicationEntity,
        creators::CreatorEntity,
        mixes::{MixEntity, MixRow},
        monthly_trackings::{
            InsertMonthlyTrackingEntity, InsertMonthlyTrackingRow, MonthlyTrackingEntity,
            MonthlyTrackingRow,
        },
        packages::PackageEntity,
        payout_profiles::{PayoutProfileEntity, UpsertPayoutProfileEntity},
        rush_assets::InsertRushAssetEntity,
        video_assets::InsertVideoAssetEntity,
        video_rates::{VideoRateEntity, VideoRateRow},
    },
    repositories::creator_program::CreatorProgramRepository,
    value_objects::enums::{
        application_statuses::ApplicationStatus,
        tracking_payment_statuses::TrackingPaymentStatus,
    },
};
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad,
    schema::{
        creator_applications, creators, mixes, monthly_trackings, packages, payout_profiles,
        rush_assets, video_assets, video_rates,
    },
};

pub struct CreatorProgramPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl CreatorProgramPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl CreatorProgramRepository for CreatorProgramPostgres {
    async fn find_creator_by_user_id(&self, user_id: Uuid) -> Result<Option<CreatorEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = creators::table
            .filter(creators::user_id.eq(user_id))
            .select(CreatorEntity::as_select())
            .first::<CreatorEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn list_applications(
        &self,
        status: Option<ApplicationStatus>,
    ) -> Result<Vec<CreatorApplicationEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let mut query = creator_applications::table
            .select(CreatorApplicationEntity::as_select())
            .order(creator_applications::created_at.desc())
            .into_boxed();

        if let Some(status) = status {
            query = query.filter(creator_applications::status.eq(status.to_string()));
        }

        let results = query.load::<CreatorApplicationEntity>(&mut conn)?;

        Ok(results)
    }

    async fn list_packages(&self) -> Result<Vec<PackageEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = packages::table
            .order(packages::tier.asc())
            .select(PackageEntity::as_select())
            .load::<PackageEntity>(&mut conn)?;

        Ok(results)
    }

    async fn list_mixes(&self) -> Result<Vec<MixEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = mixes::table
            .order(mixes::name.asc())
            .select(MixRow::as_select())
            .load::<MixRow>(&mut conn)?;

        Ok(rows.into_iter().map(MixEntity::from).collect())
    }

    async fn list_video_rates(&self) -> Result<Vec<VideoRateEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = video_rates::table
            .select(VideoRateRow::as_select())
            .load::<VideoRateRow>(&mut conn)?;

        Ok(rows.into_iter().filter_map(VideoRateRow::into_entity).collect())
    }

    async fn find_tracking_by_id(
        &self,
        tracking_id: Uuid,
    ) -> Result<Option<MonthlyTrackingEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = monthly_trackings::table
            .filter(monthly_trackings::id.eq(tracking_id))
            .select(MonthlyTrackingRow::as_select())
            .first::<MonthlyTrackingRow>(&mut conn)
            .optional()?;

        Ok(row.map(MonthlyTrackingEntity::from))
    }

    async fn list_trackings_by_creator(
        &self,
        creator_id: Uuid,
    ) -> Result<Vec<MonthlyTrackingEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = monthly_trackings::table
            .filter(monthly_trackings::creator_id.eq(creator_id))
            .order(monthly_trackings::month.asc())
            .select(MonthlyTrackingRow::as_select())
            .load::<MonthlyTrackingRow>(&mut conn)?;

        Ok(rows.into_iter().map(MonthlyTrackingEntity::from).collect())
    }

    async fn create_tracking(&self, insert_tracking: InsertMonthlyTrackingEntity) -> Result<Uuid> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(monthly_trackings::table)
            .values(&InsertMonthlyTrackingRow::from(insert_tracking))
            .returning(monthly_trackings::id)
            .get_result::<Uuid>(&mut conn)?;

        Ok(result)
    }

    async fn create_video_asset(&self, insert_video_asset: InsertVideoAssetEntity) -> Result<Uuid> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(video_assets::table)
            .values(&insert_video_asset)
            .returning(video_assets::id)
            .get_result::<Uuid>(&mut conn)?;

        Ok(result)
    }

    async fn create_rush_asset(&self, insert_rush_asset: InsertRushAssetEntity) -> Result<Uuid> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(rush_assets::table)
            .values(&insert_rush_asset)
            .returning(rush_assets::id)
            .get_result::<Uuid>(&mut conn)?;

        Ok(result)
    }

    async fn find_payout_profile(&self, creator_id: Uuid) -> Result<Option<PayoutProfileEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = payout_profiles::table
            .filter(payout_profiles::creator_id.eq(creator_id))
            .select(PayoutProfileEntity::as_select())
            .first::<PayoutProfileEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn upsert_payout_profile(&self, upsert_profile: UpsertPayoutProfileEntity) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        insert_into(payout_profiles::table)
            .values(&upsert_profile)
            .on_conflict(payout_profiles::creator_id)
            .do_update()
            .set(&upsert_profile)
            .execute(&mut conn)?;

        Ok(())
    }

    async fn mark_tracking_paid(
        &self,
        tracking_id: Uuid,
        paid_at: Option<DateTime<Utc>>,
    ) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let payment_status = match paid_at {
            Some(_) => TrackingPaymentStatus::Paid,
            None => TrackingPaymentStatus::Pending,
        };

        let affected = update(monthly_trackings::table)
            .filter(monthly_trackings::id.eq(tracking_id))
            .set((
                monthly_trackings::payment_status.eq(payment_status.to_string()),
                monthly_trackings::paid_at.eq(paid_at),
            ))
            .execute(&mut conn)?;

        Ok(affected > 0)
    }
}
