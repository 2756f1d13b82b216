use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::value_objects::tracking::VideoTypeCount;
use crate::infrastructure::postgres::schema::monthly_trackings;

/// One creator's quota/delivery state for one `YYYY-MM` month.
#[derive(Debug, Clone)]
pub struct MonthlyTrackingEntity {
    pub id: Uuid,
    pub creator_id: Uuid,
    pub month: String,
    pub quotas: VideoTypeCount,
    pub delivered: VideoTypeCount,
    pub monthly_credits: i32,
    pub payment_status: String,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Raw row used for Diesel queries. Counters stay as JSON and are parsed
/// into [`VideoTypeCount`].
#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = monthly_trackings)]
pub struct MonthlyTrackingRow {
    pub id: Uuid,
    pub creator_id: Uuid,
    pub month: String,
    pub quotas: serde_json::Value,
    pub delivered: serde_json::Value,
    pub monthly_credits: i32,
    pub payment_status: String,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<MonthlyTrackingRow> for MonthlyTrackingEntity {
    fn from(value: MonthlyTrackingRow) -> Self {
        let quotas = serde_json::from_value(value.quotas).unwrap_or_default();
        let delivered = serde_json::from_value(value.delivered).unwrap_or_default();

        Self {
            id: value.id,
            creator_id: value.creator_id,
            month: value.month,
            quotas,
            delivered,
            monthly_credits: value.monthly_credits,
            payment_status: value.payment_status,
            paid_at: value.paid_at,
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct InsertMonthlyTrackingEntity {
    pub creator_id: Uuid,
    pub month: String,
    pub quotas: VideoTypeCount,
    pub delivered: VideoTypeCount,
    pub monthly_credits: i32,
    pub payment_status: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = monthly_trackings)]
pub struct InsertMonthlyTrackingRow {
    pub creator_id: Uuid,
    pub month: String,
    pub quotas: serde_json::Value,
    pub delivered: serde_json::Value,
    pub monthly_credits: i32,
    pub payment_status: String,
}

impl From<InsertMonthlyTrackingEntity> for InsertMonthlyTrackingRow {
    fn from(value: InsertMonthlyTrackingEntity) -> Self {
        let quotas = serde_json::to_value(&value.quotas).unwrap_or_default();
        let delivered = serde_json::to_value(&value.delivered).unwrap_or_default();

        Self {
            creator_id: value.creator_id,
            month: value.month,
            quotas,
            delivered,
            monthly_credits: value.monthly_credits,
            payment_status: value.payment_status,
        }
    }
}
