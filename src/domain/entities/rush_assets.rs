use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::rush_assets;

/// Raw/bonus footage. Not counted against the monthly quota.
#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = rush_assets)]
pub struct RushAssetEntity {
    pub id: Uuid,
    pub monthly_tracking_id: Uuid,
    pub creator_id: Uuid,
    pub file_name: String,
    pub file_url: String,
    pub file_size_mb: Option<f64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = rush_assets)]
pub struct InsertRushAssetEntity {
    pub monthly_tracking_id: Uuid,
    pub creator_id: Uuid,
    pub file_name: String,
    pub file_url: String,
    pub file_size_mb: Option<f64>,
}
