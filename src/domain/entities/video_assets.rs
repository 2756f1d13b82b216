use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::video_assets;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = video_assets)]
pub struct VideoAssetEntity {
    pub id: Uuid,
    pub monthly_tracking_id: Uuid,
    pub creator_id: Uuid,
    pub video_type: String,
    pub file_url: String,
    pub duration_seconds: Option<i32>,
    pub resolution: Option<String>,
    pub file_size_mb: Option<f64>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = video_assets)]
pub struct InsertVideoAssetEntity {
    pub monthly_tracking_id: Uuid,
    pub creator_id: Uuid,
    pub video_type: String,
    pub file_url: String,
    pub duration_seconds: Option<i32>,
    pub resolution: Option<String>,
    pub file_size_mb: Option<f64>,
    pub status: String,
}
