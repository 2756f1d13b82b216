use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::creator_applications;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = creator_applications)]
pub struct CreatorApplicationEntity {
    pub id: Uuid,
    pub creator_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub instagram_handle: Option<String>,
    pub motivation: Option<String>,
    pub status: String,
    pub submitted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
