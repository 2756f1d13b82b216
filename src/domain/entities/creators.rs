use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::creators;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = creators)]
pub struct CreatorEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub handle: String,
    pub status: String,
    pub package_tier: i32,
    pub created_at: DateTime<Utc>,
}
