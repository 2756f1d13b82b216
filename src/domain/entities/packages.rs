use diesel::prelude::*;
use serde::Serialize;

use crate::infrastructure::postgres::schema::packages;

/// Static package tier: monthly video quota plus flat monthly credits.
#[derive(Debug, Clone, Serialize, Selectable, Queryable)]
#[diesel(table_name = packages)]
pub struct PackageEntity {
    pub tier: i32,
    pub quota_videos: i32,
    pub monthly_credits: i32,
}
