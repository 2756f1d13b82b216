use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::payout_profiles;

/// Payment destination. One profile per creator; only the fields relevant
/// to `method` are populated.
#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = payout_profiles)]
pub struct PayoutProfileEntity {
    pub id: Uuid,
    pub creator_id: Uuid,
    pub method: String,
    pub account_holder_name: Option<String>,
    pub iban: Option<String>,
    pub paypal_email: Option<String>,
    pub stripe_account: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Upsert payload. Saving replaces the whole row: a `None` field is written
/// as NULL, not skipped.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = payout_profiles)]
#[diesel(treat_none_as_null = true)]
pub struct UpsertPayoutProfileEntity {
    pub creator_id: Uuid,
    pub method: String,
    pub account_holder_name: Option<String>,
    pub iban: Option<String>,
    pub paypal_email: Option<String>,
    pub stripe_account: Option<String>,
    pub updated_at: DateTime<Utc>,
}
