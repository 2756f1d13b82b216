use diesel::prelude::*;
use serde::Serialize;

use crate::domain::value_objects::catalog::MixDistribution;
use crate::infrastructure::postgres::schema::mixes;

/// Static content-mix template: a named target distribution of video types
/// used for onboarding guidance, never enforced.
#[derive(Debug, Clone, Serialize)]
pub struct MixEntity {
    pub name: String,
    pub distribution: MixDistribution,
    pub positioning: String,
}

/// Raw row used for Diesel queries. The distribution stays as JSON and is
/// parsed into [`MixDistribution`].
#[derive(Debug, Clone, Selectable, Queryable)]
#[diesel(table_name = mixes)]
pub struct MixRow {
    pub name: String,
    pub distribution: serde_json::Value,
    pub positioning: String,
}

impl From<MixRow> for MixEntity {
    fn from(value: MixRow) -> Self {
        let distribution = serde_json::from_value(value.distribution).unwrap_or_default();

        Self {
            name: value.name,
            distribution,
            positioning: value.positioning,
        }
    }
}
