use serde::{Deserialize, Serialize};

use crate::domain::value_objects::enums::video_types::VideoType;

/// Per-type counters stored as JSONB on `monthly_trackings`. One field per
/// member of the closed [`VideoType`] set; absent keys deserialize to 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoTypeCount {
    #[serde(default, rename = "OOTD")]
    pub ootd: i32,

    #[serde(default, rename = "TRAINING")]
    pub training: i32,

    #[serde(default, rename = "BEFORE_AFTER")]
    pub before_after: i32,

    #[serde(default, rename = "SPORTS_80S")]
    pub sports_80s: i32,

    #[serde(default, rename = "CINEMATIC")]
    pub cinematic: i32,
}

impl VideoTypeCount {
    pub fn get(&self, video_type: VideoType) -> i32 {
        match video_type {
            VideoType::Ootd => self.ootd,
            VideoType::Training => self.training,
            VideoType::BeforeAfter => self.before_after,
            VideoType::Sports80s => self.sports_80s,
            VideoType::Cinematic => self.cinematic,
        }
    }

    pub fn add(&mut self, video_type: VideoType, amount: i32) {
        match video_type {
            VideoType::Ootd => self.ootd += amount,
            VideoType::Training => self.training += amount,
            VideoType::BeforeAfter => self.before_after += amount,
            VideoType::Sports80s => self.sports_80s += amount,
            VideoType::Cinematic => self.cinematic += amount,
        }
    }

}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum TrackingStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "EN_ATTENTE")]
    EnAttente,
}

/// Derived quota position for one tracking month.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrackingSummary {
    pub delivered_total: i32,
    pub remaining_total: i32,
    pub status: TrackingStatus,
    pub remaining_details: String,
}
