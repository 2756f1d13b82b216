use diesel::prelude::*;
use serde::Serialize;

use crate::domain::value_objects::enums::video_types::VideoType;
use crate::infrastructure::postgres::schema::video_rates;

/// Static payout rate for one video type, in whole EUR per delivered video.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VideoRateEntity {
    pub video_type: VideoType,
    pub rate_per_video: i32,
    pub is_placeholder: bool,
}

/// Raw row used for Diesel queries. The type column is free text in the
/// database; rows naming an unknown type are dropped at load time.
#[derive(Debug, Clone, Selectable, Queryable)]
#[diesel(table_name = video_rates)]
pub struct VideoRateRow {
    pub video_type: String,
    pub rate_per_video: i32,
    pub is_placeholder: bool,
}

impl VideoRateRow {
    pub fn into_entity(self) -> Option<VideoRateEntity> {
        VideoType::parse(&self.video_type).map(|video_type| VideoRateEntity {
            video_type,
            rate_per_video: self.rate_per_video,
            is_placeholder: self.is_placeholder,
        })
    }
}
