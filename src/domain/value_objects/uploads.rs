use serde::Deserialize;
use uuid::Uuid;

use crate::domain::value_objects::enums::video_types::VideoType;

#[derive(Debug, Clone, Deserialize)]
pub struct RecordVideoUploadModel {
    pub monthly_tracking_id: Uuid,
    pub video_type: VideoType,
    pub file_url: String,
    pub duration_seconds: Option<i32>,
    pub resolution: Option<String>,
    pub file_size_mb: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecordRushUploadModel {
    pub monthly_tracking_id: Uuid,
    pub file_name: String,
    pub file_url: String,
    pub file_size_mb: Option<f64>,
}
