use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum VideoAssetStatus {
    Uploaded,
    #[default]
    PendingReview,
    Approved,
    Rejected,
}

impl Display for VideoAssetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            VideoAssetStatus::Uploaded => "uploaded",
            VideoAssetStatus::PendingReview => "pending_review",
            VideoAssetStatus::Approved => "approved",
            VideoAssetStatus::Rejected => "rejected",
        };
        write!(f, "{}", status)
    }
}

impl VideoAssetStatus {
    pub fn from_str(value: &str) -> Self {
        match value {
            "uploaded" => VideoAssetStatus::Uploaded,
            "pending_review" => VideoAssetStatus::PendingReview,
            "approved" => VideoAssetStatus::Approved,
            "rejected" => VideoAssetStatus::Rejected,
            _ => VideoAssetStatus::PendingReview,
        }
    }
}
