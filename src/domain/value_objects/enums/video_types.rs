use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The closed set of billable content types. Every calculator that needs
/// "all types" iterates [`VideoType::ALL`] instead of re-deriving the set
/// from map keys.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum VideoType {
    #[serde(rename = "OOTD")]
    Ootd,
    #[serde(rename = "TRAINING")]
    Training,
    #[serde(rename = "BEFORE_AFTER")]
    BeforeAfter,
    #[serde(rename = "SPORTS_80S")]
    Sports80s,
    #[serde(rename = "CINEMATIC")]
    Cinematic,
}

impl VideoType {
    pub const ALL: [VideoType; 5] = [
        VideoType::Ootd,
        VideoType::Training,
        VideoType::BeforeAfter,
        VideoType::Sports80s,
        VideoType::Cinematic,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "OOTD" => Some(VideoType::Ootd),
            "TRAINING" => Some(VideoType::Training),
            "BEFORE_AFTER" => Some(VideoType::BeforeAfter),
            "SPORTS_80S" => Some(VideoType::Sports80s),
            "CINEMATIC" => Some(VideoType::Cinematic),
            _ => None,
        }
    }
}

impl Display for VideoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let video_type = match self {
            VideoType::Ootd => "OOTD",
            VideoType::Training => "TRAINING",
            VideoType::BeforeAfter => "BEFORE_AFTER",
            VideoType::Sports80s => "SPORTS_80S",
            VideoType::Cinematic => "CINEMATIC",
        };
        write!(f, "{}", video_type)
    }
}
