use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::{mixes::MixEntity, packages::PackageEntity, video_rates::VideoRateEntity},
    value_objects::enums::video_types::VideoType,
};

/// Target share of each video type inside a content mix. Fractions are
/// guidance, not hard constraints, and are not required to sum to 1.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MixDistribution {
    #[serde(default, rename = "OOTD")]
    pub ootd: f64,

    #[serde(default, rename = "TRAINING")]
    pub training: f64,

    #[serde(default, rename = "BEFORE_AFTER")]
    pub before_after: f64,

    #[serde(default, rename = "SPORTS_80S")]
    pub sports_80s: f64,

    #[serde(default, rename = "CINEMATIC")]
    pub cinematic: f64,
}

impl MixDistribution {
    pub fn get(&self, video_type: VideoType) -> f64 {
        match video_type {
            VideoType::Ootd => self.ootd,
            VideoType::Training => self.training,
            VideoType::BeforeAfter => self.before_after,
            VideoType::Sports80s => self.sports_80s,
            VideoType::Cinematic => self.cinematic,
        }
    }
}

/// Static package tiers. Loaded once at startup; never mutated.
pub fn default_packages() -> Vec<PackageEntity> {
    vec![
        PackageEntity {
            tier: 10,
            quota_videos: 10,
            monthly_credits: 0,
        },
        PackageEntity {
            tier: 20,
            quota_videos: 20,
            monthly_credits: 25,
        },
        PackageEntity {
            tier: 30,
            quota_videos: 30,
            monthly_credits: 50,
        },
        PackageEntity {
            tier: 40,
            quota_videos: 40,
            monthly_credits: 100,
        },
    ]
}

/// Static content-mix templates used for onboarding guidance.
pub fn default_mixes() -> Vec<MixEntity> {
    vec![
        MixEntity {
            name: "Lifestyle".to_string(),
            distribution: MixDistribution {
                ootd: 0.4,
                training: 0.2,
                before_after: 0.1,
                sports_80s: 0.1,
                cinematic: 0.2,
            },
            positioning: "Quotidien et tenues, pour une audience mode".to_string(),
        },
        MixEntity {
            name: "Performance".to_string(),
            distribution: MixDistribution {
                ootd: 0.1,
                training: 0.5,
                before_after: 0.2,
                sports_80s: 0.1,
                cinematic: 0.1,
            },
            positioning: "Entrainement et progression, pour une audience sport".to_string(),
        },
        MixEntity {
            name: "Transformation".to_string(),
            distribution: MixDistribution {
                ootd: 0.1,
                training: 0.2,
                before_after: 0.5,
                sports_80s: 0.0,
                cinematic: 0.2,
            },
            positioning: "Avant/apres, pour raconter un parcours".to_string(),
        },
        MixEntity {
            name: "Signature".to_string(),
            distribution: MixDistribution {
                ootd: 0.2,
                training: 0.1,
                before_after: 0.1,
                sports_80s: 0.3,
                cinematic: 0.3,
            },
            positioning: "Retro et cinematique, pour une identite forte".to_string(),
        },
    ]
}

/// Static per-video payout rates, in whole EUR.
pub fn default_video_rates() -> Vec<VideoRateEntity> {
    vec![
        VideoRateEntity {
            video_type: VideoType::Ootd,
            rate_per_video: 100,
            is_placeholder: false,
        },
        VideoRateEntity {
            video_type: VideoType::Training,
            rate_per_video: 120,
            is_placeholder: false,
        },
        VideoRateEntity {
            video_type: VideoType::BeforeAfter,
            rate_per_video: 150,
            is_placeholder: false,
        },
        VideoRateEntity {
            video_type: VideoType::Sports80s,
            rate_per_video: 90,
            is_placeholder: false,
        },
        VideoRateEntity {
            video_type: VideoType::Cinematic,
            rate_per_video: 180,
            is_placeholder: false,
        },
    ]
}
