use serde::Serialize;

use crate::domain::value_objects::enums::video_types::VideoType;

/// One line of a payout breakdown, in the order of the rate table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PayoutItem {
    pub video_type: VideoType,
    pub delivered: i32,
    pub rate_per_video: i32,
    pub subtotal: i32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PayoutBreakdown {
    pub items: Vec<PayoutItem>,
    pub monthly_credits: i32,
    pub total: i32,
}
