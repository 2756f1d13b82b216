use crate::domain::{
    entities::video_rates::VideoRateEntity,
    value_objects::{
        payouts::{PayoutBreakdown, PayoutItem},
        tracking::VideoTypeCount,
    },
};

/// Turns delivered counts into an itemized payout. The rate table defines
/// the canonical type universe: one item per rate, in rate order, with a
/// delivered count of 0 for types the creator never touched.
pub fn calculate_payout(
    delivered: &VideoTypeCount,
    rates: &[VideoRateEntity],
    monthly_credits: i32,
) -> PayoutBreakdown {
    let items: Vec<PayoutItem> = rates
        .iter()
        .map(|rate| {
            let count = delivered.get(rate.video_type);
            PayoutItem {
                video_type: rate.video_type,
                delivered: count,
                rate_per_video: rate.rate_per_video,
                subtotal: count * rate.rate_per_video,
            }
        })
        .collect();

    let total = items.iter().map(|item| item.subtotal).sum::<i32>() + monthly_credits;

    PayoutBreakdown {
        items,
        monthly_credits,
        total,
    }
}
