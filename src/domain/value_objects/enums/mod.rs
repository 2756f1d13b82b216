pub mod application_statuses;
pub mod creator_statuses;
pub mod payout_methods;
pub mod tracking_payment_statuses;
pub mod video_asset_statuses;
pub mod video_types;
