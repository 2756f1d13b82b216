pub mod creator_applications;
pub mod creators;
pub mod mixes;
pub mod monthly_trackings;
pub mod packages;
pub mod payout_profiles;
pub mod rush_assets;
pub mod video_assets;
pub mod video_rates;
