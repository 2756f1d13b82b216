pub mod admin;
pub mod creator_dashboard;
pub mod onboarding;
pub mod payout_profiles;
pub mod uploads;
