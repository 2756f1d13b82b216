use serde::Deserialize;

use crate::domain::value_objects::enums::payout_methods::PayoutMethod;

/// Full replacement payload for a creator's payout profile. Fields left out
/// of the request are stored as NULL, not preserved.
#[derive(Debug, Clone, Deserialize)]
pub struct SavePayoutProfileModel {
    pub method: PayoutMethod,
    pub account_holder_name: Option<String>,
    pub iban: Option<String>,
    pub paypal_email: Option<String>,
    pub stripe_account: Option<String>,
}
