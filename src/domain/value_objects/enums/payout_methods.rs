use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum PayoutMethod {
    #[default]
    Iban,
    Paypal,
    Stripe,
}

impl Display for PayoutMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let method = match self {
            PayoutMethod::Iban => "iban",
            PayoutMethod::Paypal => "paypal",
            PayoutMethod::Stripe => "stripe",
        };
        write!(f, "{}", method)
    }
}

impl PayoutMethod {
    pub fn from_str(value: &str) -> Self {
        match value {
            "iban" => PayoutMethod::Iban,
            "paypal" => PayoutMethod::Paypal,
            "stripe" => PayoutMethod::Stripe,
            _ => PayoutMethod::Iban,
        }
    }
}
