use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum TrackingPaymentStatus {
    #[default]
    Pending,
    Paid,
}

impl Display for TrackingPaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            TrackingPaymentStatus::Pending => "pending",
            TrackingPaymentStatus::Paid => "paid",
        };
        write!(f, "{}", status)
    }
}

impl TrackingPaymentStatus {
    pub fn from_str(value: &str) -> Self {
        match value {
            "pending" => TrackingPaymentStatus::Pending,
            "paid" => TrackingPaymentStatus::Paid,
            _ => TrackingPaymentStatus::Pending,
        }
    }
}
