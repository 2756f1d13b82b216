use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Application lifecycle. Transitions are one-directional
/// (draft -> pending_review -> approved | rejected); the two review
/// outcomes are terminal.
#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApplicationStatus {
    #[default]
    Draft,
    PendingReview,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    /// Canonical ordering used wherever per-status aggregates must cover
    /// the whole set, including zero-count entries.
    pub const ALL: [ApplicationStatus; 4] = [
        ApplicationStatus::Draft,
        ApplicationStatus::PendingReview,
        ApplicationStatus::Approved,
        ApplicationStatus::Rejected,
    ];
}

impl Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            ApplicationStatus::Draft => "draft",
            ApplicationStatus::PendingReview => "pending_review",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        };
        write!(f, "{}", status)
    }
}

impl ApplicationStatus {
    pub fn from_str(value: &str) -> Self {
        match value {
            "draft" => ApplicationStatus::Draft,
            "pending_review" => ApplicationStatus::PendingReview,
            "approved" => ApplicationStatus::Approved,
            "rejected" => ApplicationStatus::Rejected,
            _ => ApplicationStatus::Draft,
        }
    }
}
