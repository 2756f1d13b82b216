use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum CreatorStatus {
    #[default]
    Candidat,
    Actif,
    Pause,
    Inactif,
}

impl Display for CreatorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            CreatorStatus::Candidat => "candidat",
            CreatorStatus::Actif => "actif",
            CreatorStatus::Pause => "pause",
            CreatorStatus::Inactif => "inactif",
        };
        write!(f, "{}", status)
    }
}

impl CreatorStatus {
    pub fn from_str(value: &str) -> Self {
        match value {
            "candidat" => CreatorStatus::Candidat,
            "actif" => CreatorStatus::Actif,
            "pause" => CreatorStatus::Pause,
            "inactif" => CreatorStatus::Inactif,
            _ => CreatorStatus::Candidat,
        }
    }
}
