//! Ministry (pelayanan) sign-ups

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MinistryRole {
    #[serde(rename = "WL")]
    WorshipLeader,
    Singer,
    Keyboard,
    Gitar,
    Bass,
    Drum,
    Multimedia,
    Usher,
    Parkir,
}

impl MinistryRole {
    pub const ALL: [MinistryRole; 9] = [
        Self::WorshipLeader,
        Self::Singer,
        Self::Keyboard,
        Self::Gitar,
        Self::Bass,
        Self::Drum,
        Self::Multimedia,
        Self::Usher,
        Self::Parkir,
    ];

    /// Label shown to members when signing up
    pub fn label(&self) -> &'static str {
        match self {
            Self::WorshipLeader => "Worship Leader",
            Self::Singer => "Singer",
            Self::Keyboard => "Keyboardist",
            Self::Gitar => "Gitaris",
            Self::Bass => "Bassist",
            Self::Drum => "Drummer",
            Self::Multimedia => "Multimedia",
            Self::Usher => "Usher / Kolektan",
            Self::Parkir => "Jaga Parkir",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum VolunteerStatus {
    #[default]
    Pending,
    Approved,
}

/// A member's request to serve in a ministry role
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Volunteer {
    pub id: String,
    /// Expected to match a member id; not enforced after creation
    pub user_id: String,
    pub user_name: String,
    pub user_phone: String,
    pub role: MinistryRole,
    pub status: VolunteerStatus,
    pub created_at: DateTime<Utc>,
}
