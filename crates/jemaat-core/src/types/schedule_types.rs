//! Service schedules and attendance

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ServiceType {
    #[default]
    #[serde(rename = "Ibadah Raya")]
    IbadahRaya,
    #[serde(rename = "Doa Malam")]
    DoaMalam,
    #[serde(rename = "Pemuda")]
    Pemuda,
    #[serde(rename = "Sekolah Minggu")]
    SekolahMinggu,
}

impl ServiceType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::IbadahRaya => "Ibadah Raya",
            Self::DoaMalam => "Doa Malam",
            Self::Pemuda => "Pemuda",
            Self::SekolahMinggu => "Sekolah Minggu",
        }
    }
}

/// A scheduled service (jadwal)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: String,
    #[serde(rename = "type")]
    pub service_type: ServiceType,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub preacher: String,
    pub worship_leader: String,
}

/// Admin form for adding a schedule; blanks get defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduleDraft {
    #[serde(rename = "type")]
    pub service_type: ServiceType,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub preacher: String,
    pub worship_leader: String,
}

/// One member checked in at one service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: String,
    pub member_id: String,
    pub member_name: String,
    pub schedule_id: String,
    pub timestamp: DateTime<Utc>,
}

/// Check-ins counted for one calendar day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DailyAttendance {
    pub date: NaiveDate,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_type_wire_names() {
        let json = serde_json::to_string(&ServiceType::SekolahMinggu).unwrap();
        assert_eq!(json, "\"Sekolah Minggu\"");
        let parsed: ServiceType = serde_json::from_str("\"Doa Malam\"").unwrap();
        assert_eq!(parsed, ServiceType::DoaMalam);
    }
}
