//! Member (jemaat) types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A congregation member
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub joined_at: NaiveDate,
    #[serde(default)]
    pub photo_url: String,
    pub birth_place: String,
    pub birth_date: Option<NaiveDate>,
    pub is_baptized: bool,
    /// Birthday messages received
    #[serde(default)]
    pub wishes: Vec<BirthdayWish>,
    /// Member ids that sent a birthday reaction
    #[serde(default)]
    pub birthday_likes: Vec<String>,
}

impl Member {
    /// Case-insensitive substring match on name or id
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term) || self.id.to_lowercase().contains(&term)
    }

    /// Up to two initials, uppercased
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

/// A birthday greeting left on a member's profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BirthdayWish {
    pub id: String,
    pub sender_id: String,
    pub sender_name: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Admin form for adding a member
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemberDraft {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub birth_place: String,
    pub birth_date: Option<NaiveDate>,
    pub photo_url: String,
    pub is_baptized: bool,
}

/// Self-registration form submitted after an unknown phone login
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationForm {
    pub phone: String,
    pub name: String,
    pub address: String,
    pub birth_place: String,
    pub birth_date: Option<NaiveDate>,
    pub is_baptized: bool,
}

/// Partial update of a member record; `None` leaves a field unchanged.
/// Text fields are stored trimmed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemberPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub birth_place: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub photo_url: Option<String>,
    pub is_baptized: Option<bool>,
}

impl MemberPatch {
    pub fn apply_to(&self, member: &mut Member) {
        if let Some(name) = &self.name {
            member.name = name.trim().to_string();
        }
        if let Some(phone) = &self.phone {
            member.phone = phone.trim().to_string();
        }
        if let Some(address) = &self.address {
            member.address = address.trim().to_string();
        }
        if let Some(birth_place) = &self.birth_place {
            member.birth_place = birth_place.trim().to_string();
        }
        if let Some(birth_date) = self.birth_date {
            member.birth_date = Some(birth_date);
        }
        if let Some(photo_url) = &self.photo_url {
            member.photo_url = photo_url.trim().to_string();
        }
        if let Some(is_baptized) = self.is_baptized {
            member.is_baptized = is_baptized;
        }
    }
}

/// Baptism filter used by member and volunteer listings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BaptismFilter {
    #[default]
    All,
    Baptized,
    NotBaptized,
}

impl BaptismFilter {
    pub fn accepts(&self, is_baptized: bool) -> bool {
        match self {
            Self::All => true,
            Self::Baptized => is_baptized,
            Self::NotBaptized => !is_baptized,
        }
    }
}

/// Where a birthday falls relative to today
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BirthdayStatus {
    Today,
    Past,
    Upcoming,
    /// Birthday is in a month other than the current one
    Normal,
}

/// A member with a birthday in the month being viewed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BirthdayEntry {
    pub member_id: String,
    pub name: String,
    pub day: u32,
    pub age: i32,
    pub status: BirthdayStatus,
    pub wish_count: usize,
    pub like_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str) -> Member {
        Member {
            id: "JM001".to_string(),
            name: name.to_string(),
            phone: "0811".to_string(),
            address: "-".to_string(),
            joined_at: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            photo_url: String::new(),
            birth_place: String::new(),
            birth_date: None,
            is_baptized: false,
            wishes: Vec::new(),
            birthday_likes: Vec::new(),
        }
    }

    #[test]
    fn test_matches_name_or_id() {
        let m = member("Budi Santoso");
        assert!(m.matches("budi"));
        assert!(m.matches("jm00"));
        assert!(!m.matches("siti"));
    }

    #[test]
    fn test_initials() {
        assert_eq!(member("Budi Santoso Putra").initials(), "BS");
        assert_eq!(member("agus").initials(), "A");
    }

    #[test]
    fn test_patch_leaves_unset_fields() {
        let mut m = member("Budi");
        MemberPatch {
            address: Some("Jl. Mawar".to_string()),
            is_baptized: Some(true),
            ..Default::default()
        }
        .apply_to(&mut m);

        assert_eq!(m.name, "Budi");
        assert_eq!(m.address, "Jl. Mawar");
        assert!(m.is_baptized);
    }

    #[test]
    fn test_patch_trims_text() {
        let mut m = member("Budi");
        MemberPatch {
            name: Some("  Budi Santoso ".to_string()),
            phone: Some(" 0812 ".to_string()),
            ..Default::default()
        }
        .apply_to(&mut m);

        assert_eq!(m.name, "Budi Santoso");
        assert_eq!(m.phone, "0812");
    }

    #[test]
    fn test_baptism_filter() {
        assert!(BaptismFilter::All.accepts(false));
        assert!(BaptismFilter::Baptized.accepts(true));
        assert!(!BaptismFilter::NotBaptized.accepts(true));
    }
}
