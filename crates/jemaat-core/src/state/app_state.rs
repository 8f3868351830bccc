//! The application state held by the store

use serde::{Deserialize, Serialize};

use super::IdIssuer;
use crate::types::*;

/// Every collection the congregation app works with, plus the session.
///
/// Collections are plain ordered vectors. Nothing enforces referential
/// integrity between them once a record exists: deleting a member leaves
/// their tithes, volunteer entries and comments in place.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// Bumped on every applied action
    pub revision: u64,
    pub session: Session,
    pub admin_password: String,
    pub church_info: ChurchInfo,
    pub pastoral_team: Vec<Pastor>,
    pub members: Vec<Member>,
    pub devotionals: Vec<Devotional>,
    pub schedules: Vec<Schedule>,
    pub prayers: Vec<PrayerRequest>,
    pub feedback: Vec<Feedback>,
    pub attendance: Vec<AttendanceRecord>,
    pub tithes: Vec<Tithe>,
    pub expenses: Vec<Expense>,
    pub slideshow: Vec<SlideshowImage>,
    pub volunteers: Vec<Volunteer>,
    pub notifications: Vec<Notification>,
    #[serde(default)]
    pub ids: IdIssuer,
}

impl AppState {
    pub fn member(&self, id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    pub fn member_mut(&mut self, id: &str) -> Option<&mut Member> {
        self.members.iter_mut().find(|m| m.id == id)
    }

    pub fn member_by_phone(&self, phone: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.phone == phone)
    }

    /// Signed-in member, if the session has one and the record still exists
    pub fn current_member(&self) -> Option<&Member> {
        self.session
            .current_user_id
            .as_deref()
            .and_then(|id| self.member(id))
    }

    pub fn devotional_mut(&mut self, id: &str) -> Option<&mut Devotional> {
        self.devotionals.iter_mut().find(|d| d.id == id)
    }

    pub fn prayer(&self, id: &str) -> Option<&PrayerRequest> {
        self.prayers.iter().find(|p| p.id == id)
    }

    pub fn prayer_mut(&mut self, id: &str) -> Option<&mut PrayerRequest> {
        self.prayers.iter_mut().find(|p| p.id == id)
    }

    pub fn schedule(&self, id: &str) -> Option<&Schedule> {
        self.schedules.iter().find(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::fixtures;

    #[test]
    fn test_current_member_resolves_by_id() {
        let mut state = fixtures::seed_state();
        assert!(state.current_member().is_none());

        state.session.current_user_id = Some("JM002".to_string());
        assert_eq!(state.current_member().map(|m| m.name.as_str()), Some("Siti Aminah"));

        state.members.retain(|m| m.id != "JM002");
        assert!(state.current_member().is_none());
    }

    #[test]
    fn test_state_json_round_trip_keeps_ids() {
        let state = fixtures::seed_state();
        let json = serde_json::to_string(&state).unwrap();
        let restored: AppState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
    }
}
