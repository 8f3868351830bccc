//! Actions accepted by the store and the outcomes it reports

use serde::{Deserialize, Serialize};

use crate::types::*;

/// Every state change goes through one of these.
///
/// Serialized with an `action` tag, e.g.
/// `{"action":"memberLogin","phone":"08123456789"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Action {
    // === Session ===
    AdminLogin { password: String },
    MemberLogin { phone: String },
    Register(RegistrationForm),
    Logout,
    ChangeAdminPassword {
        current: String,
        new: String,
        confirm: String,
    },

    // === Members ===
    AddMember(MemberDraft),
    UpdateMember { id: String, patch: MemberPatch },
    DeleteMember { id: String },
    UpdateProfile(MemberPatch),
    SetProfilePhoto { photo_url: String },

    // === Birthdays ===
    SendBirthdayWish { member_id: String, message: String },
    ToggleBirthdayLike { member_id: String },

    // === Devotionals ===
    PublishDevotional(DevotionalDraft),
    DeleteDevotional { id: String },
    ToggleDevotionalLike { id: String },
    CommentOnDevotional { id: String, content: String },
    DeleteDevotionalComment { id: String, comment_id: String },

    // === Prayers ===
    SubmitPrayer { content: String },
    DeletePrayer { id: String },
    TogglePrayerLike { id: String },
    CommentOnPrayer { id: String, content: String },
    DeletePrayerComment { id: String, comment_id: String },

    // === Schedules and attendance ===
    AddSchedule(ScheduleDraft),
    DeleteSchedule { id: String },
    RecordAttendance { member_id: String, schedule_id: String },

    // === Finance ===
    RecordTithe(TitheDraft),
    DeleteTithe { id: String },
    RecordExpense(ExpenseDraft),
    DeleteExpense { id: String },

    // === Volunteers ===
    SignUpVolunteer { role: MinistryRole },
    ApproveVolunteer { id: String },

    // === Feedback ===
    SubmitFeedback {
        #[serde(default)]
        name: Option<String>,
        message: String,
    },

    // === Church profile ===
    UpdateChurchInfo(ChurchInfoPatch),
    AddSlide {
        url: String,
        #[serde(default)]
        caption: String,
    },
    UpdateSlideCaption { id: String, caption: String },
    RemoveSlide { id: String },
    SavePastor(PastorDraft),
    RemovePastor { id: String },

    // === Notifications ===
    MarkAllNotificationsRead,
}

impl Action {
    /// Short name for logs; never includes payload such as passwords
    pub fn name(&self) -> &'static str {
        match self {
            Self::AdminLogin { .. } => "admin_login",
            Self::MemberLogin { .. } => "member_login",
            Self::Register(_) => "register",
            Self::Logout => "logout",
            Self::ChangeAdminPassword { .. } => "change_admin_password",
            Self::AddMember(_) => "add_member",
            Self::UpdateMember { .. } => "update_member",
            Self::DeleteMember { .. } => "delete_member",
            Self::UpdateProfile(_) => "update_profile",
            Self::SetProfilePhoto { .. } => "set_profile_photo",
            Self::SendBirthdayWish { .. } => "send_birthday_wish",
            Self::ToggleBirthdayLike { .. } => "toggle_birthday_like",
            Self::PublishDevotional(_) => "publish_devotional",
            Self::DeleteDevotional { .. } => "delete_devotional",
            Self::ToggleDevotionalLike { .. } => "toggle_devotional_like",
            Self::CommentOnDevotional { .. } => "comment_on_devotional",
            Self::DeleteDevotionalComment { .. } => "delete_devotional_comment",
            Self::SubmitPrayer { .. } => "submit_prayer",
            Self::DeletePrayer { .. } => "delete_prayer",
            Self::TogglePrayerLike { .. } => "toggle_prayer_like",
            Self::CommentOnPrayer { .. } => "comment_on_prayer",
            Self::DeletePrayerComment { .. } => "delete_prayer_comment",
            Self::AddSchedule(_) => "add_schedule",
            Self::DeleteSchedule { .. } => "delete_schedule",
            Self::RecordAttendance { .. } => "record_attendance",
            Self::RecordTithe(_) => "record_tithe",
            Self::DeleteTithe { .. } => "delete_tithe",
            Self::RecordExpense(_) => "record_expense",
            Self::DeleteExpense { .. } => "delete_expense",
            Self::SignUpVolunteer { .. } => "sign_up_volunteer",
            Self::ApproveVolunteer { .. } => "approve_volunteer",
            Self::SubmitFeedback { .. } => "submit_feedback",
            Self::UpdateChurchInfo(_) => "update_church_info",
            Self::AddSlide { .. } => "add_slide",
            Self::UpdateSlideCaption { .. } => "update_slide_caption",
            Self::RemoveSlide { .. } => "remove_slide",
            Self::SavePastor(_) => "save_pastor",
            Self::RemovePastor { .. } => "remove_pastor",
            Self::MarkAllNotificationsRead => "mark_all_notifications_read",
        }
    }
}

/// What an applied action produced
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "outcome", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Outcome {
    Applied,
    Created { id: String },
    Login(LoginOutcome),
    Liked { liked: bool, likes: u32 },
    /// Number of records touched by a bulk update
    Updated { count: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_action_json_tagging() {
        let action: Action =
            serde_json::from_str(r#"{"action":"memberLogin","phone":"0800000000"}"#).unwrap();
        assert!(matches!(action, Action::MemberLogin { ref phone } if phone == "0800000000"));

        let action: Action = serde_json::from_str(
            r#"{"action":"sendBirthdayWish","memberId":"JM001","message":"Selamat!"}"#,
        )
        .unwrap();
        assert_eq!(action.name(), "send_birthday_wish");

        let action: Action = serde_json::from_str(r#"{"action":"logout"}"#).unwrap();
        assert!(matches!(action, Action::Logout));
    }

    #[test]
    fn test_newtype_action_reads_flat_fields() {
        let action: Action = serde_json::from_str(
            r#"{"action":"publishDevotional","title":"Kasih","content":"Isi","verse":"1 Yoh 4:8","author":"Pdt"}"#,
        )
        .unwrap();
        match action {
            Action::PublishDevotional(draft) => {
                assert_eq!(draft.title, "Kasih");
                assert_eq!(draft.image_url, None);
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_outcome_json() {
        let json = serde_json::to_string(&Outcome::Created {
            id: "JM004".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"outcome":"created","id":"JM004"}"#);
    }

    #[test]
    fn test_name_hides_password() {
        let action = Action::AdminLogin {
            password: "rahasia".to_string(),
        };
        assert!(!action.name().contains("rahasia"));
    }
}
