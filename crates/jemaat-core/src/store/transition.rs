//! Working context for one action
//!
//! A `Transition` mutates a private copy of the state; the store only
//! publishes that copy when the whole action succeeds.

use chrono::{DateTime, NaiveDate, Utc};

use super::action::{Action, Outcome};
use super::notify::NotificationDraft;
use crate::error::{AuthError, Result, StoreError};
use crate::state::{AppState, IdKind};
use crate::types::*;

pub(super) struct Transition<'a> {
    pub state: &'a mut AppState,
    pub settings: &'a StoreSettings,
    pub now: DateTime<Utc>,
}

impl Transition<'_> {
    pub fn run(&mut self, action: Action) -> Result<Outcome> {
        match action {
            Action::AdminLogin { password } => self.admin_login(&password),
            Action::MemberLogin { phone } => self.member_login(&phone),
            Action::Register(form) => self.register(form),
            Action::Logout => self.logout(),
            Action::ChangeAdminPassword {
                current,
                new,
                confirm,
            } => self.change_admin_password(&current, &new, &confirm),

            Action::AddMember(draft) => self.add_member(draft),
            Action::UpdateMember { id, patch } => self.update_member(&id, patch),
            Action::DeleteMember { id } => self.delete_member(&id),
            Action::UpdateProfile(patch) => self.update_profile(patch),
            Action::SetProfilePhoto { photo_url } => self.set_profile_photo(photo_url),

            Action::SendBirthdayWish { member_id, message } => {
                self.send_birthday_wish(&member_id, &message)
            }
            Action::ToggleBirthdayLike { member_id } => self.toggle_birthday_like(&member_id),

            Action::PublishDevotional(draft) => self.publish_devotional(draft),
            Action::DeleteDevotional { id } => self.delete_devotional(&id),
            Action::ToggleDevotionalLike { id } => self.toggle_devotional_like(&id),
            Action::CommentOnDevotional { id, content } => {
                self.comment_on_devotional(&id, &content)
            }
            Action::DeleteDevotionalComment { id, comment_id } => {
                self.delete_devotional_comment(&id, &comment_id)
            }

            Action::SubmitPrayer { content } => self.submit_prayer(&content),
            Action::DeletePrayer { id } => self.delete_prayer(&id),
            Action::TogglePrayerLike { id } => self.toggle_prayer_like(&id),
            Action::CommentOnPrayer { id, content } => self.comment_on_prayer(&id, &content),
            Action::DeletePrayerComment { id, comment_id } => {
                self.delete_prayer_comment(&id, &comment_id)
            }

            Action::AddSchedule(draft) => self.add_schedule(draft),
            Action::DeleteSchedule { id } => self.delete_schedule(&id),
            Action::RecordAttendance {
                member_id,
                schedule_id,
            } => self.record_attendance(&member_id, &schedule_id),

            Action::RecordTithe(draft) => self.record_tithe(draft),
            Action::DeleteTithe { id } => self.delete_tithe(&id),
            Action::RecordExpense(draft) => self.record_expense(draft),
            Action::DeleteExpense { id } => self.delete_expense(&id),

            Action::SignUpVolunteer { role } => self.sign_up_volunteer(role),
            Action::ApproveVolunteer { id } => self.approve_volunteer(&id),

            Action::SubmitFeedback { name, message } => {
                self.submit_feedback(name.as_deref().unwrap_or_default(), &message)
            }

            Action::UpdateChurchInfo(patch) => self.update_church_info(patch),
            Action::AddSlide { url, caption } => self.add_slide(url, &caption),
            Action::UpdateSlideCaption { id, caption } => self.update_slide_caption(&id, &caption),
            Action::RemoveSlide { id } => self.remove_slide(&id),
            Action::SavePastor(draft) => self.save_pastor(draft),
            Action::RemovePastor { id } => self.remove_pastor(&id),

            Action::MarkAllNotificationsRead => self.mark_all_notifications_read(),
        }
    }

    // === Context helpers ===

    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    pub fn next_id(&mut self, kind: IdKind) -> String {
        self.state.ids.next(kind)
    }

    pub fn require_admin(&self) -> Result<()> {
        if self.state.session.is_admin() {
            Ok(())
        } else {
            Err(AuthError::AdminRequired.into())
        }
    }

    /// The signed-in member; the administrator does not count
    pub fn require_member(&self) -> Result<Actor> {
        if self.state.session.is_admin() {
            return Err(AuthError::NotSignedIn.into());
        }
        self.state
            .current_member()
            .map(Actor::member)
            .ok_or_else(|| AuthError::NotSignedIn.into())
    }

    /// Whoever may react to content: the administrator or a signed-in member
    pub fn actor(&self) -> Result<Actor> {
        if self.state.session.is_admin() {
            Ok(Actor::admin())
        } else {
            self.require_member()
        }
    }

    /// Prepend an unread notification
    pub fn notify(&mut self, draft: NotificationDraft) {
        let id = self.next_id(IdKind::Notification);
        self.state.notifications.insert(
            0,
            Notification {
                id,
                title: draft.title,
                message: draft.message,
                kind: draft.kind,
                is_read: false,
                created_at: self.now,
                link_to: Some(draft.link_to.to_string()),
                target_user_id: draft.target_user_id,
            },
        );
    }

    pub fn notify_opt(&mut self, draft: Option<NotificationDraft>) {
        if let Some(draft) = draft {
            self.notify(draft);
        }
    }

    pub fn new_comment(&mut self, actor: &Actor, content: &str) -> Comment {
        Comment {
            id: self.next_id(IdKind::Comment),
            user_id: actor.id.clone(),
            user_name: actor.name.clone(),
            content: content.to_string(),
            created_at: self.now,
        }
    }
}

/// Remove the single record matching `id`, or report it missing
pub(super) fn remove_by<T>(
    items: &mut Vec<T>,
    kind: &'static str,
    id: &str,
    key: impl Fn(&T) -> &str,
) -> Result<T> {
    let pos = items
        .iter()
        .position(|item| key(item) == id)
        .ok_or_else(|| not_found(kind, id))?;
    Ok(items.remove(pos))
}

pub(super) fn not_found(kind: &'static str, id: &str) -> crate::error::Error {
    StoreError::NotFound {
        kind,
        id: id.to_string(),
    }
    .into()
}
