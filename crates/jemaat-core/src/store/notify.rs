//! Notification fan-out
//!
//! Builders for the notifications raised by store actions, plus the
//! read-side helpers that apply the visibility rules.

use crate::state::AppState;
use crate::types::*;

/// A notification before it receives an id and timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationDraft {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub link_to: &'static str,
    pub target_user_id: Option<String>,
}

impl NotificationDraft {
    fn broadcast(kind: NotificationKind, title: &str, message: String, link_to: &'static str) -> Self {
        Self {
            kind,
            title: title.to_string(),
            message,
            link_to,
            target_user_id: None,
        }
    }

    fn targeted(
        kind: NotificationKind,
        title: &str,
        message: String,
        link_to: &'static str,
        target: &str,
    ) -> Self {
        Self {
            target_user_id: Some(target.to_string()),
            ..Self::broadcast(kind, title, message, link_to)
        }
    }
}

pub fn member_registered(name: &str) -> NotificationDraft {
    NotificationDraft::broadcast(
        NotificationKind::Registration,
        "Pendaftaran Jemaat Baru",
        format!("{} baru saja mendaftar ke dalam sistem.", name),
        "/admin/members",
    )
}

pub fn volunteer_signed_up(name: &str, role: MinistryRole) -> NotificationDraft {
    NotificationDraft::broadcast(
        NotificationKind::Volunteer,
        "Permohonan Pelayanan",
        format!("{} mendaftar sebagai {}.", name, role.label()),
        "/admin/volunteers",
    )
}

pub fn devotional_published(title: &str) -> NotificationDraft {
    NotificationDraft::broadcast(
        NotificationKind::Renungan,
        "Renungan Baru",
        format!("Renungan hari ini: \"{}\" telah terbit.", title),
        "/devotional",
    )
}

/// The owner hears about activity on their content from someone else.
/// Content owned by the administrator never produces a notification.
fn reaches_owner(actor: &Actor, owner_id: &str) -> bool {
    owner_id != actor.id && owner_id != ADMIN_ID
}

/// A member said "Amin" on someone's prayer request
pub fn prayer_liked(actor: &Actor, owner_id: &str) -> Option<NotificationDraft> {
    if actor.is_admin || !reaches_owner(actor, owner_id) {
        return None;
    }
    Some(NotificationDraft::targeted(
        NotificationKind::Prayer,
        "Dukungan Doa",
        format!("{} mendoakan (Amin) pokok doa Anda.", actor.name),
        "/prayers",
        owner_id,
    ))
}

pub fn prayer_commented(
    actor: &Actor,
    owner_id: &str,
    content: &str,
    preview_chars: usize,
) -> Option<NotificationDraft> {
    if !reaches_owner(actor, owner_id) {
        return None;
    }
    let quoted = preview(content, preview_chars);
    let draft = if actor.is_admin {
        NotificationDraft::targeted(
            NotificationKind::Prayer,
            "Respon Admin",
            format!("Admin memberikan dukungan pada doa Anda: \"{}\"", quoted),
            "/prayers",
            owner_id,
        )
    } else {
        NotificationDraft::targeted(
            NotificationKind::Prayer,
            "Dukungan Doa Baru",
            format!("{} memberikan dukungan pada doa Anda: \"{}\"", actor.name, quoted),
            "/prayers",
            owner_id,
        )
    };
    Some(draft)
}

pub fn birthday_wished(actor: &Actor, celebrant_id: &str, message: &str) -> Option<NotificationDraft> {
    if actor.is_admin || !reaches_owner(actor, celebrant_id) {
        return None;
    }
    Some(NotificationDraft::targeted(
        NotificationKind::Birthday,
        "Ucapan Ulang Tahun",
        format!("{} memberikan ucapan selamat: \"{}\"", actor.name, message),
        "/birthdays",
        celebrant_id,
    ))
}

pub fn birthday_liked(actor: &Actor, celebrant_id: &str) -> Option<NotificationDraft> {
    if actor.is_admin || !reaches_owner(actor, celebrant_id) {
        return None;
    }
    Some(NotificationDraft::targeted(
        NotificationKind::Birthday,
        "Tanda Kasih Ulang Tahun",
        format!(
            "{} mengirimkan tanda kasih (Love) di hari ulang tahun Anda.",
            actor.name
        ),
        "/birthdays",
        celebrant_id,
    ))
}

// === Read side ===

/// Notifications `viewer` may see, newest first
pub fn visible_notifications<'a>(state: &'a AppState, viewer: &Viewer) -> Vec<&'a Notification> {
    let mut visible: Vec<&Notification> = state
        .notifications
        .iter()
        .filter(|n| n.is_visible_to(viewer))
        .collect();
    visible.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    visible
}

pub fn unread_count(state: &AppState, viewer: &Viewer) -> usize {
    state
        .notifications
        .iter()
        .filter(|n| !n.is_read && n.is_visible_to(viewer))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::fixtures;
    use pretty_assertions::assert_eq;

    fn member(id: &str, name: &str) -> Actor {
        Actor {
            id: id.to_string(),
            name: name.to_string(),
            is_admin: false,
        }
    }

    #[test]
    fn test_volunteer_message_uses_role_label() {
        let draft = volunteer_signed_up("Agus Wijaya", MinistryRole::Usher);
        assert_eq!(draft.message, "Agus Wijaya mendaftar sebagai Usher / Kolektan.");
        assert_eq!(draft.target_user_id, None);
    }

    #[test]
    fn test_prayer_like_targets_owner() {
        let draft = prayer_liked(&member("JM001", "Budi Santoso"), "JM002").unwrap();
        assert_eq!(draft.target_user_id.as_deref(), Some("JM002"));
        assert_eq!(draft.title, "Dukungan Doa");
        assert_eq!(draft.message, "Budi Santoso mendoakan (Amin) pokok doa Anda.");
    }

    #[test]
    fn test_no_notification_for_own_or_admin_content() {
        let budi = member("JM001", "Budi Santoso");
        assert_eq!(prayer_liked(&budi, "JM001"), None);
        assert_eq!(prayer_liked(&budi, ADMIN_ID), None);
        assert_eq!(prayer_commented(&budi, "JM001", "x", 20), None);
        assert_eq!(birthday_liked(&budi, "JM001"), None);
    }

    #[test]
    fn test_admin_reactions() {
        let admin = Actor::admin();
        assert_eq!(prayer_liked(&admin, "JM002"), None);
        assert_eq!(birthday_wished(&admin, "JM002", "Selamat"), None);

        let reply = prayer_commented(&admin, "JM002", "Tuhan memberkati selalu ya ibu", 20).unwrap();
        assert_eq!(reply.title, "Respon Admin");
        assert_eq!(
            reply.message,
            "Admin memberikan dukungan pada doa Anda: \"Tuhan memberkati sel...\""
        );
    }

    #[test]
    fn test_comment_quotes_preview() {
        let draft = prayer_commented(&member("JM001", "Budi"), "JM002", "Kami turut berdoa bu Siti", 20)
            .unwrap();
        assert_eq!(
            draft.message,
            "Budi memberikan dukungan pada doa Anda: \"Kami turut berdoa bu...\""
        );
    }

    #[test]
    fn test_visibility_and_unread() {
        let mut state = fixtures::seed_state();
        let mut targeted = state.notifications[0].clone();
        targeted.id = "N002".to_string();
        targeted.target_user_id = Some("JM002".to_string());
        state.notifications.insert(0, targeted);

        assert_eq!(visible_notifications(&state, &Viewer::Admin).len(), 2);
        assert_eq!(
            visible_notifications(&state, &Viewer::Member("JM002".to_string())).len(),
            2
        );
        assert_eq!(
            visible_notifications(&state, &Viewer::Member("JM001".to_string())).len(),
            1
        );
        assert_eq!(visible_notifications(&state, &Viewer::Guest).len(), 1);
        assert_eq!(unread_count(&state, &Viewer::Guest), 1);
    }
}
