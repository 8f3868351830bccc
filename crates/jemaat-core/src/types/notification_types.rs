//! Notification feed types and visibility rules

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    Registration,
    Volunteer,
    System,
    Renungan,
    Prayer,
    Birthday,
}

/// Feed entry. No `target_user_id` means broadcast.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub link_to: Option<String>,
    pub target_user_id: Option<String>,
}

impl Notification {
    pub fn is_broadcast(&self) -> bool {
        self.target_user_id.is_none()
    }

    /// Admin sees everything; members see broadcasts and their own; guests see broadcasts
    pub fn is_visible_to(&self, viewer: &Viewer) -> bool {
        match viewer {
            Viewer::Admin => true,
            Viewer::Member(id) => match &self.target_user_id {
                None => true,
                Some(target) => target == id,
            },
            Viewer::Guest => self.is_broadcast(),
        }
    }
}

/// Who is looking at the feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum Viewer {
    Admin,
    Member(String),
    Guest,
}
