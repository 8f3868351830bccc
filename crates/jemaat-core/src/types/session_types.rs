//! Session and role types

use serde::{Deserialize, Serialize};

use super::{Member, Viewer};

/// User id recorded when the administrator comments or likes
pub const ADMIN_ID: &str = "ADMIN";
/// Display name on administrator comments
pub const ADMIN_NAME: &str = "Administrator";
/// Display name on administrator birthday wishes
pub const ADMIN_WISH_NAME: &str = "Admin Gereja";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    #[default]
    Jemaat,
}

/// Current session: a role plus the signed-in member, if any.
///
/// The member is stored by id; the record itself lives only in the member
/// collection so profile edits never leave a stale copy behind.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub role: UserRole,
    pub current_user_id: Option<String>,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn viewer(&self) -> Viewer {
        match (self.role, &self.current_user_id) {
            (UserRole::Admin, _) => Viewer::Admin,
            (UserRole::Jemaat, Some(id)) => Viewer::Member(id.clone()),
            (UserRole::Jemaat, None) => Viewer::Guest,
        }
    }
}

/// Who performed an action, as recorded on comments, likes and wishes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: String,
    pub name: String,
    pub is_admin: bool,
}

impl Actor {
    pub fn admin() -> Self {
        Self {
            id: ADMIN_ID.to_string(),
            name: ADMIN_NAME.to_string(),
            is_admin: true,
        }
    }

    pub fn member(member: &Member) -> Self {
        Self {
            id: member.id.clone(),
            name: member.name.clone(),
            is_admin: false,
        }
    }
}

/// Result of a phone-number login attempt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum LoginOutcome {
    SignedIn { member_id: String, name: String },
    /// Unknown phone; the caller should show the registration form
    RegistrationRequired { phone: String },
    Admin,
}
