//! Sign-in, registration and admin password

use tracing::info;

use super::action::Outcome;
use super::notify;
use super::transition::Transition;
use crate::error::{AuthError, Result, StoreError, ValidationError};
use crate::state::IdKind;
use crate::types::*;
use crate::validation::require;

impl Transition<'_> {
    pub(super) fn admin_login(&mut self, password: &str) -> Result<Outcome> {
        if password != self.state.admin_password {
            return Err(AuthError::InvalidPassword.into());
        }
        self.state.session = Session {
            role: UserRole::Admin,
            current_user_id: None,
        };
        info!("Administrator signed in");
        Ok(Outcome::Login(LoginOutcome::Admin))
    }

    pub(super) fn member_login(&mut self, phone: &str) -> Result<Outcome> {
        let phone = require("phone", phone)?;
        let Some(member) = self.state.member_by_phone(phone) else {
            info!("Unknown phone, registration required");
            return Ok(Outcome::Login(LoginOutcome::RegistrationRequired {
                phone: phone.to_string(),
            }));
        };

        let member_id = member.id.clone();
        let name = member.name.clone();
        self.state.session = Session {
            role: UserRole::Jemaat,
            current_user_id: Some(member_id.clone()),
        };
        info!("Member signed in: {}", member_id);
        Ok(Outcome::Login(LoginOutcome::SignedIn { member_id, name }))
    }

    pub(super) fn register(&mut self, form: RegistrationForm) -> Result<Outcome> {
        let phone = require("phone", &form.phone)?.to_string();
        if self.state.member_by_phone(&phone).is_some() {
            return Err(StoreError::PhoneTaken { phone }.into());
        }
        let name = require("name", &form.name)?.to_string();
        let address = require("address", &form.address)?.to_string();
        let birth_place = require("birthPlace", &form.birth_place)?.to_string();
        let birth_date = form
            .birth_date
            .ok_or(ValidationError::MissingField("birthDate"))?;

        let id = self.next_id(IdKind::Member);
        let member = Member {
            id: id.clone(),
            name: name.clone(),
            phone,
            address,
            joined_at: self.today(),
            photo_url: String::new(),
            birth_place,
            birth_date: Some(birth_date),
            is_baptized: form.is_baptized,
            wishes: Vec::new(),
            birthday_likes: Vec::new(),
        };
        self.state.members.insert(0, member);
        self.notify(notify::member_registered(&name));
        self.state.session = Session {
            role: UserRole::Jemaat,
            current_user_id: Some(id.clone()),
        };

        info!("Registered member {} ({})", id, name);
        Ok(Outcome::Login(LoginOutcome::SignedIn {
            member_id: id,
            name,
        }))
    }

    pub(super) fn logout(&mut self) -> Result<Outcome> {
        self.state.session = Session::default();
        info!("Signed out");
        Ok(Outcome::Applied)
    }

    pub(super) fn change_admin_password(
        &mut self,
        current: &str,
        new: &str,
        confirm: &str,
    ) -> Result<Outcome> {
        self.require_admin()?;
        if current != self.state.admin_password {
            return Err(AuthError::InvalidPassword.into());
        }
        let min = self.settings.password_min_len;
        if new.chars().count() < min {
            return Err(ValidationError::PasswordTooShort { min }.into());
        }
        if new != confirm {
            return Err(ValidationError::PasswordMismatch.into());
        }

        self.state.admin_password = new.to_string();
        info!("Administrator password changed");
        Ok(Outcome::Applied)
    }
}
