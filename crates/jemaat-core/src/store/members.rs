//! Member records, profiles and birthday greetings

use tracing::{debug, info};

use super::action::Outcome;
use super::notify;
use super::transition::{not_found, remove_by, Transition};
use crate::error::Result;
use crate::media::check_image;
use crate::state::IdKind;
use crate::types::*;
use crate::validation::{or_default, require};

impl Transition<'_> {
    pub(super) fn add_member(&mut self, draft: MemberDraft) -> Result<Outcome> {
        self.require_admin()?;
        check_image(&draft.photo_url, self.settings.photo_max_bytes)?;

        let id = self.next_id(IdKind::Member);
        let member = Member {
            id: id.clone(),
            name: or_default(&draft.name, "Tanpa Nama"),
            phone: or_default(&draft.phone, "-"),
            address: or_default(&draft.address, "-"),
            joined_at: self.today(),
            photo_url: draft.photo_url.trim().to_string(),
            birth_place: draft.birth_place.trim().to_string(),
            birth_date: draft.birth_date,
            is_baptized: draft.is_baptized,
            wishes: Vec::new(),
            birthday_likes: Vec::new(),
        };
        info!("Added member {} ({})", id, member.name);
        self.state.members.insert(0, member);
        Ok(Outcome::Created { id })
    }

    pub(super) fn update_member(&mut self, id: &str, patch: MemberPatch) -> Result<Outcome> {
        self.require_admin()?;
        if let Some(photo) = &patch.photo_url {
            check_image(photo, self.settings.photo_max_bytes)?;
        }
        let member = self
            .state
            .member_mut(id)
            .ok_or_else(|| not_found("member", id))?;
        patch.apply_to(member);
        info!("Updated member {}", id);
        Ok(Outcome::Applied)
    }

    /// Removes exactly one member. Their tithes, attendance, volunteer
    /// entries, prayers and comments stay where they are.
    pub(super) fn delete_member(&mut self, id: &str) -> Result<Outcome> {
        self.require_admin()?;
        remove_by(&mut self.state.members, "member", id, |m| &m.id)?;
        info!("Deleted member {}", id);
        Ok(Outcome::Applied)
    }

    pub(super) fn update_profile(&mut self, patch: MemberPatch) -> Result<Outcome> {
        let actor = self.require_member()?;
        if let Some(name) = &patch.name {
            require("name", name)?;
        }
        if let Some(phone) = &patch.phone {
            require("phone", phone)?;
        }
        if let Some(photo) = &patch.photo_url {
            check_image(photo, self.settings.photo_max_bytes)?;
        }

        let member = self
            .state
            .member_mut(&actor.id)
            .ok_or_else(|| not_found("member", &actor.id))?;
        patch.apply_to(member);
        info!("Member {} updated their profile", actor.id);
        Ok(Outcome::Applied)
    }

    pub(super) fn set_profile_photo(&mut self, photo_url: String) -> Result<Outcome> {
        let actor = self.require_member()?;
        check_image(&photo_url, self.settings.photo_max_bytes)?;
        let member = self
            .state
            .member_mut(&actor.id)
            .ok_or_else(|| not_found("member", &actor.id))?;
        member.photo_url = photo_url.trim().to_string();
        debug!("Member {} changed profile photo", actor.id);
        Ok(Outcome::Applied)
    }

    pub(super) fn send_birthday_wish(&mut self, member_id: &str, message: &str) -> Result<Outcome> {
        let actor = self.actor()?;
        let message = require("message", message)?.to_string();
        if self.state.member(member_id).is_none() {
            return Err(not_found("member", member_id));
        }

        let id = self.next_id(IdKind::Wish);
        let sender_name = if actor.is_admin {
            ADMIN_WISH_NAME.to_string()
        } else {
            actor.name.clone()
        };
        let wish = BirthdayWish {
            id: id.clone(),
            sender_id: actor.id.clone(),
            sender_name,
            message: message.clone(),
            created_at: self.now,
        };
        if let Some(member) = self.state.member_mut(member_id) {
            member.wishes.push(wish);
        }
        self.notify_opt(notify::birthday_wished(&actor, member_id, &message));

        info!("Birthday wish {} sent to {}", id, member_id);
        Ok(Outcome::Created { id })
    }

    pub(super) fn toggle_birthday_like(&mut self, member_id: &str) -> Result<Outcome> {
        let actor = self.actor()?;
        let member = self
            .state
            .member_mut(member_id)
            .ok_or_else(|| not_found("member", member_id))?;

        let liked = match member.birthday_likes.iter().position(|id| *id == actor.id) {
            Some(pos) => {
                member.birthday_likes.remove(pos);
                false
            }
            None => {
                member.birthday_likes.push(actor.id.clone());
                true
            }
        };
        let likes = member.birthday_likes.len() as u32;

        if liked {
            self.notify_opt(notify::birthday_liked(&actor, member_id));
        }
        debug!("Birthday like on {} by {}: {}", member_id, actor.id, liked);
        Ok(Outcome::Liked { liked, likes })
    }
}

