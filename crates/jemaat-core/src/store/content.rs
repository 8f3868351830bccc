//! Devotionals, prayer requests and feedback

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
    // === Devotionals ===

    pub(super) fn publish_devotional(&mut self, draft: DevotionalDraft) -> Result<Outcome> {
        self.require_admin()?;
        let title = require("title", &draft.title)?.to_string();
        let content = require("content", &draft.content)?.to_string();
        let image_url = draft
            .image_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());
        if let Some(url) = &image_url {
            check_image(url, self.settings.photo_max_bytes)?;
        }

        let id = self.next_id(IdKind::Devotional);
        let devotional = Devotional {
            id: id.clone(),
            title: title.clone(),
            image_url,
            date: draft.date.unwrap_or_else(|| self.today()),
            verse: draft.verse.trim().to_string(),
            content,
            author: draft.author.trim().to_string(),
            likes: 0,
            liked_by: Vec::new(),
            comments: Vec::new(),
        };
        self.state.devotionals.insert(0, devotional);
        self.notify(notify::devotional_published(&title));

        info!("Published devotional {} ({})", id, title);
        Ok(Outcome::Created { id })
    }

    pub(super) fn delete_devotional(&mut self, id: &str) -> Result<Outcome> {
        self.require_admin()?;
        remove_by(&mut self.state.devotionals, "devotional", id, |d| &d.id)?;
        info!("Deleted devotional {}", id);
        Ok(Outcome::Applied)
    }

    pub(super) fn toggle_devotional_like(&mut self, id: &str) -> Result<Outcome> {
        let actor = self.actor()?;
        let devotional = self
            .state
            .devotional_mut(id)
            .ok_or_else(|| not_found("devotional", id))?;
        let liked = devotional.toggle_like(&actor.id);
        debug!("Devotional like on {} by {}: {}", id, actor.id, liked);
        Ok(Outcome::Liked {
            liked,
            likes: devotional.likes,
        })
    }

    pub(super) fn comment_on_devotional(&mut self, id: &str, content: &str) -> Result<Outcome> {
        let actor = self.actor()?;
        let content = require("content", content)?;
        if self.state.devotional_mut(id).is_none() {
            return Err(not_found("devotional", id));
        }

        let comment = self.new_comment(&actor, content);
        let comment_id = comment.id.clone();
        if let Some(devotional) = self.state.devotional_mut(id) {
            devotional.add_comment(comment);
        }
        info!("Comment {} on devotional {}", comment_id, id);
        Ok(Outcome::Created { id: comment_id })
    }

    pub(super) fn delete_devotional_comment(&mut self, id: &str, comment_id: &str) -> Result<Outcome> {
        self.require_admin()?;
        let devotional = self
            .state
            .devotional_mut(id)
            .ok_or_else(|| not_found("devotional", id))?;
        if !devotional.remove_comment(comment_id) {
            return Err(not_found("comment", comment_id));
        }
        info!("Removed comment {} from devotional {}", comment_id, id);
        Ok(Outcome::Applied)
    }

    // === Prayer requests ===

    pub(super) fn submit_prayer(&mut self, content: &str) -> Result<Outcome> {
        let actor = self.require_member()?;
        let content = require("content", content)?.to_string();

        let id = self.next_id(IdKind::Prayer);
        self.state.prayers.insert(
            0,
            PrayerRequest {
                id: id.clone(),
                user_id: actor.id.clone(),
                user_name: actor.name,
                content,
                created_at: self.now,
                likes: 0,
                liked_by: Vec::new(),
                comments: Vec::new(),
            },
        );
        info!("Prayer request {} from {}", id, actor.id);
        Ok(Outcome::Created { id })
    }

    pub(super) fn delete_prayer(&mut self, id: &str) -> Result<Outcome> {
        self.require_admin()?;
        remove_by(&mut self.state.prayers, "prayer", id, |p| &p.id)?;
        info!("Deleted prayer request {}", id);
        Ok(Outcome::Applied)
    }

    pub(super) fn toggle_prayer_like(&mut self, id: &str) -> Result<Outcome> {
        let actor = self.actor()?;
        let prayer = self
            .state
            .prayer_mut(id)
            .ok_or_else(|| not_found("prayer", id))?;
        let liked = prayer.toggle_like(&actor.id);
        let likes = prayer.likes;
        let owner_id = prayer.user_id.clone();

        if liked {
            self.notify_opt(notify::prayer_liked(&actor, &owner_id));
        }
        debug!("Prayer like on {} by {}: {}", id, actor.id, liked);
        Ok(Outcome::Liked { liked, likes })
    }

    pub(super) fn comment_on_prayer(&mut self, id: &str, content: &str) -> Result<Outcome> {
        let actor = self.actor()?;
        let content = require("content", content)?;
        let owner_id = self
            .state
            .prayer(id)
            .map(|p| p.user_id.clone())
            .ok_or_else(|| not_found("prayer", id))?;

        let comment = self.new_comment(&actor, content);
        let comment_id = comment.id.clone();
        if let Some(prayer) = self.state.prayer_mut(id) {
            prayer.add_comment(comment);
        }
        let preview_chars = self.settings.comment_preview_chars;
        self.notify_opt(notify::prayer_commented(&actor, &owner_id, content, preview_chars));

        info!("Comment {} on prayer {}", comment_id, id);
        Ok(Outcome::Created { id: comment_id })
    }

    pub(super) fn delete_prayer_comment(&mut self, id: &str, comment_id: &str) -> Result<Outcome> {
        self.require_admin()?;
        let prayer = self
            .state
            .prayer_mut(id)
            .ok_or_else(|| not_found("prayer", id))?;
        if !prayer.remove_comment(comment_id) {
            return Err(not_found("comment", comment_id));
        }
        info!("Removed comment {} from prayer {}", comment_id, id);
        Ok(Outcome::Applied)
    }

    // === Feedback ===

    /// Open to anyone, signed in or not
    pub(super) fn submit_feedback(&mut self, name: &str, message: &str) -> Result<Outcome> {
        let message = require("message", message)?.to_string();
        let id = self.next_id(IdKind::Feedback);
        self.state.feedback.insert(
            0,
            Feedback {
                id: id.clone(),
                name: or_default(name, "Anonymous"),
                message,
                created_at: self.now,
            },
        );
        info!("Feedback {} received", id);
        Ok(Outcome::Created { id })
    }
}
