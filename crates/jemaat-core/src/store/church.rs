//! Church profile, landing slideshow, pastoral team and the notification feed

use tracing::{debug, info};

use super::action::Outcome;
use super::transition::{not_found, remove_by, Transition};
use crate::error::{Result, StoreError};
use crate::media::check_image;
use crate::state::IdKind;
use crate::types::*;
use crate::validation::{or_default, require};

const DEFAULT_CAPTION: &str = "Tanpa Keterangan";

impl Transition<'_> {
    pub(super) fn update_church_info(&mut self, patch: ChurchInfoPatch) -> Result<Outcome> {
        self.require_admin()?;
        if let Some(logo) = &patch.logo_url {
            check_image(logo, self.settings.asset_max_bytes)?;
        }
        patch.apply_to(&mut self.state.church_info);
        info!("Church profile updated");
        Ok(Outcome::Applied)
    }

    // === Slideshow ===

    pub(super) fn add_slide(&mut self, url: String, caption: &str) -> Result<Outcome> {
        self.require_admin()?;
        let limit = self.settings.slideshow_limit;
        if self.state.slideshow.len() >= limit {
            return Err(StoreError::SlideshowFull { limit }.into());
        }
        let url = require("url", &url)?.to_string();
        check_image(&url, self.settings.photo_max_bytes)?;

        let id = self.next_id(IdKind::Slide);
        self.state.slideshow.push(SlideshowImage {
            id: id.clone(),
            url,
            caption: or_default(caption, DEFAULT_CAPTION),
        });
        info!("Added slide {}", id);
        Ok(Outcome::Created { id })
    }

    pub(super) fn update_slide_caption(&mut self, id: &str, caption: &str) -> Result<Outcome> {
        self.require_admin()?;
        let slide = self
            .state
            .slideshow
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| not_found("slide", id))?;
        slide.caption = or_default(caption, DEFAULT_CAPTION);
        debug!("Slide {} caption updated", id);
        Ok(Outcome::Applied)
    }

    pub(super) fn remove_slide(&mut self, id: &str) -> Result<Outcome> {
        self.require_admin()?;
        remove_by(&mut self.state.slideshow, "slide", id, |s| &s.id)?;
        info!("Removed slide {}", id);
        Ok(Outcome::Applied)
    }

    // === Pastoral team ===

    /// Updates the pastor named by `draft.id` when it exists, otherwise adds one
    pub(super) fn save_pastor(&mut self, draft: PastorDraft) -> Result<Outcome> {
        self.require_admin()?;
        let name = require("name", &draft.name)?.to_string();
        let role = require("role", &draft.role)?.to_string();
        let photo_url = draft.photo_url.trim().to_string();
        check_image(&photo_url, self.settings.asset_max_bytes)?;

        let existing = draft
            .id
            .as_deref()
            .and_then(|id| self.state.pastoral_team.iter_mut().find(|p| p.id == id));
        if let Some(pastor) = existing {
            pastor.name = name;
            pastor.role = role;
            // A blank photo keeps the current one
            if !photo_url.is_empty() {
                pastor.photo_url = photo_url;
            }
            info!("Updated pastor {}", pastor.id);
            return Ok(Outcome::Applied);
        }

        let id = self.next_id(IdKind::Pastor);
        self.state.pastoral_team.push(Pastor {
            id: id.clone(),
            name,
            role,
            photo_url,
        });
        info!("Added pastor {}", id);
        Ok(Outcome::Created { id })
    }

    pub(super) fn remove_pastor(&mut self, id: &str) -> Result<Outcome> {
        self.require_admin()?;
        remove_by(&mut self.state.pastoral_team, "pastor", id, |p| &p.id)?;
        info!("Removed pastor {}", id);
        Ok(Outcome::Applied)
    }

    // === Notifications ===

    /// Marks read only what the current viewer can see
    pub(super) fn mark_all_notifications_read(&mut self) -> Result<Outcome> {
        let viewer = self.state.session.viewer();
        let mut count = 0;
        for notification in self
            .state
            .notifications
            .iter_mut()
            .filter(|n| !n.is_read && n.is_visible_to(&viewer))
        {
            notification.is_read = true;
            count += 1;
        }
        debug!("Marked {} notifications read", count);
        Ok(Outcome::Updated { count })
    }
}
