//! Schedules, attendance, finance and volunteer sign-ups

use chrono::NaiveTime;
use tracing::info;

use super::action::Outcome;
use super::notify;
use super::transition::{not_found, remove_by, Transition};
use crate::error::{Result, StoreError, ValidationError};
use crate::state::IdKind;
use crate::types::*;
use crate::validation::{or_default, require};

fn default_service_time() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN)
}

fn dangling(kind: &'static str, id: &str) -> crate::error::Error {
    StoreError::DanglingReference {
        kind,
        id: id.to_string(),
    }
    .into()
}

impl Transition<'_> {
    // === Schedules ===

    pub(super) fn add_schedule(&mut self, draft: ScheduleDraft) -> Result<Outcome> {
        self.require_admin()?;
        let id = self.next_id(IdKind::Schedule);
        let schedule = Schedule {
            id: id.clone(),
            service_type: draft.service_type,
            date: draft.date.unwrap_or_else(|| self.today()),
            time: draft.time.unwrap_or_else(default_service_time),
            preacher: or_default(&draft.preacher, "-"),
            worship_leader: or_default(&draft.worship_leader, "-"),
        };
        info!(
            "Added schedule {} ({} on {})",
            id,
            schedule.service_type.label(),
            schedule.date
        );
        self.state.schedules.push(schedule);
        Ok(Outcome::Created { id })
    }

    pub(super) fn delete_schedule(&mut self, id: &str) -> Result<Outcome> {
        self.require_admin()?;
        remove_by(&mut self.state.schedules, "schedule", id, |s| &s.id)?;
        info!("Deleted schedule {}", id);
        Ok(Outcome::Applied)
    }

    // === Attendance ===

    pub(super) fn record_attendance(&mut self, member_id: &str, schedule_id: &str) -> Result<Outcome> {
        self.require_admin()?;
        let member_name = self
            .state
            .member(member_id)
            .map(|m| m.name.clone())
            .ok_or_else(|| dangling("member", member_id))?;
        if self.state.schedule(schedule_id).is_none() {
            return Err(dangling("schedule", schedule_id));
        }

        let id = self.next_id(IdKind::Attendance);
        self.state.attendance.insert(
            0,
            AttendanceRecord {
                id: id.clone(),
                member_id: member_id.to_string(),
                member_name,
                schedule_id: schedule_id.to_string(),
                timestamp: self.now,
            },
        );
        info!("Attendance {} for {} at {}", id, member_id, schedule_id);
        Ok(Outcome::Created { id })
    }

    // === Finance ===

    pub(super) fn record_tithe(&mut self, draft: TitheDraft) -> Result<Outcome> {
        self.require_admin()?;
        if draft.amount == 0 {
            return Err(ValidationError::InvalidAmount.into());
        }
        let member_name = self
            .state
            .member(&draft.member_id)
            .map(|m| m.name.clone())
            .ok_or_else(|| dangling("member", &draft.member_id))?;

        let date = draft.date.unwrap_or_else(|| self.today());
        let id = self.next_id(IdKind::Tithe);
        self.state.tithes.push(Tithe {
            id: id.clone(),
            member_id: draft.member_id,
            member_name,
            amount: draft.amount,
            date,
            method: draft.method,
        });
        info!("Recorded tithe {} ({})", id, draft.amount);
        Ok(Outcome::Created { id })
    }

    pub(super) fn delete_tithe(&mut self, id: &str) -> Result<Outcome> {
        self.require_admin()?;
        remove_by(&mut self.state.tithes, "tithe", id, |t| &t.id)?;
        info!("Deleted tithe {}", id);
        Ok(Outcome::Applied)
    }

    pub(super) fn record_expense(&mut self, draft: ExpenseDraft) -> Result<Outcome> {
        self.require_admin()?;
        let description = require("description", &draft.description)?.to_string();
        if draft.amount == 0 {
            return Err(ValidationError::InvalidAmount.into());
        }

        let date = draft.date.unwrap_or_else(|| self.today());
        let id = self.next_id(IdKind::Expense);
        self.state.expenses.push(Expense {
            id: id.clone(),
            description,
            amount: draft.amount,
            date,
            category: draft.category,
        });
        info!("Recorded expense {} ({})", id, draft.amount);
        Ok(Outcome::Created { id })
    }

    pub(super) fn delete_expense(&mut self, id: &str) -> Result<Outcome> {
        self.require_admin()?;
        remove_by(&mut self.state.expenses, "expense", id, |e| &e.id)?;
        info!("Deleted expense {}", id);
        Ok(Outcome::Applied)
    }

    // === Volunteers ===

    pub(super) fn sign_up_volunteer(&mut self, role: MinistryRole) -> Result<Outcome> {
        let actor = self.require_member()?;
        let already = self
            .state
            .volunteers
            .iter()
            .any(|v| v.user_id == actor.id && v.role == role);
        if already {
            return Err(StoreError::AlreadyRegistered.into());
        }
        let phone = self
            .state
            .member(&actor.id)
            .map(|m| m.phone.clone())
            .unwrap_or_default();

        let id = self.next_id(IdKind::Volunteer);
        self.state.volunteers.push(Volunteer {
            id: id.clone(),
            user_id: actor.id.clone(),
            user_name: actor.name.clone(),
            user_phone: phone,
            role,
            status: VolunteerStatus::Pending,
            created_at: self.now,
        });
        self.notify(notify::volunteer_signed_up(&actor.name, role));

        info!("Volunteer {} ({} as {})", id, actor.id, role.label());
        Ok(Outcome::Created { id })
    }

    pub(super) fn approve_volunteer(&mut self, id: &str) -> Result<Outcome> {
        self.require_admin()?;
        let volunteer = self
            .state
            .volunteers
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or_else(|| not_found("volunteer", id))?;
        volunteer.status = VolunteerStatus::Approved;
        info!("Approved volunteer {}", id);
        Ok(Outcome::Applied)
    }
}
