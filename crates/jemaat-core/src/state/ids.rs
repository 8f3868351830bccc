//! Identifier issuing
//!
//! Every record id is a per-kind prefix followed by a zero-padded counter.
//! Counters start above the largest numeric suffix already present and
//! only move forward, so a deleted record's id is never handed out again.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::AppState;

/// Record kinds that receive generated ids
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum IdKind {
    Member,
    Devotional,
    Schedule,
    Prayer,
    Comment,
    Wish,
    Tithe,
    Expense,
    Slide,
    Pastor,
    Volunteer,
    Notification,
    Attendance,
    Feedback,
}

impl IdKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Member => "JM",
            Self::Devotional => "R",
            Self::Schedule => "J",
            Self::Prayer => "P",
            Self::Comment => "C",
            Self::Wish => "W",
            Self::Tithe => "T",
            Self::Expense => "E",
            Self::Slide => "S",
            Self::Pastor => "PS",
            Self::Volunteer => "VOL-",
            Self::Notification => "N",
            Self::Attendance => "A",
            Self::Feedback => "F",
        }
    }
}

/// Numeric part of `id` after `prefix`, if the remainder is all digits
pub fn numeric_suffix(prefix: &str, id: &str) -> Option<u64> {
    id.strip_prefix(prefix)?.parse().ok()
}

/// Monotonic per-kind id counters
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct IdIssuer {
    issued: BTreeMap<IdKind, u64>,
}

impl IdIssuer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise every counter to at least the ids present in `state`
    pub fn absorb(&mut self, state: &AppState) {
        for m in &state.members {
            self.observe(IdKind::Member, &m.id);
            for w in &m.wishes {
                self.observe(IdKind::Wish, &w.id);
            }
        }
        for d in &state.devotionals {
            self.observe(IdKind::Devotional, &d.id);
            for c in &d.comments {
                self.observe(IdKind::Comment, &c.id);
            }
        }
        for p in &state.prayers {
            self.observe(IdKind::Prayer, &p.id);
            for c in &p.comments {
                self.observe(IdKind::Comment, &c.id);
            }
        }
        for s in &state.schedules {
            self.observe(IdKind::Schedule, &s.id);
        }
        for t in &state.tithes {
            self.observe(IdKind::Tithe, &t.id);
        }
        for e in &state.expenses {
            self.observe(IdKind::Expense, &e.id);
        }
        for s in &state.slideshow {
            self.observe(IdKind::Slide, &s.id);
        }
        for p in &state.pastoral_team {
            self.observe(IdKind::Pastor, &p.id);
        }
        for v in &state.volunteers {
            self.observe(IdKind::Volunteer, &v.id);
        }
        for n in &state.notifications {
            self.observe(IdKind::Notification, &n.id);
        }
        for a in &state.attendance {
            self.observe(IdKind::Attendance, &a.id);
        }
        for f in &state.feedback {
            self.observe(IdKind::Feedback, &f.id);
        }
    }

    /// Record an existing id so later ids sort above it
    pub fn observe(&mut self, kind: IdKind, id: &str) {
        if let Some(n) = numeric_suffix(kind.prefix(), id) {
            let slot = self.issued.entry(kind).or_insert(0);
            if n > *slot {
                *slot = n;
            }
        }
    }

    /// Highest number issued or observed for `kind`
    pub fn high_water(&self, kind: IdKind) -> u64 {
        self.issued.get(&kind).copied().unwrap_or(0)
    }

    pub fn next(&mut self, kind: IdKind) -> String {
        let slot = self.issued.entry(kind).or_insert(0);
        *slot += 1;
        format!("{}{:03}", kind.prefix(), *slot)
    }
}
