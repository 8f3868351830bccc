//! Core type definitions for Jemaat
//!
//! This module contains every record kept in the congregation state,
//! the forms used to create them, and the store settings.

mod church_types;
mod content_types;
mod finance_types;
mod member_types;
mod notification_types;
mod schedule_types;
mod session_types;
mod volunteer_types;

pub use church_types::*;
pub use content_types::*;
pub use finance_types::*;
pub use member_types::*;
pub use notification_types::*;
pub use schedule_types::*;
pub use session_types::*;
pub use volunteer_types::*;

use serde::{Deserialize, Serialize};

const MIB: usize = 1024 * 1024;

/// Longest attendance window, in days
pub const MAX_ATTENDANCE_WINDOW_DAYS: i64 = 366;
/// Longest finance chart, in months
pub const MAX_FINANCE_CHART_MONTHS: usize = 120;

/// Tunable limits for the store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreSettings {
    /// Minimum length of a new admin password
    pub password_min_len: usize,
    /// Maximum number of landing page banners
    pub slideshow_limit: usize,
    /// Size cap for member photos and banners
    pub photo_max_bytes: usize,
    /// Size cap for church logo and pastor photos
    pub asset_max_bytes: usize,
    /// Window used by the attendance summary and export
    pub attendance_window_days: i64,
    /// Months shown in the finance chart
    pub finance_chart_months: usize,
    /// Characters of a comment quoted in notifications
    pub comment_preview_chars: usize,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            password_min_len: 6,
            slideshow_limit: 5,
            photo_max_bytes: 2 * MIB,
            asset_max_bytes: 10 * MIB,
            attendance_window_days: 7,
            finance_chart_months: 6,
            comment_preview_chars: 20,
        }
    }
}

impl StoreSettings {
    /// Replace out-of-range windows with their defaults. Returns the names
    /// of the fields that were reset.
    pub fn sanitize(&mut self) -> Vec<&'static str> {
        let defaults = Self::default();
        let mut reset = Vec::new();
        if !(1..=MAX_ATTENDANCE_WINDOW_DAYS).contains(&self.attendance_window_days) {
            self.attendance_window_days = defaults.attendance_window_days;
            reset.push("attendanceWindowDays");
        }
        if !(1..=MAX_FINANCE_CHART_MONTHS).contains(&self.finance_chart_months) {
            self.finance_chart_months = defaults.finance_chart_months;
            reset.push("financeChartMonths");
        }
        reset
    }
}
