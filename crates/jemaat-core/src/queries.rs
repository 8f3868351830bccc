//! Read-side views over a state snapshot
//!
//! Everything here is a pure function of an `AppState` (plus the current
//! time where a window is involved). Nothing mutates.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::state::AppState;
use crate::store::unread_count;
use crate::types::*;
use crate::validation::age_in_year;

// === Members ===

pub fn search_members<'a>(state: &'a AppState, term: &str, filter: BaptismFilter) -> Vec<&'a Member> {
    state
        .members
        .iter()
        .filter(|m| m.matches(term) && filter.accepts(m.is_baptized))
        .collect()
}

// === Volunteers ===

/// Admin filter for volunteer sign-ups
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VolunteerFilter {
    pub role: Option<MinistryRole>,
    pub term: String,
    pub baptism: BaptismFilter,
}

/// Baptism status is looked up on the member record; a sign-up whose
/// member no longer exists counts as not baptized.
pub fn filter_volunteers<'a>(state: &'a AppState, filter: &VolunteerFilter) -> Vec<&'a Volunteer> {
    let term = filter.term.to_lowercase();
    state
        .volunteers
        .iter()
        .filter(|v| filter.role.map_or(true, |role| v.role == role))
        .filter(|v| v.user_name.to_lowercase().contains(&term))
        .filter(|v| {
            let baptized = state.member(&v.user_id).is_some_and(|m| m.is_baptized);
            filter.baptism.accepts(baptized)
        })
        .collect()
}

// === Finance ===

pub fn search_tithes<'a>(state: &'a AppState, term: &str) -> Vec<&'a Tithe> {
    let term = term.to_lowercase();
    state
        .tithes
        .iter()
        .filter(|t| t.member_name.to_lowercase().contains(&term))
        .collect()
}

pub fn search_expenses<'a>(
    state: &'a AppState,
    term: &str,
    category: Option<ExpenseCategory>,
) -> Vec<&'a Expense> {
    let term = term.to_lowercase();
    state
        .expenses
        .iter()
        .filter(|e| e.description.to_lowercase().contains(&term))
        .filter(|e| category.map_or(true, |c| e.category == c))
        .collect()
}

pub fn finance_summary(state: &AppState) -> FinanceSummary {
    let total_tithes: u64 = state.tithes.iter().map(|t| t.amount).sum();
    let total_expenses: u64 = state.expenses.iter().map(|e| e.amount).sum();
    FinanceSummary {
        total_tithes,
        total_expenses,
        balance: total_tithes as i64 - total_expenses as i64,
    }
}

/// A member's own giving history
#[derive(Debug, Clone, PartialEq)]
pub struct MemberGiving<'a> {
    pub tithes: Vec<&'a Tithe>,
    pub total: u64,
}

pub fn member_giving<'a>(state: &'a AppState, member_id: &str) -> MemberGiving<'a> {
    let tithes: Vec<&Tithe> = state
        .tithes
        .iter()
        .filter(|t| t.member_id == member_id)
        .collect();
    let total = tithes.iter().map(|t| t.amount).sum();
    MemberGiving { tithes, total }
}

/// Tithes and expenses as one list, newest first
pub fn ledger(state: &AppState, kind: Option<TransactionKind>) -> Vec<Transaction> {
    let mut transactions: Vec<Transaction> = state
        .tithes
        .iter()
        .map(Transaction::from)
        .chain(state.expenses.iter().map(Transaction::from))
        .filter(|t| kind.map_or(true, |k| t.kind == k))
        .collect();
    transactions.sort_by(|a, b| b.date.cmp(&a.date));
    transactions
}

/// Income and expense per `YYYY-MM` for the latest `months` months that
/// have any entries, oldest first
pub fn monthly_totals(state: &AppState, months: usize) -> Vec<MonthlyTotals> {
    let mut by_month: BTreeMap<String, (u64, u64)> = BTreeMap::new();
    for t in &state.tithes {
        by_month.entry(month_key(t.date)).or_default().0 += t.amount;
    }
    for e in &state.expenses {
        by_month.entry(month_key(e.date)).or_default().1 += e.amount;
    }

    let skip = by_month.len().saturating_sub(months);
    by_month
        .into_iter()
        .skip(skip)
        .map(|(month, (income, expense))| MonthlyTotals {
            month,
            income,
            expense,
        })
        .collect()
}

fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

// === Birthdays ===

/// Members born in `month` (1-12), sorted by day of month
pub fn birthdays_in_month(state: &AppState, month: u32, today: NaiveDate) -> Vec<BirthdayEntry> {
    let mut entries: Vec<BirthdayEntry> = state
        .members
        .iter()
        .filter_map(|m| {
            let birth = m.birth_date?;
            if birth.month() != month {
                return None;
            }
            Some(BirthdayEntry {
                member_id: m.id.clone(),
                name: m.name.clone(),
                day: birth.day(),
                age: age_in_year(birth, today),
                status: birthday_status(birth.day(), month, today),
                wish_count: m.wishes.len(),
                like_count: m.birthday_likes.len(),
            })
        })
        .collect();
    entries.sort_by_key(|e| e.day);
    entries
}

fn birthday_status(day: u32, month: u32, today: NaiveDate) -> BirthdayStatus {
    if month != today.month() {
        BirthdayStatus::Normal
    } else if day == today.day() {
        BirthdayStatus::Today
    } else if day < today.day() {
        BirthdayStatus::Past
    } else {
        BirthdayStatus::Upcoming
    }
}

// === Attendance ===

/// Check-ins within the last `days` days, capped at
/// `MAX_ATTENDANCE_WINDOW_DAYS`
pub fn recent_attendance(state: &AppState, now: DateTime<Utc>, days: i64) -> Vec<&AttendanceRecord> {
    let since = now - Duration::days(days.clamp(0, MAX_ATTENDANCE_WINDOW_DAYS));
    state
        .attendance
        .iter()
        .filter(|a| a.timestamp >= since)
        .collect()
}

/// One entry per calendar day ending today, oldest first; days without
/// check-ins count zero
pub fn daily_attendance(state: &AppState, now: DateTime<Utc>, days: i64) -> Vec<DailyAttendance> {
    let today = now.date_naive();
    let mut counts: BTreeMap<NaiveDate, usize> = (0..days.clamp(1, MAX_ATTENDANCE_WINDOW_DAYS))
        .map(|offset| (today - Duration::days(offset), 0))
        .collect();
    for record in &state.attendance {
        if let Some(count) = counts.get_mut(&record.timestamp.date_naive()) {
            *count += 1;
        }
    }
    counts
        .into_iter()
        .map(|(date, count)| DailyAttendance { date, count })
        .collect()
}

// === Dashboard ===

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard<'a> {
    pub upcoming_schedule: Option<&'a Schedule>,
    pub latest_devotional: Option<&'a Devotional>,
    pub member_count: usize,
    pub finance: FinanceSummary,
    pub unread_notifications: usize,
}

pub fn dashboard<'a>(state: &'a AppState, viewer: &Viewer) -> Dashboard<'a> {
    Dashboard {
        upcoming_schedule: state.schedules.first(),
        latest_devotional: state.devotionals.first(),
        member_count: state.members.len(),
        finance: finance_summary(state),
        unread_notifications: unread_count(state, viewer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::fixtures;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_search_members_with_filter() {
        let state = fixtures::seed_state();
        let ids = |found: Vec<&Member>| found.iter().map(|m| m.id.clone()).collect::<Vec<_>>();

        assert_eq!(ids(search_members(&state, "budi", BaptismFilter::All)), vec!["JM001"]);
        assert_eq!(ids(search_members(&state, "jm00", BaptismFilter::NotBaptized)), vec!["JM003"]);
        assert_eq!(search_members(&state, "", BaptismFilter::Baptized).len(), 2);
    }

    #[test]
    fn test_volunteer_of_deleted_member_counts_unbaptized() {
        let mut state = fixtures::seed_state();
        let mut filter = VolunteerFilter {
            baptism: BaptismFilter::NotBaptized,
            ..Default::default()
        };
        assert_eq!(filter_volunteers(&state, &filter).len(), 1);

        state.members.retain(|m| m.id != "JM003");
        assert_eq!(filter_volunteers(&state, &filter).len(), 1);

        filter.role = Some(MinistryRole::Singer);
        assert!(filter_volunteers(&state, &filter).is_empty());
    }

    #[test]
    fn test_finance_summary_can_go_negative() {
        let state = fixtures::seed_state();
        let summary = finance_summary(&state);
        assert_eq!(
            summary,
            FinanceSummary {
                total_tithes: 1_250_000,
                total_expenses: 3_500_000,
                balance: -2_250_000,
            }
        );
    }

    #[test]
    fn test_member_giving() {
        let state = fixtures::seed_state();
        let giving = member_giving(&state, "JM002");
        assert_eq!(giving.tithes.len(), 1);
        assert_eq!(giving.total, 750_000);
        assert_eq!(member_giving(&state, "JM003").total, 0);
    }

    #[test]
    fn test_ledger_newest_first() {
        let state = fixtures::seed_state();
        let all = ledger(&state, None);
        let dates: Vec<NaiveDate> = all.iter().map(|t| t.date).collect();
        assert_eq!(
            dates,
            vec![date(2024, 5, 12), date(2024, 5, 10), date(2024, 5, 5), date(2024, 5, 1)]
        );
        assert_eq!(all[2].description, "Persepuluhan - Siti Aminah");
        assert_eq!(all[2].category, "Tunai");

        let income = ledger(&state, Some(TransactionKind::In));
        assert_eq!(income.len(), 2);
    }

    #[test]
    fn test_monthly_totals_keep_latest_months() {
        let mut state = fixtures::seed_state();
        state.tithes[0].date = date(2023, 12, 3);
        let totals = monthly_totals(&state, 6);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].month, "2023-12");
        assert_eq!(totals[0].income, 500_000);
        assert_eq!(totals[1].month, "2024-05");
        assert_eq!(totals[1].expense, 3_500_000);

        let latest = monthly_totals(&state, 1);
        assert_eq!(latest.len(), 1);
        assert_eq!(latest[0].month, "2024-05");
    }

    #[test]
    fn test_birthdays_in_current_month() {
        let mut state = fixtures::seed_state();
        state.members[1].birth_date = Some(date(1990, 5, 30));
        let today = date(2024, 5, 20);

        let entries = birthdays_in_month(&state, 5, today);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].member_id, "JM001");
        assert_eq!(entries[0].status, BirthdayStatus::Past);
        assert_eq!(entries[0].age, 39);
        assert_eq!(entries[1].status, BirthdayStatus::Upcoming);

        let december = birthdays_in_month(&state, 12, today);
        assert_eq!(december.len(), 1);
        assert_eq!(december[0].status, BirthdayStatus::Normal);
    }

    #[test]
    fn test_attendance_window() {
        let mut state = fixtures::seed_state();
        let now = Utc.with_ymd_and_hms(2024, 5, 26, 12, 0, 0).unwrap();
        let record = |id: &str, ts: DateTime<Utc>| AttendanceRecord {
            id: id.to_string(),
            member_id: "JM001".to_string(),
            member_name: "Budi Santoso".to_string(),
            schedule_id: "J001".to_string(),
            timestamp: ts,
        };
        state.attendance = vec![
            record("A003", now),
            record("A002", now - Duration::days(2)),
            record("A001", now - Duration::days(10)),
        ];

        assert_eq!(recent_attendance(&state, now, 7).len(), 2);

        let daily = daily_attendance(&state, now, 7);
        assert_eq!(daily.len(), 7);
        assert_eq!(daily[0].date, date(2024, 5, 20));
        assert_eq!(daily[6].count, 1);
        assert_eq!(daily[4].count, 1);
        assert_eq!(daily.iter().map(|d| d.count).sum::<usize>(), 2);
    }

    #[test]
    fn test_attendance_window_is_capped() {
        let mut state = fixtures::seed_state();
        let now = Utc.with_ymd_and_hms(2024, 5, 26, 12, 0, 0).unwrap();
        state.attendance = vec![AttendanceRecord {
            id: "A001".to_string(),
            member_id: "JM001".to_string(),
            member_name: "Budi Santoso".to_string(),
            schedule_id: "J001".to_string(),
            timestamp: now - Duration::days(3),
        }];

        assert_eq!(recent_attendance(&state, now, i64::MAX).len(), 1);
        assert!(recent_attendance(&state, now, -5).is_empty());

        let daily = daily_attendance(&state, now, i64::MAX);
        assert_eq!(daily.len(), MAX_ATTENDANCE_WINDOW_DAYS as usize);
        assert_eq!(daily.iter().map(|d| d.count).sum::<usize>(), 1);
    }

    #[test]
    fn test_dashboard() {
        let state = fixtures::seed_state();
        let board = dashboard(&state, &Viewer::Guest);
        assert_eq!(board.upcoming_schedule.map(|s| s.id.as_str()), Some("J001"));
        assert_eq!(board.latest_devotional.map(|d| d.id.as_str()), Some("R001"));
        assert_eq!(board.member_count, 3);
        assert_eq!(board.unread_notifications, 1);
    }
}
