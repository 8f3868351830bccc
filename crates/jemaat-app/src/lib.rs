//! Headless front end for Jemaat
//!
//! Reads one line at a time. A line is either a JSON action such as
//! `{"action":"memberLogin","phone":"08123456789"}` or a `:command`.
//! Every reply is a single JSON line.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use serde_json::{json, Value};
use tracing::{info, warn};

use jemaat_core::queries::{finance_summary, ledger, monthly_totals};
use jemaat_core::report::{attendance_report, finance_report};
use jemaat_core::storage::{get_latest_snapshot, insert_snapshot};
use jemaat_core::store::{unread_count, visible_notifications};
use jemaat_core::{fixtures, Action, AppState, CsvReport, Storage, StoreHandle, StoreSettings};

/// Console commands besides raw actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    State,
    Notifications,
    Finance,
    ExportAttendance,
    ExportFinance,
    Snapshot(Option<String>),
    Quit,
}

#[derive(Debug)]
pub enum Input {
    Empty,
    Command(Command),
    Action(Box<Action>),
}

/// What the caller should do with a handled line
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Print(Value),
    Quit,
}

pub fn parse_line(line: &str) -> Result<Input> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Input::Empty);
    }

    if let Some(rest) = line.strip_prefix(':') {
        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, Some(arg.trim().to_string()).filter(|a| !a.is_empty())),
            None => (rest, None),
        };
        let command = match name {
            "state" => Command::State,
            "notifications" => Command::Notifications,
            "finance" => Command::Finance,
            "export-attendance" => Command::ExportAttendance,
            "export-finance" => Command::ExportFinance,
            "snapshot" => Command::Snapshot(arg),
            "quit" | "q" => Command::Quit,
            other => anyhow::bail!("Unknown command: :{}", other),
        };
        return Ok(Input::Command(command));
    }

    let action: Action = serde_json::from_str(line).context("Invalid action JSON")?;
    Ok(Input::Action(Box::new(action)))
}

/// State a session starts from: the latest snapshot when restoring, the
/// seed fixtures otherwise
pub fn initial_state(storage: &Storage, restore: bool) -> Result<AppState> {
    if restore {
        let conn = storage.connection()?;
        if let Some(snapshot) = get_latest_snapshot(&conn)? {
            info!(
                "Restored snapshot {} (revision {})",
                snapshot.info.id, snapshot.info.revision
            );
            return Ok(snapshot.state);
        }
        warn!("No saved snapshot, starting from seed data");
    }
    Ok(fixtures::seed_state())
}

/// Wires stdin lines to a running store
pub struct Console {
    handle: StoreHandle,
    storage: Arc<Storage>,
    settings: StoreSettings,
    /// Where CSV exports are written; printed inline when unset
    export_dir: Option<PathBuf>,
}

impl Console {
    pub fn new(
        handle: StoreHandle,
        storage: Arc<Storage>,
        settings: StoreSettings,
        export_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            handle,
            storage,
            settings,
            export_dir,
        }
    }

    pub fn handle(&self) -> &StoreHandle {
        &self.handle
    }

    /// Handle one input line. Store and parse errors become `{"error": ...}`
    /// replies; only I/O failures abort.
    pub async fn handle_line(&self, line: &str) -> Result<Option<Reply>> {
        let input = match parse_line(line) {
            Ok(input) => input,
            Err(e) => return Ok(Some(error_reply(format!("{:#}", e)))),
        };

        let reply = match input {
            Input::Empty => return Ok(None),
            Input::Action(action) => match self.handle.dispatch(*action).await {
                Ok(outcome) => Reply::Print(json!({ "ok": outcome })),
                Err(e) => error_reply(e.to_string()),
            },
            Input::Command(command) => self.run_command(command)?,
        };
        Ok(Some(reply))
    }

    fn run_command(&self, command: Command) -> Result<Reply> {
        let state = self.handle.snapshot();
        let reply = match command {
            Command::State => Reply::Print(serde_json::to_value(&*state)?),
            Command::Notifications => {
                let viewer = state.session.viewer();
                Reply::Print(json!({
                    "viewer": viewer,
                    "unread": unread_count(&state, &viewer),
                    "notifications": visible_notifications(&state, &viewer),
                }))
            }
            Command::Finance => Reply::Print(json!({
                "summary": finance_summary(&state),
                "months": monthly_totals(&state, self.settings.finance_chart_months),
                "ledger": ledger(&state, None),
            })),
            Command::ExportAttendance => {
                match attendance_report(&state, Utc::now(), self.settings.attendance_window_days) {
                    Ok(report) => self.deliver(report)?,
                    Err(e) => error_reply(e.to_string()),
                }
            }
            Command::ExportFinance => {
                let report = finance_report(&state, Utc::now().date_naive(), None)?;
                self.deliver(report)?
            }
            Command::Snapshot(label) => {
                let conn = self.storage.connection()?;
                let saved = insert_snapshot(&conn, &state, label.as_deref(), Utc::now())?;
                info!("Saved snapshot {}", saved.id);
                Reply::Print(json!({ "snapshot": saved }))
            }
            Command::Quit => Reply::Quit,
        };
        Ok(reply)
    }

    fn deliver(&self, report: CsvReport) -> Result<Reply> {
        match &self.export_dir {
            Some(dir) => {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create {}", dir.display()))?;
                let path = dir.join(&report.file_name);
                std::fs::write(&path, &report.content)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!("Wrote {}", path.display());
                Ok(Reply::Print(json!({ "exported": path })))
            }
            None => Ok(Reply::Print(serde_json::to_value(&report)?)),
        }
    }
}

fn error_reply(message: String) -> Reply {
    Reply::Print(json!({ "error": message }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jemaat_core::{spawn_store_runtime, Store, SystemClock};
    use pretty_assertions::assert_eq;

    fn console(export_dir: Option<PathBuf>) -> Console {
        let storage = Arc::new(Storage::in_memory().unwrap());
        let store = Store::new(
            fixtures::seed_state(),
            StoreSettings::default(),
            Arc::new(SystemClock),
        );
        let (handle, _task) = spawn_store_runtime(store, 8);
        Console::new(handle, storage, StoreSettings::default(), export_dir)
    }

    fn printed(reply: Option<Reply>) -> Value {
        match reply {
            Some(Reply::Print(value)) => value,
            other => panic!("expected a printed reply, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_commands() {
        assert!(matches!(parse_line("   ").unwrap(), Input::Empty));
        assert!(matches!(
            parse_line(":snapshot sebelum ibadah").unwrap(),
            Input::Command(Command::Snapshot(Some(ref label))) if label == "sebelum ibadah"
        ));
        assert!(matches!(
            parse_line(":snapshot").unwrap(),
            Input::Command(Command::Snapshot(None))
        ));
        assert!(matches!(parse_line(":q").unwrap(), Input::Command(Command::Quit)));
        assert!(parse_line(":dance").is_err());
        assert!(parse_line("{not json").is_err());
    }

    #[tokio::test]
    async fn test_unknown_phone_reply() {
        let console = console(None);
        let value = printed(
            console
                .handle_line(r#"{"action":"memberLogin","phone":"0800000000"}"#)
                .await
                .unwrap(),
        );
        assert_eq!(
            value,
            json!({ "ok": { "outcome": "login", "status": "registrationRequired", "phone": "0800000000" } })
        );
    }

    #[tokio::test]
    async fn test_store_errors_are_replies() {
        let console = console(None);
        let value = printed(
            console
                .handle_line(r#"{"action":"deleteMember","id":"JM001"}"#)
                .await
                .unwrap(),
        );
        assert_eq!(value["error"], "Auth error: Administrator role required");
        assert_eq!(console.handle().snapshot().members.len(), 3);
    }

    #[tokio::test]
    async fn test_notifications_follow_session() {
        let console = console(None);
        let value = printed(console.handle_line(":notifications").await.unwrap());
        assert_eq!(value["viewer"], json!({ "kind": "guest" }));
        assert_eq!(value["unread"], 1);
    }

    #[tokio::test]
    async fn test_export_finance_to_dir() {
        let dir = tempfile::tempdir().unwrap();
        let console = console(Some(dir.path().to_path_buf()));
        printed(console.handle_line(":export-finance").await.unwrap());

        let written: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(written.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_attendance_export() {
        let console = console(None);
        let value = printed(console.handle_line(":export-attendance").await.unwrap());
        assert_eq!(value["error"], "Validation error: Nothing to export");
    }

    #[tokio::test]
    async fn test_snapshot_and_restore() {
        let console = console(None);
        console
            .handle_line(r#"{"action":"adminLogin","password":"admin"}"#)
            .await
            .unwrap();
        let value = printed(console.handle_line(":snapshot setelah login").await.unwrap());
        assert_eq!(value["snapshot"]["revision"], 1);

        let restored = initial_state(&console.storage, true).unwrap();
        assert!(restored.session.is_admin());
        assert_eq!(initial_state(&console.storage, false).unwrap().revision, 0);
    }

    #[tokio::test]
    async fn test_quit() {
        let console = console(None);
        assert_eq!(console.handle_line(":quit").await.unwrap(), Some(Reply::Quit));
    }
}
