//! Database query implementations

use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::error::{Error, Result, StorageError};
use crate::state::AppState;
use crate::types::StoreSettings;

/// Settings key holding the serialized `StoreSettings`
pub const STORE_SETTINGS_KEY: &str = "store_settings";

/// Saved snapshot without its state payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotInfo {
    pub id: String,
    pub revision: u64,
    pub label: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub info: SnapshotInfo,
    pub state: AppState,
}

fn parse_timestamp(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(idx)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn snapshot_info(row: &Row<'_>) -> rusqlite::Result<SnapshotInfo> {
    Ok(SnapshotInfo {
        id: row.get(0)?,
        revision: row.get::<_, i64>(1)? as u64,
        label: row.get(2)?,
        created_at: parse_timestamp(row, 3)?,
    })
}

// ===== Snapshot Queries =====

/// Save the whole state under a fresh id
pub fn insert_snapshot(
    conn: &Connection,
    state: &AppState,
    label: Option<&str>,
    created_at: DateTime<Utc>,
) -> Result<SnapshotInfo> {
    let info = SnapshotInfo {
        id: Uuid::new_v4().to_string(),
        revision: state.revision,
        label: label.map(str::to_string),
        created_at,
    };
    let json = serde_json::to_string(state)?;

    conn.execute(
        r#"
        INSERT INTO snapshots (id, revision, label, state, created_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
        params![
            info.id,
            info.revision as i64,
            info.label,
            json,
            info.created_at.to_rfc3339(),
        ],
    )?;

    Ok(info)
}

/// Most recently saved snapshot, if any
pub fn get_latest_snapshot(conn: &Connection) -> Result<Option<Snapshot>> {
    let row = conn
        .query_row(
            r#"
            SELECT id, revision, label, created_at, state
            FROM snapshots
            ORDER BY created_at DESC, rowid DESC
            LIMIT 1
            "#,
            [],
            |row| Ok((snapshot_info(row)?, row.get::<_, String>(4)?)),
        )
        .optional()?;

    match row {
        Some((info, json)) => {
            let state: AppState = serde_json::from_str(&json)?;
            Ok(Some(Snapshot { info, state }))
        }
        None => Ok(None),
    }
}

/// Saved snapshots, newest first
pub fn list_snapshots(conn: &Connection, limit: usize) -> Result<Vec<SnapshotInfo>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT id, revision, label, created_at
        FROM snapshots
        ORDER BY created_at DESC, rowid DESC
        LIMIT ?
        "#,
    )?;

    let snapshots = stmt
        .query_map(params![limit as i64], snapshot_info)?
        .filter_map(|r| r.ok())
        .collect();

    Ok(snapshots)
}

pub fn delete_snapshot(conn: &Connection, id: &str) -> Result<()> {
    let deleted = conn.execute("DELETE FROM snapshots WHERE id = ?", params![id])?;
    if deleted == 0 {
        return Err(Error::Storage(StorageError::NotFound(format!(
            "snapshot {}",
            id
        ))));
    }
    Ok(())
}

// ===== Settings Queries =====

/// Get a setting value
pub fn get_setting(conn: &Connection, key: &str) -> Result<Option<String>> {
    let result = conn
        .query_row(
            "SELECT value FROM settings WHERE key = ?",
            params![key],
            |row| row.get(0),
        )
        .optional()?;

    Ok(result)
}

/// Set a setting value
pub fn set_setting(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        r#"
        INSERT INTO settings (key, value, updated_at)
        VALUES (?, ?, CURRENT_TIMESTAMP)
        ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP
        "#,
        params![key, value],
    )?;

    Ok(())
}

/// Get all settings
pub fn get_all_settings(conn: &Connection) -> Result<std::collections::HashMap<String, String>> {
    let mut stmt = conn.prepare("SELECT key, value FROM settings")?;

    let settings = stmt
        .query_map([], |row| {
            let key: String = row.get(0)?;
            let value: String = row.get(1)?;
            Ok((key, value))
        })?
        .filter_map(|r| r.ok())
        .collect();

    Ok(settings)
}

/// Stored store settings; missing, unreadable or out-of-range values fall
/// back to defaults
pub fn load_settings(conn: &Connection) -> Result<StoreSettings> {
    let Some(raw) = get_setting(conn, STORE_SETTINGS_KEY)? else {
        return Ok(StoreSettings::default());
    };
    let mut settings: StoreSettings = match serde_json::from_str(&raw) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("Ignoring unreadable store settings: {}", e);
            return Ok(StoreSettings::default());
        }
    };
    for field in settings.sanitize() {
        warn!("Stored setting {} is out of range, using the default", field);
    }
    Ok(settings)
}

pub fn save_settings(conn: &Connection, settings: &StoreSettings) -> Result<()> {
    let raw = serde_json::to_string(settings)?;
    set_setting(conn, STORE_SETTINGS_KEY, &raw)
}
