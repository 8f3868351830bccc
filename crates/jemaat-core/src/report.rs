//! CSV exports for the weekly attendance and finance reports

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::error::{Error, Result, ValidationError};
use crate::queries::{ledger, recent_attendance};
use crate::state::AppState;
use crate::types::TransactionKind;

/// A rendered CSV file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvReport {
    pub file_name: String,
    pub content: String,
}

const ATTENDANCE_HEADERS: [&str; 5] = ["Tanggal", "Waktu", "ID Jemaat", "Nama Jemaat", "ID Jadwal"];
const FINANCE_HEADERS: [&str; 5] = ["Tanggal", "Keterangan", "Kategori", "Tipe", "Nominal"];

/// Check-ins from the last `days` days. An empty window is an error, not an empty file.
pub fn attendance_report(state: &AppState, now: DateTime<Utc>, days: i64) -> Result<CsvReport> {
    let records = recent_attendance(state, now, days);
    if records.is_empty() {
        return Err(ValidationError::NothingToExport.into());
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(ATTENDANCE_HEADERS)?;
    for record in records {
        writer.write_record([
            record.timestamp.format("%d/%m/%Y").to_string(),
            record.timestamp.format("%H.%M.%S").to_string(),
            record.member_id.clone(),
            record.member_name.clone(),
            record.schedule_id.clone(),
        ])?;
    }

    Ok(CsvReport {
        file_name: format!("Laporan_Absensi_Mingguan_{}.csv", now.date_naive()),
        content: finish(writer)?,
    })
}

/// The merged ledger, newest first, optionally limited to one direction
pub fn finance_report(
    state: &AppState,
    today: NaiveDate,
    kind: Option<TransactionKind>,
) -> Result<CsvReport> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(FINANCE_HEADERS)?;
    for t in ledger(state, kind) {
        writer.write_record([
            t.date.to_string(),
            t.description,
            t.category,
            t.kind.label().to_string(),
            t.amount.to_string(),
        ])?;
    }

    Ok(CsvReport {
        file_name: format!("Laporan_Keuangan_GSJA_{}.csv", today),
        content: finish(writer)?,
    })
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Internal(format!("CSV error: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| Error::Internal(format!("CSV error: {}", e)))
}
