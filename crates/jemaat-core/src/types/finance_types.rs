//! Tithes, expenses and derived finance views

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TitheMethod {
    #[default]
    Transfer,
    Tunai,
}

impl TitheMethod {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Transfer => "Transfer",
            Self::Tunai => "Tunai",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ExpenseCategory {
    Misi,
    Sosial,
    #[default]
    Operasional,
    Pembangunan,
}

impl ExpenseCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Misi => "Misi",
            Self::Sosial => "Sosial",
            Self::Operasional => "Operasional",
            Self::Pembangunan => "Pembangunan",
        }
    }
}

/// Tithe (persepuluhan) received from a member. Amounts are whole rupiah.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tithe {
    pub id: String,
    pub member_id: String,
    pub member_name: String,
    pub amount: u64,
    pub date: NaiveDate,
    pub method: TitheMethod,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TitheDraft {
    pub member_id: String,
    pub amount: u64,
    pub date: Option<NaiveDate>,
    pub method: TitheMethod,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub description: String,
    pub amount: u64,
    pub date: NaiveDate,
    pub category: ExpenseCategory,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount: u64,
    pub date: Option<NaiveDate>,
    pub category: ExpenseCategory,
}

/// Direction of a ledger entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionKind {
    In,
    Out,
}

impl TransactionKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::In => "Pemasukan",
            Self::Out => "Pengeluaran",
        }
    }
}

/// Tithe or expense flattened into one ledger row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    pub amount: u64,
    pub kind: TransactionKind,
}

impl From<&Tithe> for Transaction {
    fn from(t: &Tithe) -> Self {
        Self {
            id: t.id.clone(),
            date: t.date,
            description: format!("Persepuluhan - {}", t.member_name),
            category: t.method.label().to_string(),
            amount: t.amount,
            kind: TransactionKind::In,
        }
    }
}

impl From<&Expense> for Transaction {
    fn from(e: &Expense) -> Self {
        Self {
            id: e.id.clone(),
            date: e.date,
            description: e.description.clone(),
            category: e.category.label().to_string(),
            amount: e.amount,
            kind: TransactionKind::Out,
        }
    }
}

/// Summary cards for the finance screens
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FinanceSummary {
    pub total_tithes: u64,
    pub total_expenses: u64,
    /// Can go negative when spending exceeds income
    pub balance: i64,
}

/// Income and expense totals for one `YYYY-MM` month
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTotals {
    pub month: String,
    pub income: u64,
    pub expense: u64,
}
