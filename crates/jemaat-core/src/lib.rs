//! Jemaat Core Library
//!
//! This crate provides the core functionality for Jemaat, a congregation
//! manager, including:
//! - The in-memory state store and its action channel
//! - Notification fan-out and visibility rules
//! - Read-side queries and CSV reports
//! - SQLite snapshots and settings
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     jemaat-core                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  store/        - Actions, the Store, notification fan-out   │
//! │  runtime.rs    - Tokio task owning the Store, handles       │
//! │  state/        - AppState, id issuing, seed fixtures        │
//! │  queries.rs    - Searches, finance, birthdays, attendance   │
//! │  report.rs     - CSV exports                                │
//! │  storage/      - SQLite snapshots, settings                 │
//! │  types/        - Shared type definitions                    │
//! │  error.rs      - Error types                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod clock;
pub mod error;
pub mod media;
pub mod queries;
pub mod report;
pub mod runtime;
pub mod state;
pub mod storage;
pub mod store;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;

pub use clock::{Clock, SystemClock};
pub use report::CsvReport;
pub use runtime::{spawn_store_runtime, StoreChannels, StoreHandle};
pub use state::{fixtures, AppState, IdIssuer, IdKind};
pub use storage::Storage;
pub use store::{Action, Outcome, Store};
