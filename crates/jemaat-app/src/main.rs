//! Jemaat - congregation manager console
//!
//! Actions are read from stdin as JSON lines; logs go to stderr.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jemaat_app::{initial_state, Console, Reply};
use jemaat_core::storage::{self, insert_snapshot, load_settings, save_settings};
use jemaat_core::{spawn_store_runtime, Storage, Store, SystemClock};

#[derive(Parser, Debug)]
#[command(name = "jemaat", version, about = "Congregation manager console")]
struct Args {
    /// Directory holding jemaat.db and CSV exports
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Keep everything in memory; nothing is saved on exit
    #[arg(long)]
    in_memory: bool,

    /// Start from the latest saved snapshot instead of seed data
    #[arg(long)]
    restore: bool,

    /// Capacity of the action queue
    #[arg(long, default_value_t = 64)]
    queue: usize,
}

fn open_storage(args: &Args) -> Result<(Storage, Option<PathBuf>)> {
    if args.in_memory {
        return Ok((Storage::in_memory()?, None));
    }

    let data_dir = args
        .data_dir
        .clone()
        .unwrap_or_else(storage::default_data_dir);
    match Storage::new_with_path(&data_dir) {
        Ok(storage) => Ok((storage, Some(data_dir.join("exports")))),
        Err(e) => {
            warn!("Failed to open storage at {:?}: {}, using in-memory", data_dir, e);
            Ok((Storage::in_memory()?, None))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Jemaat v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let (storage, export_dir) = open_storage(&args)?;
    let persistent = export_dir.is_some();
    let storage = Arc::new(storage);

    let settings = {
        let conn = storage.connection()?;
        let settings = load_settings(&conn)?;
        save_settings(&conn, &settings)?;
        settings
    };

    let state = initial_state(&storage, args.restore)?;
    let store = Store::new(state, settings.clone(), Arc::new(SystemClock));
    let (handle, task) = spawn_store_runtime(store, args.queue);
    let console = Console::new(handle, Arc::clone(&storage), settings, export_dir);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match console.handle_line(&line).await? {
            Some(Reply::Print(value)) => println!("{}", value),
            Some(Reply::Quit) => break,
            None => {}
        }
    }

    drop(console);
    let store = task.await?;
    if persistent {
        let conn = storage.connection()?;
        let saved = insert_snapshot(&conn, &store.snapshot(), Some("exit"), Utc::now())?;
        info!("Saved snapshot {} on exit", saved.id);
    }

    info!("Jemaat stopped");
    Ok(())
}
