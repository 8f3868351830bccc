//! The congregation state store
//!
//! `Store` owns the one `AppState` of a session. Views read immutable
//! snapshots; every change is an [`Action`] passed to [`Store::apply`].
//! Each action runs against a private copy of the state, so a rejected
//! action leaves nothing behind. Successful actions bump the revision and
//! publish the new snapshot to every subscriber.

mod action;
mod church;
mod content;
mod members;
pub mod notify;
mod operations;
mod session;
mod transition;

pub use action::{Action, Outcome};
pub use notify::{unread_count, visible_notifications};

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::error::Result;
use crate::state::{fixtures, AppState};
use crate::types::StoreSettings;
use transition::Transition;

/// Single owner of the application state
pub struct Store {
    state: Arc<AppState>,
    settings: StoreSettings,
    clock: Arc<dyn Clock>,
    publisher: watch::Sender<Arc<AppState>>,
}

impl Store {
    /// Store over `state`. Id counters are raised to cover every id already present.
    pub fn new(mut state: AppState, settings: StoreSettings, clock: Arc<dyn Clock>) -> Self {
        let mut ids = std::mem::take(&mut state.ids);
        ids.absorb(&state);
        state.ids = ids;

        let state = Arc::new(state);
        let (publisher, _) = watch::channel(Arc::clone(&state));
        Self {
            state,
            settings,
            clock,
            publisher,
        }
    }

    /// Store over the seed fixtures with default settings and the wall clock
    pub fn seeded() -> Self {
        Self::new(
            fixtures::seed_state(),
            StoreSettings::default(),
            Arc::new(SystemClock),
        )
    }

    pub fn snapshot(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<AppState>> {
        self.publisher.subscribe()
    }

    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// Apply one action. On error the state is unchanged and nothing is published.
    pub fn apply(&mut self, action: Action) -> Result<Outcome> {
        let name = action.name();
        let mut next = AppState::clone(&self.state);
        let mut transition = Transition {
            state: &mut next,
            settings: &self.settings,
            now: self.clock.now(),
        };

        match transition.run(action) {
            Ok(outcome) => {
                next.revision += 1;
                let next = Arc::new(next);
                self.state = Arc::clone(&next);
                self.publisher.send_replace(next);
                debug!("Applied {} (revision {})", name, self.state.revision);
                Ok(outcome)
            }
            Err(e) => {
                warn!("Rejected {}: {}", name, e);
                Err(e)
            }
        }
    }
}
