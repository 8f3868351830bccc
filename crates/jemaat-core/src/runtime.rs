//! Tokio runtime wiring for the store
//!
//! One task owns the `Store`. Views send actions through a `StoreHandle`
//! and read snapshots from a `watch` channel; they never hold the state
//! mutably.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::state::AppState;
use crate::store::{Action, Outcome, Store};

type ActionRequest = (Action, oneshot::Sender<Result<Outcome>>);

/// Channel ends shared with the store task
#[derive(Debug)]
pub struct StoreChannels {
    pub action_tx: mpsc::Sender<ActionRequest>,
}

impl StoreChannels {
    pub fn new(buffer: usize) -> (Self, mpsc::Receiver<ActionRequest>) {
        let (action_tx, action_rx) = mpsc::channel(buffer);
        (Self { action_tx }, action_rx)
    }
}

/// Cloneable front door to a running store
#[derive(Debug, Clone)]
pub struct StoreHandle {
    action_tx: mpsc::Sender<ActionRequest>,
    snapshots: watch::Receiver<Arc<AppState>>,
}

impl StoreHandle {
    /// Send an action and wait for its outcome
    pub async fn dispatch(&self, action: Action) -> Result<Outcome> {
        let (tx, rx) = oneshot::channel();
        self.action_tx
            .send((action, tx))
            .await
            .map_err(|_| Error::Internal("store task has stopped".to_string()))?;
        rx.await
            .map_err(|_| Error::Internal("store task dropped the request".to_string()))?
    }

    /// Latest published state
    pub fn snapshot(&self) -> Arc<AppState> {
        Arc::clone(&self.snapshots.borrow())
    }

    /// Receiver notified on every applied action
    pub fn subscribe(&self) -> watch::Receiver<Arc<AppState>> {
        self.snapshots.clone()
    }
}

/// Move `store` onto its own task and return a handle to it.
///
/// The task runs until every `StoreHandle` has been dropped, then hands the
/// store back through the returned join handle.
pub fn spawn_store_runtime(
    store: Store,
    buffer: usize,
) -> (StoreHandle, tokio::task::JoinHandle<Store>) {
    let (channels, action_rx) = StoreChannels::new(buffer);
    let handle = StoreHandle {
        action_tx: channels.action_tx,
        snapshots: store.subscribe(),
    };
    let task = tokio::spawn(run_store(store, action_rx));
    (handle, task)
}

async fn run_store(mut store: Store, mut action_rx: mpsc::Receiver<ActionRequest>) -> Store {
    info!("Store runtime started");
    while let Some((action, reply)) = action_rx.recv().await {
        let name = action.name();
        let result = store.apply(action);
        if reply.send(result).is_err() {
            debug!("Caller went away before {} completed", name);
        }
    }
    info!("Store runtime stopped");
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AuthError;
    use crate::types::LoginOutcome;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_dispatch_through_handle() {
        let (handle, task) = spawn_store_runtime(Store::seeded(), 8);
        let mut updates = handle.subscribe();

        let outcome = handle
            .dispatch(Action::MemberLogin {
                phone: "08123456789".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(
            outcome,
            Outcome::Login(LoginOutcome::SignedIn {
                member_id: "JM001".to_string(),
                name: "Budi Santoso".to_string()
            })
        );

        updates.changed().await.unwrap();
        assert_eq!(
            updates.borrow().session.current_user_id.as_deref(),
            Some("JM001")
        );
        assert_eq!(handle.snapshot().revision, 1);

        drop(updates);
        drop(handle);
        let store = task.await.unwrap();
        assert_eq!(store.snapshot().revision, 1);
    }

    #[tokio::test]
    async fn test_errors_come_back_to_caller() {
        let (handle, _task) = spawn_store_runtime(Store::seeded(), 8);
        let err = handle
            .dispatch(Action::AdminLogin {
                password: "salah".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Auth(AuthError::InvalidPassword)));
        assert_eq!(handle.snapshot().revision, 0);
    }

    #[test]
    fn test_handles_are_cloneable() {
        tokio_test::block_on(async {
            let (handle, _task) = spawn_store_runtime(Store::seeded(), 8);
            let other = handle.clone();
            tokio_test::assert_ok!(
                other
                    .dispatch(Action::SubmitFeedback {
                        name: Some("Ruth".to_string()),
                        message: "Ibadah yang indah".to_string(),
                    })
                    .await
            );
            assert_eq!(handle.snapshot().feedback[0].name, "Ruth");
        });
    }
}
