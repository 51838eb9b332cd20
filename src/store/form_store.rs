//! Session-wide form value store

use super::backend::{FormBackend, SimulatedBackend};
use super::error::StoreError;
use crate::state::FormValues;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

/// Every form's values, keyed by form id
pub type FormMap = HashMap<String, FormValues>;

/// Single source of truth for in-progress form data.
///
/// Each mutation publishes a fresh top-level map, so a snapshot taken
/// earlier keeps its contents. Cloning the store yields another handle to
/// the same state.
#[derive(Clone)]
pub struct FormStore {
    state: Arc<watch::Sender<Arc<FormMap>>>,
    backend: Arc<dyn FormBackend>,
}

impl FormStore {
    /// Create an empty store saving through `backend`
    pub fn new(backend: Arc<dyn FormBackend>) -> Self {
        let (sender, _) = watch::channel(Arc::new(FormMap::new()));
        Self {
            state: Arc::new(sender),
            backend,
        }
    }

    /// Create an empty store whose saves take `delay` and always succeed
    pub fn simulated(delay: Duration) -> Self {
        Self::new(Arc::new(SimulatedBackend::new(delay)))
    }

    /// Values recorded for `form_id`, or an empty map if none were
    pub fn get_form_values(&self, form_id: &str) -> FormValues {
        self.state.borrow().get(form_id).cloned().unwrap_or_default()
    }

    /// The current top-level map
    pub fn snapshot(&self) -> Arc<FormMap> {
        Arc::clone(&self.state.borrow())
    }

    /// Receiver notified every time the map is replaced
    pub fn subscribe(&self) -> watch::Receiver<Arc<FormMap>> {
        self.state.subscribe()
    }

    /// Replace the values of `form_id`, leaving other forms untouched
    pub fn set_form_values(&self, form_id: impl Into<String>, values: FormValues) {
        publish_set(&self.state, form_id.into(), values);
    }

    /// Drop everything recorded for `form_id`; no-op when absent
    pub fn reset_form_values(&self, form_id: &str) {
        let removed = self.state.send_if_modified(|map| {
            if !map.contains_key(form_id) {
                return false;
            }
            let mut next = FormMap::clone(map);
            next.remove(form_id);
            *map = Arc::new(next);
            true
        });
        if removed {
            tracing::debug!(form_id, "form values reset");
        }
    }

    /// Persist `values` through the backend and record them once it
    /// completes. Must be called from within a tokio runtime.
    ///
    /// Reads issued before the returned handle resolves do not see the new
    /// values. When several saves for the same form overlap, whichever
    /// completes last wins.
    pub fn save_form_values(&self, form_id: impl Into<String>, values: FormValues) -> SaveHandle {
        let form_id = form_id.into();
        let save_id = Uuid::new_v4();
        let dispatched_at = Instant::now();
        let state = Arc::clone(&self.state);
        let backend = Arc::clone(&self.backend);
        let span = tracing::info_span!("save_form_values", form_id = %form_id, %save_id);

        let task_form_id = form_id.clone();
        let task = tokio::spawn(
            async move {
                tracing::debug!("save started");
                if let Err(err) = backend.persist(&task_form_id, &values, dispatched_at).await {
                    tracing::warn!(error = %err, "save failed, store unchanged");
                    return Err(err);
                }
                publish_set(&state, task_form_id.clone(), values);
                tracing::info!("form values saved");
                Ok(SaveReceipt {
                    form_id: task_form_id,
                    save_id,
                    saved_at: Utc::now(),
                })
            }
            .instrument(span),
        );

        SaveHandle {
            form_id,
            save_id,
            task,
        }
    }
}

fn publish_set(state: &watch::Sender<Arc<FormMap>>, form_id: String, values: FormValues) {
    state.send_if_modified(|map| {
        if map.get(&form_id) == Some(&values) {
            return false;
        }
        let mut next = FormMap::clone(map);
        next.insert(form_id, values);
        *map = Arc::new(next);
        true
    });
}

/// Proof that a save completed
#[derive(Debug, Clone, PartialEq)]
pub struct SaveReceipt {
    pub form_id: String,
    pub save_id: Uuid,
    pub saved_at: DateTime<Utc>,
}

/// Completion signal of a pending save.
///
/// Resolves once the values are visible through the store. Dropping the
/// handle does not cancel the save.
#[derive(Debug)]
pub struct SaveHandle {
    form_id: String,
    save_id: Uuid,
    task: JoinHandle<Result<SaveReceipt, StoreError>>,
}

impl SaveHandle {
    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    pub fn save_id(&self) -> Uuid {
        self.save_id
    }

    /// Whether the save has completed (successfully or not)
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Future for SaveHandle {
    type Output = Result<SaveReceipt, StoreError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.task)
            .poll(cx)
            .map(|joined| joined.map_err(StoreError::from).and_then(|result| result))
    }
}
