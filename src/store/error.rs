//! Store error types

use thiserror::Error;

/// Failures surfaced by the save path
///
/// The simulated backend never produces these; they exist for backends
/// that talk to real storage.
#[derive(Debug, Error)]
pub enum StoreError {
    #[allow(dead_code)]
    #[error("failed to persist form values: {0}")]
    Persistence(String),

    #[error("save task did not complete: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}
