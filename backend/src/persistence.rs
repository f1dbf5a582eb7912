//! Best-effort submission persistence
//!
//! The store is a stub: accepted profiles are logged, not written anywhere.
//! The contract callers rely on is the failure semantics, not the storage:
//! saving is fire-and-forget and a failed or disabled store must never block
//! plan generation or surface an error to the user.

use chrono::{DateTime, Utc};
use ramadhan_prep_shared::Profile;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

/// Persistence failure, swallowed and logged at the call site
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Persistence is disabled")]
    Disabled,
}

/// Receipt for an accepted submission
#[derive(Debug, Clone)]
pub struct SavedSubmission {
    pub id: Uuid,
    pub saved_at: DateTime<Utc>,
}

/// Stubbed submission store
#[derive(Debug, Clone)]
pub struct PreparationStore {
    enabled: bool,
}

impl PreparationStore {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Record an accepted submission
    ///
    /// Logs the submission summary and returns a receipt. Kept async so a
    /// real backing store can slot in without touching callers.
    pub async fn save(&self, profile: &Profile) -> Result<SavedSubmission, StoreError> {
        if !self.enabled {
            return Err(StoreError::Disabled);
        }

        let receipt = SavedSubmission {
            id: Uuid::new_v4(),
            saved_at: Utc::now(),
        };
        info!(
            submission_id = %receipt.id,
            name = %profile.name,
            job_type = ?profile.job_type,
            goals = profile.goals.len(),
            "Preparation submission accepted"
        );
        Ok(receipt)
    }
}
