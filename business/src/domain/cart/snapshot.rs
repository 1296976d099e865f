use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::model::CartState;
use crate::domain::shared::value_objects::CartSessionId;

pub const CART_STORAGE_KEY: &str = "cart-storage";
pub const CART_SNAPSHOT_VERSION: u32 = 1;

/// Storage key of a session's cart snapshot.
pub fn storage_key(session_id: &CartSessionId) -> String {
    format!("{}:{}", CART_STORAGE_KEY, session_id)
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("cart.snapshot_malformed")]
    Malformed(#[from] serde_json::Error),
    #[error("cart.snapshot_version_mismatch")]
    VersionMismatch { found: u32 },
}

/// Versioned envelope persisted after every cart mutation.
#[derive(Debug, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub state: CartState,
}

impl CartSnapshot {
    pub fn encode(state: &CartState) -> Result<String, SnapshotError> {
        #[derive(Serialize)]
        struct Borrowed<'a> {
            version: u32,
            saved_at: DateTime<Utc>,
            state: &'a CartState,
        }

        Ok(serde_json::to_string(&Borrowed {
            version: CART_SNAPSHOT_VERSION,
            saved_at: Utc::now(),
            state,
        })?)
    }

    /// Decodes a stored payload. Snapshots written by another schema
    /// version are refused rather than guessed at.
    pub fn decode(payload: &str) -> Result<CartState, SnapshotError> {
        #[derive(Deserialize)]
        struct Envelope {
            version: u32,
        }

        let envelope: Envelope = serde_json::from_str(payload)?;
        if envelope.version != CART_SNAPSHOT_VERSION {
            return Err(SnapshotError::VersionMismatch {
                found: envelope.version,
            });
        }

        let snapshot: CartSnapshot = serde_json::from_str(payload)?;
        Ok(snapshot.state.normalized())
    }
}
