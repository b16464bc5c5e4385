//! Registration records and the append-only persisted list

use super::traits::Storage;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// Storage key holding the JSON-encoded registration list.
pub const REGISTRATIONS_KEY: &str = "registrations";

/// One persisted submission. Immutable once created; there is no edit or
/// delete operation anywhere in the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRecord {
    pub id: String,
    pub submitted_at: DateTime<Utc>,
    /// Field name -> final masked value, exactly as shown in the form.
    pub values: HashMap<String, String>,
}

impl RegistrationRecord {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            submitted_at: Utc::now(),
            values,
        }
    }
}

/// Decode the stored list. Absence or corrupt JSON reads as an empty list
/// rather than failing submission.
pub async fn load_registrations(store: &dyn Storage) -> Result<Vec<RegistrationRecord>> {
    match store.read(REGISTRATIONS_KEY).await? {
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(list) => Ok(list),
            Err(err) => {
                warn!(%err, "stored registrations unreadable, starting a new list");
                Ok(Vec::new())
            }
        },
        None => Ok(Vec::new()),
    }
}

/// Append one record in a single read-modify-write and return the new list
/// length. Prior records pass through untouched.
pub async fn append_registration(
    store: &dyn Storage,
    record: RegistrationRecord,
) -> Result<usize> {
    let mut list = load_registrations(store).await?;
    list.push(record);
    let encoded = serde_json::to_string_pretty(&list)?;
    store.write(REGISTRATIONS_KEY, &encoded).await?;
    Ok(list.len())
}
