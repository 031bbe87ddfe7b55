//! Customer record types.
//!
//! A [`Customer`] is the sole entity in the registry: an immutable record
//! created through the validate/format/append pipeline. Raw form input lives
//! in [`CustomerDraft`] until it has been validated and canonicalized.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-process sequence number folded into generated IDs.
static ID_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// A registered customer.
///
/// Records are never mutated after creation; `phone` and `national_id` are
/// always in canonical display form (formatting is applied exactly once, at
/// registration).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Opaque unique token, assigned at creation and never reused.
    pub id: String,

    /// Customer name.
    pub name: String,

    /// Street address.
    pub address: String,

    /// Phone number in canonical display form, e.g. `(11) 98765-4321`.
    pub phone: String,

    /// National ID in canonical display form, e.g. `111.444.777-35`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_id: Option<String>,

    /// When this customer was registered.
    pub created_at: DateTime<Utc>,
}

impl Customer {
    /// Create a new record with a fresh ID and the current timestamp.
    ///
    /// Callers are expected to pass already-validated, already-formatted
    /// field values; this constructor applies no checks of its own.
    #[must_use]
    pub fn new(name: String, address: String, phone: String, national_id: Option<String>) -> Self {
        Self {
            id: generate_id(),
            name,
            address,
            phone,
            national_id,
            created_at: Utc::now(),
        }
    }

    /// Registration date rendered as `DD/MM/YYYY`, the registry's one fixed
    /// display locale.
    #[must_use]
    pub fn created_at_local_date(&self) -> String {
        self.created_at.format("%d/%m/%Y").to_string()
    }
}

/// Raw customer form input, prior to validation and formatting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerDraft {
    /// Name as typed.
    pub name: String,
    /// Address as typed.
    pub address: String,
    /// Phone as typed, punctuation allowed.
    pub phone: String,
    /// National ID as typed; `None` or blank means "not provided".
    pub national_id: Option<String>,
}

/// Generate an opaque unique record ID.
///
/// Combines a microsecond timestamp with a per-process counter, so IDs are
/// unique within a session and across sessions of a single-user registry.
fn generate_id() -> String {
    let micros = u64::try_from(Utc::now().timestamp_micros()).unwrap_or(0);
    let seq = ID_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("{micros:x}-{seq:04x}")
}
