/// Data models for database entities
///
/// Inputs map to the medicines table. Values pass through verbatim; the
/// database schema is the only layer that constrains them.

use serde::{Deserialize, Serialize};

/// Input for saving a new medicine record
///
/// All three fields are free-form text. Empty strings are legal and are
/// stored as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMedicine {
    pub name: String,
    pub dosage: String,
    pub reminder_time: String,
}
