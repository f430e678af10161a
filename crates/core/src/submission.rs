//! The canonical submission model shared by the store, the event bus,
//! and the API surface.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

/// One persisted signup: a geolocated pin dropped by a visitor.
///
/// Immutable once persisted: there is no update path, and deletion
/// happens only through the administrative bulk reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    /// Store-assigned identifier; never client-supplied.
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub postal_code: String,
    /// Resolved place name; `None` when resolution degraded.
    pub city: Option<String>,
    /// Resolved region/state abbreviation; `None` when resolution degraded.
    pub region: Option<String>,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
    /// Store-assigned creation time; defines recency ordering.
    pub created_at: Timestamp,
}

/// A validated, geo-resolved signup ready to be persisted. The store
/// assigns `id` and `created_at` on insert.
#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub name: String,
    pub email: String,
    pub postal_code: String,
    pub city: Option<String>,
    pub region: Option<String>,
    pub lat: f64,
    pub lon: f64,
}
