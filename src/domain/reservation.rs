use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::listing::ListingId;

/// Reservation lifecycle state as reported by Hostaway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReservationStatus {
    New,
    Modified,
    Cancelled,
    /// Any other provider status (`inquiry`, `declined`, ...), kept verbatim.
    Other(String),
}

impl ReservationStatus {
    /// Only new and modified reservations count towards occupancy.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::New | Self::Modified)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::New => "new",
            Self::Modified => "modified",
            Self::Cancelled => "cancelled",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for ReservationStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "new" => Self::New,
            "modified" => Self::Modified,
            "cancelled" => Self::Cancelled,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ReservationStatus {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl From<ReservationStatus> for String {
    fn from(status: ReservationStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stay on one listing. Check-out day is exclusive: `arrival..departure`
/// covers the booked nights.
///
/// Dates that were missing or unparseable upstream are `None` and the
/// reservation then contributes no nights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub listing_id: ListingId,
    pub status: ReservationStatus,
    pub arrival: Option<NaiveDate>,
    pub departure: Option<NaiveDate>,
}

impl Reservation {
    pub fn new(
        listing_id: impl Into<ListingId>,
        status: ReservationStatus,
        arrival: NaiveDate,
        departure: NaiveDate,
    ) -> Self {
        Self {
            listing_id: listing_id.into(),
            status,
            arrival: Some(arrival),
            departure: Some(departure),
        }
    }
}

/// Keep only active reservations, preserving input order.
pub fn filter_active(reservations: &[Reservation]) -> Vec<Reservation> {
    info!(total = reservations.len(), "Filtering reservations");
    let active: Vec<Reservation> = reservations
        .iter()
        .filter(|r| r.status.is_active())
        .cloned()
        .collect();
    info!(active = active.len(), "Found active reservations");
    active
}
