use chrono::NaiveDate;
use serde_json::Value;
use tracing::debug;

use crate::domain::listing::ListingId;
use crate::domain::reservation::{Reservation, ReservationStatus};
use crate::error::{OccupancyError, Result};

/// Extract `access_token` from the `/accessTokens` response body.
pub fn parse_access_token(json: &Value) -> Option<String> {
    json.get("access_token")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .map(String::from)
}

/// Decode the `/reservations` response. A missing or null `result` is an
/// empty list; a `result` that is present but not an array is an error.
pub fn parse_reservations_response(json: &Value) -> Result<Vec<Reservation>> {
    let items = match json.get("result") {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(OccupancyError::Fetch {
                reason: format!("`result` is not an array: {other}"),
            });
        }
    };

    Ok(items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let reservation = parse_reservation(item);
            if reservation.is_none() {
                debug!(index, "Skipping non-object reservation entry");
            }
            reservation
        })
        .collect())
}

/// Lenient per-record decoding. Missing fields never fail; they just make
/// the record match nothing or contribute no nights.
pub fn parse_reservation(item: &Value) -> Option<Reservation> {
    let obj = item.as_object()?;

    let listing_id = obj
        .get("listingMapId")
        .map(ListingId::from_json)
        .unwrap_or_default();

    let status = obj
        .get("status")
        .and_then(Value::as_str)
        .map_or_else(|| ReservationStatus::Other(String::new()), ReservationStatus::from);

    Some(Reservation {
        listing_id,
        status,
        arrival: obj.get("arrivalDate").and_then(parse_date),
        departure: obj.get("departureDate").and_then(parse_date),
    })
}

/// Hostaway sends `YYYY-MM-DD`; some payloads carry a time suffix, which is
/// ignored since stays are counted in calendar days.
fn parse_date(value: &Value) -> Option<NaiveDate> {
    let raw = value.as_str()?.trim();
    let day = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}
