#![allow(clippy::cast_precision_loss)] // Night counts are small enough for f64

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::listing::Listing;
use super::month::ReportMonth;
use super::reservation::Reservation;

/// Month label to occupancy ratio, in reporting-month order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlyOccupancy {
    entries: Vec<(String, f64)>,
}

impl MonthlyOccupancy {
    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, ratio)| *ratio)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(l, r)| (l.as_str(), *r))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, label: &str, ratio: f64) {
        self.entries.push((label.to_string(), ratio));
    }
}

impl Serialize for MonthlyOccupancy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, ratio) in &self.entries {
            map.serialize_entry(label, ratio)?;
        }
        map.end()
    }
}

/// Nights of `reservation` that fall inside `month`.
///
/// The stay is clipped to `[month start, day after month end)`, so a
/// departure on the 1st of the next month adds nothing past the boundary.
pub fn nights_in_month(reservation: &Reservation, month: &ReportMonth) -> i64 {
    let (Some(arrival), Some(departure)) = (reservation.arrival, reservation.departure) else {
        return 0;
    };
    let month_start = month.anchor;
    let month_end = month.end();
    if departure <= month_start || arrival > month_end {
        return 0;
    }
    let Some(boundary) = month_end.succ_opt() else {
        return 0;
    };

    let stay_start = arrival.max(month_start);
    let stay_end = departure.min(boundary);
    if stay_start < stay_end {
        (stay_end - stay_start).num_days()
    } else {
        0
    }
}

/// Round half away from zero to four decimals.
pub fn round_ratio(ratio: f64) -> f64 {
    (ratio * 10_000.0).round() / 10_000.0
}

/// Booked-night ratio per reporting month for one listing.
///
/// `active` must already be filtered to active reservations. Overlapping
/// stays are summed as-is, so a double-booked month can exceed 1.0.
pub fn calculate_monthly_occupancy(
    listing: &Listing,
    active: &[Reservation],
    months: &[ReportMonth],
) -> MonthlyOccupancy {
    let mut occupancy = MonthlyOccupancy::default();
    let listing_reservations: Vec<&Reservation> = active
        .iter()
        .filter(|r| r.listing_id == listing.id)
        .collect();

    if listing_reservations.is_empty() {
        for month in months {
            occupancy.push(&month.label, 0.0);
        }
        return occupancy;
    }

    for month in months {
        let booked: i64 = listing_reservations
            .iter()
            .map(|r| nights_in_month(r, month))
            .sum();
        let days = month.days();
        let ratio = if days == 0 || booked <= 0 {
            0.0
        } else {
            booked as f64 / f64::from(days)
        };
        occupancy.push(&month.label, round_ratio(ratio));
    }

    occupancy
}
