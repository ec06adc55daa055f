use serde::Serialize;

use super::listing::{Listing, ListingId};
use super::month::ReportMonth;
use super::occupancy::{MonthlyOccupancy, calculate_monthly_occupancy};
use super::reservation::Reservation;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingOccupancy {
    pub listing_id: ListingId,
    pub occupancy: MonthlyOccupancy,
}

/// Per-listing monthly occupancy, one entry per configured listing in
/// configured order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct OccupancyReport {
    pub listings: Vec<ListingOccupancy>,
}

impl OccupancyReport {
    pub fn get(&self, id: &ListingId) -> Option<&MonthlyOccupancy> {
        self.listings
            .iter()
            .find(|l| &l.listing_id == id)
            .map(|l| &l.occupancy)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

pub fn assemble_report(
    listings: &[Listing],
    active: &[Reservation],
    months: &[ReportMonth],
) -> OccupancyReport {
    let listings = listings
        .iter()
        .map(|listing| ListingOccupancy {
            listing_id: listing.id.clone(),
            occupancy: calculate_monthly_occupancy(listing, active, months),
        })
        .collect();
    OccupancyReport { listings }
}

impl std::fmt::Display for OccupancyReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Some(first) = self.listings.first() else {
            return writeln!(f, "No listings in report");
        };

        write!(f, "{:<12}", "Listing")?;
        for (label, _) in first.occupancy.iter() {
            let short = label.strip_prefix(super::month::LABEL_PREFIX).unwrap_or(label);
            write!(f, " {short:>9}")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", "-".repeat(12 + 10 * first.occupancy.len()))?;

        for entry in &self.listings {
            write!(f, "{:<12}", entry.listing_id)?;
            for (_, ratio) in entry.occupancy.iter() {
                write!(f, " {:>8.1}%", ratio * 100.0)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
