#![no_main]
use libfuzzer_sys::fuzz_target;

use hostaway_occupancy::adapters::hostaway::parser::parse_reservations_response;
use hostaway_occupancy::domain::listing::Listing;
use hostaway_occupancy::domain::month::build_report_months;
use hostaway_occupancy::domain::report::assemble_report;
use hostaway_occupancy::domain::reservation::filter_active;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(json) = serde_json::from_str::<serde_json::Value>(text) else {
        return;
    };
    let Ok(reservations) = parse_reservations_response(&json) else {
        return;
    };
    let today = chrono::NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
    let months = build_report_months(today, 6);
    let active = filter_active(&reservations);
    let listings = Listing::from_ids(&["1", "42"]);
    let report = assemble_report(&listings, &active, &months);
    for entry in &report.listings {
        assert_eq!(entry.occupancy.len(), months.len());
        assert!(entry.occupancy.iter().all(|(_, ratio)| ratio >= 0.0));
    }
});
