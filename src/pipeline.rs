use chrono::NaiveDate;
use tracing::{error, info};

use crate::config::types::Config;
use crate::domain::listing::Listing;
use crate::domain::month::{build_report_months, fetch_window};
use crate::domain::report::{OccupancyReport, assemble_report};
use crate::domain::reservation::filter_active;
use crate::error::Result;
use crate::ports::hostaway_api::HostawayApi;
use crate::ports::report_sink::ReportSink;

/// Fetch reservations and build the occupancy report for `today`.
///
/// Returns `Ok(None)` without touching the network when no listing ids are
/// configured. Token and fetch failures abort the run; everything after the
/// fetch is infallible apart from publishing.
pub async fn run(
    config: &Config,
    api: &dyn HostawayApi,
    sink: &dyn ReportSink,
    today: NaiveDate,
) -> Result<Option<OccupancyReport>> {
    let listings = Listing::from_ids(&config.report.listing_ids);
    if listings.is_empty() {
        error!("HOSTAWAY_LISTING_IDS is missing or empty, cannot proceed");
        return Ok(None);
    }
    info!(count = listings.len(), "Listings to process");

    let months_ahead = config.report.months_ahead;
    let window = fetch_window(today, months_ahead);
    info!(
        start = %window.start_param(),
        end = %window.end_param(),
        "Reservation arrival window"
    );

    let token = api.access_token().await?;
    let reservations = api.list_reservations(&token, &window).await?;

    let active = filter_active(&reservations);
    let months = build_report_months(today, months_ahead);
    let report = assemble_report(&listings, &active, &months);
    info!(%report, "Occupancy computed");

    sink.publish(&report)?;
    Ok(Some(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::listing::ListingId;
    use crate::error::OccupancyError;
    use crate::test_helpers::{CapturingSink, MockHostawayApi, make_reservation};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn config_with(ids: &[&str]) -> Config {
        let mut config = Config::default();
        config.report.listing_ids = ids.iter().map(|s| (*s).to_string()).collect();
        config
    }

    #[tokio::test]
    async fn missing_listing_ids_aborts_gracefully() {
        let api = MockHostawayApi::new();
        let sink = CapturingSink::default();
        let result = run(&config_with(&[]), &api, &sink, date(2025, 3, 15)).await;
        assert!(result.unwrap().is_none());
        assert_eq!(api.token_calls(), 0);
        assert_eq!(api.fetch_calls(), 0);
        assert!(sink.published().is_empty());
    }

    #[tokio::test]
    async fn auth_failure_skips_fetch() {
        let api = MockHostawayApi::new().with_token(|| {
            Err(OccupancyError::Auth {
                status: 401,
                body: "invalid_client".into(),
            })
        });
        let sink = CapturingSink::default();
        let err = run(&config_with(&["1"]), &api, &sink, date(2025, 3, 15))
            .await
            .unwrap_err();
        assert!(matches!(err, OccupancyError::Auth { status: 401, .. }));
        assert_eq!(api.token_calls(), 1);
        assert_eq!(api.fetch_calls(), 0);
        assert!(sink.published().is_empty());
    }

    #[tokio::test]
    async fn fetch_failure_produces_no_report() {
        let api = MockHostawayApi::new().with_reservations(|_| {
            Err(OccupancyError::Fetch {
                reason: "boom".into(),
            })
        });
        let sink = CapturingSink::default();
        let result = run(&config_with(&["1"]), &api, &sink, date(2025, 3, 15)).await;
        assert!(matches!(result, Err(OccupancyError::Fetch { .. })));
        assert!(sink.published().is_empty());
    }

    #[tokio::test]
    async fn fetch_window_is_passed_through() {
        let api = MockHostawayApi::new().with_reservations(|window| {
            assert_eq!(window.start_param(), "2025-03-01");
            assert_eq!(window.end_param(), "2025-09-30");
            Ok(vec![])
        });
        let sink = CapturingSink::default();
        run(&config_with(&["1"]), &api, &sink, date(2025, 3, 15))
            .await
            .unwrap();
        assert_eq!(api.fetch_calls(), 1);
    }

    #[tokio::test]
    async fn end_to_end_report() {
        let api = MockHostawayApi::new().with_reservations(|_| {
            Ok(vec![
                make_reservation("42", "new", "2025-03-10", "2025-03-20"),
                make_reservation("42", "cancelled", "2025-04-01", "2025-04-30"),
                make_reservation("43", "modified", "2025-03-31", "2025-04-01"),
            ])
        });
        let sink = CapturingSink::default();
        let report = run(&config_with(&["42", "43", "44"]), &api, &sink, date(2025, 3, 15))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(report.len(), 3);
        let l42 = report.get(&ListingId::new("42")).unwrap();
        assert!((l42.get("Occupancy: Mar 2025").unwrap() - 0.3226).abs() < f64::EPSILON);
        assert!(l42.get("Occupancy: Apr 2025").unwrap().abs() < f64::EPSILON);
        let l43 = report.get(&ListingId::new("43")).unwrap();
        assert!((l43.get("Occupancy: Mar 2025").unwrap() - 0.0323).abs() < f64::EPSILON);
        assert_eq!(sink.published(), vec![report]);
    }
}
