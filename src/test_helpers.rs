use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::month::FetchWindow;
use crate::domain::report::OccupancyReport;
use crate::domain::reservation::Reservation;
use crate::error::Result;
use crate::ports::hostaway_api::{AccessToken, HostawayApi};
use crate::ports::report_sink::ReportSink;

type TokenFn = Box<dyn Fn() -> Result<AccessToken> + Send + Sync>;
type ReservationsFn = Box<dyn Fn(&FetchWindow) -> Result<Vec<Reservation>> + Send + Sync>;

pub struct MockHostawayApi {
    token_fn: Mutex<TokenFn>,
    reservations_fn: Mutex<ReservationsFn>,
    token_calls: AtomicUsize,
    fetch_calls: AtomicUsize,
}

impl Default for MockHostawayApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHostawayApi {
    pub fn new() -> Self {
        Self {
            token_fn: Mutex::new(Box::new(|| Ok(AccessToken::new("test-token")))),
            reservations_fn: Mutex::new(Box::new(|_| Ok(vec![]))),
            token_calls: AtomicUsize::new(0),
            fetch_calls: AtomicUsize::new(0),
        }
    }

    #[must_use]
    pub fn with_token(self, f: impl Fn() -> Result<AccessToken> + Send + Sync + 'static) -> Self {
        *self.token_fn.lock().unwrap() = Box::new(f);
        self
    }

    #[must_use]
    pub fn with_reservations(
        self,
        f: impl Fn(&FetchWindow) -> Result<Vec<Reservation>> + Send + Sync + 'static,
    ) -> Self {
        *self.reservations_fn.lock().unwrap() = Box::new(f);
        self
    }

    pub fn token_calls(&self) -> usize {
        self.token_calls.load(Ordering::SeqCst)
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HostawayApi for MockHostawayApi {
    async fn access_token(&self) -> Result<AccessToken> {
        self.token_calls.fetch_add(1, Ordering::SeqCst);
        let f = self.token_fn.lock().unwrap();
        f()
    }

    async fn list_reservations(
        &self,
        _token: &AccessToken,
        window: &FetchWindow,
    ) -> Result<Vec<Reservation>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        let f = self.reservations_fn.lock().unwrap();
        f(window)
    }
}

/// Sink that keeps every published report in memory.
#[derive(Default)]
pub struct CapturingSink {
    reports: Mutex<Vec<OccupancyReport>>,
}

impl CapturingSink {
    pub fn published(&self) -> Vec<OccupancyReport> {
        self.reports.lock().unwrap().clone()
    }
}

impl ReportSink for CapturingSink {
    fn publish(&self, report: &OccupancyReport) -> Result<()> {
        self.reports.lock().unwrap().push(report.clone());
        Ok(())
    }
}

// --- Factory functions ---

pub fn make_reservation(
    listing_id: &str,
    status: &str,
    arrival: &str,
    departure: &str,
) -> Reservation {
    Reservation {
        listing_id: listing_id.into(),
        status: status.into(),
        arrival: NaiveDate::parse_from_str(arrival, "%Y-%m-%d").ok(),
        departure: NaiveDate::parse_from_str(departure, "%Y-%m-%d").ok(),
    }
}
