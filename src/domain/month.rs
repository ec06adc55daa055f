use chrono::{Datelike, Months, NaiveDate};
use tracing::debug;

pub const LABEL_PREFIX: &str = "Occupancy: ";

/// One reporting month: a display label and its first day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportMonth {
    pub label: String,
    pub anchor: NaiveDate,
}

impl ReportMonth {
    pub fn starting(anchor: NaiveDate) -> Self {
        Self {
            label: format!("{LABEL_PREFIX}{}", anchor.format("%b %Y")),
            anchor,
        }
    }

    /// Last calendar day of this month.
    pub fn end(&self) -> NaiveDate {
        last_day_of_month(self.anchor)
    }

    /// Number of days in this month (28–31).
    pub fn days(&self) -> u32 {
        self.end().day()
    }
}

/// Arrival-date window sent to the reservations endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl FetchWindow {
    pub fn start_param(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    pub fn end_param(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}

pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let first = first_day_of_month(date);
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// The current month followed by `months_ahead` more, anchored on the 1st.
pub fn build_report_months(today: NaiveDate, months_ahead: u32) -> Vec<ReportMonth> {
    let first = first_day_of_month(today);
    let months: Vec<ReportMonth> = (0..=months_ahead)
        .map_while(|offset| first.checked_add_months(Months::new(offset)))
        .map(ReportMonth::starting)
        .collect();
    debug!(
        count = months.len(),
        first = ?months.first().map(|m| &m.label),
        last = ?months.last().map(|m| &m.label),
        "Built reporting months"
    );
    months
}

/// First day of the current month through the last day of the month
/// `months_ahead` months later.
pub fn fetch_window(today: NaiveDate, months_ahead: u32) -> FetchWindow {
    let start = first_day_of_month(today);
    let end = start
        .checked_add_months(Months::new(months_ahead))
        .map_or(NaiveDate::MAX, last_day_of_month);
    FetchWindow { start, end }
}
