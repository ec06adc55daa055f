use std::io::Write;
use std::sync::Mutex;

use crate::domain::report::OccupancyReport;
use crate::error::{OccupancyError, Result};
use crate::ports::report_sink::ReportSink;

pub const RESULTS_HEADER: &str = "--- Final Occupancy Results ---";

/// Writes the report as pretty-printed JSON.
pub struct JsonWriterSink<W: Write + Send> {
    out: Mutex<W>,
}

pub type StdoutSink = JsonWriterSink<std::io::Stdout>;

impl StdoutSink {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> JsonWriterSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl<W: Write + Send> ReportSink for JsonWriterSink<W> {
    fn publish(&self, report: &OccupancyReport) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        let mut out = self.out.lock().map_err(|_| OccupancyError::Publish {
            reason: "output lock poisoned".into(),
        })?;
        writeln!(out, "\n{RESULTS_HEADER}")?;
        writeln!(out, "{json}")?;
        out.flush()?;
        tracing::info!(listings = report.len(), "Report published");
        Ok(())
    }
}
