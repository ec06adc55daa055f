use crate::domain::report::OccupancyReport;
use crate::error::Result;

pub trait ReportSink: Send + Sync {
    fn publish(&self, report: &OccupancyReport) -> Result<()>;
}
