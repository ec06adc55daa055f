pub mod hostaway_api;
pub mod report_sink;
