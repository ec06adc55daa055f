pub mod listing;
pub mod month;
pub mod occupancy;
pub mod report;
pub mod reservation;
