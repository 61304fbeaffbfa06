pub mod charts;
pub mod dashboard;
pub mod records_grid;
