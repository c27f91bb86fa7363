pub mod appointments;
pub mod calendar;
pub mod dashboard;
pub mod patients;
pub mod reports;
