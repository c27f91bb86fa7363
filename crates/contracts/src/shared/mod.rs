pub mod calendar;
pub mod config;
pub mod page_meta;
pub mod routes;
