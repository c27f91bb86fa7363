pub mod auth;
pub mod dashboard;
pub mod footer;
pub mod header;
pub mod left;
pub mod meta;
pub mod sections;
