//! Framework-free types shared by the clinic frontend: route groups, page
//! metadata, build-time configuration and calendar arithmetic.

pub mod shared;
