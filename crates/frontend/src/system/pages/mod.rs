pub mod global_error;
pub mod not_found;
pub mod sign_in;
