pub mod auth_card;
pub mod page_header;
pub mod ui;

pub use auth_card::AuthCard;
pub use page_header::PageHeader;
