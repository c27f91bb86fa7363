pub mod button;
pub mod card;
pub mod tabs;
pub mod textarea;

pub use button::Button;
pub use card::Card;
pub use tabs::{TabItem, Tabs};
pub use textarea::Textarea;
