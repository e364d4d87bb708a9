pub mod ids;
pub mod role;
pub mod user;
pub mod club;
pub mod event;
pub mod notice;

// Re-exports for convenience
pub use ids::Id;
pub use role::Role;
pub use user::User;
pub use club::{Club, ClubLead, GENERAL_CLUB_ID};
pub use event::{CategoryFilter, Event, EventCategory};
pub use notice::{Notice, NoticeType};
