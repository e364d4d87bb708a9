pub mod club_queries;
pub mod event_queries;
pub mod notice_queries;
