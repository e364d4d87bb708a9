pub mod session_ops;
pub mod event_ops;
pub mod club_ops;
