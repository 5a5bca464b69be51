pub mod calendar_event;
pub mod event;
pub mod event_type;
pub mod team;
