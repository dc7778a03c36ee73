pub mod callback;
pub mod callback_set;
pub mod event_kind;
