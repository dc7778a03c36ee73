pub mod field;
pub mod layout;
pub mod preload;
pub mod snapshot;
