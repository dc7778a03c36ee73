pub mod gate;
pub mod host;
