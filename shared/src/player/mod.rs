pub mod handle;
pub mod player_api;
