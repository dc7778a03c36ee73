mod js_player;
mod window_host;

pub use js_player::JsPlayer;
pub use window_host::WindowStreamHost;
