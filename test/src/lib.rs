//! Host doubles and helpers for exercising a Bridge without a browser.


pub use helpers::*;
pub use stream_shared::EventKind;
