cfg_if! {
    if #[cfg(feature = "wbindgen")] {
        mod browser;
        pub use self::browser::{JsPlayer, WindowStreamHost};
    }
}
