//! Console sink behind the `debug_log!` / `warn_log!` / `error_log!` macros.
//!
//! In the browser everything goes to `window.console`.  Native builds (the
//! unit-test binary) have no console binding, so they print to stderr.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Warn,
    Error,
}

#[cfg(target_arch = "wasm32")]
pub fn emit(level: Level, message: &str) {
    let value = wasm_bindgen::JsValue::from_str(message);
    match level {
        Level::Debug => web_sys::console::log_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Error => web_sys::console::error_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn emit(level: Level, message: &str) {
    eprintln!("[{:?}] {}", level, message);
}
