mod components;
pub mod config;
mod pages;
pub mod router;
mod state;
mod test_support;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = config::initial_log_level();
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    log::info!("Starting Leave Portal frontend (wasm, log level {level})");

    router::mount_app();
}
