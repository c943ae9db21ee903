//! Menu Admin Frontend Entry Point

mod api;
mod app;
mod config;
mod dom;
mod error;
mod logger;
mod pages;

fn main() {
    console_error_panic_hook::set_once();

    let Some(window) = web_sys::window() else {
        return;
    };
    match app::init(&window) {
        Ok(handle) => handle.keep_alive(),
        Err(e) => web_sys::console::error_1(&format!("[APP] Page init failed: {}", e).into()),
    }
}
