/// Video Topics - Browser extension that extracts the main topics of a video
/// Built with Rust + WASM + Yew

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod topics;
pub mod video;
pub mod ui;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export URL recognition for JavaScript access
#[wasm_bindgen]
pub fn is_video_url(url: &str) -> bool {
    video::is_video_url(url)
}

// Start the Yew app for the popup. Without a mount point the popup stays inert.
#[wasm_bindgen]
pub fn start_popup() {
    match ui::popup::mount_point() {
        Ok(root) => {
            yew::Renderer::<ui::popup::App>::with_root(root).render();
        }
        Err(e) => {
            log::error!("Popup not started: {}", e);
        }
    }
}
