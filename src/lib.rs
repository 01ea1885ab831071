#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod adaptive;
mod dom;
mod events;
mod gaze;
mod media;
mod render;

pub use adaptive::AdaptiveUi;
pub use gaze::GazeManager;
pub use render::Renderer;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ambient-web starting");

    if let Err(e) = adaptive::init_adaptive_ui() {
        log::error!("[adaptive] init error: {:?}", e);
    }

    let gaze = gaze::gaze_manager();
    spawn_local(async move {
        if !gaze.initialize_async().await {
            log::warn!("[gaze] tracking disabled; pointer events will not be emitted");
        }
    });
    Ok(())
}
