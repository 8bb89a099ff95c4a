//! Only Yes entry point
//!
//! On the web this starts the DOM host; natively it runs a scripted headless session.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    only_yes::platform::web::run().map_err(|e| {
        log::error!("Startup failed: {e}");
        JsValue::from_str(&e.to_string())
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Only Yes (native) starting...");
    log::info!("The interactive page needs a browser - serve the wasm build for that");

    let summary = only_yes::platform::headless::run_demo(clock_seed());
    log::info!(
        "Headless session: {} frames, {} teleports, {} confetti pieces",
        summary.frames,
        summary.teleports,
        summary.confetti
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
