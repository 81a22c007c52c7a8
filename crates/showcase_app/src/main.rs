#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod config;
#[cfg(target_arch = "wasm32")]
mod platform;

#[cfg(target_arch = "wasm32")]
fn main() {
    if let Err(err) = platform::run_app() {
        gloo::console::error!("showcase failed to start", err);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("showcase_app only runs in the browser; build it for wasm32-unknown-unknown.");
}
