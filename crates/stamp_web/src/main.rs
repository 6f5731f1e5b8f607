#[cfg(target_arch = "wasm32")]
mod platform;

#[cfg(target_arch = "wasm32")]
fn main() {
    platform::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("stamp_web only runs in the browser (build for wasm32-unknown-unknown).");
}
