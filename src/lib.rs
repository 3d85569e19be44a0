#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod profile;
pub mod reveal;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // a logger may already be installed after a hot reload
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
