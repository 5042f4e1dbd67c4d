//! Browser front end for the map drawing widget.
//!
//! ARCHITECTURE
//! ============
//! `app::App` owns the draft (a GeoJSON feature collection as text) and hands
//! it to `components::map_draft::MapDraft`, which drives a `widget::MapWidget`
//! over the mapbox-gl binding. Everything that touches the browser is behind
//! the `csr` feature; without it the crate compiles natively so state and
//! utility modules can be unit tested.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install logging and the panic hook, then mount [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
