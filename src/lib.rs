//! Particle background and links directory for the VenxHosts landing page.
//!
//! The particle engine (`field`, `particle`, `renderer`) is plain Rust over a
//! `RenderSurface` trait and an injected random source; `backdrop` wires it to
//! a browser canvas. `links` and `admin` hold the page's link list and its
//! front-end admin gate over a `KeyValueStore`.

mod utils;

pub mod admin;
pub mod backdrop;
pub mod color;
pub mod config;
pub mod directory;
pub mod error;
pub mod field;
pub mod links;
pub mod particle;
pub mod renderer;
pub mod store;
pub mod surface;

use log::warn;
use wasm_bindgen::prelude::*;

pub use config::FieldConfig;
pub use directory::WebLinks;
pub use error::{AuthError, BackdropError, LinkError, StoreError};
pub use field::ParticleField;
pub use particle::Particle;
pub use surface::{CanvasSurface, Composite, Glow, RenderSurface};

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
    utils::init_logging();
}

/// Start the particle background on `canvas_id` with the default look. Does
/// nothing when the canvas is missing.
#[wasm_bindgen]
pub fn start_backdrop(canvas_id: &str) {
    if let Err(e) = backdrop::start(canvas_id, FieldConfig::default()) {
        warn!("particle backdrop failed to start: {}", e);
    }
}

/// Like `start_backdrop`, with a JSON object overriding any `FieldConfig`
/// field. A malformed config is returned as an error.
#[wasm_bindgen]
pub fn start_backdrop_with_config(canvas_id: &str, config_json: &str) -> Result<(), JsValue> {
    let config = FieldConfig::from_json(config_json)?;
    backdrop::start(canvas_id, config)?;
    Ok(())
}

#[wasm_bindgen]
pub fn escape_html(text: &str) -> String {
    utils::escape_html(text)
}
