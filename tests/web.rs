//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use venx_backdrop::backdrop;
use venx_backdrop::links::{default_links, LinkDirectory, STORAGE_KEY};
use venx_backdrop::renderer::render_frame;
use venx_backdrop::store::{local_storage, KeyValueStore};
use venx_backdrop::{
    BackdropError, CanvasSurface, FieldConfig, ParticleField, RenderSurface, WebLinks,
};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mount_canvas(id: &str) -> HtmlCanvasElement {
    let document = document();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    canvas.set_id(id);
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn canvas_surface_takes_the_requested_size() {
    mount_canvas("surface-size");
    let surface = CanvasSurface::find(&document(), "surface-size").unwrap();

    surface.set_size(320.0, 180.5);

    assert_eq!(surface.width(), 320.0);
    assert_eq!(surface.height(), 180.0);
}

#[wasm_bindgen_test]
fn frame_restores_normal_compositing() {
    let canvas = mount_canvas("surface-frame");
    let mut surface = CanvasSurface::new(canvas.clone()).unwrap();
    surface.set_size(900.0, 500.0);
    let config = FieldConfig {
        seed: Some(5),
        ..FieldConfig::default()
    };
    let mut field = ParticleField::from_config(config, surface.width(), surface.height());

    for _ in 0..10 {
        render_frame(&mut field, &mut surface).unwrap();
    }

    let context = canvas
        .get_context("2d")
        .unwrap()
        .unwrap()
        .dyn_into::<CanvasRenderingContext2d>()
        .unwrap();
    assert_eq!(context.global_composite_operation().unwrap(), "source-over");
    assert_eq!(field.len(), 10);
}

#[wasm_bindgen_test]
fn missing_canvas_starts_nothing_quietly() {
    assert!(backdrop::start("no-such-canvas", FieldConfig::default()).is_ok());
}

#[wasm_bindgen_test]
fn non_canvas_element_starts_nothing_quietly() {
    let document = document();
    let div = document.create_element("div").unwrap();
    div.set_id("not-a-canvas");
    document.body().unwrap().append_child(&div).unwrap();

    assert!(backdrop::start("not-a-canvas", FieldConfig::default()).is_ok());
}

#[wasm_bindgen_test]
fn backdrop_sizes_canvas_to_viewport() {
    let canvas = mount_canvas("backdrop-start");
    backdrop::start("backdrop-start", FieldConfig::default()).unwrap();

    let window = web_sys::window().unwrap();
    let width = window.inner_width().unwrap().as_f64().unwrap();
    assert_eq!(canvas.width(), width as u32);
}

#[wasm_bindgen_test]
fn malformed_config_is_reported() {
    mount_canvas("bad-config");
    assert!(venx_backdrop::start_backdrop_with_config("bad-config", "{ \"size\": 3 }").is_err());
}

#[wasm_bindgen_test]
fn local_storage_backs_the_directory() {
    let mut storage = local_storage().unwrap();
    KeyValueStore::remove_item(&mut storage, STORAGE_KEY).unwrap();
    let mut directory = LinkDirectory::new(storage);

    assert_eq!(directory.load().unwrap(), default_links());
    directory.add("Docs", "https://docs.venxhosts.me").unwrap();
    assert_eq!(directory.load().unwrap().len(), 2);

    directory.reset_to_default().unwrap();
    assert_eq!(directory.load().unwrap(), default_links());
}

#[wasm_bindgen_test]
fn web_links_round_trip_admin_state() {
    let mut links = WebLinks::new().unwrap();
    links.logout().unwrap();
    assert!(!links.is_admin());

    assert!(links.login("admin", "wrong").is_err());
    assert!(!links.is_admin());

    links
        .login(&WebLinks::demo_username(), &WebLinks::demo_password())
        .unwrap();
    assert!(links.is_admin());
    links.logout().unwrap();

    links.reset_to_default().unwrap();
    assert_eq!(
        links.links_json().unwrap(),
        r#"[{"title":"Panel","url":"https://panel.venxhosts.me"}]"#
    );
    assert!(!links.delete_link(9).unwrap());
}

#[wasm_bindgen_test]
fn thrown_errors_report_their_message() {
    let thrown = JsValue::from(js_sys::Error::new("IndexSizeError: radius is negative"));
    assert_eq!(
        BackdropError::from(thrown).to_string(),
        "canvas call failed: IndexSizeError: radius is negative"
    );

    let plain = JsValue::from_str("quota exceeded");
    assert_eq!(
        BackdropError::from(plain).to_string(),
        "canvas call failed: quota exceeded"
    );
}
