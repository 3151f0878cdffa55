//! Browser wiring for the particle background.
//!
//! Finds the canvas, sizes it to the viewport, and hands one owned
//! `Backdrop` to two callbacks: a `resize` listener on `window` and a
//! self-rescheduling `requestAnimationFrame` loop. Both run on the UI thread,
//! so the shared `RefCell` is never borrowed twice at once.

use crate::config::FieldConfig;
use crate::error::BackdropError;
use crate::field::ParticleField;
use crate::renderer::render_frame;
use crate::surface::{CanvasSurface, RenderSurface};
use log::{debug, info, warn};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Everything one running background owns.
struct Backdrop {
    field: ParticleField,
    surface: CanvasSurface,
}

impl Backdrop {
    /// Re-read the viewport, resize the canvas and adjust the particle count.
    fn on_resize(&mut self, window: &Window) {
        let (width, height) = viewport(window);
        self.surface.set_size(width, height);
        self.field.resize(self.surface.width(), self.surface.height());
    }

    fn on_frame(&mut self) {
        if let Err(e) = render_frame(&mut self.field, &mut self.surface) {
            warn!("particle frame failed: {}", e);
        }
    }
}

/// Start the background on the canvas with id `canvas_id`.
///
/// An absent surface is not an error: the reason is logged at debug level and
/// nothing starts. Any other failure is returned.
pub fn start(canvas_id: &str, config: FieldConfig) -> Result<(), BackdropError> {
    match try_start(canvas_id, config) {
        Err(e) if e.is_missing_surface() => {
            debug!("particle backdrop not started: {}", e);
            Ok(())
        }
        result => result,
    }
}

fn try_start(canvas_id: &str, config: FieldConfig) -> Result<(), BackdropError> {
    let window = web_sys::window().ok_or(BackdropError::NoWindow)?;
    let document = window.document().ok_or(BackdropError::NoDocument)?;
    let surface = CanvasSurface::find(&document, canvas_id)?;

    let (width, height) = viewport(&window);
    surface.set_size(width, height);
    let field = ParticleField::from_config(config, surface.width(), surface.height());
    info!(
        "particle backdrop started on #{} with {} particles",
        canvas_id,
        field.len()
    );

    let backdrop = Rc::new(RefCell::new(Backdrop { field, surface }));
    listen_for_resize(&window, backdrop.clone())?;
    run_animation_loop(&window, backdrop)?;
    Ok(())
}

fn listen_for_resize(
    window: &Window,
    backdrop: Rc<RefCell<Backdrop>>,
) -> Result<(), BackdropError> {
    let on_resize = Closure::wrap(Box::new(move || {
        if let Some(window) = web_sys::window() {
            backdrop.borrow_mut().on_resize(&window);
        }
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    // The listener lives as long as the page
    on_resize.forget();
    Ok(())
}

fn run_animation_loop(
    window: &Window,
    backdrop: Rc<RefCell<Backdrop>>,
) -> Result<(), BackdropError> {
    let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let animate_inner = animate.clone();

    *animate.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        backdrop.borrow_mut().on_frame();
        if let Some(ref callback) = *animate_inner.borrow() {
            let scheduled = web_sys::window()
                .ok_or(BackdropError::NoWindow)
                .and_then(|window| {
                    window
                        .request_animation_frame(callback.as_ref().unchecked_ref())
                        .map_err(BackdropError::from)
                });
            if let Err(e) = scheduled {
                warn!("could not schedule next frame: {}", e);
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(ref callback) = *animate.borrow() {
        window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    }
    Ok(())
}

/// `innerWidth` x `innerHeight`, or zero when the host does not report them.
fn viewport(window: &Window) -> (f64, f64) {
    let width = window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
    (width, height)
}
