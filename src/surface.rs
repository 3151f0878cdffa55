//! The drawable target particles are painted onto.
//!
//! `RenderSurface` is the seam between the simulation and the browser: the
//! renderer only needs a clear, a compositing switch and a radial glow fill.
//! `CanvasSurface` implements it over a 2D canvas context.

use crate::color::TRANSPARENT;
use crate::error::BackdropError;
use std::f64::consts::PI;
use vecmath::Vector2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Composite {
    /// Ordinary painting, later draws cover earlier ones.
    Normal,
    /// Overlapping colors add up and brighten.
    Lighter,
}

impl Composite {
    pub fn as_str(self) -> &'static str {
        match self {
            Composite::Normal => "source-over",
            Composite::Lighter => "lighter",
        }
    }
}

/// One soft circle: a radial gradient from `color` at the center to fully
/// transparent at `gradient_radius`, used to fill a disc of `fill_radius`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Glow<'a> {
    pub center: Vector2<f64>,
    pub gradient_radius: f64,
    pub fill_radius: f64,
    pub color: &'a str,
}

pub trait RenderSurface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn clear(&mut self) -> Result<(), BackdropError>;
    fn set_composite(&mut self, mode: Composite) -> Result<(), BackdropError>;
    fn fill_glow(&mut self, glow: &Glow<'_>) -> Result<(), BackdropError>;
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Look up the canvas with `id` and grab its 2D context.
    pub fn find(document: &Document, id: &str) -> Result<CanvasSurface, BackdropError> {
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| BackdropError::MissingCanvas(id.to_owned()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| BackdropError::NotACanvas(id.to_owned()))?;
        CanvasSurface::new(canvas)
    }

    pub fn new(canvas: HtmlCanvasElement) -> Result<CanvasSurface, BackdropError> {
        let context = canvas
            .get_context("2d")
            .map_err(|_| BackdropError::NoContext)?
            .ok_or(BackdropError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| BackdropError::NoContext)?;
        Ok(CanvasSurface { canvas, context })
    }

    /// Match the canvas backing store to the viewport. Pixel dimensions are
    /// integers, so fractional viewport sizes are truncated.
    pub fn set_size(&self, width: f64, height: f64) {
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
    }
}

impl RenderSurface for CanvasSurface {
    fn width(&self) -> f64 {
        f64::from(self.canvas.width())
    }

    fn height(&self) -> f64 {
        f64::from(self.canvas.height())
    }

    fn clear(&mut self) -> Result<(), BackdropError> {
        self.context.clear_rect(0.0, 0.0, self.width(), self.height());
        Ok(())
    }

    fn set_composite(&mut self, mode: Composite) -> Result<(), BackdropError> {
        self.context.set_global_composite_operation(mode.as_str())?;
        Ok(())
    }

    fn fill_glow(&mut self, glow: &Glow<'_>) -> Result<(), BackdropError> {
        let [x, y] = glow.center;
        let gradient = self
            .context
            .create_radial_gradient(x, y, 0.0, x, y, glow.gradient_radius)?;
        gradient.add_color_stop(0.0, glow.color)?;
        gradient.add_color_stop(1.0, TRANSPARENT)?;

        self.context.begin_path();
        self.context.set_fill_style(&gradient);
        self.context.arc(x, y, glow.fill_radius, 0.0, PI * 2.0)?;
        self.context.fill();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_modes_map_to_canvas_names() {
        assert_eq!(Composite::Normal.as_str(), "source-over");
        assert_eq!(Composite::Lighter.as_str(), "lighter");
    }
}
