// Per-frame rendering: clears the surface, switches to additive compositing
// so overlapping glows brighten, steps and draws every particle in one pass,
// then restores normal compositing.

use crate::error::BackdropError;
use crate::field::ParticleField;
use crate::surface::{Composite, RenderSurface};
use rand::Rng;

pub fn render_frame<R, S>(
    field: &mut ParticleField<R>,
    surface: &mut S,
) -> Result<(), BackdropError>
where
    R: Rng,
    S: RenderSurface,
{
    surface.clear()?;
    surface.set_composite(Composite::Lighter)?;
    let drawn = field.advance(|glow| surface.fill_glow(glow));
    // Restored even when a glow failed
    surface.set_composite(Composite::Normal)?;
    drawn
}
