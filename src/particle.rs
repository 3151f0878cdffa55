// A single ambient point light: position, velocity, glow styling and a finite
// lifespan counted in frames. Particles never interact; a field owns them and
// recycles them in place.

use crate::color::Rgba;
use crate::config::FieldConfig;
use crate::surface::Glow;
use rand::Rng;
use vecmath::{vec2_add, Vector2};

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub size: f64,
    pub color: Rgba,
    /// `color` rendered to CSS once per lifetime.
    pub fill: String,
    /// Maximum age in frames.
    pub life: f64,
    pub age: u32,
}

impl Particle {
    /// A fresh particle somewhere inside `extent`.
    pub fn spawn<R: Rng>(rng: &mut R, config: &FieldConfig, extent: Vector2<f64>) -> Particle {
        let color = Self::pick_color(rng, config);
        Particle {
            pos: Self::pick_position(rng, extent),
            vel: [config.velocity_x.sample(rng), config.velocity_y.sample(rng)],
            size: config.size.sample(rng),
            fill: color.to_css(),
            color,
            life: config.life.sample(rng),
            age: 0,
        }
    }

    /// Re-randomize every field in place. Spawning and recycling are the same
    /// operation.
    pub fn reset<R: Rng>(&mut self, rng: &mut R, config: &FieldConfig, extent: Vector2<f64>) {
        *self = Particle::spawn(rng, config, extent);
    }

    /// Advance one frame. Motion is one velocity unit per frame regardless of
    /// wall-clock time. Returns true when the particle was recycled.
    pub fn step<R: Rng>(
        &mut self,
        rng: &mut R,
        config: &FieldConfig,
        extent: Vector2<f64>,
    ) -> bool {
        self.pos = vec2_add(self.pos, self.vel);
        self.age = self.age.saturating_add(1);

        if self.is_outside(extent, config.edge_margin) || self.is_expired() {
            self.reset(rng, config, extent);
            return true;
        }
        false
    }

    pub fn is_outside(&self, extent: Vector2<f64>, margin: f64) -> bool {
        let [x, y] = self.pos;
        let [width, height] = extent;
        x > width + margin || x < -margin || y > height + margin || y < -margin
    }

    pub fn is_expired(&self) -> bool {
        f64::from(self.age) > self.life
    }

    pub fn alpha(&self) -> f64 {
        self.color.alpha
    }

    pub fn glow(&self, config: &FieldConfig) -> Glow<'_> {
        Glow {
            center: self.pos,
            gradient_radius: self.size * config.glow_radius_factor,
            fill_radius: self.size * config.fill_radius_factor,
            color: &self.fill,
        }
    }

    fn pick_position<R: Rng>(rng: &mut R, extent: Vector2<f64>) -> Vector2<f64> {
        let [width, height] = extent;
        let x = if width > 0.0 { rng.gen_range(0.0, width) } else { 0.0 };
        let y = if height > 0.0 { rng.gen_range(0.0, height) } else { 0.0 };
        [x, y]
    }

    fn pick_color<R: Rng>(rng: &mut R, config: &FieldConfig) -> Rgba {
        let alpha = config.alpha.sample(rng);
        let hue = if rng.gen_bool(0.5) {
            config.hues[0]
        } else {
            config.hues[1]
        };
        hue.with_alpha(alpha)
    }
}
