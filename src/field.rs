//! The particle collection and its lifecycle.
//!
//! A field is created once, sized to the initial viewport, and lives for the
//! page's lifetime. Its particle count tracks the surface area; resizing only
//! appends or pops particles, it never touches the survivors.

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::surface::Glow;
use log::debug;
use std::convert::Infallible;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vecmath::Vector2;

pub struct ParticleField<R: Rng = StdRng> {
    particles: Vec<Particle>,
    extent: Vector2<f64>,
    config: FieldConfig,
    rng: R,
}

impl ParticleField<StdRng> {
    /// Build a field whose random source is seeded from `config.seed`, or from
    /// entropy when no seed is given.
    pub fn from_config(config: FieldConfig, width: f64, height: f64) -> ParticleField<StdRng> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        ParticleField::new(config, rng, width, height)
    }
}

impl<R: Rng> ParticleField<R> {
    pub fn new(config: FieldConfig, rng: R, width: f64, height: f64) -> ParticleField<R> {
        let mut field = ParticleField {
            particles: Vec::new(),
            extent: [width, height],
            config,
            rng,
        };
        field.fill_to(field.target_count());
        field
    }

    /// The count the current surface area calls for.
    pub fn target_count(&self) -> usize {
        self.config.particle_count(self.extent[0], self.extent[1])
    }

    /// Adopt new surface dimensions and grow or shrink the collection to
    /// match. Surviving particles keep every field as is.
    pub fn resize(&mut self, width: f64, height: f64) {
        let before = self.particles.len();
        self.extent = [width, height];
        let desired = self.target_count();
        if desired > before {
            self.fill_to(desired);
        } else {
            self.particles.truncate(desired);
        }
        debug!(
            "particle field resized to {}x{}: {} -> {} particles",
            width, height, before, desired
        );
    }

    /// Step every particle once without drawing.
    pub fn step(&mut self) {
        let stepped: Result<(), Infallible> = self.advance(|_| Ok(()));
        match stepped {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    /// Step each particle and hand its glow to `draw` straight away, in
    /// collection order. Stops at the first draw error.
    pub fn advance<E, F>(&mut self, mut draw: F) -> Result<(), E>
    where
        F: FnMut(&Glow<'_>) -> Result<(), E>,
    {
        let ParticleField {
            particles,
            extent,
            config,
            rng,
        } = self;
        for particle in particles.iter_mut() {
            particle.step(rng, config, *extent);
            draw(&particle.glow(config))?;
        }
        Ok(())
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn width(&self) -> f64 {
        self.extent[0]
    }

    pub fn height(&self) -> f64 {
        self.extent[1]
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    fn fill_to(&mut self, count: usize) {
        self.particles.reserve(count.saturating_sub(self.particles.len()));
        while self.particles.len() < count {
            let particle = Particle::spawn(&mut self.rng, &self.config, self.extent);
            self.particles.push(particle);
        }
    }
}
