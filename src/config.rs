//! Every tunable of the particle background.
//!
//! The defaults reproduce the landing page's look. A host can override any
//! subset by passing JSON to `start_backdrop_with_config`; fields it leaves out
//! keep their default value.

use crate::color::Hue;
use crate::error::BackdropError;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A closed range that particle attributes are drawn from.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub const fn new(min: f64, max: f64) -> Span {
        Span { min, max }
    }

    /// Uniform draw from the span. A degenerate span yields its minimum, which
    /// keeps a zero-sized surface from panicking the generator.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        if self.max > self.min {
            rng.gen_range(self.min, self.max)
        } else {
            self.min
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldConfig {
    /// Surface pixels per particle; the count is `round(w * h / area_per_particle)`.
    pub area_per_particle: f64,
    /// How far past an edge a particle may drift before it is recycled.
    pub edge_margin: f64,
    pub velocity_x: Span,
    pub velocity_y: Span,
    pub size: Span,
    pub alpha: Span,
    /// Lifetime in frames.
    pub life: Span,
    /// The two hues a particle picks between with equal odds.
    pub hues: [Hue; 2],
    /// Gradient outer radius as a multiple of particle size.
    pub glow_radius_factor: f64,
    /// Filled circle radius as a multiple of particle size.
    pub fill_radius_factor: f64,
    /// Fixed seed for the random source. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            area_per_particle: 45_000.0,
            edge_margin: 40.0,
            velocity_x: Span::new(-0.2, 0.6),
            velocity_y: Span::new(-0.15, 0.35),
            size: Span::new(0.6, 2.5),
            alpha: Span::new(0.05, 0.22),
            life: Span::new(80.0, 260.0),
            hues: [Hue::VIOLET, Hue::CYAN],
            glow_radius_factor: 10.0,
            fill_radius_factor: 6.0,
            seed: None,
        }
    }
}

impl FieldConfig {
    pub fn from_json(json: &str) -> Result<FieldConfig, BackdropError> {
        let config = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Number of particles a `width` x `height` surface should hold.
    pub fn particle_count(&self, width: f64, height: f64) -> usize {
        if self.area_per_particle <= 0.0 {
            return 0;
        }
        let count = (width * height / self.area_per_particle).round();
        if count.is_finite() && count > 0.0 {
            count as usize
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn count_scales_with_area() {
        let config = FieldConfig::default();
        assert_eq!(config.particle_count(800.0, 450.0), 8);
        assert_eq!(config.particle_count(1600.0, 900.0), 32);
        assert_eq!(config.particle_count(1920.0, 1080.0), 46);
        assert_eq!(config.particle_count(0.0, 900.0), 0);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = FieldConfig::from_json(r#"{ "edge_margin": 10.0, "seed": 9 }"#).unwrap();
        assert_eq!(config.edge_margin, 10.0);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.size, Span::new(0.6, 2.5));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = FieldConfig::from_json(r#"{ "gravity": 9.81 }"#);
        assert!(matches!(result, Err(BackdropError::Config(_))));
    }

    #[test]
    fn degenerate_span_returns_min() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(Span::new(0.0, 0.0).sample(&mut rng), 0.0);
        assert_eq!(Span::new(5.0, 2.0).sample(&mut rng), 5.0);
    }
}
