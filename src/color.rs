// Particle hues and their CSS encodings. A hue is created from an unsigned 32
// holding 0x00RRGGBB; the alpha is carried separately as a float because the
// canvas takes it inside an `rgba()` string.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fully transparent stop every glow fades out to.
pub const TRANSPARENT: &str = "rgba(0,0,0,0)";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hue {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Hue {
    pub const VIOLET: Hue = Hue::from_u32(0x7c5cff);
    pub const CYAN: Hue = Hue::from_u32(0x00e6d8);

    pub const fn from_u32(num: u32) -> Hue {
        let r = (num >> 16) as u8;
        let g = (num >> 8) as u8;
        let b = num as u8;

        Hue { r, g, b }
    }

    pub fn with_alpha(self, alpha: f64) -> Rgba {
        Rgba { hue: self, alpha }
    }
}

/// A hue paired with one particle's alpha.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rgba {
    pub hue: Hue,
    pub alpha: f64,
}

impl Rgba {
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({},{},{},{})",
            self.hue.r, self.hue.g, self.hue.b, self.alpha
        )
    }
}
