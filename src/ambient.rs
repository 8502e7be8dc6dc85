//! Ambient background color.
//!
//! A slow hue drift driven by wall-clock time, with saturation rising as the
//! page scrolls. The renderer is expected to ease between successive values
//! (the reference page uses a 2 s ease-in-out transition).

use glam::Vec3;
use std::fmt;

/// Hue in degrees `[0, 360)`, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Hsl {
    pub fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Convert to linear RGB components in `[0, 1]`.
    pub fn to_rgb(&self) -> Vec3 {
        let h = self.hue.rem_euclid(360.0) / 60.0;
        let s = (self.saturation / 100.0).clamp(0.0, 1.0);
        let l = (self.lightness / 100.0).clamp(0.0, 1.0);

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = l - chroma / 2.0;
        Vec3::new(r + m, g + m, b + m)
    }
}

/// CSS notation, e.g. `hsl(12.5, 10%, 3.2%)`.
impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

/// Scroll distance in pixels at which saturation stops rising.
pub const SCROLL_SATURATION_RANGE: f64 = 1000.0;

/// Background color for the given wall-clock time and scroll offset.
///
/// Wall-clock milliseconds are epoch-sized, so the math runs in `f64` and
/// only the result is narrowed.
pub fn ambient_color(wall_clock_millis: f64, scroll_offset_px: f64) -> Hsl {
    let t = wall_clock_millis * 1e-4;
    let hue = (t * 10.0).rem_euclid(360.0);
    let scroll_factor = (scroll_offset_px / SCROLL_SATURATION_RANGE).min(1.0);
    let saturation = 10.0 + scroll_factor * 5.0;
    let lightness = 3.0 + t.sin();

    Hsl::new(hue as f32, saturation as f32, lightness as f32)
}
