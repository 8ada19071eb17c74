//! RGB and HSV value types and the conversions between them.
//!
//! All conversions are pure functions over their arguments; nothing here
//! holds state. RGB components are 8-bit and conversions round to the
//! nearest integer so that round-trips stay within one unit per channel.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// Upper bound of the hue domain, in degrees.
const HUE_MAX: f64 = 360.0;

/// Round to two decimal places.
///
/// HSV components reported to the UI are stabilized to two decimals so
/// that indicator positions do not jitter between drag events.
pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// An 8-bit additive color sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red component (0-255)
    pub red: u8,
    /// Green component (0-255)
    pub green: u8,
    /// Blue component (0-255)
    pub blue: u8,
}

/// A color as angle plus two intensities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    /// Hue in degrees, [0, 360)
    pub hue: f64,
    /// Saturation, [0, 1]
    pub saturation: f64,
    /// Value/brightness, [0, 1]
    pub value: f64,
}

impl Rgb {
    /// Create a color from its three components.
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Convert to HSV.
    ///
    /// Hue lands in [0, 360), saturation and value in [0, 1]; all three
    /// are rounded to two decimal places.
    pub fn to_hsv(&self) -> Hsv {
        let r = self.red as f64 / 255.0;
        let g = self.green as f64 / 255.0;
        let b = self.blue as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let value = max;
        let saturation = if max == 0.0 { 0.0 } else { delta / max };

        // Achromatic colors have no meaningful hue; report 0.
        let hue = if delta == 0.0 {
            0.0
        } else {
            let h = if max == r {
                (g - b) / delta + if g < b { 6.0 } else { 0.0 }
            } else if max == g {
                (b - r) / delta + 2.0
            } else {
                (r - g) / delta + 4.0
            };
            (h / 6.0 * HUE_MAX) % HUE_MAX
        };

        Hsv {
            hue: round2(hue),
            saturation: round2(saturation),
            value: round2(value),
        }
    }

    /// Format as a lowercase `#rrggbb` hex literal.
    pub fn to_hex_string(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Format as an `rgb(r,g,b)` literal, suitable as a paint/fill value.
    pub fn to_rgb_string(&self) -> String {
        format!("rgb({},{},{})", self.red, self.green, self.blue)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl Hsv {
    /// Create a color from hue (degrees), saturation and value.
    pub fn new(hue: f64, saturation: f64, value: f64) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Convert to RGB via chroma/hue-sector decomposition.
    ///
    /// The hue circle is divided into six 60-degree sectors; each sector
    /// selects which of (chroma, x, 0) maps to which channel. The final
    /// channels are lifted by `value - chroma` and scaled to 0-255 with
    /// round-to-nearest.
    ///
    /// # Errors
    /// Returns [`ColorError::HueOutOfRange`] if hue falls outside
    /// [0, 360]; the sector lookup is exhaustive only over that domain.
    pub fn to_rgb(&self) -> Result<Rgb, ColorError> {
        // NaN also fails this check.
        if !(0.0..=HUE_MAX).contains(&self.hue) {
            return Err(ColorError::HueOutOfRange { hue: self.hue });
        }

        let chroma = self.value * self.saturation;
        let h1 = self.hue / 60.0;
        let x = chroma * (1.0 - ((h1 % 2.0) - 1.0).abs());

        let (r1, g1, b1) = if h1 <= 1.0 {
            (chroma, x, 0.0)
        } else if h1 <= 2.0 {
            (x, chroma, 0.0)
        } else if h1 <= 3.0 {
            (0.0, chroma, x)
        } else if h1 <= 4.0 {
            (0.0, x, chroma)
        } else if h1 <= 5.0 {
            (x, 0.0, chroma)
        } else {
            (chroma, 0.0, x)
        };

        let m = self.value - chroma;
        Ok(Rgb {
            red: ((r1 + m) * 255.0).round() as u8,
            green: ((g1 + m) * 255.0).round() as u8,
            blue: ((b1 + m) * 255.0).round() as u8,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsv_to_rgb_primaries() {
        let red = Hsv::new(0.0, 1.0, 1.0).to_rgb().unwrap();
        assert_eq!(red, Rgb::new(255, 0, 0));

        let green = Hsv::new(120.0, 1.0, 1.0).to_rgb().unwrap();
        assert_eq!(green, Rgb::new(0, 255, 0));

        let blue = Hsv::new(240.0, 1.0, 1.0).to_rgb().unwrap();
        assert_eq!(blue, Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_hsv_to_rgb_white_and_black() {
        let white = Hsv::new(180.0, 0.0, 1.0).to_rgb().unwrap();
        assert_eq!(white, Rgb::new(255, 255, 255));

        let black = Hsv::new(0.0, 0.0, 0.0).to_rgb().unwrap();
        assert_eq!(black, Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_hsv_to_rgb_hue_360_wraps_to_red() {
        let rgb = Hsv::new(360.0, 1.0, 1.0).to_rgb().unwrap();
        assert_eq!(rgb, Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_hsv_to_rgb_rejects_out_of_domain_hue() {
        assert_eq!(
            Hsv::new(400.0, 1.0, 1.0).to_rgb(),
            Err(ColorError::HueOutOfRange { hue: 400.0 })
        );
        assert_eq!(
            Hsv::new(-1.0, 1.0, 1.0).to_rgb(),
            Err(ColorError::HueOutOfRange { hue: -1.0 })
        );
    }

    #[test]
    fn test_rgb_to_hsv_pure_red() {
        let hsv = Rgb::new(255, 0, 0).to_hsv();
        assert_eq!(hsv.hue, 0.0);
        assert_eq!(hsv.saturation, 1.0);
        assert_eq!(hsv.value, 1.0);
    }

    #[test]
    fn test_rgb_to_hsv_achromatic_has_zero_hue() {
        let white = Rgb::new(255, 255, 255).to_hsv();
        assert_eq!(white.hue, 0.0);
        assert_eq!(white.saturation, 0.0);
        assert_eq!(white.value, 1.0);

        let gray = Rgb::new(128, 128, 128).to_hsv();
        assert_eq!(gray.hue, 0.0);
        assert_eq!(gray.saturation, 0.0);
    }

    #[test]
    fn test_rgb_to_hsv_domain() {
        // Sweep a channel grid and verify the documented ranges.
        for r in (0..=255).step_by(51) {
            for g in (0..=255).step_by(51) {
                for b in (0..=255).step_by(51) {
                    let hsv = Rgb::new(r as u8, g as u8, b as u8).to_hsv();
                    assert!(hsv.hue >= 0.0 && hsv.hue < 360.0, "hue {}", hsv.hue);
                    assert!((0.0..=1.0).contains(&hsv.saturation));
                    assert!((0.0..=1.0).contains(&hsv.value));
                }
            }
        }
    }

    #[test]
    fn test_rgb_hsv_round_trip_within_one_unit() {
        for r in (0..=255).step_by(51) {
            for g in (0..=255).step_by(51) {
                for b in (0..=255).step_by(51) {
                    let rgb = Rgb::new(r as u8, g as u8, b as u8);
                    let back = rgb.to_hsv().to_rgb().unwrap();
                    assert!(
                        (back.red as i32 - rgb.red as i32).abs() <= 1
                            && (back.green as i32 - rgb.green as i32).abs() <= 1
                            && (back.blue as i32 - rgb.blue as i32).abs() <= 1,
                        "{:?} round-tripped to {:?}",
                        rgb,
                        back
                    );
                }
            }
        }
    }

    #[test]
    fn test_hex_formatting() {
        assert_eq!(Rgb::new(255, 0, 0).to_hex_string(), "#ff0000");
        assert_eq!(Rgb::new(51, 255, 102).to_hex_string(), "#33ff66");
        assert_eq!(Rgb::new(255, 0, 0).to_string(), "#ff0000");
    }

    #[test]
    fn test_rgb_string_formatting() {
        assert_eq!(Rgb::new(51, 255, 102).to_rgb_string(), "rgb(51,255,102)");
    }
}
