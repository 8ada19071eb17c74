//! Wheel policies and the picker-facing facade.
//!
//! A policy maps a touch point on the wheel surface to a color and a
//! color back to an indicator point. Two policies exist and are not
//! numerically interchangeable: the default dead-zone wheel keeps a
//! desaturated white core around the center, while the linear wheel
//! drives saturation straight from the normalized radius. A product
//! picks one per [`ColorWheel`] instance; their angle conventions and
//! constants are deliberately kept separate.

use crate::color::{round2, Hsv, Rgb};
use crate::error::ColorError;
use crate::geometry::Point;
use crate::parse::parse_color;

/// Fraction of the radius covered by the dead-zone wheel's white core.
const DEAD_ZONE_FRACTION: f64 = 0.33;

/// Strategy for mapping between wheel points and colors.
///
/// Both operations are relative to a wheel of the given `radius`
/// centered at `(radius, radius)`. Implementations must form an exact
/// forward/inverse pair: for any color with saturation above zero,
/// `point_to_color(color_to_point(c))` recovers the color's hue and
/// saturation up to quantization.
pub trait WheelPolicy {
    /// Color under the given (already clamped) touch point.
    ///
    /// # Errors
    /// Returns [`ColorError::HueOutOfRange`] only if the computed hue
    /// escapes [0, 360]; both shipped policies keep it in range.
    fn point_to_color(&self, point: Point, radius: f64) -> Result<Rgb, ColorError>;

    /// Indicator point for the given color.
    ///
    /// Fully desaturated colors have no defined angle and map to the
    /// exact center.
    fn color_to_point(&self, rgb: Rgb, radius: f64) -> Point;
}

/// Hue/saturation wheel with a desaturated white core.
///
/// Points within `DEAD_ZONE_FRACTION` of the radius read as pure white;
/// outside the core, saturation ramps at 1.5x the normalized distance
/// past the core edge, clamped to 1. Value is fixed at 1.0: this wheel
/// models the 2D hue/saturation disc, not a 3D color space.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeadZoneWheel;

/// Wheel with no dead zone; saturation is the normalized radius.
///
/// Value stays fixed at 1.0 on this wheel too, matching the image it is
/// drawn against.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearWheel;

impl WheelPolicy for DeadZoneWheel {
    fn point_to_color(&self, point: Point, radius: f64) -> Result<Rgb, ColorError> {
        let (dx, dy) = point.offset_from_center(radius);
        let distance = point.distance_from_center(radius);

        // atan2(dx, dy) measures from the bottom axis; shifting by 180
        // puts hue 0 at the top of the wheel.
        let hue = (dx.atan2(dy).to_degrees() - 180.0).abs();

        let inner_radius = radius * DEAD_ZONE_FRACTION;
        let saturation = if distance <= inner_radius {
            0.0
        } else {
            round2(1.5 * (distance - inner_radius) / radius).clamp(0.0, 1.0)
        };

        Hsv::new(hue, saturation, 1.0).to_rgb()
    }

    fn color_to_point(&self, rgb: Rgb, radius: f64) -> Point {
        let hsv = rgb.to_hsv();
        if hsv.saturation == 0.0 {
            return Point::wheel_center(radius);
        }

        let inner_radius = radius * DEAD_ZONE_FRACTION;
        let distance = inner_radius + hsv.saturation * (radius - inner_radius);

        // Inverse of the forward convention: hue 0 points at the top.
        let angle = (hsv.hue - 90.0).to_radians();
        let point = Point::new(
            radius + distance * angle.cos(),
            radius + distance * angle.sin(),
        );

        // Guard against floating-point overshoot at saturation 1.
        point.clamp_to_circle(radius)
    }
}

impl WheelPolicy for LinearWheel {
    fn point_to_color(&self, point: Point, radius: f64) -> Result<Rgb, ColorError> {
        let (dx, dy) = point.offset_from_center(radius);
        let distance = point.distance_from_center(radius);

        // Counter-clockwise angle with hue 0 on the right, wrapped into
        // the sector-decomposition domain.
        let hue = (-dy.atan2(dx).to_degrees()).rem_euclid(360.0);
        let saturation = (distance / radius).min(1.0);

        Hsv::new(hue, saturation, 1.0).to_rgb()
    }

    fn color_to_point(&self, rgb: Rgb, radius: f64) -> Point {
        let hsv = rgb.to_hsv();
        if hsv.saturation == 0.0 {
            return Point::wheel_center(radius);
        }

        let distance = hsv.saturation * radius;
        let angle = hsv.hue.to_radians();
        let point = Point::new(
            radius + distance * angle.cos(),
            radius - distance * angle.sin(),
        );

        point.clamp_to_circle(radius)
    }
}

/// A configured color wheel: radius plus the chosen mapping policy.
///
/// This is the whole external surface of the core. The gesture layer
/// feeds drag points into [`point_to_color`](ColorWheel::point_to_color)
/// and places the indicator with
/// [`color_to_point`](ColorWheel::color_to_point). The wheel itself is
/// immutable; per-drag state lives entirely in the caller.
#[derive(Debug, Clone, Copy)]
pub struct ColorWheel<P = DeadZoneWheel> {
    radius: f64,
    policy: P,
}

impl ColorWheel<DeadZoneWheel> {
    /// Create a wheel with the default dead-zone policy.
    pub fn new(radius: f64) -> Self {
        Self::with_policy(radius, DeadZoneWheel)
    }
}

impl<P: WheelPolicy> ColorWheel<P> {
    /// Create a wheel with an explicit policy.
    pub fn with_policy(radius: f64, policy: P) -> Self {
        Self { radius, policy }
    }

    /// The configured wheel radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Color string under a touch point, as an `rgb(r,g,b)` literal.
    ///
    /// The point is clamped to the wheel first, so drag events that
    /// overshoot the bounding circle read as boundary colors.
    ///
    /// # Errors
    /// Propagates [`ColorError::HueOutOfRange`] from the policy.
    pub fn point_to_color(&self, point: Point) -> Result<String, ColorError> {
        let clamped = point.clamp_to_circle(self.radius);
        let rgb = self.policy.point_to_color(clamped, self.radius)?;
        Ok(rgb.to_rgb_string())
    }

    /// Indicator point for a hex or rgb()/rgba() color string.
    ///
    /// # Errors
    /// Returns [`ColorError::InvalidFormat`] if the string parses as
    /// neither grammar.
    pub fn color_to_point(&self, color: &str) -> Result<Point, ColorError> {
        let rgb = parse_color(color)?;
        Ok(self.policy.color_to_point(rgb, self.radius))
    }

    /// Indicator point for a color string, falling back to the center.
    ///
    /// A malformed color must not take down the hosting control, so the
    /// failure is logged and the indicator parks at the wheel center
    /// (the white point on both shipped policies).
    pub fn indicator_or_center(&self, color: &str) -> Point {
        match self.color_to_point(color) {
            Ok(point) => point,
            Err(err) => {
                log::warn!("unusable color {color:?}, centering indicator: {err}");
                Point::wheel_center(self.radius)
            }
        }
    }
}
