//! wheel-core - color math for a touch-driven circular color picker
//!
//! The gesture layer hands this crate a touch point and gets back a
//! color string; setting a color programmatically goes the other way and
//! yields the indicator position. Everything in here is pure
//! computation: no I/O, no shared state, safe to call from anywhere.
//!
//! ```
//! use wheel_core::{ColorWheel, Point};
//!
//! let wheel = ColorWheel::new(150.0);
//! let color = wheel.point_to_color(Point::new(150.0, 0.0)).unwrap();
//! assert_eq!(color, "rgb(255,0,0)");
//!
//! let indicator = wheel.color_to_point("#ffffff").unwrap();
//! assert_eq!(indicator, Point::new(150.0, 150.0));
//! ```

pub mod color;
pub mod error;
pub mod geometry;
pub mod parse;
pub mod wheel;

pub use color::{Hsv, Rgb};
pub use error::ColorError;
pub use geometry::Point;
pub use parse::parse_color;
pub use wheel::{ColorWheel, DeadZoneWheel, LinearWheel, WheelPolicy};
