//! DrawingML value types and their fixed-order XML encoders: transforms,
//! geometry, fills, outlines, and text formatting.
//!
//! Each type here is a plain value; its `to_element` encoder decides the
//! child ordering the markup schema mandates, so callers can never produce
//! an invalid arrangement by construction.

pub mod fill;
pub mod geometry;
pub mod line;
pub mod text;
pub mod xfrm;

pub use fill::{Fill, GradientFill, GradientShading, GradientStop, PathShade};
pub use geometry::{CustomPath, Geometry, PathCommand, PresetGeometry};
pub use line::{DashStyle, Line, LineCap, LineFill};
pub use text::{Anchor, AutoNumScheme, Bullet, Paragraph, TextAlign, TextBody, TextRun};
pub use xfrm::{GroupTransform, Transform};
