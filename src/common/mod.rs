//! Shared building blocks: error types, measurement units, colors, and the
//! XML element tree with its serializer.

pub mod color;
pub mod error;
pub mod unit;
pub mod xml;

pub use color::RgbColor;
pub use error::{Error, Result};
