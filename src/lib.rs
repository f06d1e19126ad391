//! Pitaya - in-memory builder for PresentationML slide documents
//!
//! This library constructs presentation documents (slides containing shapes,
//! groups, connectors, tables, pictures, and text) as a typed tree and
//! serializes each part to canonical XML for an external packaging layer.
//!
//! # Design
//!
//! - **Typed values instead of free-form markup**: fills, lines, geometry,
//!   and text formatting are tagged types; each encoder emits its subtree in
//!   the child order the markup schema mandates, so an invalid arrangement
//!   cannot be expressed.
//! - **Build then freeze**: shapes are assembled bottom-up and consumed when
//!   appended to their parent; nothing can mutate a subtree after it has
//!   been attached. Structural problems (bad path command order, mismatched
//!   table rows, duplicate shape ids, empty gradients) are rejected at
//!   construction time, never during serialization.
//! - **Narrow boundary**: the only external contract is
//!   [`prs::PartWriter`], which receives finished XML bytes keyed by part
//!   name; archiving and manifests live behind it.
//!
//! # Example - a slide with a styled rectangle
//!
//! ```rust
//! use pitaya::common::RgbColor;
//! use pitaya::common::unit::{inch_to_emu, pt_to_emu};
//! use pitaya::drawing::{Fill, Geometry, Line, TextBody, Transform};
//! use pitaya::prs::{Presentation, Shape, Slide};
//!
//! # fn main() -> pitaya::common::Result<()> {
//! let mut prs = Presentation::new();
//!
//! let mut slide = Slide::new();
//! slide.add(
//!     Shape::new(2, "Title Box", Transform::new(0, 0, inch_to_emu(4.0), inch_to_emu(1.0)))
//!         .geometry(Geometry::preset("roundRect"))
//!         .fill(Fill::solid(RgbColor::new(0x44, 0x72, 0xC4)))
//!         .line(Line::solid(RgbColor::new(0x33, 0x33, 0x33), pt_to_emu(1.5) as u32))
//!         .text(TextBody::plain("Hello")),
//! )?;
//! prs.add_slide(slide)?;
//! # Ok(())
//! # }
//! ```
//!
//! All lengths are EMU (914,400 per inch), angles 1/60,000 of a degree, and
//! percentage-like values thousandths of a percent; `common::unit` has the
//! conversion helpers.

pub mod common;
pub mod drawing;
pub mod prs;

pub use common::{Error, Result, RgbColor};
pub use drawing::{
    Bullet, CustomPath, DashStyle, Fill, Geometry, GradientFill, GradientStop, Line, Paragraph,
    TextAlign, TextBody, TextRun, Transform,
};
pub use prs::{PartWriter, Presentation, Shape, Slide};
