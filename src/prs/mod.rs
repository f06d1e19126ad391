//! Presentation assembly: slides, shapes, tables, and the document itself.

pub mod part;
pub mod presentation;
pub mod shape;
pub mod slide;
pub mod table;

pub use part::{PartWriter, content_type};
pub use presentation::Presentation;
pub use shape::{ChartFrame, Connector, Group, ImageRef, Picture, Shape, ShapeNode};
pub use slide::Slide;
pub use table::{Table, TableCell, TableFrame, TableRow};
