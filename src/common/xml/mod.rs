//! XML building blocks: the element tree, entity escaping, and the
//! canonical serializer.

mod element;
mod escape;
mod writer;

pub use element::XmlElement;
pub use escape::escape_xml;
pub use writer::{XML_DECL, render_document, render_fragment};
