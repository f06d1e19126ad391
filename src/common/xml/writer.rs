//! Canonical XML rendering of a finished element tree.
//!
//! A single depth-first pass produces deterministic bytes: attributes and
//! children render in insertion order, empty elements self-close, and the
//! five XML entities are escaped in attribute values and text. Namespace
//! declarations are plain attributes placed on each part's root element by
//! its builder; children reference prefixes without re-declaring them.

use super::element::XmlElement;
use super::escape::escape_xml;

/// XML declaration prepended to every part.
pub const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Render a root element into a complete XML document string.
pub fn render_document(root: &XmlElement) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str(XML_DECL);
    render_element(root, &mut out);
    out
}

/// Render a subtree without the XML declaration.
pub fn render_fragment(el: &XmlElement) -> String {
    let mut out = String::with_capacity(1024);
    render_element(el, &mut out);
    out
}

fn render_element(el: &XmlElement, out: &mut String) {
    out.push('<');
    out.push_str(el.tag());
    for (name, value) in el.attrs() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_xml(value));
        out.push('"');
    }

    if el.is_empty() {
        out.push_str("/>");
        return;
    }

    out.push('>');
    if el.children().is_empty() {
        if let Some(text) = el.text_content() {
            out.push_str(&escape_xml(text));
        }
    } else {
        for child in el.children() {
            render_element(child, out);
        }
    }
    out.push_str("</");
    out.push_str(el.tag());
    out.push('>');
}
