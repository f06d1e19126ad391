//! Generic namespace-qualified XML element tree.
//!
//! This is the substrate every encoder emits into: a tag such as `a:off`,
//! an ordered attribute list, and either ordered children or a single text
//! payload. No legality checks happen here; the encoders only ever produce
//! well-formed subtrees, and schema child ordering is their responsibility.

/// An XML element with ordered attributes and ordered children.
///
/// Attribute writes are idempotent per name (last write wins) while the
/// insertion order of distinct names is preserved, so a finished tree always
/// renders to the same bytes.
///
/// # Examples
///
/// ```rust
/// use pitaya::common::xml::XmlElement;
///
/// let off = XmlElement::new("a:off").attr_i64("x", 914_400).attr_i64("y", 0);
/// assert_eq!(off.get_attr("x"), Some("914400"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<XmlElement>,
    text: Option<String>,
}

impl XmlElement {
    /// Create an element with a namespace-qualified tag (e.g. `p:sp`).
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Get the namespace-qualified tag.
    #[inline]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Set an attribute; a repeated name overwrites in place.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        if let Some(existing) = self.attrs.iter_mut().find(|(n, _)| n == name) {
            existing.1 = value;
        } else {
            self.attrs.push((name.to_string(), value));
        }
    }

    /// Builder form of [`set_attr`](Self::set_attr).
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set an integer attribute as a decimal string.
    pub fn attr_i64(mut self, name: &str, value: i64) -> Self {
        let mut buf = itoa::Buffer::new();
        self.set_attr(name, buf.format(value));
        self
    }

    /// Set an unsigned integer attribute as a decimal string.
    pub fn attr_u32(mut self, name: &str, value: u32) -> Self {
        let mut buf = itoa::Buffer::new();
        self.set_attr(name, buf.format(value));
        self
    }

    /// Get an attribute value by name.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Attributes in insertion order.
    #[inline]
    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    /// Append a child element.
    pub fn push_child(&mut self, child: XmlElement) {
        self.children.push(child);
    }

    /// Builder form of [`push_child`](Self::push_child).
    pub fn child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    /// Children in document order.
    #[inline]
    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    /// Set the text payload. Mutually exclusive with children: an element
    /// that has children ignores its text at render time.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// The text payload, if any.
    #[inline]
    pub fn text_content(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Whether the element has neither children nor text.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.text.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_last_write_wins_keeps_order() {
        let el = XmlElement::new("a:gs")
            .attr("pos", "0")
            .attr("extra", "1")
            .attr("pos", "50000");
        assert_eq!(el.get_attr("pos"), Some("50000"));
        // First-insertion order preserved
        assert_eq!(el.attrs()[0].0, "pos");
        assert_eq!(el.attrs()[1].0, "extra");
    }

    #[test]
    fn test_children_in_order() {
        let el = XmlElement::new("a:xfrm")
            .child(XmlElement::new("a:off"))
            .child(XmlElement::new("a:ext"));
        let tags: Vec<_> = el.children().iter().map(|c| c.tag()).collect();
        assert_eq!(tags, ["a:off", "a:ext"]);
    }

    #[test]
    fn test_attr_i64_formats_decimal() {
        let el = XmlElement::new("a:off").attr_i64("x", -12_700);
        assert_eq!(el.get_attr("x"), Some("-12700"));
    }
}
