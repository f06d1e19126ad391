//! Slides: a background plus a z-ordered shape tree.

use std::collections::BTreeSet;

use crate::common::error::{Error, Result};
use crate::common::xml::XmlElement;
use crate::drawing::Fill;

use super::shape::ShapeNode;

const NS_PRESENTATION: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
const NS_DRAWING: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const NS_RELATIONSHIPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_CHART: &str = "http://schemas.openxmlformats.org/drawingml/2006/chart";

/// A single slide under construction.
///
/// Shapes are appended in paint order (later entries render on top) and are
/// consumed on append; id collisions anywhere in the appended subtree are
/// rejected immediately.
///
/// # Examples
///
/// ```rust
/// use pitaya::drawing::Transform;
/// use pitaya::prs::{Shape, Slide};
///
/// let mut slide = Slide::new();
/// slide.add(Shape::new(2, "Rect", Transform::new(0, 0, 100, 100)))?;
/// assert_eq!(slide.shape_count(), 1);
/// # Ok::<(), pitaya::common::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Slide {
    background: Option<Fill>,
    shapes: Vec<ShapeNode>,
    ids: BTreeSet<u32>,
}

impl Slide {
    /// Create an empty slide.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the slide background fill.
    pub fn set_background(&mut self, fill: Fill) {
        self.background = Some(fill);
    }

    /// Builder form of [`set_background`](Self::set_background).
    pub fn background(mut self, fill: Fill) -> Self {
        self.background = Some(fill);
        self
    }

    /// Append a shape-tree node, consuming it.
    ///
    /// A rejected append leaves the slide untouched, so a caller can fix the
    /// offending subtree and retry.
    pub fn add(&mut self, node: impl Into<ShapeNode>) -> Result<&mut Self> {
        let node = node.into();
        let mut subtree = BTreeSet::new();
        node.collect_ids(&mut subtree)?;
        if let Some(&dup) = subtree.intersection(&self.ids).next() {
            return Err(Error::DuplicateId(dup));
        }
        self.ids.extend(subtree);
        self.shapes.push(node);
        Ok(self)
    }

    /// Number of top-level shapes.
    #[inline]
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Top-level shapes in z-order.
    #[inline]
    pub fn shapes(&self) -> &[ShapeNode] {
        &self.shapes
    }

    /// Ids used anywhere on this slide.
    pub(crate) fn ids(&self) -> &BTreeSet<u32> {
        &self.ids
    }

    /// Visit every picture on the slide in z-order.
    pub(crate) fn for_each_picture<'a>(&'a self, f: &mut impl FnMut(&'a super::shape::Picture)) {
        for shape in &self.shapes {
            shape.for_each_picture(f);
        }
    }

    /// Build the `p:sld` part root. Namespaces are declared here and nowhere
    /// else; the chart namespace appears only when a chart is placed.
    pub(crate) fn to_element(&self) -> XmlElement {
        let mut root = XmlElement::new("p:sld")
            .attr("xmlns:p", NS_PRESENTATION)
            .attr("xmlns:a", NS_DRAWING)
            .attr("xmlns:r", NS_RELATIONSHIPS);
        if self.shapes.iter().any(ShapeNode::has_chart) {
            root = root.attr("xmlns:c", NS_CHART);
        }

        let mut c_sld = XmlElement::new("p:cSld");

        if let Some(ref fill) = self.background {
            c_sld.push_child(
                XmlElement::new("p:bg").child(
                    XmlElement::new("p:bgPr")
                        .child(fill.to_element())
                        .child(XmlElement::new("a:effectLst")),
                ),
            );
        }

        let nv_grp = XmlElement::new("p:nvGrpSpPr")
            .child(
                XmlElement::new("p:cNvPr")
                    .attr("id", "1")
                    .attr("name", ""),
            )
            .child(XmlElement::new("p:cNvGrpSpPr"))
            .child(XmlElement::new("p:nvPr"));

        let grp_pr = XmlElement::new("p:grpSpPr").child(
            XmlElement::new("a:xfrm")
                .child(XmlElement::new("a:off").attr("x", "0").attr("y", "0"))
                .child(XmlElement::new("a:ext").attr("cx", "0").attr("cy", "0"))
                .child(XmlElement::new("a:chOff").attr("x", "0").attr("y", "0"))
                .child(XmlElement::new("a:chExt").attr("cx", "0").attr("cy", "0")),
        );

        let mut sp_tree = XmlElement::new("p:spTree").child(nv_grp).child(grp_pr);
        for shape in &self.shapes {
            sp_tree.push_child(shape.to_element());
        }
        c_sld.push_child(sp_tree);

        root.child(c_sld).child(
            XmlElement::new("p:clrMapOvr").child(XmlElement::new("a:masterClrMapping")),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::Error;
    use crate::common::xml::render_fragment;
    use crate::drawing::Transform;
    use crate::prs::shape::{ChartFrame, Shape};

    fn xfrm() -> Transform {
        Transform::new(0, 0, 914_400, 914_400)
    }

    #[test]
    fn test_duplicate_id_across_appends_rejected() {
        let mut slide = Slide::new();
        slide.add(Shape::new(2, "A", xfrm())).unwrap();
        let err = slide.add(Shape::new(2, "B", xfrm())).unwrap_err();
        assert!(matches!(err, Error::DuplicateId(2)));
        // The failed append must not have been applied
        assert_eq!(slide.shape_count(), 1);
    }

    #[test]
    fn test_background_precedes_shape_tree() {
        let mut slide = Slide::new().background(Fill::solid(crate::common::RgbColor::WHITE));
        slide.add(Shape::new(2, "A", xfrm())).unwrap();
        let xml = render_fragment(&slide.to_element());
        assert!(xml.find("<p:bg>").unwrap() < xml.find("<p:spTree>").unwrap());
    }

    #[test]
    fn test_shapes_keep_insertion_order() {
        let mut slide = Slide::new();
        slide.add(Shape::new(2, "First", xfrm())).unwrap();
        slide.add(Shape::new(3, "Second", xfrm())).unwrap();
        let xml = render_fragment(&slide.to_element());
        assert!(xml.find("First").unwrap() < xml.find("Second").unwrap());
    }

    #[test]
    fn test_chart_namespace_declared_only_when_needed() {
        let mut plain = Slide::new();
        plain.add(Shape::new(2, "A", xfrm())).unwrap();
        assert!(!render_fragment(&plain.to_element()).contains("xmlns:c="));

        let mut charted = Slide::new();
        charted.add(ChartFrame::new(2, "Chart 1", xfrm(), "rId3")).unwrap();
        let xml = render_fragment(&charted.to_element());
        assert!(xml.contains(r#"xmlns:c="http://schemas.openxmlformats.org/drawingml/2006/chart""#));
        // Declared on the root only, not on the chart element
        assert!(xml.contains(r#"<c:chart r:id="rId3"/>"#));
    }
}
