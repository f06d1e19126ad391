//! Shape assembly: identity + geometry + style composed into slide subtrees.
//!
//! Every assembler produces a frozen value that is consumed when appended to
//! its parent; nothing hands out a handle into an already-attached subtree.

use std::collections::BTreeSet;

use bytes::Bytes;

use crate::common::error::{Error, Result};
use crate::common::xml::XmlElement;
use crate::drawing::{Fill, Geometry, GroupTransform, Line, TextBody, Transform};

use super::table::TableFrame;

pub(crate) const CHART_GRAPHIC_URI: &str =
    "http://schemas.openxmlformats.org/drawingml/2006/chart";
pub(crate) const TABLE_GRAPHIC_URI: &str =
    "http://schemas.openxmlformats.org/drawingml/2006/table";

/// Non-visual identity carried by every shape-tree node: a document-unique
/// id and a display name.
pub(crate) fn non_visual_props(id: u32, name: &str) -> XmlElement {
    XmlElement::new("p:cNvPr")
        .attr_u32("id", id)
        .attr("name", name)
}

/// A geometric shape, optionally carrying text.
///
/// # Examples
///
/// ```rust
/// use pitaya::common::RgbColor;
/// use pitaya::drawing::{Fill, Geometry, Line, Transform};
/// use pitaya::prs::Shape;
///
/// let rect = Shape::new(2, "Rectangle 1", Transform::new(0, 0, 914_400, 914_400))
///     .fill(Fill::solid(RgbColor::new(0x44, 0x72, 0xC4)))
///     .line(Line::solid(RgbColor::BLACK, 12_700));
/// ```
#[derive(Debug, Clone)]
pub struct Shape {
    id: u32,
    name: String,
    transform: Transform,
    geometry: Geometry,
    fill: Option<Fill>,
    line: Option<Line>,
    text: Option<TextBody>,
}

impl Shape {
    /// Create a rectangle-geometry shape; use [`geometry`](Self::geometry)
    /// for any other outline.
    pub fn new(id: u32, name: impl Into<String>, transform: Transform) -> Self {
        Self {
            id,
            name: name.into(),
            transform,
            geometry: Geometry::preset("rect"),
            fill: None,
            line: None,
            text: None,
        }
    }

    pub fn geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Set the fill; unset means "inherit the document default".
    pub fn fill(mut self, fill: Fill) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn line(mut self, line: Line) -> Self {
        self.line = Some(line);
        self
    }

    pub fn text(mut self, text: TextBody) -> Self {
        self.text = Some(text);
        self
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    // Sections in schema order: non-visual, shape properties, text body.
    fn to_element(&self) -> XmlElement {
        let nv = XmlElement::new("p:nvSpPr")
            .child(non_visual_props(self.id, &self.name))
            .child(XmlElement::new("p:cNvSpPr"))
            .child(XmlElement::new("p:nvPr"));

        let mut sp_pr = XmlElement::new("p:spPr")
            .child(self.transform.to_element())
            .child(self.geometry.to_element());
        if let Some(ref fill) = self.fill {
            sp_pr.push_child(fill.to_element());
        }
        if let Some(ref line) = self.line {
            sp_pr.push_child(line.to_element());
        }

        let mut sp = XmlElement::new("p:sp").child(nv).child(sp_pr);
        if let Some(ref text) = self.text {
            sp.push_child(text.to_element("p:txBody"));
        }
        sp
    }
}

/// A connector: an outline-only shape joining two points.
#[derive(Debug, Clone)]
pub struct Connector {
    id: u32,
    name: String,
    preset: String,
    transform: Transform,
    line: Option<Line>,
}

impl Connector {
    /// Straight connector; use [`preset`](Self::preset) for bent or curved
    /// variants (`bentConnector3`, `curvedConnector2`, ...).
    pub fn new(id: u32, name: impl Into<String>, transform: Transform) -> Self {
        Self {
            id,
            name: name.into(),
            preset: "line".to_string(),
            transform,
            line: None,
        }
    }

    pub fn preset(mut self, preset: impl Into<String>) -> Self {
        self.preset = preset.into();
        self
    }

    pub fn line(mut self, line: Line) -> Self {
        self.line = Some(line);
        self
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    fn to_element(&self) -> XmlElement {
        let nv = XmlElement::new("p:nvCxnSpPr")
            .child(non_visual_props(self.id, &self.name))
            .child(XmlElement::new("p:cNvCxnSpPr"))
            .child(XmlElement::new("p:nvPr"));

        let mut sp_pr = XmlElement::new("p:spPr")
            .child(self.transform.to_element())
            .child(
                XmlElement::new("a:prstGeom")
                    .attr("prst", self.preset.as_str())
                    .child(XmlElement::new("a:avLst")),
            );
        if let Some(ref line) = self.line {
            sp_pr.push_child(line.to_element());
        }

        XmlElement::new("p:cxnSp").child(nv).child(sp_pr)
    }
}

/// An embedded raster image supplied by the image collaborator: opaque
/// bytes, a content type, intrinsic pixel size, and the relationship id the
/// markup will reference.
#[derive(Debug, Clone)]
pub struct ImageRef {
    rel_id: String,
    data: Bytes,
    content_type: String,
    pixel_size: (u32, u32),
}

impl ImageRef {
    pub fn new(
        rel_id: impl Into<String>,
        data: Bytes,
        content_type: impl Into<String>,
        pixel_size: (u32, u32),
    ) -> Self {
        Self {
            rel_id: rel_id.into(),
            data,
            content_type: content_type.into(),
            pixel_size,
        }
    }

    #[inline]
    pub fn rel_id(&self) -> &str {
        &self.rel_id
    }

    #[inline]
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    #[inline]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    #[inline]
    pub fn pixel_size(&self) -> (u32, u32) {
        self.pixel_size
    }

    /// File extension for the media part name, derived from the content type.
    pub(crate) fn extension(&self) -> &'static str {
        match self.content_type.as_str() {
            "image/png" => "png",
            "image/jpeg" => "jpeg",
            "image/gif" => "gif",
            "image/bmp" => "bmp",
            "image/tiff" => "tiff",
            _ => "bin",
        }
    }
}

/// A placed picture: placement transform plus an [`ImageRef`].
#[derive(Debug, Clone)]
pub struct Picture {
    id: u32,
    name: String,
    transform: Transform,
    image: ImageRef,
    description: Option<String>,
}

impl Picture {
    pub fn new(id: u32, name: impl Into<String>, transform: Transform, image: ImageRef) -> Self {
        Self {
            id,
            name: name.into(),
            transform,
            image,
            description: None,
        }
    }

    /// Alternative-text description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[inline]
    pub fn image(&self) -> &ImageRef {
        &self.image
    }

    fn to_element(&self) -> XmlElement {
        let mut c_nv_pr = non_visual_props(self.id, &self.name);
        if let Some(ref descr) = self.description {
            c_nv_pr.set_attr("descr", descr.as_str());
        }
        let nv = XmlElement::new("p:nvPicPr")
            .child(c_nv_pr)
            .child(XmlElement::new("p:cNvPicPr"))
            .child(XmlElement::new("p:nvPr"));

        let blip_fill = XmlElement::new("p:blipFill")
            .child(XmlElement::new("a:blip").attr("r:embed", self.image.rel_id()))
            .child(XmlElement::new("a:stretch").child(XmlElement::new("a:fillRect")));

        let sp_pr = XmlElement::new("p:spPr")
            .child(self.transform.to_element())
            .child(
                XmlElement::new("a:prstGeom")
                    .attr("prst", "rect")
                    .child(XmlElement::new("a:avLst")),
            );

        XmlElement::new("p:pic")
            .child(nv)
            .child(blip_fill)
            .child(sp_pr)
    }
}

/// A placed pre-built chart part, referenced by relationship id and treated
/// as opaque.
#[derive(Debug, Clone)]
pub struct ChartFrame {
    id: u32,
    name: String,
    transform: Transform,
    rel_id: String,
}

impl ChartFrame {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        transform: Transform,
        rel_id: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            transform,
            rel_id: rel_id.into(),
        }
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    fn to_element(&self) -> XmlElement {
        let nv = XmlElement::new("p:nvGraphicFramePr")
            .child(non_visual_props(self.id, &self.name))
            .child(XmlElement::new("p:cNvGraphicFramePr"))
            .child(XmlElement::new("p:nvPr"));

        XmlElement::new("p:graphicFrame")
            .child(nv)
            .child(self.transform.emit_as("p:xfrm"))
            .child(
                XmlElement::new("a:graphic").child(
                    XmlElement::new("a:graphicData")
                        .attr("uri", CHART_GRAPHIC_URI)
                        .child(XmlElement::new("c:chart").attr("r:id", self.rel_id.as_str())),
                ),
            )
    }
}

/// A group of shapes sharing a local coordinate system.
///
/// Children are authored directly in the child coordinate space declared by
/// the [`GroupTransform`]; the builder never remaps their coordinates.
#[derive(Debug, Clone)]
pub struct Group {
    id: u32,
    name: String,
    transform: GroupTransform,
    children: Vec<ShapeNode>,
    ids: BTreeSet<u32>,
}

impl Group {
    pub fn new(id: u32, name: impl Into<String>, transform: GroupTransform) -> Self {
        let mut ids = BTreeSet::new();
        ids.insert(id);
        Self {
            id,
            name: name.into(),
            transform,
            children: Vec::new(),
            ids,
        }
    }

    /// Append a child, consuming it. Ids anywhere in the child subtree must
    /// not collide with ids already in this group.
    pub fn add(mut self, child: impl Into<ShapeNode>) -> Result<Self> {
        let child = child.into();
        child.collect_ids(&mut self.ids)?;
        self.children.push(child);
        Ok(self)
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[inline]
    pub fn children(&self) -> &[ShapeNode] {
        &self.children
    }

    fn to_element(&self) -> XmlElement {
        let nv = XmlElement::new("p:nvGrpSpPr")
            .child(non_visual_props(self.id, &self.name))
            .child(XmlElement::new("p:cNvGrpSpPr"))
            .child(XmlElement::new("p:nvPr"));

        let mut grp = XmlElement::new("p:grpSp")
            .child(nv)
            .child(XmlElement::new("p:grpSpPr").child(self.transform.to_element()));
        for child in &self.children {
            grp.push_child(child.to_element());
        }
        grp
    }
}

/// One node of a slide's shape tree.
#[derive(Debug, Clone)]
pub enum ShapeNode {
    /// A geometric shape, optionally with text (boxed to reduce enum size)
    Shape(Box<Shape>),
    /// A group of shapes with a shared local coordinate system
    Group(Box<Group>),
    /// An outline-only connector
    Connector(Box<Connector>),
    /// A table inside a graphic frame
    Table(Box<TableFrame>),
    /// A placed raster image
    Picture(Box<Picture>),
    /// A placed pre-built chart part
    Chart(Box<ChartFrame>),
}

impl ShapeNode {
    /// The node's own shape id.
    pub fn id(&self) -> u32 {
        match self {
            ShapeNode::Shape(s) => s.id(),
            ShapeNode::Group(g) => g.id(),
            ShapeNode::Connector(c) => c.id(),
            ShapeNode::Table(t) => t.id(),
            ShapeNode::Picture(p) => p.id(),
            ShapeNode::Chart(c) => c.id(),
        }
    }

    /// Insert every id in this subtree into `ids`, failing on the first
    /// collision.
    pub(crate) fn collect_ids(&self, ids: &mut BTreeSet<u32>) -> Result<()> {
        if let ShapeNode::Group(group) = self {
            // A group already tracks its subtree ids, own id included.
            for id in &group.ids {
                if !ids.insert(*id) {
                    return Err(Error::DuplicateId(*id));
                }
            }
            return Ok(());
        }
        if !ids.insert(self.id()) {
            return Err(Error::DuplicateId(self.id()));
        }
        Ok(())
    }

    /// Whether the subtree places a chart (the slide root must then declare
    /// the chart namespace).
    pub(crate) fn has_chart(&self) -> bool {
        match self {
            ShapeNode::Chart(_) => true,
            ShapeNode::Group(group) => group.children.iter().any(ShapeNode::has_chart),
            _ => false,
        }
    }

    /// Visit every picture in the subtree in z-order.
    pub(crate) fn for_each_picture<'a>(&'a self, f: &mut impl FnMut(&'a Picture)) {
        match self {
            ShapeNode::Picture(picture) => f(picture),
            ShapeNode::Group(group) => {
                for child in &group.children {
                    child.for_each_picture(f);
                }
            },
            _ => {},
        }
    }

    pub(crate) fn to_element(&self) -> XmlElement {
        match self {
            ShapeNode::Shape(s) => s.to_element(),
            ShapeNode::Group(g) => g.to_element(),
            ShapeNode::Connector(c) => c.to_element(),
            ShapeNode::Table(t) => t.to_element(),
            ShapeNode::Picture(p) => p.to_element(),
            ShapeNode::Chart(c) => c.to_element(),
        }
    }
}

impl From<Shape> for ShapeNode {
    fn from(shape: Shape) -> Self {
        ShapeNode::Shape(Box::new(shape))
    }
}

impl From<Group> for ShapeNode {
    fn from(group: Group) -> Self {
        ShapeNode::Group(Box::new(group))
    }
}

impl From<Connector> for ShapeNode {
    fn from(connector: Connector) -> Self {
        ShapeNode::Connector(Box::new(connector))
    }
}

impl From<TableFrame> for ShapeNode {
    fn from(table: TableFrame) -> Self {
        ShapeNode::Table(Box::new(table))
    }
}

impl From<Picture> for ShapeNode {
    fn from(picture: Picture) -> Self {
        ShapeNode::Picture(Box::new(picture))
    }
}

impl From<ChartFrame> for ShapeNode {
    fn from(chart: ChartFrame) -> Self {
        ShapeNode::Chart(Box::new(chart))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RgbColor;
    use crate::common::xml::render_fragment;

    fn xfrm() -> Transform {
        Transform::new(0, 0, 914_400, 914_400)
    }

    #[test]
    fn test_shape_section_order() {
        let shape = Shape::new(2, "Rect", xfrm())
            .fill(Fill::solid(RgbColor::WHITE))
            .line(Line::solid(RgbColor::BLACK, 12_700))
            .text(TextBody::plain("hi"));
        let xml = render_fragment(&ShapeNode::from(shape).to_element());

        let nv = xml.find("<p:nvSpPr>").unwrap();
        let sp_pr = xml.find("<p:spPr>").unwrap();
        let body = xml.find("<p:txBody>").unwrap();
        assert!(nv < sp_pr && sp_pr < body);

        // Inside spPr: transform, geometry, fill, line
        let x = xml.find("<a:xfrm>").unwrap();
        let geom = xml.find("<a:prstGeom").unwrap();
        let fill = xml.find("<a:solidFill>").unwrap();
        let line = xml.find("<a:ln ").unwrap();
        assert!(x < geom && geom < fill && fill < line);
    }

    #[test]
    fn test_connector_markup() {
        let conn = Connector::new(7, "Connector 1", xfrm())
            .preset("bentConnector3")
            .line(Line::solid(RgbColor::BLACK, 12_700));
        let xml = render_fragment(&ShapeNode::from(conn).to_element());
        assert!(xml.starts_with("<p:cxnSp><p:nvCxnSpPr>"));
        assert!(xml.contains(r#"<a:prstGeom prst="bentConnector3">"#));
        assert!(!xml.contains("txBody"));
    }

    #[test]
    fn test_picture_markup() {
        let image = ImageRef::new("rId4", Bytes::from_static(b"\x89PNG"), "image/png", (64, 64));
        let pic = Picture::new(5, "Picture 1", xfrm(), image).description("logo");
        let xml = render_fragment(&ShapeNode::from(pic).to_element());
        let blip = xml.find(r#"<a:blip r:embed="rId4"/>"#).unwrap();
        let sp_pr = xml.find("<p:spPr>").unwrap();
        assert!(blip < sp_pr);
        assert!(xml.contains(r#"descr="logo""#));
    }

    #[test]
    fn test_chart_frame_markup() {
        let chart = ChartFrame::new(9, "Chart 1", xfrm(), "rId3");
        let xml = render_fragment(&ShapeNode::from(chart).to_element());
        assert!(xml.contains(r#"<a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/chart">"#));
        assert!(xml.contains(r#"<c:chart r:id="rId3"/>"#));
        // Graphic frames carry their transform under the presentation prefix
        assert!(xml.contains("<p:xfrm>"));
    }

    #[test]
    fn test_group_emits_child_frame_then_children() {
        let outer = Transform::new(457_200, 731_520, 3_657_600, 3_200_400);
        let group = Group::new(10, "Group 1", GroupTransform::new(outer).unwrap())
            .add(Shape::new(11, "A", xfrm()))
            .unwrap()
            .add(Shape::new(12, "B", xfrm()))
            .unwrap();
        let xml = render_fragment(&ShapeNode::from(group).to_element());
        let grp_pr = xml.find("<p:grpSpPr>").unwrap();
        let ch_ext = xml.find("<a:chExt").unwrap();
        let first_child = xml.find("<p:sp>").unwrap();
        assert!(grp_pr < ch_ext && ch_ext < first_child);
    }

    #[test]
    fn test_group_rejects_duplicate_child_id() {
        let outer = Transform::new(0, 0, 100, 100);
        let err = Group::new(10, "Group 1", GroupTransform::new(outer).unwrap())
            .add(Shape::new(11, "A", xfrm()))
            .unwrap()
            .add(Shape::new(11, "B", xfrm()))
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateId(11)));
    }

    #[test]
    fn test_group_rejects_child_matching_own_id() {
        let outer = Transform::new(0, 0, 100, 100);
        let err = Group::new(10, "Group 1", GroupTransform::new(outer).unwrap())
            .add(Shape::new(10, "A", xfrm()))
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateId(10)));
    }
}
