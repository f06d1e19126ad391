//! Position, size, rotation, and flip transforms (`a:xfrm`).

use crate::common::error::{Error, Result};
use crate::common::unit::normalize_angle;
use crate::common::xml::XmlElement;

/// Placement of a shape on its slide (or inside a group's child space).
///
/// Offsets and extents are EMU; the rotation is stored normalized into
/// `0..21_600_000` (1/60,000-degree units), so callers may pass any signed
/// angle and read back the canonical equivalent.
///
/// # Examples
///
/// ```rust
/// use pitaya::drawing::Transform;
/// use pitaya::common::unit::inch_to_emu;
///
/// let xfrm = Transform::new(0, 0, inch_to_emu(2.5), inch_to_emu(2.0))
///     .rotated(-5_400_000)
///     .flipped_horizontal();
/// assert_eq!(xfrm.rotation(), 16_200_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transform {
    offset: (i64, i64),
    extent: (i64, i64),
    rotation: u32,
    flip_h: bool,
    flip_v: bool,
}

impl Transform {
    /// Create an unrotated, unflipped transform from offset and extent.
    pub fn new(x: i64, y: i64, cx: i64, cy: i64) -> Self {
        Self {
            offset: (x, y),
            extent: (cx, cy),
            rotation: 0,
            flip_h: false,
            flip_v: false,
        }
    }

    /// Set the rotation; the angle is normalized into a single turn.
    pub fn rotated(mut self, angle: i64) -> Self {
        self.rotation = normalize_angle(angle);
        self
    }

    /// Mirror the shape horizontally.
    pub fn flipped_horizontal(mut self) -> Self {
        self.flip_h = true;
        self
    }

    /// Mirror the shape vertically.
    pub fn flipped_vertical(mut self) -> Self {
        self.flip_v = true;
        self
    }

    #[inline]
    pub fn offset(&self) -> (i64, i64) {
        self.offset
    }

    #[inline]
    pub fn extent(&self) -> (i64, i64) {
        self.extent
    }

    /// Normalized rotation in 1/60,000-degree units.
    #[inline]
    pub fn rotation(&self) -> u32 {
        self.rotation
    }

    #[inline]
    pub fn flip_h(&self) -> bool {
        self.flip_h
    }

    #[inline]
    pub fn flip_v(&self) -> bool {
        self.flip_v
    }

    fn start_element(&self, tag: &str) -> XmlElement {
        let mut el = XmlElement::new(tag);
        if self.rotation != 0 {
            el = el.attr_u32("rot", self.rotation);
        }
        if self.flip_h {
            el = el.attr("flipH", "1");
        }
        if self.flip_v {
            el = el.attr("flipV", "1");
        }
        el
    }

    /// Emit `a:xfrm` with `a:off` then `a:ext`.
    pub(crate) fn to_element(&self) -> XmlElement {
        self.emit_as("a:xfrm")
    }

    /// Emit under a caller-chosen tag (graphic frames use `p:xfrm`).
    pub(crate) fn emit_as(&self, tag: &str) -> XmlElement {
        self.start_element(tag)
            .child(
                XmlElement::new("a:off")
                    .attr_i64("x", self.offset.0)
                    .attr_i64("y", self.offset.1),
            )
            .child(
                XmlElement::new("a:ext")
                    .attr_i64("cx", self.extent.0)
                    .attr_i64("cy", self.extent.1),
            )
    }
}

/// Group transform: the group's outer placement plus the local coordinate
/// system its children are authored in (`a:chOff`/`a:chExt`).
///
/// The builder only records the child frame; mapping child coordinates into
/// the outer space is the renderer's job. A zero child extent would make
/// that mapping undefined, so it is rejected here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupTransform {
    outer: Transform,
    child_offset: (i64, i64),
    child_extent: (i64, i64),
}

impl GroupTransform {
    /// Create a group transform with the 1:1 child frame: children are
    /// authored directly in the group's outer coordinates.
    pub fn new(outer: Transform) -> Result<Self> {
        Self::with_child_frame(outer, outer.offset(), outer.extent())
    }

    /// Create a group transform with an explicit child coordinate system.
    pub fn with_child_frame(
        outer: Transform,
        child_offset: (i64, i64),
        child_extent: (i64, i64),
    ) -> Result<Self> {
        if child_extent.0 == 0 || child_extent.1 == 0 {
            return Err(Error::InvalidGeometry(format!(
                "group child extent must be non-zero, got ({}, {})",
                child_extent.0, child_extent.1
            )));
        }
        Ok(Self {
            outer,
            child_offset,
            child_extent,
        })
    }

    #[inline]
    pub fn outer(&self) -> &Transform {
        &self.outer
    }

    #[inline]
    pub fn child_offset(&self) -> (i64, i64) {
        self.child_offset
    }

    #[inline]
    pub fn child_extent(&self) -> (i64, i64) {
        self.child_extent
    }

    /// Emit `a:xfrm` with `a:off`, `a:ext`, `a:chOff`, `a:chExt`.
    pub(crate) fn to_element(&self) -> XmlElement {
        self.outer
            .to_element()
            .child(
                XmlElement::new("a:chOff")
                    .attr_i64("x", self.child_offset.0)
                    .attr_i64("y", self.child_offset.1),
            )
            .child(
                XmlElement::new("a:chExt")
                    .attr_i64("cx", self.child_extent.0)
                    .attr_i64("cy", self.child_extent.1),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::xml::render_fragment;

    #[test]
    fn test_plain_transform_xml() {
        let xml = render_fragment(&Transform::new(10, 20, 30, 40).to_element());
        assert_eq!(
            xml,
            r#"<a:xfrm><a:off x="10" y="20"/><a:ext cx="30" cy="40"/></a:xfrm>"#
        );
    }

    #[test]
    fn test_rotation_and_flips_as_attributes() {
        let xfrm = Transform::new(0, 0, 100, 100)
            .rotated(2_700_000)
            .flipped_horizontal()
            .flipped_vertical();
        let xml = render_fragment(&xfrm.to_element());
        assert!(xml.starts_with(r#"<a:xfrm rot="2700000" flipH="1" flipV="1">"#));
    }

    #[test]
    fn test_negative_rotation_normalizes() {
        let xfrm = Transform::new(0, 0, 1, 1).rotated(-2_700_000);
        assert_eq!(xfrm.rotation(), 18_900_000);
    }

    #[test]
    fn test_group_transform_default_child_frame() {
        let outer = Transform::new(100, 200, 300, 400);
        let grp = GroupTransform::new(outer).unwrap();
        assert_eq!(grp.child_offset(), (100, 200));
        assert_eq!(grp.child_extent(), (300, 400));
        let xml = render_fragment(&grp.to_element());
        assert!(xml.contains(r#"<a:chOff x="100" y="200"/><a:chExt cx="300" cy="400"/>"#));
    }

    #[test]
    fn test_zero_child_extent_rejected() {
        let outer = Transform::new(0, 0, 100, 100);
        let err = GroupTransform::with_child_frame(outer, (0, 0), (0, 0)).unwrap_err();
        assert!(matches!(err, Error::InvalidGeometry(_)));
    }
}
