//! The presentation document: slide list, slide size, and the save path.

use std::collections::BTreeSet;

use crate::common::error::{Error, Result};
use crate::common::xml::{XmlElement, render_document};

use super::part::{PartWriter, content_type};
use super::slide::Slide;

const NS_PRESENTATION: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
const NS_RELATIONSHIPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Default 16:9 slide size (13.33" x 7.5").
const DEFAULT_WIDTH: i64 = 12_192_000;
const DEFAULT_HEIGHT: i64 = 6_858_000;

/// A presentation document under construction.
///
/// Slides are built independently and appended in order; appending freezes
/// the slide and folds its shape ids into the document-wide registry, so a
/// duplicate id anywhere in the document is caught at append time. Saving
/// walks the finished tree exactly once and hands each part to the
/// [`PartWriter`]; a failed write leaves the document reusable.
///
/// # Examples
///
/// ```rust
/// use pitaya::common::RgbColor;
/// use pitaya::drawing::{Fill, Line, Transform};
/// use pitaya::prs::{Presentation, Shape, Slide};
///
/// let mut prs = Presentation::new();
/// let mut slide = Slide::new();
/// slide.add(
///     Shape::new(2, "Rectangle 1", Transform::new(0, 0, 914_400, 914_400))
///         .fill(Fill::solid(RgbColor::WHITE))
///         .line(Line::solid(RgbColor::BLACK, 12_700)),
/// )?;
/// prs.add_slide(slide)?;
/// assert_eq!(prs.slide_count(), 1);
/// # Ok::<(), pitaya::common::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Presentation {
    slides: Vec<Slide>,
    width: i64,
    height: i64,
    used_ids: BTreeSet<u32>,
}

impl Presentation {
    /// Create an empty presentation with the default 16:9 slide size.
    pub fn new() -> Self {
        Self::with_size(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    /// Create an empty presentation with the classic 4:3 slide size
    /// (10" x 7.5").
    pub fn new_4_3() -> Self {
        Self::with_size(9_144_000, 6_858_000)
    }

    /// Create an empty presentation with an explicit EMU slide size.
    pub fn with_size(width: i64, height: i64) -> Self {
        Self {
            slides: Vec::new(),
            width,
            height,
            used_ids: BTreeSet::new(),
        }
    }

    /// Slide width in EMU.
    #[inline]
    pub fn width(&self) -> i64 {
        self.width
    }

    /// Slide height in EMU.
    #[inline]
    pub fn height(&self) -> i64 {
        self.height
    }

    #[inline]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Slides in presentation order.
    #[inline]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Append a slide, consuming it.
    ///
    /// Shape ids must be unique across the whole document; the first
    /// collision with any previously appended slide is rejected and the
    /// document is left unchanged.
    pub fn add_slide(&mut self, slide: Slide) -> Result<&mut Self> {
        if let Some(&dup) = slide.ids().intersection(&self.used_ids).next() {
            return Err(Error::DuplicateId(dup));
        }
        self.used_ids.extend(slide.ids());
        self.slides.push(slide);
        Ok(self)
    }

    /// Build the `presentation.xml` part root.
    ///
    /// Slide relationship ids follow the writer's fixed scheme: `rId1` is
    /// the master, slides take `rId2..`.
    fn presentation_element(&self) -> XmlElement {
        let mut root = XmlElement::new("p:presentation")
            .attr("xmlns:p", NS_PRESENTATION)
            .attr("xmlns:r", NS_RELATIONSHIPS);

        root.push_child(
            XmlElement::new("p:sldMasterIdLst").child(
                XmlElement::new("p:sldMasterId")
                    .attr("id", "2147483648")
                    .attr("r:id", "rId1"),
            ),
        );

        if !self.slides.is_empty() {
            let mut id_lst = XmlElement::new("p:sldIdLst");
            for index in 0..self.slides.len() {
                id_lst.push_child(
                    XmlElement::new("p:sldId")
                        .attr_u32("id", 256 + index as u32)
                        .attr("r:id", format!("rId{}", index + 2)),
                );
            }
            root.push_child(id_lst);
        }

        root.child(
            XmlElement::new("p:sldSz")
                .attr_i64("cx", self.width)
                .attr_i64("cy", self.height),
        )
        .child(
            XmlElement::new("p:notesSz")
                .attr("cx", "6858000")
                .attr("cy", "9144000"),
        )
    }

    /// Serialize every part and hand it to the packaging collaborator.
    ///
    /// Emits `ppt/presentation.xml`, one `ppt/slides/slideN.xml` per slide,
    /// and one `ppt/media/imageN.*` part per placed picture blob. The first
    /// failed write aborts the save; the in-memory document stays valid for
    /// a retry.
    pub fn save_to(&self, writer: &mut dyn PartWriter) -> Result<()> {
        let presentation = render_document(&self.presentation_element());
        writer.write_part(
            "ppt/presentation.xml",
            presentation.as_bytes(),
            content_type::PRESENTATION,
        )?;

        let mut image_counter = 0usize;
        for (index, slide) in self.slides.iter().enumerate() {
            let part_name = format!("ppt/slides/slide{}.xml", index + 1);
            let xml = render_document(&slide.to_element());
            writer.write_part(&part_name, xml.as_bytes(), content_type::SLIDE)?;

            let mut media_error = None;
            slide.for_each_picture(&mut |picture| {
                if media_error.is_some() {
                    return;
                }
                image_counter += 1;
                let image = picture.image();
                let media_name =
                    format!("ppt/media/image{}.{}", image_counter, image.extension());
                if let Err(e) =
                    writer.write_part(&media_name, image.data(), image.content_type())
                {
                    media_error = Some(e);
                }
            });
            if let Some(e) = media_error {
                return Err(Error::Io(e));
            }
        }

        Ok(())
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RgbColor;
    use crate::common::unit::pt_to_emu;
    use crate::drawing::{Fill, Line, Transform};
    use crate::prs::shape::Shape;

    /// Test double for the packaging collaborator: collects parts in memory.
    #[derive(Default)]
    struct MemoryWriter {
        parts: Vec<(String, Vec<u8>, String)>,
        fail_on: Option<String>,
    }

    impl PartWriter for MemoryWriter {
        fn write_part(
            &mut self,
            part_name: &str,
            content: &[u8],
            content_type: &str,
        ) -> std::io::Result<()> {
            if self.fail_on.as_deref() == Some(part_name) {
                return Err(std::io::Error::other("disk full"));
            }
            self.parts.push((
                part_name.to_string(),
                content.to_vec(),
                content_type.to_string(),
            ));
            Ok(())
        }
    }

    impl MemoryWriter {
        fn part(&self, name: &str) -> &str {
            let (_, content, _) = self
                .parts
                .iter()
                .find(|(n, _, _)| n == name)
                .unwrap_or_else(|| panic!("part {} not written", name));
            std::str::from_utf8(content).unwrap()
        }
    }

    #[test]
    fn test_default_sizes() {
        let prs = Presentation::new();
        assert_eq!((prs.width(), prs.height()), (12_192_000, 6_858_000));
        let classic = Presentation::new_4_3();
        assert_eq!((classic.width(), classic.height()), (9_144_000, 6_858_000));
    }

    #[test]
    fn test_duplicate_id_across_slides_rejected() {
        let mut prs = Presentation::new();

        let mut first = Slide::new();
        first.add(Shape::new(2, "A", Transform::new(0, 0, 1, 1))).unwrap();
        prs.add_slide(first).unwrap();

        let mut second = Slide::new();
        second.add(Shape::new(2, "B", Transform::new(0, 0, 1, 1))).unwrap();
        let err = prs.add_slide(second).unwrap_err();
        assert!(matches!(err, Error::DuplicateId(2)));
        assert_eq!(prs.slide_count(), 1);
    }

    #[test]
    fn test_presentation_part_lists_slides() {
        let mut prs = Presentation::new();
        prs.add_slide(Slide::new()).unwrap();
        prs.add_slide(Slide::new()).unwrap();

        let mut writer = MemoryWriter::default();
        prs.save_to(&mut writer).unwrap();

        let xml = writer.part("ppt/presentation.xml");
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(xml.contains(r#"<p:sldId id="257" r:id="rId3"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="12192000" cy="6858000"/>"#));
        assert!(writer.parts.iter().any(|(n, _, _)| n == "ppt/slides/slide2.xml"));
    }

    // Build a document with one slide containing a solid-filled rectangle
    // with a black 1pt outline and check the emitted part end to end.
    #[test]
    fn test_end_to_end_solid_rect_with_outline() {
        let mut prs = Presentation::new();
        let mut slide = Slide::new();
        slide
            .add(
                Shape::new(2, "Rectangle 1", Transform::new(0, 0, 100, 100))
                    .fill(Fill::solid(RgbColor::WHITE))
                    .line(Line::solid(RgbColor::BLACK, pt_to_emu(1.0) as u32)),
            )
            .unwrap();
        prs.add_slide(slide).unwrap();

        let mut writer = MemoryWriter::default();
        prs.save_to(&mut writer).unwrap();

        let xml = writer.part("ppt/slides/slide1.xml");
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#));

        // Fill element precedes the line element, and the line width is the
        // EMU equivalent of one point.
        let fill = xml.find("<a:solidFill>").unwrap();
        let line = xml.find("<a:ln ").unwrap();
        assert!(fill < line);
        assert!(xml.contains(r#"<a:ln w="12700">"#));
        assert!(xml.contains(r#"<a:off x="0" y="0"/><a:ext cx="100" cy="100"/>"#));
    }

    #[test]
    fn test_failed_write_leaves_document_reusable() {
        let mut prs = Presentation::new();
        prs.add_slide(Slide::new()).unwrap();

        let mut failing = MemoryWriter {
            fail_on: Some("ppt/slides/slide1.xml".to_string()),
            ..Default::default()
        };
        assert!(matches!(prs.save_to(&mut failing), Err(Error::Io(_))));

        // Same document, fresh writer: the retry succeeds.
        let mut writer = MemoryWriter::default();
        prs.save_to(&mut writer).unwrap();
        assert_eq!(writer.parts.len(), 2);
    }

    #[test]
    fn test_media_parts_written_for_pictures() {
        use crate::prs::shape::{ImageRef, Picture};
        use bytes::Bytes;

        let mut prs = Presentation::new();
        let mut slide = Slide::new();
        let image = ImageRef::new(
            "rId2",
            Bytes::from_static(b"\x89PNG\r\n"),
            "image/png",
            (32, 32),
        );
        slide
            .add(Picture::new(2, "Picture 1", Transform::new(0, 0, 100, 100), image))
            .unwrap();
        prs.add_slide(slide).unwrap();

        let mut writer = MemoryWriter::default();
        prs.save_to(&mut writer).unwrap();

        let (_, content, ctype) = writer
            .parts
            .iter()
            .find(|(n, _, _)| n == "ppt/media/image1.png")
            .unwrap();
        assert_eq!(ctype, "image/png");
        assert_eq!(content.as_slice(), b"\x89PNG\r\n");
    }
}
