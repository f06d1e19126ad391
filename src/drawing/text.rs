//! Text runs, paragraphs, and text bodies.
//!
//! Run-level boolean properties are tri-state: an unset flag is omitted from
//! the markup entirely and inherits the document default, which is not the
//! same thing as an explicit off. Callers wanting a guaranteed off-state set
//! the flag to `false`.

use crate::common::color::RgbColor;
use crate::common::xml::XmlElement;

use super::fill::solid_fill;

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justify,
}

impl TextAlign {
    fn as_str(self) -> &'static str {
        match self {
            TextAlign::Left => "l",
            TextAlign::Center => "ctr",
            TextAlign::Right => "r",
            TextAlign::Justify => "just",
        }
    }
}

/// Vertical anchoring of text within its body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Top,
    Center,
    Bottom,
}

impl Anchor {
    fn as_str(self) -> &'static str {
        match self {
            Anchor::Top => "t",
            Anchor::Center => "ctr",
            Anchor::Bottom => "b",
        }
    }
}

/// Auto-numbering scheme for list paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoNumScheme {
    /// 1. 2. 3.
    ArabicPeriod,
    /// 1) 2) 3)
    ArabicParenR,
    /// 1 2 3
    ArabicPlain,
    /// I. II. III.
    RomanUcPeriod,
    /// i. ii. iii.
    RomanLcPeriod,
    /// A. B. C.
    AlphaUcPeriod,
    /// a. b. c.
    AlphaLcPeriod,
    /// A) B) C)
    AlphaUcParenR,
    /// a) b) c)
    AlphaLcParenR,
}

impl AutoNumScheme {
    fn as_str(self) -> &'static str {
        match self {
            AutoNumScheme::ArabicPeriod => "arabicPeriod",
            AutoNumScheme::ArabicParenR => "arabicParenR",
            AutoNumScheme::ArabicPlain => "arabicPlain",
            AutoNumScheme::RomanUcPeriod => "romanUcPeriod",
            AutoNumScheme::RomanLcPeriod => "romanLcPeriod",
            AutoNumScheme::AlphaUcPeriod => "alphaUcPeriod",
            AutoNumScheme::AlphaLcPeriod => "alphaLcPeriod",
            AutoNumScheme::AlphaUcParenR => "alphaUcParenR",
            AutoNumScheme::AlphaLcParenR => "alphaLcParenR",
        }
    }
}

/// Bullet marker for a paragraph.
///
/// Auto-numbered bullets carry only the scheme identifier; the running
/// counter is computed by the renderer, never stored in the document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Bullet {
    /// No bullet markup (plain paragraph)
    #[default]
    None,
    /// Literal glyph bullet (`a:buChar`)
    Char(String),
    /// Auto-numbered bullet (`a:buAutoNum`)
    AutoNum {
        scheme: AutoNumScheme,
        /// Renumber the list starting from this value
        start_at: Option<u32>,
    },
}

impl Bullet {
    /// Glyph bullet from any string (typically a single character).
    pub fn glyph(glyph: impl Into<String>) -> Self {
        Bullet::Char(glyph.into())
    }

    /// Auto-numbered bullet with the default start.
    pub fn auto_num(scheme: AutoNumScheme) -> Self {
        Bullet::AutoNum {
            scheme,
            start_at: None,
        }
    }
}

/// A contiguous span of identically formatted text.
///
/// # Examples
///
/// ```rust
/// use pitaya::common::RgbColor;
/// use pitaya::drawing::TextRun;
///
/// let run = TextRun::new("Quarterly revenue")
///     .font("Liberation Sans")
///     .size_pt(24.0)
///     .bold(true)
///     .color(RgbColor::new(0x33, 0x33, 0x33));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextRun {
    text: String,
    font: Option<String>,
    size_hundredths: Option<u32>,
    bold: Option<bool>,
    italic: Option<bool>,
    underline: Option<bool>,
    strikethrough: Option<bool>,
    baseline: Option<i32>,
    color: Option<RgbColor>,
}

impl TextRun {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Set the latin typeface name.
    pub fn font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    /// Set the font size in points (stored as hundredths, truncating).
    pub fn size_pt(mut self, points: f64) -> Self {
        self.size_hundredths = Some((points * 100.0) as u32);
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    pub fn underline(mut self, underline: bool) -> Self {
        self.underline = Some(underline);
        self
    }

    pub fn strikethrough(mut self, strikethrough: bool) -> Self {
        self.strikethrough = Some(strikethrough);
        self
    }

    /// Baseline shift in thousandths of a percent; positive raises the run
    /// (superscript), negative lowers it (subscript).
    pub fn baseline(mut self, baseline: i32) -> Self {
        self.baseline = Some(baseline);
        self
    }

    /// Convenience for the conventional 30% superscript shift.
    pub fn superscript(self) -> Self {
        self.baseline(30_000)
    }

    /// Convenience for the conventional 25% subscript shift.
    pub fn subscript(self) -> Self {
        self.baseline(-25_000)
    }

    pub fn color(mut self, color: RgbColor) -> Self {
        self.color = Some(color);
        self
    }

    #[inline]
    pub fn text_content(&self) -> &str {
        &self.text
    }

    // Run properties precede the text payload; within rPr the fill child
    // precedes the latin typeface.
    pub(crate) fn to_element(&self) -> XmlElement {
        let mut rpr = XmlElement::new("a:rPr").attr("lang", "en-US");
        if let Some(size) = self.size_hundredths {
            rpr = rpr.attr_u32("sz", size);
        }
        if let Some(bold) = self.bold {
            rpr = rpr.attr("b", if bold { "1" } else { "0" });
        }
        if let Some(italic) = self.italic {
            rpr = rpr.attr("i", if italic { "1" } else { "0" });
        }
        if let Some(underline) = self.underline {
            rpr = rpr.attr("u", if underline { "sng" } else { "none" });
        }
        if let Some(strike) = self.strikethrough {
            rpr = rpr.attr("strike", if strike { "sngStrike" } else { "noStrike" });
        }
        if let Some(baseline) = self.baseline {
            rpr = rpr.attr_i64("baseline", baseline as i64);
        }
        if let Some(color) = self.color {
            rpr = rpr.child(solid_fill(color));
        }
        if let Some(ref font) = self.font {
            rpr = rpr.child(XmlElement::new("a:latin").attr("typeface", font.as_str()));
        }

        XmlElement::new("a:r")
            .child(rpr)
            .child(XmlElement::new("a:t").text(self.text.as_str()))
    }
}

/// A paragraph: formatting properties plus an ordered run sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Paragraph {
    align: Option<TextAlign>,
    margin_left: Option<i64>,
    indent: Option<i64>,
    bullet: Bullet,
    runs: Vec<TextRun>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-run paragraph of plain text.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new().run(TextRun::new(text))
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = Some(align);
        self
    }

    /// Left margin in EMU.
    pub fn margin_left(mut self, emu: i64) -> Self {
        self.margin_left = Some(emu);
        self
    }

    /// First-line indent in EMU (negative for hanging indents).
    pub fn indent(mut self, emu: i64) -> Self {
        self.indent = Some(emu);
        self
    }

    pub fn bullet(mut self, bullet: Bullet) -> Self {
        self.bullet = bullet;
        self
    }

    /// Append a run.
    pub fn run(mut self, run: TextRun) -> Self {
        self.runs.push(run);
        self
    }

    #[inline]
    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    pub(crate) fn to_element(&self) -> XmlElement {
        let mut p = XmlElement::new("a:p");

        let has_bullet = !matches!(self.bullet, Bullet::None);
        if self.align.is_some() || self.margin_left.is_some() || self.indent.is_some() || has_bullet
        {
            let mut ppr = XmlElement::new("a:pPr");
            if let Some(margin) = self.margin_left {
                ppr = ppr.attr_i64("marL", margin);
            }
            if let Some(indent) = self.indent {
                ppr = ppr.attr_i64("indent", indent);
            }
            if let Some(align) = self.align {
                ppr = ppr.attr("algn", align.as_str());
            }
            match &self.bullet {
                Bullet::None => {},
                Bullet::Char(glyph) => {
                    ppr = ppr.child(XmlElement::new("a:buChar").attr("char", glyph.as_str()));
                },
                Bullet::AutoNum { scheme, start_at } => {
                    let mut bu = XmlElement::new("a:buAutoNum").attr("type", scheme.as_str());
                    if let Some(start) = start_at {
                        bu = bu.attr_u32("startAt", *start);
                    }
                    ppr = ppr.child(bu);
                },
            }
            p.push_child(ppr);
        }

        for run in &self.runs {
            p.push_child(run.to_element());
        }
        p
    }
}

/// The text body of a shape or table cell: body properties plus paragraphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBody {
    word_wrap: bool,
    anchor: Option<Anchor>,
    paragraphs: Vec<Paragraph>,
}

impl Default for TextBody {
    fn default() -> Self {
        Self {
            word_wrap: true,
            anchor: None,
            paragraphs: Vec::new(),
        }
    }
}

impl TextBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single plain paragraph body.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new().paragraph(Paragraph::plain(text))
    }

    /// Append a paragraph.
    pub fn paragraph(mut self, paragraph: Paragraph) -> Self {
        self.paragraphs.push(paragraph);
        self
    }

    pub fn word_wrap(mut self, wrap: bool) -> Self {
        self.word_wrap = wrap;
        self
    }

    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = Some(anchor);
        self
    }

    #[inline]
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Emit under a caller-chosen tag: shapes use `p:txBody`, table cells
    /// `a:txBody`. The body always contains at least one paragraph.
    pub(crate) fn to_element(&self, tag: &str) -> XmlElement {
        let mut body_pr =
            XmlElement::new("a:bodyPr").attr("wrap", if self.word_wrap { "square" } else { "none" });
        if let Some(anchor) = self.anchor {
            body_pr = body_pr.attr("anchor", anchor.as_str());
        }

        let mut body = XmlElement::new(tag)
            .child(body_pr)
            .child(XmlElement::new("a:lstStyle"));
        if self.paragraphs.is_empty() {
            body.push_child(XmlElement::new("a:p"));
        } else {
            for paragraph in &self.paragraphs {
                body.push_child(paragraph.to_element());
            }
        }
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::xml::render_fragment;

    #[test]
    fn test_run_properties_precede_text() {
        let run = TextRun::new("Hello").bold(true).size_pt(24.0);
        let xml = render_fragment(&run.to_element());
        assert_eq!(
            xml,
            r#"<a:r><a:rPr lang="en-US" sz="2400" b="1"/><a:t>Hello</a:t></a:r>"#
        );
    }

    #[test]
    fn test_unset_flags_are_omitted() {
        let xml = render_fragment(&TextRun::new("x").to_element());
        assert!(!xml.contains(" b="));
        assert!(!xml.contains(" i="));
        assert!(!xml.contains(" u="));
        assert!(!xml.contains("strike"));
    }

    #[test]
    fn test_explicit_off_is_emitted() {
        let run = TextRun::new("x").bold(false).underline(false).strikethrough(false);
        let xml = render_fragment(&run.to_element());
        assert!(xml.contains(r#"b="0""#));
        assert!(xml.contains(r#"u="none""#));
        assert!(xml.contains(r#"strike="noStrike""#));
    }

    #[test]
    fn test_fill_precedes_latin_in_run_properties() {
        let run = TextRun::new("x")
            .font("Liberation Sans")
            .color(RgbColor::new(0xFF, 0, 0));
        let xml = render_fragment(&run.to_element());
        assert!(xml.find("a:solidFill").unwrap() < xml.find("a:latin").unwrap());
    }

    #[test]
    fn test_superscript_baseline() {
        let xml = render_fragment(&TextRun::new("2").superscript().to_element());
        assert!(xml.contains(r#"baseline="30000""#));
    }

    #[test]
    fn test_text_is_escaped() {
        let xml = render_fragment(&TextRun::new("a < b & c").to_element());
        assert!(xml.contains("<a:t>a &lt; b &amp; c</a:t>"));
    }

    #[test]
    fn test_plain_paragraph_has_no_ppr() {
        let xml = render_fragment(&Paragraph::plain("x").to_element());
        assert!(!xml.contains("a:pPr"));
    }

    #[test]
    fn test_bullet_paragraph_properties() {
        let p = Paragraph::plain("First item")
            .margin_left(274_320)
            .indent(-182_880)
            .bullet(Bullet::glyph("\u{2022}"));
        let xml = render_fragment(&p.to_element());
        assert!(xml.contains(r#"<a:pPr marL="274320" indent="-182880">"#));
        assert!(xml.contains("<a:buChar char=\"\u{2022}\"/>"));
    }

    #[test]
    fn test_auto_number_emits_scheme_only() {
        let p = Paragraph::plain("Step one").bullet(Bullet::auto_num(AutoNumScheme::AlphaLcPeriod));
        let xml = render_fragment(&p.to_element());
        assert!(xml.contains(r#"<a:buAutoNum type="alphaLcPeriod"/>"#));
    }

    #[test]
    fn test_auto_number_start_at() {
        let p = Paragraph::plain("Step five").bullet(Bullet::AutoNum {
            scheme: AutoNumScheme::ArabicPeriod,
            start_at: Some(5),
        });
        let xml = render_fragment(&p.to_element());
        assert!(xml.contains(r#"<a:buAutoNum type="arabicPeriod" startAt="5"/>"#));
    }

    #[test]
    fn test_body_structure_and_empty_body() {
        let xml = render_fragment(&TextBody::new().to_element("p:txBody"));
        assert_eq!(
            xml,
            r#"<p:txBody><a:bodyPr wrap="square"/><a:lstStyle/><a:p/></p:txBody>"#
        );
    }

    #[test]
    fn test_body_anchor_and_wrap_off() {
        let body = TextBody::plain("x").word_wrap(false).anchor(Anchor::Center);
        let xml = render_fragment(&body.to_element("a:txBody"));
        assert!(xml.starts_with(r#"<a:txBody><a:bodyPr wrap="none" anchor="ctr"/>"#));
    }
}
