//! Outline (line) styling for shapes and connectors.

use crate::common::color::RgbColor;
use crate::common::xml::XmlElement;

use super::fill::solid_fill;

/// Preset dash pattern for an outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashStyle {
    #[default]
    Solid,
    Dash,
    Dot,
    DashDot,
    LgDash,
    LgDashDot,
    LgDashDotDot,
    SysDash,
    SysDot,
}

impl DashStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            DashStyle::Solid => "solid",
            DashStyle::Dash => "dash",
            DashStyle::Dot => "dot",
            DashStyle::DashDot => "dashDot",
            DashStyle::LgDash => "lgDash",
            DashStyle::LgDashDot => "lgDashDot",
            DashStyle::LgDashDotDot => "lgDashDotDot",
            DashStyle::SysDash => "sysDash",
            DashStyle::SysDot => "sysDot",
        }
    }
}

/// Line end cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

impl LineCap {
    fn as_str(self) -> &'static str {
        match self {
            LineCap::Butt => "flat",
            LineCap::Round => "rnd",
            LineCap::Square => "sq",
        }
    }
}

/// Line fill: an outline is either invisible or a solid color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineFill {
    None,
    Solid(RgbColor),
}

/// Outline of a shape: fill, width in EMU, dash preset, and optional cap.
///
/// # Examples
///
/// ```rust
/// use pitaya::common::RgbColor;
/// use pitaya::common::unit::pt_to_emu;
/// use pitaya::drawing::{DashStyle, Line};
///
/// let border = Line::solid(RgbColor::BLACK, pt_to_emu(1.0) as u32)
///     .dash(DashStyle::LgDash);
/// assert_eq!(border.width(), 12_700);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    fill: LineFill,
    width: u32,
    dash: DashStyle,
    cap: Option<LineCap>,
}

impl Line {
    /// Solid line of the given color and EMU width.
    pub fn solid(color: RgbColor, width_emu: u32) -> Self {
        Self {
            fill: LineFill::Solid(color),
            width: width_emu,
            dash: DashStyle::Solid,
            cap: None,
        }
    }

    /// Explicitly invisible outline.
    pub fn none() -> Self {
        Self {
            fill: LineFill::None,
            width: 0,
            dash: DashStyle::Solid,
            cap: None,
        }
    }

    /// Set the dash preset.
    pub fn dash(mut self, dash: DashStyle) -> Self {
        self.dash = dash;
        self
    }

    /// Set the end cap.
    pub fn cap(mut self, cap: LineCap) -> Self {
        self.cap = Some(cap);
        self
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn fill(&self) -> LineFill {
        self.fill
    }

    #[inline]
    pub fn dash_style(&self) -> DashStyle {
        self.dash
    }

    // Fill child first, then the dash preset; `solid` is the schema default
    // and stays implicit.
    pub(crate) fn to_element(&self) -> XmlElement {
        let mut ln = XmlElement::new("a:ln");
        if self.width > 0 {
            ln = ln.attr_u32("w", self.width);
        }
        if let Some(cap) = self.cap {
            ln = ln.attr("cap", cap.as_str());
        }
        match self.fill {
            LineFill::None => ln.push_child(XmlElement::new("a:noFill")),
            LineFill::Solid(color) => ln.push_child(solid_fill(color)),
        }
        if self.dash != DashStyle::Solid {
            ln.push_child(XmlElement::new("a:prstDash").attr("val", self.dash.as_str()));
        }
        ln
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::unit::pt_to_emu;
    use crate::common::xml::render_fragment;

    #[test]
    fn test_one_point_line_width() {
        let line = Line::solid(RgbColor::BLACK, pt_to_emu(1.0) as u32);
        let xml = render_fragment(&line.to_element());
        assert_eq!(
            xml,
            r#"<a:ln w="12700"><a:solidFill><a:srgbClr val="000000"/></a:solidFill></a:ln>"#
        );
    }

    #[test]
    fn test_dash_preset_emitted_after_fill() {
        let line = Line::solid(RgbColor::new(0x44, 0x72, 0xC4), 25_400).dash(DashStyle::DashDot);
        let xml = render_fragment(&line.to_element());
        assert!(xml.find("a:solidFill").unwrap() < xml.find("a:prstDash").unwrap());
        assert!(xml.contains(r#"<a:prstDash val="dashDot"/>"#));
    }

    #[test]
    fn test_invisible_line() {
        let xml = render_fragment(&Line::none().to_element());
        assert_eq!(xml, "<a:ln><a:noFill/></a:ln>");
    }

    #[test]
    fn test_cap_attribute() {
        let line = Line::solid(RgbColor::BLACK, 12_700).cap(LineCap::Round);
        let xml = render_fragment(&line.to_element());
        assert!(xml.starts_with(r#"<a:ln w="12700" cap="rnd">"#));
    }
}
