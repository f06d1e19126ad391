//! Fill variants for shapes, slide backgrounds, and table cells.

use crate::common::color::RgbColor;
use crate::common::error::{Error, Result};
use crate::common::unit::{PERCENT_FULL, normalize_angle};
use crate::common::xml::XmlElement;
use smallvec::SmallVec;

/// Fill applied to a shape, cell, or slide background.
///
/// Absence of a fill on a shape means "inherit the document default"; the
/// explicit [`Fill::None`] variant produces a transparent shape, and
/// [`Fill::Background`] defers to the enclosing group or background fill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fill {
    /// Explicitly transparent (`a:noFill`)
    None,
    /// Inherit the enclosing fill (`a:grpFill`)
    Background,
    /// Single color (`a:solidFill`)
    Solid(RgbColor),
    /// Multi-stop gradient (`a:gradFill`)
    Gradient(GradientFill),
}

impl Fill {
    /// Solid fill from a color.
    pub fn solid(color: RgbColor) -> Self {
        Fill::Solid(color)
    }

    pub(crate) fn to_element(&self) -> XmlElement {
        match self {
            Fill::None => XmlElement::new("a:noFill"),
            Fill::Background => XmlElement::new("a:grpFill"),
            Fill::Solid(color) => solid_fill(*color),
            Fill::Gradient(gradient) => gradient.to_element(),
        }
    }
}

pub(crate) fn solid_fill(color: RgbColor) -> XmlElement {
    XmlElement::new("a:solidFill")
        .child(XmlElement::new("a:srgbClr").attr("val", color.to_hex()))
}

/// A gradient stop: position in thousandths of a percent (0..=100,000)
/// paired with a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientStop {
    pub position: u32,
    pub color: RgbColor,
}

impl GradientStop {
    pub fn new(position: u32, color: RgbColor) -> Self {
        Self { position, color }
    }
}

/// How a gradient shades across the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientShading {
    /// Straight-line shade at an angle (1/60,000-degree units, normalized)
    Linear { angle: u32 },
    /// Shade along a path radiating from the shape center
    Path(PathShade),
}

/// Path kind for non-linear gradients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathShade {
    Circle,
    Rect,
    Shape,
}

impl PathShade {
    fn as_str(self) -> &'static str {
        match self {
            PathShade::Circle => "circle",
            PathShade::Rect => "rect",
            PathShade::Shape => "shape",
        }
    }
}

/// Multi-stop gradient fill.
///
/// Stops are sorted ascending by position at construction time, so emission
/// order never mirrors insertion order; callers must not rely on it.
///
/// # Examples
///
/// ```rust
/// use pitaya::common::RgbColor;
/// use pitaya::drawing::{GradientFill, GradientStop};
///
/// let fill = GradientFill::linear(
///     5_400_000,
///     vec![
///         GradientStop::new(100_000, RgbColor::WHITE),
///         GradientStop::new(0, RgbColor::BLACK),
///     ],
/// )?;
/// assert_eq!(fill.stops()[0].position, 0);
/// # Ok::<(), pitaya::common::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientFill {
    stops: SmallVec<[GradientStop; 4]>,
    shading: GradientShading,
}

impl GradientFill {
    /// Linear gradient at the given angle (any signed value, normalized).
    pub fn linear(angle: i64, stops: Vec<GradientStop>) -> Result<Self> {
        Self::with_shading(
            GradientShading::Linear {
                angle: normalize_angle(angle),
            },
            stops,
        )
    }

    /// Radial gradient shading outward from the shape center.
    pub fn radial(stops: Vec<GradientStop>) -> Result<Self> {
        Self::with_shading(GradientShading::Path(PathShade::Circle), stops)
    }

    /// Gradient with an explicit shading descriptor.
    pub fn with_shading(shading: GradientShading, stops: Vec<GradientStop>) -> Result<Self> {
        if stops.is_empty() {
            return Err(Error::InvalidGradient("empty stop list".to_string()));
        }
        if let Some(stop) = stops.iter().find(|s| s.position > PERCENT_FULL) {
            return Err(Error::InvalidGradient(format!(
                "stop position {} exceeds {}",
                stop.position, PERCENT_FULL
            )));
        }

        let mut stops: SmallVec<[GradientStop; 4]> = stops.into();
        stops.sort_by_key(|s| s.position);
        Ok(Self { stops, shading })
    }

    /// Stops in ascending position order.
    #[inline]
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    #[inline]
    pub fn shading(&self) -> GradientShading {
        self.shading
    }

    // Stop list before the shading descriptor; that ordering is fixed.
    fn to_element(&self) -> XmlElement {
        let mut gs_lst = XmlElement::new("a:gsLst");
        for stop in &self.stops {
            gs_lst.push_child(
                XmlElement::new("a:gs")
                    .attr_u32("pos", stop.position)
                    .child(XmlElement::new("a:srgbClr").attr("val", stop.color.to_hex())),
            );
        }

        let shading = match self.shading {
            GradientShading::Linear { angle } => XmlElement::new("a:lin")
                .attr_u32("ang", angle)
                .attr("scaled", "1"),
            GradientShading::Path(kind) => XmlElement::new("a:path")
                .attr("path", kind.as_str())
                .child(
                    XmlElement::new("a:fillToRect")
                        .attr("l", "50000")
                        .attr("t", "50000")
                        .attr("r", "50000")
                        .attr("b", "50000"),
                ),
        };

        XmlElement::new("a:gradFill")
            .attr("rotWithShape", "1")
            .child(gs_lst)
            .child(shading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::xml::render_fragment;

    #[test]
    fn test_solid_fill_xml() {
        let xml = render_fragment(&Fill::solid(RgbColor::new(0x44, 0x72, 0xC4)).to_element());
        assert_eq!(
            xml,
            r#"<a:solidFill><a:srgbClr val="4472C4"/></a:solidFill>"#
        );
    }

    #[test]
    fn test_none_and_background_fills() {
        assert_eq!(render_fragment(&Fill::None.to_element()), "<a:noFill/>");
        assert_eq!(
            render_fragment(&Fill::Background.to_element()),
            "<a:grpFill/>"
        );
    }

    #[test]
    fn test_empty_stop_list_rejected() {
        assert!(matches!(
            GradientFill::linear(0, vec![]),
            Err(Error::InvalidGradient(_))
        ));
    }

    #[test]
    fn test_out_of_range_stop_rejected() {
        let stops = vec![GradientStop::new(100_001, RgbColor::BLACK)];
        assert!(matches!(
            GradientFill::linear(0, stops),
            Err(Error::InvalidGradient(_))
        ));
    }

    #[test]
    fn test_stops_sorted_regardless_of_input_order() {
        let fill = GradientFill::linear(
            0,
            vec![
                GradientStop::new(100_000, RgbColor::from_hex("ED7D31").unwrap()),
                GradientStop::new(0, RgbColor::from_hex("4472C4").unwrap()),
            ],
        )
        .unwrap();
        let xml = render_fragment(&Fill::Gradient(fill).to_element());
        let first = xml.find(r#"pos="0""#).unwrap();
        let last = xml.find(r#"pos="100000""#).unwrap();
        assert!(first < last);
        assert!(xml.find("4472C4").unwrap() < xml.find("ED7D31").unwrap());
    }

    #[test]
    fn test_stop_list_precedes_shading_descriptor() {
        let fill = GradientFill::linear(
            2_700_000,
            vec![
                GradientStop::new(0, RgbColor::BLACK),
                GradientStop::new(100_000, RgbColor::WHITE),
            ],
        )
        .unwrap();
        let xml = render_fragment(&Fill::Gradient(fill).to_element());
        assert!(xml.find("<a:gsLst>").unwrap() < xml.find("<a:lin ").unwrap());
        assert!(xml.contains(r#"<a:lin ang="2700000" scaled="1"/>"#));
    }

    #[test]
    fn test_radial_gradient_path_descriptor() {
        let fill = GradientFill::radial(vec![
            GradientStop::new(0, RgbColor::WHITE),
            GradientStop::new(100_000, RgbColor::BLACK),
        ])
        .unwrap();
        let xml = render_fragment(&Fill::Gradient(fill).to_element());
        assert!(xml.contains(r#"<a:path path="circle">"#));
    }

    #[test]
    fn test_negative_linear_angle_normalizes() {
        let fill = GradientFill::linear(-5_400_000, vec![GradientStop::new(0, RgbColor::BLACK)])
            .unwrap();
        assert_eq!(
            fill.shading(),
            GradientShading::Linear { angle: 16_200_000 }
        );
    }
}
