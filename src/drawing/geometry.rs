//! Preset and custom vector geometry (`a:prstGeom`, `a:custGeom`).

use crate::common::error::{Error, Result};
use crate::common::xml::XmlElement;
use smallvec::SmallVec;

/// Shape outline: either a named preset understood by the renderer, or an
/// explicit command path in an abstract coordinate space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Geometry {
    /// Named preset outline (rectangle, ellipse, arrow, ...)
    Preset(PresetGeometry),
    /// Explicit move/line/curve/close path
    Custom(CustomPath),
}

impl Geometry {
    /// Preset geometry without adjustment values.
    pub fn preset(name: impl Into<String>) -> Self {
        Geometry::Preset(PresetGeometry::new(name))
    }

    /// Custom path geometry.
    pub fn custom(path: CustomPath) -> Self {
        Geometry::Custom(path)
    }

    pub(crate) fn to_element(&self) -> XmlElement {
        match self {
            Geometry::Preset(preset) => preset.to_element(),
            Geometry::Custom(path) => path.to_element(),
        }
    }
}

/// A named preset outline with optional numeric adjustment handles,
/// emitted as `a:prstGeom` with an `a:avLst` of guide overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetGeometry {
    name: String,
    adjustments: SmallVec<[(String, i64); 4]>,
}

impl PresetGeometry {
    /// Create a preset geometry by schema name (`rect`, `ellipse`,
    /// `roundRect`, `rightArrow`, ...).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            adjustments: SmallVec::new(),
        }
    }

    /// Override an adjustment guide (e.g. `adj` or `adj1`) with a raw value.
    pub fn adjust(mut self, guide: impl Into<String>, value: i64) -> Self {
        self.adjustments.push((guide.into(), value));
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    fn to_element(&self) -> XmlElement {
        let mut av_lst = XmlElement::new("a:avLst");
        for (guide, value) in &self.adjustments {
            let mut buf = itoa::Buffer::new();
            av_lst.push_child(
                XmlElement::new("a:gd")
                    .attr("name", guide.as_str())
                    .attr("fmla", format!("val {}", buf.format(*value))),
            );
        }
        XmlElement::new("a:prstGeom")
            .attr("prst", self.name.as_str())
            .child(av_lst)
    }
}

/// One drawing command inside a custom path.
///
/// Coordinates live in the abstract `[0, width] x [0, height]` space of the
/// owning [`CustomPath`]; the renderer rescales them to the shape extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathCommand {
    MoveTo { x: i64, y: i64 },
    LineTo { x: i64, y: i64 },
    CubicBezTo {
        c1: (i64, i64),
        c2: (i64, i64),
        end: (i64, i64),
    },
    Close,
}

/// Custom vector outline: a single path in an abstract coordinate space.
///
/// Command order is validated as the path is built: the path must open with
/// [`PathCommand::MoveTo`], and [`PathCommand::Close`] is only legal once the
/// current subpath has drawn at least one segment.
///
/// # Examples
///
/// ```rust
/// use pitaya::drawing::CustomPath;
///
/// let triangle = CustomPath::new(100, 100)?
///     .move_to(50, 0)
///     .line_to(100, 100)?
///     .line_to(0, 100)?
///     .close()?;
/// assert_eq!(triangle.commands().len(), 4);
/// # Ok::<(), pitaya::common::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomPath {
    width: i64,
    height: i64,
    commands: Vec<PathCommand>,
    segments_in_subpath: usize,
}

impl CustomPath {
    /// Create an empty path over a `width x height` coordinate space.
    ///
    /// Zero dimensions are rejected: every consumer divides by them when
    /// rescaling into the shape extent.
    pub fn new(width: i64, height: i64) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidGeometry(format!(
                "path space must be non-zero, got {}x{}",
                width, height
            )));
        }
        Ok(Self {
            width,
            height,
            commands: Vec::new(),
            segments_in_subpath: 0,
        })
    }

    /// Start a new subpath at the given point.
    pub fn move_to(mut self, x: i64, y: i64) -> Self {
        self.commands.push(PathCommand::MoveTo { x, y });
        self.segments_in_subpath = 0;
        self
    }

    /// Draw a straight segment to the given point.
    pub fn line_to(mut self, x: i64, y: i64) -> Result<Self> {
        self.require_open_subpath("lnTo")?;
        self.commands.push(PathCommand::LineTo { x, y });
        self.segments_in_subpath += 1;
        Ok(self)
    }

    /// Draw a cubic Bezier segment through two control points.
    pub fn cubic_bez_to(
        mut self,
        c1: (i64, i64),
        c2: (i64, i64),
        end: (i64, i64),
    ) -> Result<Self> {
        self.require_open_subpath("cubicBezTo")?;
        self.commands.push(PathCommand::CubicBezTo { c1, c2, end });
        self.segments_in_subpath += 1;
        Ok(self)
    }

    /// Close the current subpath.
    pub fn close(mut self) -> Result<Self> {
        if self.segments_in_subpath == 0 {
            return Err(Error::InvalidGeometry(
                "close requires at least one drawn segment in the subpath".to_string(),
            ));
        }
        self.commands.push(PathCommand::Close);
        self.segments_in_subpath = 0;
        Ok(self)
    }

    fn require_open_subpath(&self, command: &str) -> Result<()> {
        if self.commands.is_empty() {
            return Err(Error::InvalidGeometry(format!(
                "path must open with moveTo before {}",
                command
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn width(&self) -> i64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i64 {
        self.height
    }

    /// Commands in input order.
    #[inline]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    fn to_element(&self) -> XmlElement {
        let mut path = XmlElement::new("a:path")
            .attr_i64("w", self.width)
            .attr_i64("h", self.height);
        for command in &self.commands {
            path.push_child(command.to_element());
        }
        XmlElement::new("a:custGeom")
            .child(XmlElement::new("a:avLst"))
            .child(XmlElement::new("a:pathLst").child(path))
    }
}

impl PathCommand {
    fn to_element(&self) -> XmlElement {
        fn pt(x: i64, y: i64) -> XmlElement {
            XmlElement::new("a:pt").attr_i64("x", x).attr_i64("y", y)
        }

        match *self {
            PathCommand::MoveTo { x, y } => XmlElement::new("a:moveTo").child(pt(x, y)),
            PathCommand::LineTo { x, y } => XmlElement::new("a:lnTo").child(pt(x, y)),
            PathCommand::CubicBezTo { c1, c2, end } => XmlElement::new("a:cubicBezTo")
                .child(pt(c1.0, c1.1))
                .child(pt(c2.0, c2.1))
                .child(pt(end.0, end.1)),
            PathCommand::Close => XmlElement::new("a:close"),
        }
    }
}
