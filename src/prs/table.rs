//! Tables: fixed grids of fill+text cells inside a graphic frame.

use crate::common::error::{Error, Result};
use crate::common::xml::XmlElement;
use crate::drawing::{Fill, Paragraph, TextBody, Transform};

use super::shape::{TABLE_GRAPHIC_URI, non_visual_props};

/// One table cell: an optional fill plus a text body.
#[derive(Debug, Clone, Default)]
pub struct TableCell {
    fill: Option<Fill>,
    text: TextBody,
}

impl TableCell {
    /// Empty cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell holding a single plain paragraph.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            fill: None,
            text: TextBody::plain(text),
        }
    }

    pub fn fill(mut self, fill: Fill) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Append a paragraph to the cell's text body.
    pub fn paragraph(mut self, paragraph: Paragraph) -> Self {
        self.text = std::mem::take(&mut self.text).paragraph(paragraph);
        self
    }

    pub fn text(mut self, text: TextBody) -> Self {
        self.text = text;
        self
    }

    // The cell's fill is emitted before its text body.
    fn to_element(&self) -> XmlElement {
        let mut tc = XmlElement::new("a:tc");
        if let Some(ref fill) = self.fill {
            tc.push_child(XmlElement::new("a:tcPr").child(fill.to_element()));
        }
        tc.push_child(self.text.to_element("a:txBody"));
        tc
    }
}

/// One table row: a height and its left-to-right cells.
#[derive(Debug, Clone)]
pub struct TableRow {
    height: i64,
    cells: Vec<TableCell>,
}

impl TableRow {
    /// Row of the given EMU height.
    pub fn new(height: i64) -> Self {
        Self {
            height,
            cells: Vec::new(),
        }
    }

    /// Append a cell.
    pub fn cell(mut self, cell: TableCell) -> Self {
        self.cells.push(cell);
        self
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    fn to_element(&self) -> XmlElement {
        let mut tr = XmlElement::new("a:tr").attr_i64("h", self.height);
        for cell in &self.cells {
            tr.push_child(cell.to_element());
        }
        tr
    }
}

/// A fixed `rows x cols` grid.
///
/// The column count is declared up front through the column widths; every
/// appended row must match it exactly, and violations surface immediately,
/// long before any XML exists.
///
/// # Examples
///
/// ```rust
/// use pitaya::prs::{Table, TableCell, TableRow};
///
/// let table = Table::new(vec![2_743_200, 2_743_200])?
///     .first_row_header(true)
///     .add_row(
///         TableRow::new(457_200)
///             .cell(TableCell::plain("Name"))
///             .cell(TableCell::plain("Value")),
///     )?;
/// assert_eq!(table.row_count(), 1);
/// # Ok::<(), pitaya::common::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    col_widths: Vec<i64>,
    rows: Vec<TableRow>,
    first_row: bool,
    band_row: bool,
}

impl Table {
    /// Declare the grid by its EMU column widths.
    pub fn new(col_widths: Vec<i64>) -> Result<Self> {
        if col_widths.is_empty() {
            return Err(Error::InvalidTable("zero columns".to_string()));
        }
        Ok(Self {
            col_widths,
            rows: Vec::new(),
            first_row: false,
            band_row: false,
        })
    }

    /// Style the first row as a header row.
    pub fn first_row_header(mut self, header: bool) -> Self {
        self.first_row = header;
        self
    }

    /// Apply alternating row banding.
    pub fn banded_rows(mut self, banded: bool) -> Self {
        self.band_row = banded;
        self
    }

    /// Append a row whose cell count must match the declared column count.
    pub fn add_row(mut self, row: TableRow) -> Result<Self> {
        if row.cell_count() != self.col_widths.len() {
            return Err(Error::InvalidTable(format!(
                "row has {} cells, table declares {} columns",
                row.cell_count(),
                self.col_widths.len()
            )));
        }
        self.rows.push(row);
        Ok(self)
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn col_count(&self) -> usize {
        self.col_widths.len()
    }

    // Grid description first, then rows top-to-bottom.
    fn to_element(&self) -> XmlElement {
        let tbl_pr = XmlElement::new("a:tblPr")
            .attr("firstRow", if self.first_row { "1" } else { "0" })
            .attr("bandRow", if self.band_row { "1" } else { "0" });

        let mut grid = XmlElement::new("a:tblGrid");
        for width in &self.col_widths {
            grid.push_child(XmlElement::new("a:gridCol").attr_i64("w", *width));
        }

        let mut tbl = XmlElement::new("a:tbl").child(tbl_pr).child(grid);
        for row in &self.rows {
            tbl.push_child(row.to_element());
        }
        tbl
    }
}

/// A table placed on a slide inside a graphic frame.
#[derive(Debug, Clone)]
pub struct TableFrame {
    id: u32,
    name: String,
    transform: Transform,
    table: Table,
}

impl TableFrame {
    /// Place a finished table. An empty grid is rejected here, before the
    /// frame can reach a slide.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        transform: Transform,
        table: Table,
    ) -> Result<Self> {
        if table.rows.is_empty() {
            return Err(Error::InvalidTable("zero rows".to_string()));
        }
        Ok(Self {
            id,
            name: name.into(),
            transform,
            table,
        })
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[inline]
    pub fn table(&self) -> &Table {
        &self.table
    }

    pub(crate) fn to_element(&self) -> XmlElement {
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
                        .attr("uri", TABLE_GRAPHIC_URI)
                        .child(self.table.to_element()),
                ),
            )
    }
}
