//! Cell value object

use std::fmt;
use std::str::FromStr;

use super::CellAddress;
use crate::error::{Error, Result};

/// Horizontal alignment of a cell's content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    /// Attribute name as persisted by the editor
    pub fn as_str(&self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Align {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Align::Left),
            "center" => Ok(Align::Center),
            "right" => Ok(Align::Right),
            other => Err(Error::InvalidAttribute(format!("unknown alignment '{}'", other))),
        }
    }
}

/// One grid position
///
/// A cell is either an *origin* (it owns its content and span, `1x1` for an
/// ordinary cell) or a *shadow* covered by another cell's span. Shadows carry
/// no content, only the address of the origin that covers them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Cell {
    /// Cell text
    pub content: String,
    /// Rows covered by this cell (origin cells only)
    pub row_span: u32,
    /// Columns covered by this cell (origin cells only)
    pub col_span: u32,
    /// Horizontal alignment
    pub align: Align,
    /// Rendered as a header cell
    pub is_header: bool,
    /// Covered by another cell's span
    pub is_merged: bool,
    /// Origin covering this cell, present iff `is_merged`
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub merge_origin: Option<CellAddress>,
}

impl Cell {
    /// Create a unit cell with content
    pub fn new<S: Into<String>>(content: S) -> Self {
        Self {
            content: content.into(),
            ..Self::empty()
        }
    }

    /// Create an empty unit cell
    pub fn empty() -> Self {
        Self {
            content: String::new(),
            row_span: 1,
            col_span: 1,
            align: Align::Left,
            is_header: false,
            is_merged: false,
            merge_origin: None,
        }
    }

    /// Create an empty unit cell with the given header flag
    pub fn unit(is_header: bool) -> Self {
        Self {
            is_header,
            ..Self::empty()
        }
    }

    /// Create a shadow cell covered by `origin`
    pub fn shadow(origin: CellAddress, is_header: bool) -> Self {
        Self {
            is_header,
            is_merged: true,
            merge_origin: Some(origin),
            ..Self::empty()
        }
    }

    /// Set alignment
    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Set header flag
    pub fn with_header(mut self, is_header: bool) -> Self {
        self.is_header = is_header;
        self
    }

    /// Span as `(row_span, col_span)`
    pub fn span(&self) -> (u32, u32) {
        (self.row_span, self.col_span)
    }

    /// An origin whose span covers more than itself
    pub fn is_spanning(&self) -> bool {
        !self.is_merged && (self.row_span > 1 || self.col_span > 1)
    }

    /// Neither a shadow nor a spanning origin
    pub fn is_unit(&self) -> bool {
        !self.is_merged && self.row_span == 1 && self.col_span == 1
    }

    /// Whether this cell, located at `at`, covers `target` with its span
    pub fn covers(&self, at: CellAddress, target: CellAddress) -> bool {
        if self.is_merged {
            return at == target;
        }
        let last_row = at.row + self.row_span.max(1) as usize - 1;
        let last_col = at.col + self.col_span.max(1) as usize - 1;
        (at.row..=last_row).contains(&target.row) && (at.col..=last_col).contains(&target.col)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&str> for Cell {
    fn from(content: &str) -> Self {
        Cell::new(content)
    }
}

impl From<String> for Cell {
    fn from(content: String) -> Self {
        Cell::new(content)
    }
}
