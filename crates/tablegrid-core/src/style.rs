//! Table-level presentation style

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Visual style of the whole table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TableStyle {
    #[default]
    Default,
    Striped,
    Bordered,
    Minimal,
}

impl TableStyle {
    /// All styles, in the order the editor offers them
    pub const ALL: [TableStyle; 4] = [
        TableStyle::Default,
        TableStyle::Striped,
        TableStyle::Bordered,
        TableStyle::Minimal,
    ];

    /// Attribute name as persisted by the editor
    pub fn as_str(&self) -> &'static str {
        match self {
            TableStyle::Default => "default",
            TableStyle::Striped => "striped",
            TableStyle::Bordered => "bordered",
            TableStyle::Minimal => "minimal",
        }
    }
}

impl fmt::Display for TableStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        TableStyle::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidAttribute(format!("unknown table style '{}'", s)))
    }
}
