//! CSV reader
//!
//! Input is processed one line at a time with a small quote-aware scanner.
//! Because of that, a line break inside a quoted field is not supported: the
//! quoted field ends at the line break and the rest of it is read as a new
//! row. An unterminated quote runs to the end of its line instead of failing,
//! so callers should check the resulting dimensions rather than expect an
//! error for malformed quoting.

use std::io::Read;

use crate::error::{CsvError, CsvResult};
use crate::options::CsvReadOptions;
use tablegrid_core::{Cell, Grid};

/// CSV text reader
pub struct CsvReader;

impl CsvReader {
    /// Parse CSV text into a validated grid
    ///
    /// The first comment line becomes the caption; later comment lines and
    /// blank lines are dropped. Short rows are padded with empty cells.
    pub fn read_str(text: &str, options: &CsvReadOptions) -> CsvResult<Grid> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let comment = options.comment as char;

        let mut caption: Option<String> = None;
        let mut records: Vec<Vec<String>> = Vec::new();

        for line in text.split(['\n', '\r']) {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            if let Some(rest) = trimmed.strip_prefix(comment) {
                if caption.is_none() {
                    caption = Some(rest.trim().to_string());
                } else {
                    log::warn!("dropping extra comment line: {}", trimmed);
                }
                continue;
            }

            records.push(Self::split_record(line, options));
        }

        if records.is_empty() {
            return Err(CsvError::EmptyInput);
        }

        let cols = records.iter().map(Vec::len).max().unwrap_or(0);
        let cells: Vec<Vec<Cell>> = records
            .into_iter()
            .enumerate()
            .map(|(row, fields)| {
                let is_header = row == 0 && options.has_header;
                let mut cells: Vec<Cell> = fields
                    .into_iter()
                    .map(|field| Cell::new(field).with_header(is_header))
                    .collect();
                cells.resize(cols, Cell::unit(is_header));
                cells
            })
            .collect();

        let grid = Grid::from_cells(cells)
            .with_header_row(options.has_header)
            .with_header_col(false)
            .with_caption(caption.unwrap_or_default());

        log::debug!(
            "parsed {}x{} grid from CSV (caption: {:?})",
            grid.rows(),
            grid.cols(),
            grid.caption()
        );

        grid.validated().map_err(CsvError::from)
    }

    /// Read CSV from a reader into a validated grid
    pub fn read<R: Read>(mut reader: R, options: &CsvReadOptions) -> CsvResult<Grid> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let text = String::from_utf8(bytes)?;
        Self::read_str(&text, options)
    }

    /// Split one line into fields
    ///
    /// Outside quotes the delimiter ends a field. Inside quotes a doubled
    /// quote is a literal quote; any other quote toggles quote mode.
    fn split_record(line: &str, options: &CsvReadOptions) -> Vec<String> {
        let delimiter = options.delimiter as char;
        let quote = options.quote as char;

        let mut fields = Vec::new();
        let mut current = String::new();
        let mut in_quotes = false;
        let mut chars = line.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch == quote {
                if in_quotes && chars.peek() == Some(&quote) {
                    // Escaped quote
                    current.push(quote);
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            } else if ch == delimiter && !in_quotes {
                fields.push(std::mem::take(&mut current));
            } else {
                current.push(ch);
            }
        }
        fields.push(current);
        fields
    }
}
