//! CSV writer
//!
//! Shadow cells are written as empty fields. CSV has no notion of spanning
//! cells, so merge topology does not survive an export.
//!
//! Fields are quoted only when they contain the delimiter, a quote or a line
//! break, with one exception: a row that would read back as a comment or a
//! blank line is quoted in full. A first field of `#1` gives `"#1","x"`, and
//! a single empty field gives `""`.

use std::io::Write;

use crate::error::{CsvError, CsvResult};
use crate::options::CsvWriteOptions;
use tablegrid_core::Grid;

/// CSV text writer
pub struct CsvWriter;

impl CsvWriter {
    /// Serialize a grid to CSV text
    ///
    /// Lines are joined by the configured terminator, without a trailing one.
    pub fn write_string(grid: &Grid, options: &CsvWriteOptions) -> CsvResult<String> {
        let mut lines = Vec::with_capacity(grid.rows() + 1);

        if options.write_caption && !grid.caption().is_empty() {
            lines.push(format!(
                "{} {}",
                options.comment as char,
                Self::single_line(grid.caption())
            ));
        }

        for row in grid.iter_rows() {
            let fields: Vec<&str> = row
                .iter()
                .map(|cell| {
                    if cell.is_merged {
                        ""
                    } else {
                        cell.content.as_str()
                    }
                })
                .collect();
            lines.push(Self::encode_record(&fields, options)?);
        }

        Ok(lines.join(options.line_terminator.as_str()))
    }

    /// Serialize a grid to a writer
    pub fn write<W: Write>(grid: &Grid, mut writer: W, options: &CsvWriteOptions) -> CsvResult<()> {
        let text = Self::write_string(grid, options)?;
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Encode one record as a single line, without terminator
    ///
    /// Fields are quoted only when they contain the delimiter, the quote
    /// character or a line break. A record that would read back as a comment
    /// or a blank line is quoted in full.
    fn encode_record(fields: &[&str], options: &CsvWriteOptions) -> CsvResult<String> {
        if fields.is_empty() {
            return Ok(String::new());
        }

        let first = fields.first().copied().unwrap_or("").trim_start();
        let ambiguous = first.starts_with(options.comment as char)
            || (fields.len() == 1 && first.is_empty());
        let quote_style = if ambiguous {
            csv::QuoteStyle::Always
        } else {
            csv::QuoteStyle::Necessary
        };

        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .quote_style(quote_style)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());
        csv_writer.write_record(fields)?;

        let bytes = csv_writer
            .into_inner()
            .map_err(|err| CsvError::Io(err.into_error()))?;
        let mut line = String::from_utf8(bytes)?;
        if line.ends_with('\n') {
            line.pop();
        }
        Ok(line)
    }

    fn single_line(text: &str) -> String {
        text.split(['\r', '\n'])
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::LineTerminator;
    use pretty_assertions::assert_eq;
    use tablegrid_core::Selection;

    fn grid_of(rows: &[&[&str]]) -> Grid {
        let mut grid = Grid::initialize(rows.len(), rows[0].len());
        for (r, row) in rows.iter().enumerate() {
            for (c, text) in row.iter().enumerate() {
                grid = grid.with_content(r, c, *text).unwrap();
            }
        }
        grid
    }

    fn write(grid: &Grid) -> String {
        CsvWriter::write_string(grid, &CsvWriteOptions::default()).unwrap()
    }

    #[test]
    fn test_write_basic() {
        let grid = grid_of(&[&["A", "B"], &["1", "2"]]);
        assert_eq!(write(&grid), "A,B\n1,2");
    }

    #[test]
    fn test_write_caption() {
        let grid = grid_of(&[&["A", "B"], &["1", "2"]]).with_caption("Inventory");
        assert_eq!(write(&grid), "# Inventory\nA,B\n1,2");

        let options = CsvWriteOptions::default().with_caption(false);
        assert_eq!(
            CsvWriter::write_string(&grid, &options).unwrap(),
            "A,B\n1,2"
        );

        let multiline = grid.with_caption("Stock\nlevels");
        assert!(write(&multiline).starts_with("# Stock levels\n"));
    }

    #[test]
    fn test_write_quoting() {
        let grid = grid_of(&[&["Hello, world", "say \"hi\"", "two\nlines", "plain"]]);
        assert_eq!(
            write(&grid),
            "\"Hello, world\",\"say \"\"hi\"\"\",\"two\nlines\",plain"
        );
    }

    #[test]
    fn test_write_merged_as_empty_fields() {
        let grid = grid_of(&[&["a", "b", "c"], &["d", "e", "f"]])
            .merge(&Selection::new((0, 0), (1, 1)));
        assert_eq!(write(&grid), "a b d e,,c\n,,f");
    }

    #[test]
    fn test_write_protects_ambiguous_rows() {
        let grid = grid_of(&[&["#1", "x"]]);
        assert_eq!(write(&grid), "\"#1\",\"x\"");

        let grid = grid_of(&[&["A"], &[""]]);
        assert_eq!(write(&grid), "A\n\"\"");
    }

    #[test]
    fn test_write_line_terminator() {
        let grid = grid_of(&[&["A"], &["B"]]);
        let options = CsvWriteOptions::default().with_line_terminator(LineTerminator::CRLF);
        assert_eq!(CsvWriter::write_string(&grid, &options).unwrap(), "A\r\nB");
    }

    #[test]
    fn test_write_to_writer() {
        let grid = grid_of(&[&["A", "B"]]);
        let mut buf = Vec::new();
        CsvWriter::write(&grid, &mut buf, &CsvWriteOptions::default()).unwrap();
        assert_eq!(buf, b"A,B");
    }

    #[test]
    fn test_write_semicolon_delimiter() {
        let grid = grid_of(&[&["a;b", "c,d"]]);
        let options = CsvWriteOptions::default().with_delimiter(b';');
        assert_eq!(
            CsvWriter::write_string(&grid, &options).unwrap(),
            "\"a;b\";c,d"
        );
    }
}
