//! DSSAT table parsing and column access.
//!
//! DSSAT input files are not delimited: an `@` header line names the columns
//! of the data rows below it, `*` lines open a new block (title/comment) and
//! `!` lines are comments. Within a row, plain columns hold whitespace-free
//! tokens (codes, numbers, `-99` markers); a header padded with dots
//! (`VRNAME..........`) declares a fixed-width free-text field that may
//! contain spaces, and only such fields may be left blank. A file may carry
//! several header sections (weather files carry a station-constants section
//! and a daily section); variables are looked up in the first section that
//! defines them.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use crate::error::{HarrowError, Result};
use super::value::Value;

/// One header token: column name, the byte span of the token in the header
/// line, and whether dotted padding declared it a fixed-width text field.
#[derive(Debug, Clone)]
struct HeaderSpan {
    name: String,
    start: usize,
    end: usize,
    wide: bool,
}

/// One `@`-header's worth of row-aligned columns.
#[derive(Debug, Clone)]
struct Section {
    columns: IndexMap<String, Vec<Value>>,
}

/// A parsed DSSAT input table.
#[derive(Debug, Clone)]
pub struct ParamTable {
    sections: Vec<Section>,
}

impl ParamTable {
    /// Read and parse the file at `path`.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| HarrowError::io(path, e))?;
        Self::parse_str(&text, path)
    }

    /// Parse table text; `path` is carried for error reporting only.
    pub fn parse_str(text: &str, path: &Path) -> Result<Self> {
        let mut sections: Vec<Section> = Vec::new();
        // Header spans plus one cell vector per span, parallel by index.
        let mut current: Option<(Vec<HeaderSpan>, Vec<Vec<Value>>)> = None;

        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim_end();
            if line.is_empty() || line.starts_with('!') {
                continue;
            }
            if line.starts_with('*') {
                // Block title: the previous header no longer applies.
                flush(&mut sections, current.take());
                continue;
            }
            if line.starts_with('@') {
                flush(&mut sections, current.take());
                let spans = header_spans(line);
                if spans.is_empty() {
                    return Err(HarrowError::Parse {
                        path: path.to_path_buf(),
                        line: idx + 1,
                        message: "header line names no columns".to_string(),
                    });
                }
                let cells = vec![Vec::new(); spans.len()];
                current = Some((spans, cells));
                continue;
            }

            let Some((spans, cells)) = current.as_mut() else {
                return Err(HarrowError::Parse {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    message: "data row before any @ header".to_string(),
                });
            };
            for (i, field) in split_row(line, spans).into_iter().enumerate() {
                cells[i].push(Value::parse(&field));
            }
        }
        flush(&mut sections, current.take());

        Ok(Self { sections })
    }

    /// Names of all columns across all sections.
    pub fn variables(&self) -> BTreeSet<String> {
        self.sections
            .iter()
            .flat_map(|s| s.columns.keys().cloned())
            .collect()
    }

    /// Whether any section carries a column named `var`.
    pub fn has_variable(&self, var: &str) -> bool {
        self.sections.iter().any(|s| s.columns.contains_key(var))
    }

    /// All values of `var`, cloned in file order.
    pub fn get_val(&self, var: &str) -> Result<Vec<Value>> {
        Ok(self.column(var)?.clone())
    }

    /// Replace the whole value series of `var`. The replacement must keep
    /// the column's length so rows stay aligned.
    pub fn set_val(&mut self, var: &str, values: Vec<Value>) -> Result<()> {
        let column = self.column_mut(var)?;
        if values.len() != column.len() {
            return Err(HarrowError::LengthMismatch {
                what: "column value",
                left: values.len(),
                right: column.len(),
            });
        }
        *column = values;
        Ok(())
    }

    /// Row indices (relative to the section owning `var`) whose cell prints
    /// as `needle`.
    pub fn find_rows(&self, var: &str, needle: &str) -> Result<Vec<usize>> {
        Ok(self
            .column(var)?
            .iter()
            .enumerate()
            .filter(|(_, v)| v.to_string() == needle)
            .map(|(i, _)| i)
            .collect())
    }

    /// Values of `var` restricted to `rows` (same index space as
    /// [`ParamTable::find_rows`]).
    pub fn values_at(&self, var: &str, rows: &[usize]) -> Result<Vec<Value>> {
        let column = self.column(var)?;
        Ok(rows.iter().filter_map(|&r| column.get(r)).cloned().collect())
    }

    /// Write `value` into `var` at each of `rows`.
    pub fn set_at(&mut self, var: &str, rows: &[usize], value: Value) -> Result<()> {
        let column = self.column_mut(var)?;
        for &r in rows {
            if let Some(cell) = column.get_mut(r) {
                *cell = value.clone();
            }
        }
        Ok(())
    }

    /// Number of header sections parsed.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    fn column(&self, var: &str) -> Result<&Vec<Value>> {
        self.sections
            .iter()
            .find_map(|s| s.columns.get(var))
            .ok_or_else(|| HarrowError::unknown_variable(var))
    }

    fn column_mut(&mut self, var: &str) -> Result<&mut Vec<Value>> {
        self.sections
            .iter_mut()
            .find_map(|s| s.columns.get_mut(var))
            .ok_or_else(|| HarrowError::unknown_variable(var))
    }
}

/// Close out the section under construction, if any.
fn flush(sections: &mut Vec<Section>, current: Option<(Vec<HeaderSpan>, Vec<Vec<Value>>)>) {
    let Some((spans, cells)) = current else {
        return;
    };
    let mut columns = IndexMap::with_capacity(spans.len());
    for (span, values) in spans.into_iter().zip(cells) {
        // First occurrence wins on duplicate header names.
        columns.entry(span.name).or_insert(values);
    }
    sections.push(Section { columns });
}

/// Tokenize an `@` header line into column spans.
///
/// Dotted padding (`VRNAME....`) both widens the header token to the field's
/// full width and marks the field as free text. The leading `@` is not a
/// column, whether glued to the first name (`@VAR#`) or standalone
/// (`@ INSI`).
fn header_spans(line: &str) -> Vec<HeaderSpan> {
    let bytes = line.as_bytes();
    let mut spans = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_whitespace() {
            i += 1;
            continue;
        }
        let token_start = i;
        while i < bytes.len() && !bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        let token = line[token_start..i].trim_start_matches('@');
        let name = token.trim_end_matches('.');
        if name.is_empty() {
            // A bare '@' token.
            continue;
        }
        spans.push(HeaderSpan {
            name: name.to_string(),
            start: token_start,
            end: i,
            wide: name.len() < token.len(),
        });
    }
    spans
}

/// Split a data row into as many fields as there are header spans.
///
/// Wide (dotted) columns are sliced at their header's byte span, then
/// blanked; the rest of the row is whitespace-tokenized and the tokens are
/// assigned to the remaining columns in order. Values may therefore overflow
/// their header token (`IB0001` under `@VAR#`, wide reals right-aligned past
/// the header start) without being cut. Rows with fewer tokens than columns
/// are padded with empty fields.
fn split_row(line: &str, spans: &[HeaderSpan]) -> Vec<String> {
    let mut fields = vec![String::new(); spans.len()];
    let mut masked = line.to_string();

    for (i, span) in spans.iter().enumerate() {
        if !span.wide {
            continue;
        }
        let start = span.start.min(line.len());
        let end = span.end.clamp(start, line.len());
        if let Some(cell) = line.get(start..end) {
            fields[i] = cell.trim().to_string();
            masked.replace_range(start..end, &" ".repeat(end - start));
        }
    }

    let mut tokens = masked.split_whitespace();
    for (i, span) in spans.iter().enumerate() {
        if span.wide {
            continue;
        }
        if let Some(token) = tokens.next() {
            fields[i] = token.to_string();
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> ParamTable {
        ParamTable::parse_str(text, Path::new("test.tbl")).unwrap()
    }

    #[test]
    fn test_parse_cultivar_section() {
        let text = "\
*MAIZE CULTIVAR COEFFICIENTS

@VAR#  VRNAME.......... EXPNO   ECO#    P1    P2
IB0001 CORNL 281           .  IB001 110.0 0.300
IB0002 PIO 3995             .  IB002 212.0 0.752
";
        let table = parse(text);
        assert_eq!(table.section_count(), 1);
        assert_eq!(
            table.get_val("VAR#").unwrap(),
            vec![Value::Str("IB0001".into()), Value::Str("IB0002".into())]
        );
        // VRNAME's dotted padding keeps the embedded space inside the field.
        assert_eq!(
            table.get_val("VRNAME").unwrap(),
            vec![Value::Str("CORNL 281".into()), Value::Str("PIO 3995".into())]
        );
        assert_eq!(
            table.get_val("ECO#").unwrap(),
            vec![Value::Str("IB001".into()), Value::Str("IB002".into())]
        );
        assert_eq!(
            table.get_val("P1").unwrap(),
            vec![Value::Float(110.0), Value::Float(212.0)]
        );
    }

    #[test]
    fn test_parse_weather_sections() {
        let text = "\
*WEATHER DATA : GAINESVILLE

@ INSI      LAT     LONG  ELEV   TAV   AMP REFHT WNDHT
  UFGA   29.630  -82.370  10.0  20.9   7.4  3.00  3.00
@DATE  SRAD  TMAX  TMIN  RAIN
82001  10.2  22.3   5.6   0.0
82002  11.5  23.0   6.1   2.4
";
        let table = parse(text);
        assert_eq!(table.section_count(), 2);
        assert_eq!(table.get_val("INSI").unwrap(), vec![Value::Str("UFGA".into())]);
        assert_eq!(table.get_val("LAT").unwrap(), vec![Value::Float(29.63)]);
        assert_eq!(
            table.get_val("TMAX").unwrap(),
            vec![Value::Float(22.3), Value::Float(23.0)]
        );
        assert!(table.has_variable("RAIN"));
        assert!(!table.has_variable("NOPE"));
    }

    #[test]
    fn test_find_rows_and_values_at() {
        let text = "\
@VAR#    ECO#    P1
IB0001  IB001 110.0
IB0002  IB002 212.0
IB0003  IB001 305.0
";
        let table = parse(text);
        let rows = table.find_rows("ECO#", "IB001").unwrap();
        assert_eq!(rows, vec![0, 2]);
        assert_eq!(
            table.values_at("P1", &rows).unwrap(),
            vec![Value::Float(110.0), Value::Float(305.0)]
        );
    }

    #[test]
    fn test_set_at_targets_only_given_rows() {
        let text = "\
@VAR#    P1
IB0001 110.0
IB0002 212.0
";
        let mut table = parse(text);
        table.set_at("P1", &[1], Value::Float(99.0)).unwrap();
        assert_eq!(
            table.get_val("P1").unwrap(),
            vec![Value::Float(110.0), Value::Float(99.0)]
        );
    }

    #[test]
    fn test_set_val_rejects_length_change() {
        let text = "@A  B\n1  2\n3  4\n";
        let mut table = parse(text);
        let err = table.set_val("A", vec![Value::Integer(9)]).unwrap_err();
        assert!(matches!(err, HarrowError::LengthMismatch { .. }));
    }

    #[test]
    fn test_unknown_variable() {
        let table = parse("@A  B\n1  2\n");
        let err = table.get_val("C").unwrap_err();
        assert!(matches!(err, HarrowError::UnknownVariable { .. }));
    }

    #[test]
    fn test_data_before_header_is_parse_error() {
        let err = ParamTable::parse_str("1 2 3\n", Path::new("bad.tbl")).unwrap_err();
        assert!(matches!(err, HarrowError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_comments_and_blanks_ignored() {
        let text = "\
! station metadata
@A   B
! mid-table note
1   2

3   4
";
        let table = parse(text);
        assert_eq!(
            table.get_val("A").unwrap(),
            vec![Value::Integer(1), Value::Integer(3)]
        );
    }

    #[test]
    fn test_short_row_pads_empty_fields() {
        let table = parse("@A   B   C\n1   2\n");
        assert_eq!(table.get_val("C").unwrap(), vec![Value::Str(String::new())]);
    }
}
