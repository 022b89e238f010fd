//! Exercise 6.2: Laying Out a Table
//!
//! Given a grid of table cells, build one string holding a table whose
//! columns are straight and whose rows are aligned:
//!
//! ```text
//! name         height country
//! ------------ ------ -------------
//! Kilimanjaro    5895 Tanzania
//! Everest        8848 Nepal
//! ```
//!
//! The layout code talks to cells only through the [`Cell`] trait:
//!
//! - `min_width` / `min_height`: how much room the cell needs
//! - `draw(width, height)`: exactly `height` lines of exactly `width` columns
//!
//! ```text
//! render(grid)
//!   ↓
//!   plan(grid)                     measurement pass
//!     row_heights[r] = max_c min_height
//!     col_widths[c]  = max_r min_width
//!   ↓
//!   for each row, for each cell    draw pass
//!     cell.draw(col_widths[c], row_heights[r])
//!   ↓
//!   zip line l of every block, join with the column separator
//! ```
//!
//! New cell styles plug in by implementing [`Cell`]; decorators such as
//! [`UnderlinedCell`] and [`StretchCell`] wrap another cell and own it.
//!
//! Widths are terminal display columns (via `unicode-width`), so wide
//! characters take two columns.

use std::fmt;

use serde::Deserialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use eloquent_common::dataset::{MOUNTAINS_JSON, parse_records};

// ============================================================================
// Errors
// ============================================================================

/// Errors raised while building or rendering a table.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TableError {
    /// A row's cell count differs from the first row's.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A cell drew a block of the wrong size.
    #[error(
        "cell at row {row}, column {col} drew {drawn_width}x{drawn_height}, expected {width}x{height}"
    )]
    CellSize {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
        drawn_width: usize,
        drawn_height: usize,
    },

    /// A record lacks one of the keys of the first record.
    #[error("record {row} has no field '{key}'")]
    MissingField { row: usize, key: String },

    /// The table style cannot produce aligned output.
    #[error("invalid table style: {0}")]
    InvalidStyle(String),

    /// The record data could not be loaded.
    #[error(transparent)]
    Data(#[from] eloquent_common::Error),
}

pub type Result<T> = std::result::Result<T, TableError>;

// ============================================================================
// The cell interface
// ============================================================================

/// A table cell.
///
/// `draw(width, height)` must return exactly `height` strings, each exactly
/// `width` display columns wide, whenever `width >= min_width()` and
/// `height >= min_height()`.
pub trait Cell: fmt::Debug {
    fn min_width(&self) -> usize;
    fn min_height(&self) -> usize;
    fn draw(&self, width: usize, height: usize) -> Vec<String>;
}

impl<C: Cell + ?Sized> Cell for Box<C> {
    fn min_width(&self) -> usize {
        (**self).min_width()
    }

    fn min_height(&self) -> usize {
        (**self).min_height()
    }

    fn draw(&self, width: usize, height: usize) -> Vec<String> {
        (**self).draw(width, height)
    }
}

/// Rows of boxed cells.
pub type Grid = Vec<Vec<Box<dyn Cell>>>;

// ============================================================================
// Text cells
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

/// Longest prefix of `line` that fits in `width` columns.
fn fit_to_width(line: &str, width: usize) -> &str {
    let mut used = 0;
    for (idx, ch) in line.char_indices() {
        used += ch.width().unwrap_or(0);
        if used > width {
            return &line[..idx];
        }
    }
    line
}

fn draw_lines(lines: &[String], width: usize, height: usize, align: Align) -> Vec<String> {
    (0..height)
        .map(|i| {
            let line = fit_to_width(lines.get(i).map_or("", String::as_str), width);
            let padding = " ".repeat(width.saturating_sub(line.width()));
            match align {
                Align::Left => format!("{line}{padding}"),
                Align::Right => format!("{padding}{line}"),
            }
        })
        .collect()
}

fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

fn widest(lines: &[String]) -> usize {
    lines.iter().map(|line| line.width()).max().unwrap_or(0)
}

/// Left-aligned text, one stored line per `\n`-separated piece.
///
/// Lines wider than the requested width are cut at the last character that
/// fits, and lines beyond the requested height are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextCell {
    lines: Vec<String>,
}

impl TextCell {
    pub fn new(text: &str) -> Self {
        TextCell {
            lines: split_lines(text),
        }
    }

    /// A cell holding `lines` as-is; an empty vector gives a 0x0 cell.
    pub fn from_lines(lines: Vec<String>) -> Self {
        TextCell { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Cell for TextCell {
    fn min_width(&self) -> usize {
        widest(&self.lines)
    }

    fn min_height(&self) -> usize {
        self.lines.len()
    }

    fn draw(&self, width: usize, height: usize) -> Vec<String> {
        draw_lines(&self.lines, width, height, Align::Left)
    }
}

/// Right-aligned text. Same storage and sizing as [`TextCell`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RTextCell {
    lines: Vec<String>,
}

impl RTextCell {
    pub fn new(text: &str) -> Self {
        RTextCell {
            lines: split_lines(text),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Cell for RTextCell {
    fn min_width(&self) -> usize {
        widest(&self.lines)
    }

    fn min_height(&self) -> usize {
        self.lines.len()
    }

    fn draw(&self, width: usize, height: usize) -> Vec<String> {
        draw_lines(&self.lines, width, height, Align::Right)
    }
}

// ============================================================================
// Decorators
// ============================================================================

/// Draws the inner cell with one line of underline characters below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnderlinedCell<C> {
    inner: C,
    underline: char,
}

impl<C: Cell> UnderlinedCell<C> {
    pub fn new(inner: C) -> Self {
        Self::with_underline(inner, '-')
    }

    pub fn with_underline(inner: C, underline: char) -> Self {
        UnderlinedCell { inner, underline }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C: Cell> Cell for UnderlinedCell<C> {
    fn min_width(&self) -> usize {
        self.inner.min_width()
    }

    fn min_height(&self) -> usize {
        self.inner.min_height() + 1
    }

    fn draw(&self, width: usize, height: usize) -> Vec<String> {
        // No room for the underline itself.
        if height == 0 {
            return Vec::new();
        }
        let mut block = self.inner.draw(width, height - 1);
        block.push(self.underline.to_string().repeat(width));
        block
    }
}

/// Makes the inner cell at least `width` by `height`.
///
/// Drawing forwards to the inner cell at the requested size; text cells pad
/// to any size at or above their minimum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StretchCell<C> {
    inner: C,
    width: usize,
    height: usize,
}

impl<C: Cell> StretchCell<C> {
    pub fn new(inner: C, width: usize, height: usize) -> Self {
        StretchCell {
            inner,
            width,
            height,
        }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C: Cell> Cell for StretchCell<C> {
    fn min_width(&self) -> usize {
        self.inner.min_width().max(self.width)
    }

    fn min_height(&self) -> usize {
        self.inner.min_height().max(self.height)
    }

    fn draw(&self, width: usize, height: usize) -> Vec<String> {
        self.inner.draw(width, height)
    }
}

// ============================================================================
// Layout planner
// ============================================================================

/// Per-row heights and per-column widths for a grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Layout {
    pub row_heights: Vec<usize>,
    pub col_widths: Vec<usize>,
}

/// Column count of a rectangular grid (taken from the first row).
fn check_shape<C: Cell>(rows: &[Vec<C>]) -> Result<usize> {
    let expected = rows.first().map_or(0, Vec::len);
    for (row, cells) in rows.iter().enumerate() {
        if cells.len() != expected {
            tracing::warn!(row, expected, found = cells.len(), "ragged table row");
            return Err(TableError::RaggedRow {
                row,
                expected,
                found: cells.len(),
            });
        }
    }
    Ok(expected)
}

/// Tallest cell of each row; 0 for an empty row.
pub fn row_heights<C: Cell>(rows: &[Vec<C>]) -> Vec<usize> {
    rows.iter()
        .map(|row| row.iter().map(Cell::min_height).max().unwrap_or(0))
        .collect()
}

/// Widest cell of each column.
///
/// The grid must be rectangular; a short or long row is an error rather than
/// being padded or truncated.
pub fn col_widths<C: Cell>(rows: &[Vec<C>]) -> Result<Vec<usize>> {
    let cols = check_shape(rows)?;
    Ok((0..cols)
        .map(|c| rows.iter().map(|row| row[c].min_width()).max().unwrap_or(0))
        .collect())
}

/// Measurement pass: sizes for every row and column.
pub fn plan<C: Cell>(rows: &[Vec<C>]) -> Result<Layout> {
    let col_widths = col_widths(rows)?;
    let row_heights = row_heights(rows);
    tracing::debug!(?row_heights, ?col_widths, "planned table layout");
    Ok(Layout {
        row_heights,
        col_widths,
    })
}

// ============================================================================
// Renderer
// ============================================================================

/// Rendering options.
///
/// Deserializes from JSON with every field optional, e.g.
/// `{"column_separator": " | "}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableStyle {
    /// Placed between adjacent columns.
    pub column_separator: String,
    /// Repeated under header cells by [`data_table_with`].
    pub underline: char,
}

impl Default for TableStyle {
    fn default() -> Self {
        TableStyle {
            column_separator: " ".to_string(),
            underline: '-',
        }
    }
}

impl TableStyle {
    /// Parses and validates a JSON style.
    pub fn from_json(json: &str) -> Result<Self> {
        let style: TableStyle =
            serde_json::from_str(json).map_err(eloquent_common::Error::from)?;
        style.validate()?;
        Ok(style)
    }

    /// Rejects styles that would break line or column alignment.
    pub fn validate(&self) -> Result<()> {
        if self.column_separator.contains('\n') {
            return Err(TableError::InvalidStyle(
                "column separator must not contain a newline".to_string(),
            ));
        }
        if self.underline.width() != Some(1) {
            return Err(TableError::InvalidStyle(format!(
                "underline {:?} must be one column wide",
                self.underline
            )));
        }
        Ok(())
    }
}

fn check_block(block: &[String], row: usize, col: usize, width: usize, height: usize) -> Result<()> {
    let drawn_width = block
        .iter()
        .map(|line| line.width())
        .find(|&w| w != width)
        .unwrap_or(width);
    if block.len() != height || drawn_width != width {
        return Err(TableError::CellSize {
            row,
            col,
            width,
            height,
            drawn_width,
            drawn_height: block.len(),
        });
    }
    Ok(())
}

/// Renders `rows` with the default style: columns separated by one space,
/// lines and rows separated by `\n`.
///
/// # Example
/// ```
/// use eloquent_chapter6::exercise_6_2::*;
///
/// let left = |s: &str| -> Box<dyn Cell> { Box::new(TextCell::new(s)) };
/// let right = |s: &str| -> Box<dyn Cell> { Box::new(RTextCell::new(s)) };
/// let grid: Grid = vec![vec![left("x"), left("yy")], vec![left("z"), right("w")]];
/// assert_eq!(render(&grid).unwrap(), "x yy\nz  w");
/// ```
pub fn render<C: Cell>(rows: &[Vec<C>]) -> Result<String> {
    render_with(rows, &TableStyle::default())
}

/// Renders `rows` with an explicit style.
pub fn render_with<C: Cell>(rows: &[Vec<C>], style: &TableStyle) -> Result<String> {
    let layout = plan(rows)?;

    let mut drawn_rows = Vec::with_capacity(rows.len());
    for (r, row) in rows.iter().enumerate() {
        let height = layout.row_heights[r];
        let mut blocks = Vec::with_capacity(row.len());
        for (c, cell) in row.iter().enumerate() {
            let width = layout.col_widths[c];
            let block = cell.draw(width, height);
            check_block(&block, r, c, width, height)?;
            blocks.push(block);
        }

        let lines: Vec<String> = (0..height)
            .map(|line_no| {
                blocks
                    .iter()
                    .map(|block| block[line_no].as_str())
                    .collect::<Vec<_>>()
                    .join(&style.column_separator)
            })
            .collect();
        drawn_rows.push(lines.join("\n"));
    }

    Ok(drawn_rows.join("\n"))
}

// ============================================================================
// Table builder
// ============================================================================

/// A record field value, classified once when the record is loaded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    /// Numbers are right-aligned, text is left-aligned.
    pub fn to_cell(&self) -> Box<dyn Cell> {
        match self {
            Value::Number(n) => Box::new(RTextCell::new(&n.to_string())),
            Value::Text(s) => Box::new(TextCell::new(s)),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

/// A flat record whose fields keep their source order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "serde_json::Map<String, serde_json::Value>")]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Record {
            fields: fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}

impl TryFrom<serde_json::Map<String, serde_json::Value>> for Record {
    type Error = serde_json::Error;

    fn try_from(
        map: serde_json::Map<String, serde_json::Value>,
    ) -> std::result::Result<Self, Self::Error> {
        let fields = map
            .into_iter()
            .map(|(key, value)| -> serde_json::Result<(String, Value)> {
                Ok((key, serde_json::from_value(value)?))
            })
            .collect::<serde_json::Result<Vec<_>>>()?;
        Ok(Record { fields })
    }
}

/// Parses a JSON array of flat records.
pub fn parse_table_records(json: &str) -> Result<Vec<Record>> {
    Ok(parse_records(json)?)
}

/// The embedded mountains dataset.
pub fn mountains() -> Result<Vec<Record>> {
    parse_table_records(MOUNTAINS_JSON)
}

/// Builds a grid with the default style. See [`data_table_with`].
pub fn data_table(records: &[Record]) -> Result<Grid> {
    data_table_with(records, &TableStyle::default())
}

/// Builds a grid from uniform records.
///
/// Row 0 holds one underlined header per key of the first record; each record
/// then becomes a row with its values in the same key order.
pub fn data_table_with(records: &[Record], style: &TableStyle) -> Result<Grid> {
    let Some(first) = records.first() else {
        return Ok(Vec::new());
    };
    let keys: Vec<&str> = first.keys().collect();

    let headers: Vec<Box<dyn Cell>> = keys
        .iter()
        .map(|key| {
            Box::new(UnderlinedCell::with_underline(TextCell::new(key), style.underline))
                as Box<dyn Cell>
        })
        .collect();

    let mut grid = Vec::with_capacity(records.len() + 1);
    grid.push(headers);
    for (row, record) in records.iter().enumerate() {
        let cells = keys
            .iter()
            .map(|&key| {
                record
                    .get(key)
                    .map(Value::to_cell)
                    .ok_or_else(|| TableError::MissingField {
                        row,
                        key: key.to_string(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        grid.push(cells);
    }
    tracing::debug!(rows = grid.len(), cols = keys.len(), "built data table");
    Ok(grid)
}

/// Wraps every cell from row `from_row` on in a [`StretchCell`].
pub fn stretch_rows(grid: Grid, from_row: usize, width: usize, height: usize) -> Grid {
    grid.into_iter()
        .enumerate()
        .map(|(r, row)| {
            if r < from_row {
                row
            } else {
                row.into_iter()
                    .map(|cell| Box::new(StretchCell::new(cell, width, height)) as Box<dyn Cell>)
                    .collect()
            }
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> Box<dyn Cell> {
        Box::new(TextCell::new(s))
    }

    /// Draws fewer lines than asked for.
    #[derive(Debug)]
    struct ShortCell;

    impl Cell for ShortCell {
        fn min_width(&self) -> usize {
            1
        }

        fn min_height(&self) -> usize {
            1
        }

        fn draw(&self, _width: usize, _height: usize) -> Vec<String> {
            Vec::new()
        }
    }

    const MOUNTAIN_TABLE: &str = concat!(
        "name         height country      \n",
        "------------ ------ -------------\n",
        "Kilimanjaro    5895 Tanzania     \n",
        "Everest        8848 Nepal        \n",
        "Mount Fuji     3776 Japan        \n",
        "Mont Blanc     4808 Italy/France \n",
        "Vaalserberg     323 Netherlands  \n",
        "Denali         6168 United States\n",
        "Popocatepetl   5465 Mexico       ",
    );

    #[test]
    fn test_text_cell() {
        let cell = TextCell::new("abc");
        assert_eq!(cell.min_width(), 3);
        assert_eq!(cell.min_height(), 1);
        assert_eq!(cell.draw(5, 1), vec!["abc  "]);
    }

    #[test]
    fn test_text_cell_multiline() {
        let cell = TextCell::new("This\nwould\nbe\nfive\nvalues");
        assert_eq!(cell.lines().len(), 5);
        assert_eq!(cell.min_width(), 6);
        assert_eq!(cell.min_height(), 5);
        assert_eq!(cell.draw(6, 6)[5], "      ");
    }

    #[test]
    fn test_empty_text_is_one_blank_line() {
        let cell = TextCell::new("");
        assert_eq!(cell.min_width(), 0);
        assert_eq!(cell.min_height(), 1);
        assert_eq!(cell.draw(2, 1), vec!["  "]);
    }

    #[test]
    fn test_cell_without_lines_is_empty() {
        let cell = TextCell::from_lines(Vec::new());
        assert_eq!((cell.min_width(), cell.min_height()), (0, 0));
        assert_eq!(cell.draw(2, 2), vec!["  ", "  "]);
    }

    #[test]
    fn test_rtext_cell_pads_on_the_left() {
        let cell = RTextCell::new("5895");
        assert_eq!(cell.min_width(), 4);
        assert_eq!(cell.draw(6, 1), vec!["  5895"]);
    }

    #[test]
    fn test_text_cell_truncates_when_too_narrow() {
        let cell = TextCell::new("abcdef\nxy");
        assert_eq!(cell.draw(3, 1), vec!["abc"]);
        assert_eq!(RTextCell::new("abcdef").draw(2, 1), vec!["ab"]);
    }

    #[test]
    fn test_wide_characters_use_display_width() {
        let cell = TextCell::new("日本");
        assert_eq!(cell.min_width(), 4);
        assert_eq!(cell.draw(5, 1), vec!["日本 "]);
        // A wide character that does not fit is dropped and padded over.
        assert_eq!(cell.draw(3, 1), vec!["日 "]);
    }

    #[test]
    fn test_underlined_cell() {
        let cell = UnderlinedCell::new(TextCell::new("name"));
        assert_eq!(cell.min_width(), 4);
        assert_eq!(cell.min_height(), 2);
        assert_eq!(cell.draw(6, 3), vec!["name  ", "      ", "------"]);
        assert_eq!(cell.inner().lines(), ["name"]);
    }

    #[test]
    fn test_underlined_cell_zero_height() {
        let cell = UnderlinedCell::new(TextCell::new("name"));
        assert!(cell.draw(4, 0).is_empty());
    }

    #[test]
    fn test_stretch_cell() {
        let cell = StretchCell::new(TextCell::new("abc"), 1, 2);
        assert_eq!(cell.min_width(), 3);
        assert_eq!(cell.min_height(), 2);
        assert_eq!(cell.draw(3, 2), vec!["abc", "   "]);
    }

    #[test]
    fn test_stretch_cell_grows_width() {
        let cell = StretchCell::new(RTextCell::new("7"), 4, 0);
        assert_eq!(cell.min_width(), 4);
        assert_eq!(cell.min_height(), 1);
        assert_eq!(cell.draw(4, 1), vec!["   7"]);
    }

    #[test]
    fn test_decorators_compose() {
        let cell = UnderlinedCell::new(StretchCell::new(TextCell::new("ab"), 3, 2));
        assert_eq!(cell.min_width(), 3);
        assert_eq!(cell.min_height(), 3);
        assert_eq!(cell.draw(3, 3), vec!["ab ", "   ", "---"]);
    }

    #[test]
    fn test_plan_two_by_two() {
        let grid: Grid = vec![vec![text("x"), text("yy")], vec![text("z"), text("w")]];
        let layout = plan(&grid).unwrap();
        assert_eq!(layout.col_widths, vec![1, 2]);
        assert_eq!(layout.row_heights, vec![1, 1]);
        assert_eq!(render(&grid).unwrap(), "x yy\nz w ");
    }

    #[test]
    fn test_row_height_follows_tallest_cell() {
        let grid: Grid = vec![vec![text("a\nb\nc"), text("d")], vec![text("e"), text("f")]];
        assert_eq!(row_heights(&grid), vec![3, 1]);
        assert_eq!(render(&grid).unwrap(), "a d\nb  \nc  \ne f");
    }

    #[test]
    fn test_ragged_grid_is_rejected() {
        let grid: Grid = vec![vec![text("a"), text("b")], vec![text("c")]];
        match plan(&grid) {
            Err(TableError::RaggedRow {
                row,
                expected,
                found,
            }) => {
                assert_eq!((row, expected, found), (1, 2, 1));
            }
            other => panic!("expected RaggedRow, got {other:?}"),
        }
        assert!(render(&grid).is_err());
    }

    #[test]
    fn test_empty_grid_renders_empty() {
        let grid: Grid = Vec::new();
        assert_eq!(plan(&grid).unwrap(), Layout::default());
        assert_eq!(render(&grid).unwrap(), "");
    }

    #[test]
    fn test_zero_column_rows_render_empty() {
        let grid: Grid = vec![Vec::new(), Vec::new()];
        assert_eq!(row_heights(&grid), vec![0, 0]);
        assert_eq!(render(&grid).unwrap(), "\n");
    }

    #[test]
    fn test_misbehaving_cell_is_reported() {
        let grid: Vec<Vec<Box<dyn Cell>>> = vec![vec![text("a"), Box::new(ShortCell) as Box<dyn Cell>]];
        match render(&grid) {
            Err(TableError::CellSize {
                row,
                col,
                height,
                drawn_height,
                ..
            }) => {
                assert_eq!((row, col), (0, 1));
                assert_eq!((height, drawn_height), (1, 0));
            }
            other => panic!("expected CellSize, got {other:?}"),
        }
    }

    #[test]
    fn test_render_is_repeatable() {
        let grid = data_table(&mountains().unwrap()).unwrap();
        let first = render(&grid).unwrap();
        let second = render(&grid).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_mountain_table() {
        let grid = data_table(&mountains().unwrap()).unwrap();
        assert_eq!(render(&grid).unwrap(), MOUNTAIN_TABLE);
    }

    #[test]
    fn test_custom_style() {
        let style = TableStyle::from_json(r#"{"column_separator": " | ", "underline": "="}"#).unwrap();
        let records = vec![Record::new([("id", Value::from(7.0)), ("tag", Value::from("ok"))])];
        let grid = data_table_with(&records, &style).unwrap();
        assert_eq!(render_with(&grid, &style).unwrap(), "id | tag\n== | ===\n 7 | ok ");
    }

    #[test]
    fn test_style_defaults_and_validation() {
        assert_eq!(TableStyle::from_json("{}").unwrap(), TableStyle::default());
        assert!(matches!(
            TableStyle::from_json(r#"{"underline": "日"}"#),
            Err(TableError::InvalidStyle(_))
        ));
        assert!(matches!(
            TableStyle::from_json(r#"{"column_separator": "\n"}"#),
            Err(TableError::InvalidStyle(_))
        ));
        assert!(matches!(
            TableStyle::from_json(r#"{"colour": "red"}"#),
            Err(TableError::Data(_))
        ));
    }

    #[test]
    fn test_record_keeps_field_order() {
        let records =
            parse_table_records(r#"[{"zeta": 1, "alpha": "a", "mid": 2.5}]"#).unwrap();
        let keys: Vec<&str> = records[0].keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(records[0].get("zeta"), Some(&Value::Number(1.0)));
        assert_eq!(records[0].get("alpha"), Some(&Value::Text("a".to_string())));
        assert_eq!(records[0].get("missing"), None);
    }

    #[test]
    fn test_numbers_format_without_trailing_zero() {
        let cell = Value::Number(323.0).to_cell();
        assert_eq!(cell.draw(5, 1), vec!["  323"]);
        let cell = Value::Number(2.5).to_cell();
        assert_eq!(cell.draw(3, 1), vec!["2.5"]);
    }

    #[test]
    fn test_non_flat_values_are_rejected() {
        assert!(parse_table_records(r#"[{"ok": true}]"#).is_err());
        assert!(parse_table_records(r#"[{"nested": {"a": 1}}]"#).is_err());
    }

    #[test]
    fn test_data_table_missing_field() {
        let records = vec![
            Record::new([("a", Value::from(1.0)), ("b", Value::from("x"))]),
            Record::new([("a", Value::from(2.0))]),
        ];
        match data_table(&records) {
            Err(TableError::MissingField { row, key }) => {
                assert_eq!(row, 1);
                assert_eq!(key, "b");
            }
            Err(other) => panic!("expected MissingField, got {other:?}"),
            Ok(_) => panic!("expected MissingField, got a grid"),
        }
    }

    #[test]
    fn test_data_table_empty() {
        let grid = data_table(&[]).unwrap();
        assert!(grid.is_empty());
    }

    #[test]
    fn test_stretch_rows_leaves_header_alone() {
        let records = vec![Record::new([("n", Value::from(1.0))])];
        let grid = stretch_rows(data_table(&records).unwrap(), 1, 3, 2);
        assert_eq!(row_heights(&grid), vec![2, 2]);
        assert_eq!(render(&grid).unwrap(), "n  \n---\n  1\n   ");
    }
}
