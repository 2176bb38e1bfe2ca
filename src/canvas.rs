//! Character-cell surface that every task draws on.
//!
//! A `Canvas` is an in-memory rectangle of styled cells positioned somewhere
//! on the physical terminal.  Tasks draw and erase text fragments; the
//! display later copies the whole region to the screen in one go.

use crate::compute::to_cell;

/// Text attribute of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Attr {
    #[default]
    Normal,
    Dim,
    Bold,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub attr: Attr,
}

impl Cell {
    pub const BLANK: Cell = Cell { ch: ' ', attr: Attr::Normal };
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    rows: usize,
    columns: usize,
    origin_row: u16,
    origin_column: u16,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            origin_row: 0,
            origin_column: 0,
            cells: vec![Cell::BLANK; rows * columns],
        }
    }

    /// Place this region at an offset inside the terminal.
    pub fn with_origin(mut self, row: u16, column: u16) -> Self {
        self.origin_row = row;
        self.origin_column = column;
        self
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Last addressable row index.
    pub fn max_row(&self) -> usize {
        self.rows.saturating_sub(1)
    }

    /// Last addressable column index.
    pub fn max_column(&self) -> usize {
        self.columns.saturating_sub(1)
    }

    pub fn origin(&self) -> (u16, u16) {
        (self.origin_row, self.origin_column)
    }

    fn idx(&self, row: i32, column: i32) -> Option<usize> {
        if row < 0 || column < 0 {
            return None;
        }
        let (row, column) = (row as usize, column as usize);
        if row >= self.rows || column >= self.columns {
            return None;
        }
        Some(row * self.columns + column)
    }

    pub fn get(&self, row: i32, column: i32) -> Option<Cell> {
        self.idx(row, column).map(|i| self.cells[i])
    }

    /// Cells of one row, for rendering.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.columns;
        &self.cells[start..start + self.columns]
    }

    /// Write a single cell; coordinates outside the canvas are ignored.
    pub fn put(&mut self, row: i32, column: i32, ch: char, attr: Attr) {
        if let Some(i) = self.idx(row, column) {
            self.cells[i] = Cell { ch, attr };
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    /// Draw a multi-line fragment with its top-left corner at (`row`, `column`).
    ///
    /// Spaces are transparent.  With `erase` set every non-blank character
    /// is blanked instead, which undoes an earlier draw at the same spot.
    /// The bottom-right cell is never touched: terminals scroll when it is
    /// printed to.
    pub fn draw_frame(&mut self, row: f64, column: f64, text: &str, erase: bool) {
        let start_row = to_cell(row);
        let start_column = to_cell(column);
        let (last_row, last_column) = (self.max_row() as i32, self.max_column() as i32);

        for (dy, line) in text.lines().enumerate() {
            let row = start_row + dy as i32;
            if row < 0 {
                continue;
            }
            if row >= self.rows as i32 {
                break;
            }
            for (dx, symbol) in line.chars().enumerate() {
                let column = start_column + dx as i32;
                if column < 0 {
                    continue;
                }
                if column >= self.columns as i32 {
                    break;
                }
                if symbol == ' ' {
                    continue;
                }
                if row == last_row && column == last_column {
                    continue;
                }
                let symbol = if erase { ' ' } else { symbol };
                self.put(row, column, symbol, Attr::Normal);
            }
        }
    }

    /// Box-drawing frame on the outermost cells.
    pub fn draw_border(&mut self) {
        if self.rows < 2 || self.columns < 2 {
            return;
        }
        let (bottom, right) = (self.max_row() as i32, self.max_column() as i32);
        for column in 1..right {
            self.put(0, column, '─', Attr::Normal);
            self.put(bottom, column, '─', Attr::Normal);
        }
        for row in 1..bottom {
            self.put(row, 0, '│', Attr::Normal);
            self.put(row, right, '│', Attr::Normal);
        }
        self.put(0, 0, '┌', Attr::Normal);
        self.put(0, right, '┐', Attr::Normal);
        self.put(bottom, 0, '└', Attr::Normal);
        self.put(bottom, right, '┘', Attr::Normal);
    }
}

/// Number of rows and the widest line of a multi-line fragment.
pub fn frame_size(text: &str) -> (usize, usize) {
    let rows = text.lines().count();
    let columns = text.lines().map(|line| line.chars().count()).max().unwrap_or(0);
    (rows, columns)
}
