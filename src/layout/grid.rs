use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSegment {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl LineSegment {
    pub fn is_horizontal(&self) -> bool {
        self.y1 == self.y2
    }
}

/// Page grid: `hours * inner_rows` rows by `days * inner_cols` columns,
/// sized to fit the available area. Leftover points stay unused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    pub rows: u32,
    pub cols: u32,
    pub inner_rows: u32,
    pub inner_cols: u32,
    pub row_height: i32,
    pub col_width: i32,
}

impl GridGeometry {
    pub fn new(
        available_width: i32,
        available_height: i32,
        hours: u32,
        inner_rows: u32,
        days: u32,
        inner_cols: u32,
    ) -> AppResult<Self> {
        let rows = hours * inner_rows;
        let cols = days * inner_cols;
        if rows == 0 || cols == 0 {
            return Err(AppError::Configuration(format!(
                "grid needs at least one row and column, got {rows} rows and {cols} columns"
            )));
        }

        let row_height = available_height / rows as i32;
        let col_width = available_width / cols as i32;
        if row_height <= 0 || col_width <= 0 {
            return Err(AppError::Configuration(format!(
                "page too small for {rows} rows x {cols} columns (row height {row_height}, column width {col_width})"
            )));
        }

        log::debug!("Row height: {row_height}, Column width: {col_width}");

        Ok(Self {
            rows,
            cols,
            inner_rows,
            inner_cols,
            row_height,
            col_width,
        })
    }

    pub fn width(&self) -> i32 {
        self.col_width * self.cols as i32
    }

    pub fn height(&self) -> i32 {
        self.row_height * self.rows as i32
    }

    pub fn day_width(&self) -> i32 {
        self.col_width * self.inner_cols as i32
    }

    /// Left edge of the day slot `slot` on its page.
    pub fn day_x(&self, slot: u32) -> i32 {
        slot as i32 * self.day_width()
    }

    /// Every sub-row and sub-column boundary.
    pub fn fine_lines(&self) -> Vec<LineSegment> {
        grid_lines(self.rows, self.cols, self.row_height, self.col_width)
    }

    /// Hour and day boundaries only.
    pub fn coarse_lines(&self) -> Vec<LineSegment> {
        grid_lines(
            self.rows / self.inner_rows,
            self.cols / self.inner_cols,
            self.row_height * self.inner_rows as i32,
            self.col_width * self.inner_cols as i32,
        )
    }
}

fn grid_lines(rows: u32, cols: u32, row_height: i32, col_width: i32) -> Vec<LineSegment> {
    let grid_width = col_width * cols as i32 + 1;
    let grid_height = row_height * rows as i32 + 1;

    // Horizontal lines ---
    let horizontal = (0..grid_height)
        .step_by(row_height as usize)
        .map(|y| LineSegment {
            x1: 0,
            y1: y,
            x2: grid_width,
            y2: y,
        });

    // Vertical lines |
    let vertical = (0..grid_width)
        .step_by(col_width as usize)
        .map(|x| LineSegment {
            x1: x,
            y1: 0,
            x2: x,
            y2: grid_height,
        });

    horizontal.chain(vertical).collect()
}
