use crate::error::{Error, Result};
use itertools::{iproduct, Itertools};
use std::{fmt, str::FromStr};

/// The 8 compass directions as `(dx, dy)`, rows growing downwards.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// A rectangular grid of single-byte cells.
///
/// Rows are taken as raw bytes, so a non-ASCII character occupies one column
/// per byte of its UTF-8 encoding and rows mixing such characters with ASCII
/// may be rejected as ragged.
///
/// Positions are `(x, y)`, column first. They are signed so that a probe may
/// walk off the edge and be rejected instead of wrapping around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<u8>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Builds a grid from equal-length rows.
    pub fn new<R: AsRef<[u8]>>(lines: impl IntoIterator<Item = R>) -> Result<Self> {
        let mut cells = Vec::new();
        let mut cols = None;
        let mut rows = 0;
        for (row, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            let expected = *cols.get_or_insert(line.len());
            if line.len() != expected {
                return Err(Error::RaggedRow {row, expected, found: line.len()});
            }
            cells.extend_from_slice(line);
            rows = row + 1;
        }
        Ok(Grid {cells, rows, cols: cols.unwrap_or(0)})
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_valid_position(&self, x: isize, y: isize) -> bool {
        (0 .. self.cols as isize).contains(&x) && (0 .. self.rows as isize).contains(&y)
    }

    fn offset(&self, x: isize, y: isize) -> Option<usize> {
        self.is_valid_position(x, y).then(|| y as usize * self.cols + x as usize)
    }

    pub fn get(&self, x: isize, y: isize) -> Result<u8> {
        self.offset(x, y).map(|at| self.cells[at]).ok_or(Error::OutOfBounds {x, y})
    }

    /// Like [`Grid::get`], but yields `default` off the grid instead of failing.
    pub fn get_or(&self, x: isize, y: isize, default: u8) -> u8 {
        self.offset(x, y).map_or(default, |at| self.cells[at])
    }

    pub fn set(&mut self, x: isize, y: isize, value: u8) -> Result<()> {
        let at = self.offset(x, y).ok_or(Error::OutOfBounds {x, y})?;
        self.cells[at] = value;
        Ok(())
    }

    /// All positions holding `value`, in row-major order.
    pub fn positions(&self, value: u8) -> impl Iterator<Item = (isize, isize)> + '_ {
        self.cells.iter().positions(move |&cell| cell == value)
            .map(move |at| ((at % self.cols) as isize, (at / self.cols) as isize))
    }

    /// Whether `word` is spelled out from `(start_x, start_y)` stepping by `(dx, dy)`.
    ///
    /// The last cell is bounds-checked before anything is compared. An empty word
    /// never matches.
    pub fn check_direction(
        &self, start_x: isize, start_y: isize, dx: isize, dy: isize, word: &[u8],
    ) -> bool {
        let Some(last) = word.len().checked_sub(1) else {return false};
        let cell = |step: usize| -> Option<usize> {
            let step = isize::try_from(step).ok()?;
            let x = dx.checked_mul(step)?.checked_add(start_x)?;
            let y = dy.checked_mul(step)?.checked_add(start_y)?;
            self.offset(x, y)
        };
        if cell(last).is_none() {
            return false;
        }
        word.iter().enumerate().all(|(step, &expected)|
            cell(step).is_some_and(|at| self.cells[at] == expected)
        )
    }

    /// Counts occurrences of `word` in all 8 directions.
    ///
    /// Every (start, direction) pair is a separate occurrence, so overlapping
    /// matches all count and a one-letter word counts 8 times per matching cell.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn find_word<W: AsRef<[u8]>>(&self, word: W) -> usize {
        let word = word.as_ref();
        let Some(&first) = word.first() else {return 0};
        let count: usize = self.positions(first).map(|(x, y)|
            DIRECTIONS.iter()
                .filter(|&&(dx, dy)| self.check_direction(x, y, dx, dy, word))
                .count()
        ).sum();
        tracing::debug!(word = %String::from_utf8_lossy(word), count);
        count
    }

    /// Counts three-letter `word`s crossed in an X around a shared middle letter,
    /// each diagonal read in either direction. Words of any other length never match.
    pub fn count_crosses<W: AsRef<[u8]>>(&self, word: W) -> usize {
        let &[head, pivot, tail] = word.as_ref() else {return 0};
        if self.rows < 3 || self.cols < 3 {
            return 0;
        }
        let arm = |a: u8, b: u8| a == head && b == tail || a == tail && b == head;
        iproduct!(1 .. self.rows as isize - 1, 1 .. self.cols as isize - 1).filter(|&(y, x)| {
            let at = |dx: isize, dy: isize| self.cells[(y + dy) as usize * self.cols + (x + dx) as usize];
            at(0, 0) == pivot && arm(at(-1, -1), at(1, 1)) && arm(at(1, -1), at(-1, 1))
        }).count()
    }

    /// Counts `MAS` crosses pivoting on an `A` (the "X-MAS" pattern).
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn find_cross_pattern(&self) -> usize {
        let count = self.count_crosses(b"MAS");
        tracing::debug!(count);
        count
    }
}

impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Grid::new(s.trim().lines().map(str::trim))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.cells.chunks(self.cols.max(1)).map(String::from_utf8_lossy).join("\n");
        f.write_str(&text)
    }
}
