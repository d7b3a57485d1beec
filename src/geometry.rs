use std::ops::{Add, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    pub x: isize,
    pub y: isize,
}

impl Point {
    pub const fn new(x: isize, y: isize) -> Self {
        Point {x, y}
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl From<(isize, isize)> for Point {
    fn from((x, y): (isize, isize)) -> Self {
        Point::new(x, y)
    }
}

const CARDINAL: [Point; 4] = [Point::new(-1, 0), Point::new(1, 0), Point::new(0, -1), Point::new(0, 1)];
const DIAGONAL: [Point; 4] = [Point::new(-1, -1), Point::new(-1, 1), Point::new(1, -1), Point::new(1, 1)];

/// The 4 orthogonal neighbours of `point`, followed by the 4 diagonal ones when
/// `include_diagonals` is set. Nothing is bounds-checked.
pub fn neighbors(point: Point, include_diagonals: bool) -> Vec<Point> {
    let diagonals: &[Point] = if include_diagonals {&DIAGONAL} else {&[]};
    CARDINAL.iter().chain(diagonals).map(|&offset| point + offset).collect()
}

/// An inclusive range `start ..= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    pub start: i64,
    pub end: i64,
}

impl Range {
    pub fn new(start: i64, end: i64) -> Self {
        Range {start, end}
    }

    pub fn overlaps(&self, other: &Range) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.start ..= self.end).contains(&value)
    }
}
