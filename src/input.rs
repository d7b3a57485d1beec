//! Turning puzzle input into lines, numbers, grids and precedence rules.

use crate::error::{Error, Result};
use crate::grid::Grid;
use std::{fs, path::Path};

/// Trimmed lines of `text`.
pub fn parse_lines(text: &str) -> Vec<String> {
    text.lines().map(|line| line.trim().to_owned()).collect()
}

/// Trimmed lines of the file at `path`.
pub fn parse_input(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let lines = parse_lines(&fs::read_to_string(path)?);
    tracing::debug!(path = %path.display(), lines = lines.len(), "read input");
    Ok(lines)
}

/// One integer per line; blank lines are skipped.
pub fn parse_ints(path: impl AsRef<Path>) -> Result<Vec<i64>> {
    parse_input(path)?.iter()
        .filter(|line| !line.is_empty())
        .map(|line| line.parse::<i64>().map_err(Error::from))
        .collect()
}

pub fn parse_grid(path: impl AsRef<Path>) -> Result<Grid> {
    fs::read_to_string(path)?.parse()
}

/// Comma-separated integers, e.g. `75,47,61`.
pub fn parse_list(line: &str) -> Result<Vec<i64>> {
    line.split(',').map(|n| n.trim().parse().map_err(|_| Error::malformed(line))).collect()
}

/// A single `x|y` precedence rule.
pub fn parse_edge(line: &str) -> Result<(i64, i64)> {
    let Some((x, y)) = line.split_once('|') else {return Err(Error::malformed(line))};
    let parse = |n: &str| n.trim().parse().map_err(|_| Error::malformed(line));
    Ok((parse(x)?, parse(y)?))
}

/// `x|y` rules, a blank line, then comma-separated node lists.
///
/// A text without the blank separator holds only rules.
pub fn parse_precedence(text: &str) -> Result<(Vec<(i64, i64)>, Vec<Vec<i64>>)> {
    let mut lines = text.trim().lines().map(str::trim);
    let edges = lines.by_ref()
        .take_while(|line| !line.is_empty())
        .map(parse_edge)
        .collect::<Result<Vec<_>>>()?;
    let lists = lines
        .filter(|line| !line.is_empty())
        .map(parse_list)
        .collect::<Result<Vec<_>>>()?;
    Ok((edges, lists))
}
