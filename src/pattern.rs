use crate::error::{Error, Result};
use regex::{Captures, Regex};

/// Runs `transform` over every match of `pattern` in `text`, in order.
///
/// The first failing transform aborts the whole extraction.
pub fn extract_pattern<T, F>(text: &str, pattern: &str, mut transform: F) -> Result<Vec<T>>
where
    F: FnMut(&Captures<'_>) -> Result<T>,
{
    let regex = Regex::new(pattern)?;
    regex.captures_iter(text).map(|captures| transform(&captures)).collect()
}

/// Groups 1 and 2 of a match as integers.
pub fn int_pair(captures: &Captures<'_>) -> Result<(i64, i64)> {
    let group = |index| captures.get(index)
        .map(|group| group.as_str())
        .ok_or_else(|| Error::malformed(&captures[0]));
    Ok((group(1)?.parse()?, group(2)?.parse()?))
}
