//! Token-level parsing shared by the interpreter and the shape factories.

use easel_engine::coords::Point;
use easel_engine::paint::Color;

use crate::error::CommandError;

/// Splits a command line on whitespace.
///
/// Blank lines and lines whose first non-blank character is `#` yield no tokens.
pub fn tokenize(line: &str) -> Vec<&str> {
    let trimmed = line.trim_start();
    if trimmed.starts_with('#') {
        return Vec::new();
    }
    trimmed.split_whitespace().collect()
}

/// Parses a finite number.
pub fn number(token: &str) -> Result<f32, CommandError> {
    match token.parse::<f32>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(CommandError::Format {
            token: token.to_string(),
            expected: "number",
        }),
    }
}

/// Parses `x y` coordinate pairs. The caller checks that `tokens` has even length.
pub fn points(tokens: &[&str]) -> Result<Vec<Point>, CommandError> {
    tokens
        .chunks_exact(2)
        .map(|pair| Ok(Point::new(number(pair[0])?, number(pair[1])?)))
        .collect()
}

pub fn color(token: &str) -> Result<Color, CommandError> {
    token
        .parse::<Color>()
        .map_err(|e| CommandError::InvalidArgument(e.to_string()))
}
