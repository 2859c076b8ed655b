use crate::*;
use std::fmt;

/// Controls how [`parse_vertices_with`] treats tokens that are not numbers.
///
/// The compatible default is lenient: a malformed token becomes `0.0`.
/// Enable `strict_numeric` to reject the input instead.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub strict_numeric: bool,
}

/// Failure to extract at least one coordinate pair from the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Fewer than two comma-separated values, cannot form a point.
    TooFewValues { input: String },
    /// A token failed to parse as a number (strict mode only).
    InvalidNumber { token: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::TooFewValues { input } => {
                write!(f, "vertex list [{}] does not define a point", input)
            }
            ParseError::InvalidNumber { token } => {
                write!(f, "vertex value [{}] is not a number", token)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a textual coordinate list into points with the lenient defaults.
///
/// See [`parse_vertices_with`].
pub fn parse_vertices(s: &str) -> Result<Vec<Point2>, ParseError> {
    parse_vertices_with(s, ParseOptions::default())
}

/// Parse a textual coordinate list such as `"(1,2),(3,4),(5,0)"` into points.
///
/// Grouping parentheses are stripped and the remainder is split on commas,
/// so bare `"1,2,3,4"` input is accepted too. Values are consumed pairwise
/// in order (X then Y); a trailing unpaired value is silently discarded.
///
/// Each value must parse as a float in its entirety. Under the default
/// lenient policy a malformed value becomes `0.0`; with
/// [`ParseOptions::strict_numeric`] it is an error instead.
pub fn parse_vertices_with(s: &str, opts: ParseOptions) -> Result<Vec<Point2>, ParseError> {
    let stripped = s.replace(['(', ')'], "");
    let values = stripped.split(',').collect::<Vec<_>>();
    if values.len() < 2 {
        return Err(ParseError::TooFewValues {
            input: s.to_string(),
        });
    }

    let mut points = Vec::with_capacity(values.len() / 2);
    for pair in values.chunks_exact(2) {
        let x = numeric(pair[0], opts)?;
        let y = numeric(pair[1], opts)?;
        points.push([x, y]);
    }

    Ok(points)
}

/// Whole-token float parse. No trimming, the token must be the number.
fn numeric(token: &str, opts: ParseOptions) -> Result<f64, ParseError> {
    use nom::{combinator::all_consuming, number::complete::double};

    match all_consuming(double::<_, ()>)(token) {
        Ok((_, v)) => Ok(v),
        Err(_) if opts.strict_numeric => Err(ParseError::InvalidNumber {
            token: token.to_string(),
        }),
        Err(_) => Ok(0.0),
    }
}
