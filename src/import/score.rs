use std::fmt;
use std::num::IntErrorKind;

pub const MAX_SCORE: i64 = 100;

/// How the top of the 0..=100 scale is treated.
///
/// Typed marks may be exactly 100; marks read from a file must stay below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpperBound {
    Inclusive,
    Exclusive,
}

impl UpperBound {
    pub fn admits(self, value: i64) -> bool {
        match self {
            UpperBound::Inclusive => (0..=MAX_SCORE).contains(&value),
            UpperBound::Exclusive => (0..MAX_SCORE).contains(&value),
        }
    }
}

/// Why a piece of text was not accepted as a score
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreRejection {
    NotANumber(String),
    OutOfRange(String),
}

impl fmt::Display for ScoreRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreRejection::NotANumber(raw) => write!(f, "'{}' is not a valid number", raw),
            ScoreRejection::OutOfRange(raw) => write!(f, "mark {} is out of range", raw),
        }
    }
}

impl std::error::Error for ScoreRejection {}

/// Parse a score, trimming surrounding whitespace.
///
/// Integers too large for any score are reported as out of range, not as
/// malformed.
pub fn parse_score(raw: &str, bound: UpperBound) -> Result<u8, ScoreRejection> {
    let text = raw.trim();
    match text.parse::<i64>() {
        Ok(value) if bound.admits(value) => {
            u8::try_from(value).map_err(|_| ScoreRejection::OutOfRange(text.to_string()))
        }
        Ok(_) => Err(ScoreRejection::OutOfRange(text.to_string())),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                Err(ScoreRejection::OutOfRange(text.to_string()))
            }
            _ => Err(ScoreRejection::NotANumber(text.to_string())),
        },
    }
}
