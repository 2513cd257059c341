//! Textual encoding of [`AtomicFlag`].
//!
//! The encoding is the same one Rust uses for `bool`: exactly `true` or
//! `false`, lower-case, with no quoting or surrounding whitespace.

use core::fmt;
use core::str::FromStr;

use crate::flag::AtomicFlag;
use crate::trace::trace_event;

const TRUE: &[u8] = b"true";
const FALSE: &[u8] = b"false";

/// The error returned when bytes are not a boolean literal.
///
/// Carries the rejected input for diagnostics. Invalid UTF-8 is replaced
/// lossily.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFlagError {
    input: String,
}

impl ParseFlagError {
    fn new(text: &[u8]) -> Self {
        Self {
            input: String::from_utf8_lossy(text).into_owned(),
        }
    }

    /// Returns the rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseFlagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "malformed boolean text {:?}; expected \"true\" or \"false\"",
            self.input
        )
    }
}

impl std::error::Error for ParseFlagError {}

/// Parses a textual boolean with the grammar of `bool::from_str`.
pub(crate) fn parse_bool(text: &[u8]) -> Result<bool, ParseFlagError> {
    core::str::from_utf8(text)
        .ok()
        .and_then(|s| s.parse::<bool>().ok())
        .ok_or_else(|| ParseFlagError::new(text))
}

impl AtomicFlag {
    /// Returns the textual form of the current value, `b"true"` or `b"false"`.
    #[inline]
    pub fn marshal_text(&self) -> &'static [u8] {
        if self.get() {
            TRUE
        } else {
            FALSE
        }
    }

    /// Parses `text` as a boolean and stores it.
    ///
    /// # Errors
    ///
    /// Returns [`ParseFlagError`] if `text` is not `true` or `false`. The
    /// stored value is left exactly as it was.
    pub fn unmarshal_text(&self, text: &[u8]) -> Result<(), ParseFlagError> {
        let value = parse_bool(text)?;
        self.store(value);
        trace_event!(value, "flag decoded from text");
        Ok(())
    }
}

impl fmt::Display for AtomicFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.get(), f)
    }
}

impl FromStr for AtomicFlag {
    type Err = ParseFlagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_bool(s.as_bytes()).map(Self::new)
    }
}
