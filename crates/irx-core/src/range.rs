//! Inclusive byte ranges used both as HTTP `Range` bounds and as cache keys.

use std::fmt;
use std::str::FromStr;

/// A byte range `[start, end]` (both inclusive) into a remote resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ByteRange {
    /// First byte offset (inclusive).
    pub start: u64,
    /// Last byte offset (inclusive).
    pub end: u64,
}

impl ByteRange {
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// True if `other` lies fully inside this range. Equal boundaries count.
    pub fn contains(&self, other: &ByteRange) -> bool {
        self.start <= other.start && self.end >= other.end
    }

    /// HTTP Range header value: `bytes=start-end`.
    pub fn header_value(&self) -> String {
        format!("bytes={}-{}", self.start, self.end)
    }
}

/// Renders the cache key form `start-end`.
impl fmt::Display for ByteRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRangeError(String);

impl fmt::Display for ParseRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid range key: {:?}", self.0)
    }
}

impl std::error::Error for ParseRangeError {}

impl FromStr for ByteRange {
    type Err = ParseRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseRangeError(s.to_string());
        let (a, b) = s.split_once('-').ok_or_else(err)?;
        let start = a.trim().parse::<u64>().map_err(|_| err())?;
        let end = b.trim().parse::<u64>().map_err(|_| err())?;
        Ok(Self { start, end })
    }
}
