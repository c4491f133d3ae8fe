use crate::error::RangeError;
use std::fmt;
use std::str::FromStr;

/// An inclusive, 1-indexed block of pages. `start >= 1` and `end >= start`
/// always hold for a constructed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRange {
    start: u32,
    end: u32,
}

impl PageRange {
    pub fn new(start: u32, end: u32) -> Result<Self, RangeError> {
        if start < 1 || end < 1 || start > end {
            return Err(RangeError::invalid(format!("{}-{}", start, end)));
        }
        Ok(PageRange { start, end })
    }

    /// Parse a range specification like "10-25" or " 10 - 25 "
    pub fn parse(s: &str) -> Result<Self, RangeError> {
        let invalid = || RangeError::invalid(s);

        let parts: Vec<&str> = s.split('-').collect();
        let [start_str, end_str] = parts.as_slice() else {
            return Err(invalid());
        };

        let start = parse_page_number(start_str).ok_or_else(invalid)?;
        let end = parse_page_number(end_str).ok_or_else(invalid)?;

        PageRange::new(start, end).map_err(|_| invalid())
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// The range with `end` limited to `total_pages`, or `None` when the
    /// range starts past the last page.
    pub fn clamp_to(&self, total_pages: u32) -> Option<PageRange> {
        if self.start > total_pages {
            return None;
        }
        Some(PageRange {
            start: self.start,
            end: self.end.min(total_pages),
        })
    }

    pub fn contains(&self, page: u32) -> bool {
        (self.start..=self.end).contains(&page)
    }

    pub fn page_count(&self) -> u32 {
        self.end - self.start + 1
    }
}

impl FromStr for PageRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageRange::parse(s)
    }
}

impl fmt::Display for PageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

// Zero and negative values are rejected by the range check, not here.
fn parse_page_number(s: &str) -> Option<u32> {
    let n = s.trim().parse::<i64>().ok()?;
    if n < 1 {
        return Some(0);
    }
    u32::try_from(n).ok()
}
