use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::error::ValidationError;
use super::hour::{Meridiem, to_day_hour};

// Whitespace is the ASCII set `[\t\n\f\r ]`; Unicode spaces do not separate tokens.
static DELIVERY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^([0-9A-Za-z_]+)[\t\n\f\r ]+",
        r"([1-9]|1[0-2])[\t\n\f\r ]*(AM)",
        r"[\t\n\f\r ]*-[\t\n\f\r ]*",
        r"([1-9]|1[0-2])[\t\n\f\r ]*(PM)$",
    ))
    .expect("delivery pattern is a valid regex")
});

/// Delivery window such as `Monday 9AM - 5PM`.
///
/// The raw text is kept verbatim; the hours are extracted once, at
/// validation time. Start is always an AM hour and end always a PM hour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryWindow {
    raw: String,
    day: String,
    start: u8,
    end: u8,
}

impl DeliveryWindow {
    pub fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();

        let Some(caps) = DELIVERY_PATTERN.captures(&raw) else {
            return Err(ValidationError::InvalidDeliveryFormat(raw));
        };

        let start = clock_hour(&caps[2], &caps[3]);
        let end = clock_hour(&caps[4], &caps[5]);
        let day = caps[1].to_string();

        Ok(Self {
            raw,
            day,
            start,
            end,
        })
    }

    /// The window exactly as it appeared in the input
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn day(&self) -> &str {
        &self.day
    }

    pub fn start_hour(&self) -> u8 {
        self.start
    }

    pub fn end_hour(&self) -> u8 {
        self.end
    }

    /// True when `[from, to)` sits inside this window: the window may start
    /// at `from`, but `to` must fall strictly before its end.
    pub fn encloses(&self, from: u8, to: u8) -> bool {
        self.start <= from && to < self.end
    }
}

impl fmt::Display for DeliveryWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

// Captures are `[1-9]|1[0-2]` plus a literal AM/PM, so both always parse.
fn clock_hour(digits: &str, marker: &str) -> u8 {
    let hour = digits.parse().unwrap_or(0);
    to_day_hour(hour, Meridiem::from_marker(marker))
}
