use super::error::HourError;

/// AM/PM marker of a 12-hour clock token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// Case-sensitive: only `AM` and `PM` are recognised
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "AM" => Some(Self::Am),
            "PM" => Some(Self::Pm),
            _ => None,
        }
    }
}

/// Map a 1-12 clock hour onto the scale used for window comparisons.
///
/// `12AM` is 0 and every PM hour is shifted by 12, so `12PM` becomes 24
/// rather than noon. Callers range-check `hour` first.
pub(crate) fn to_day_hour(hour: u8, meridiem: Option<Meridiem>) -> u8 {
    debug_assert!((1..=12).contains(&hour), "clock hour out of range: {hour}");
    match meridiem {
        Some(Meridiem::Am) if hour == 12 => 0,
        Some(Meridiem::Am) | None => hour,
        Some(Meridiem::Pm) => hour + 12,
    }
}

/// Parse a token such as `9AM` or `12PM`.
///
/// A token without a marker is taken as-is once it passes the 1-12 check.
pub fn parse_hour(token: &str) -> Result<u8, HourError> {
    let (digits, meridiem) = if let Some(rest) = token.strip_suffix("AM") {
        (rest, Some(Meridiem::Am))
    } else if let Some(rest) = token.strip_suffix("PM") {
        (rest, Some(Meridiem::Pm))
    } else {
        (token, None)
    };

    let hour: u32 = digits
        .parse()
        .map_err(|_| HourError::NotANumber(token.to_string()))?;

    if !(1..=12).contains(&hour) {
        return Err(HourError::OutOfRange(hour));
    }

    // range-checked above
    Ok(to_day_hour(hour as u8, meridiem))
}
