use thiserror::Error;

/// Errors from parsing an `HH:MM:SS` string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    #[error("Time needs to be in format HH:MM:SS, found {found} field(s)")]
    WrongFieldCount { found: usize },

    #[error("Segment '{segment}' is not numeric, time needs to be in format HH:MM:SS")]
    NonNumericSegment { segment: String },

    #[error("Hour must be between 00-23, got {0}")]
    HourOutOfRange(String),

    #[error("Minute must be between 00-59, got {0}")]
    MinuteOutOfRange(String),

    #[error("Second must be between 00-59, got {0}")]
    SecondOutOfRange(String),
}

impl TimeError {
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            TimeError::HourOutOfRange(_) | TimeError::MinuteOutOfRange(_) | TimeError::SecondOutOfRange(_)
        )
    }
}

/// Sum the hour, minute and second of an `HH:MM:SS` string
///
/// Checks run in order: field count, then digits, then ranges. So
/// `"qwer:qer:qwer"` fails on digits, not on count.
pub fn sum_current_time(time_str: &str) -> Result<u32, TimeError> {
    let segments: Vec<&str> = time_str.split(':').collect();
    if segments.len() != 3 {
        return Err(TimeError::WrongFieldCount { found: segments.len() });
    }

    if let Some(bad) = segments
        .iter()
        .find(|s| s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()))
    {
        return Err(TimeError::NonNumericSegment {
            segment: bad.to_string(),
        });
    }

    let hour = parse_field(segments[0], 23, TimeError::HourOutOfRange)?;
    let minute = parse_field(segments[1], 59, TimeError::MinuteOutOfRange)?;
    let second = parse_field(segments[2], 59, TimeError::SecondOutOfRange)?;

    Ok(hour + minute + second)
}

/// Parse an all-digit segment, keeping the original text on failure
fn parse_field(segment: &str, max: u32, out_of_range: fn(String) -> TimeError) -> Result<u32, TimeError> {
    // digits only by now, so parse can only fail on overflow
    match segment.parse::<u32>() {
        Ok(value) if value <= max => Ok(value),
        _ => Err(out_of_range(segment.to_string())),
    }
}

/// Local wall-clock time as `HH:MM:SS`
pub fn current_time_string() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}
