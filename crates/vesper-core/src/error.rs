//! Error types for Vesper core value types.

use thiserror::Error;

/// The main error type for Vesper core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VesperError {
    /// Text-related error.
    #[error("text error: {0}")]
    Text(#[from] TextError),

    /// Time-related error.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
}

/// Errors raised by [`Text`](crate::Text) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    /// A character index was at or beyond the end of the text.
    #[error("index {index} out of range for text of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Growing a buffer for formatted output failed.
    #[error("out of memory: could not reserve {requested} bytes for formatted text")]
    OutOfMemory { requested: usize },

    /// A `Display` implementation reported an error while formatting.
    #[error("formatter reported an error")]
    Format,
}

/// Errors raised by the time family.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// Year, month and day do not form a real calendar date.
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// A time-of-day component is out of range.
    #[error("invalid time: {hour:02}:{minute:02}:{second:02}.{millisecond:03}")]
    InvalidTime {
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    },

    /// The date lies outside the range representable as a moment.
    #[error("date {year:04}-{month:02}-{day:02} is outside the representable range")]
    OutOfRange { year: i32, month: u32, day: u32 },
}

/// Result type for text operations.
pub type TextResult<T> = std::result::Result<T, TextError>;

/// Result type for time operations.
pub type TimeResult<T> = std::result::Result<T, TimeError>;

/// A specialized Result type for Vesper core operations.
pub type Result<T> = std::result::Result<T, VesperError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TextError::IndexOutOfRange { index: 5, len: 3 };
        assert_eq!(err.to_string(), "index 5 out of range for text of length 3");

        let err = TimeError::InvalidDate {
            year: 2023,
            month: 2,
            day: 29,
        };
        assert_eq!(err.to_string(), "invalid date: 2023-02-29");
    }

    #[test]
    fn test_umbrella_conversion() {
        let err: VesperError = TextError::Format.into();
        assert!(matches!(err, VesperError::Text(TextError::Format)));
        assert_eq!(err.to_string(), "text error: formatter reported an error");

        let err: VesperError = TimeError::InvalidTime {
            hour: 24,
            minute: 0,
            second: 0,
            millisecond: 0,
        }
        .into();
        assert!(matches!(err, VesperError::Time(_)));
    }
}
