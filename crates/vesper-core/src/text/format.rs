//! Growable formatting for [`Text`].
//!
//! Formatting first renders into a fixed stack buffer. Output that does not
//! fit is measured, a heap buffer of exactly that size is reserved, and the
//! arguments are rendered a second time.

use std::fmt::{self, Write};

use super::Text;
use crate::error::{TextError, TextResult};
use crate::logging::targets;

/// Size in bytes of the stack buffer tried before spilling to the heap.
pub const FORMAT_STACK_CAPACITY: usize = 256;

/// Fixed-capacity writer that refuses (rather than truncates) a piece that
/// does not fit.
struct StackWriter {
    buf: [u8; FORMAT_STACK_CAPACITY],
    len: usize,
    overflowed: bool,
}

impl StackWriter {
    fn new() -> Self {
        Self {
            buf: [0; FORMAT_STACK_CAPACITY],
            len: 0,
            overflowed: false,
        }
    }

    fn as_str(&self) -> TextResult<&str> {
        std::str::from_utf8(&self.buf[..self.len]).map_err(|_| TextError::Format)
    }
}

impl Write for StackWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len + s.len();
        if end > FORMAT_STACK_CAPACITY {
            self.overflowed = true;
            return Err(fmt::Error);
        }
        self.buf[self.len..end].copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

/// Counts the bytes a format would produce without storing them.
#[derive(Default)]
struct LengthCounter {
    len: usize,
}

impl Write for LengthCounter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.len += s.len();
        Ok(())
    }
}

impl Text {
    /// Replace the contents with formatted output.
    ///
    /// `None` clears the text and succeeds. See also the
    /// [`text_format!`](crate::text_format) macro.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::OutOfMemory`] if the heap buffer for a long result
    /// cannot be reserved, and [`TextError::Format`] if a `Display`
    /// implementation fails.
    pub fn format(&mut self, args: Option<fmt::Arguments<'_>>) -> TextResult<()> {
        let Some(args) = args else {
            self.buf.clear();
            return Ok(());
        };

        let mut stack = StackWriter::new();
        match stack.write_fmt(args) {
            Ok(()) => {
                let formatted = stack.as_str()?;
                self.buf.clear();
                self.buf.push_str(formatted);
                return Ok(());
            }
            Err(_) if !stack.overflowed => return Err(TextError::Format),
            Err(_) => {}
        }

        let mut counter = LengthCounter::default();
        counter.write_fmt(args).map_err(|_| TextError::Format)?;
        // One extra slot for the terminator the toolkit APIs expect.
        let requested = counter.len + 1;
        crate::vesper_trace!(
            target: targets::TEXT,
            requested,
            stack_capacity = FORMAT_STACK_CAPACITY,
            "formatted text exceeds stack buffer, reserving heap buffer"
        );

        let mut heap = String::new();
        heap.try_reserve_exact(requested)
            .map_err(|_| TextError::OutOfMemory { requested })?;
        heap.write_fmt(args).map_err(|_| TextError::Format)?;
        self.buf = heap;
        Ok(())
    }

    /// Build a new text from formatted output.
    ///
    /// # Errors
    ///
    /// Same as [`format`](Self::format).
    pub fn formatted(args: fmt::Arguments<'_>) -> TextResult<Text> {
        let mut text = Text::new();
        text.format(Some(args))?;
        Ok(text)
    }
}

/// Format into an existing [`Text`], replacing its contents.
///
/// ```
/// use vesper_core::{text_format, Text};
///
/// let mut text = Text::new();
/// text_format!(text, "{}-{}", 1, 2).unwrap();
/// assert_eq!(text, "1-2");
/// ```
#[macro_export]
macro_rules! text_format {
    ($text:expr, $($arg:tt)+) => {
        $text.format(::std::option::Option::Some(::std::format_args!($($arg)+)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;

    impl fmt::Display for Failing {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn test_format_short() {
        let mut text = Text::from("old");
        text.format(Some(format_args!("{}-{}", 1, 2))).unwrap();
        assert_eq!(text, "1-2");
    }

    #[test]
    fn test_format_none_clears() {
        let mut text = Text::from("stale caption");
        text.format(None).unwrap();
        assert!(text.is_empty());
    }

    #[test]
    fn test_format_exactly_stack_capacity() {
        let filler = "x".repeat(FORMAT_STACK_CAPACITY);
        let mut text = Text::new();
        text.format(Some(format_args!("{filler}"))).unwrap();
        assert_eq!(text.len(), FORMAT_STACK_CAPACITY);
    }

    #[test]
    fn test_format_spills_to_heap() {
        let filler = "é".repeat(FORMAT_STACK_CAPACITY);
        let mut text = Text::new();
        text.format(Some(format_args!("[{filler}] {}", 42))).unwrap();
        assert_eq!(text.len(), FORMAT_STACK_CAPACITY + 5);
        assert!(text.as_str().ends_with("] 42"));
    }

    #[test]
    fn test_format_propagates_display_error() {
        let mut text = Text::from("kept");
        let result = text.format(Some(format_args!("{}", Failing)));
        assert_eq!(result, Err(TextError::Format));
        assert_eq!(text, "kept");
    }

    #[test]
    fn test_formatted_and_macro() {
        let text = Text::formatted(format_args!("{:02}:{:02}", 7, 5)).unwrap();
        assert_eq!(text, "07:05");

        let mut text = Text::new();
        crate::text_format!(text, "{} minutes", 15).unwrap();
        assert_eq!(text, "15 minutes");
    }
}
