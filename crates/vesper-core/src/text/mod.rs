//! Owned, growable text.
//!
//! [`Text`] is the string value type used for dialog captions, log lines and
//! command lines. Every instance owns its own buffer: cloning copies the
//! characters, moving transfers the buffer, and no two values ever share
//! storage.
//!
//! All indices and counts are measured in characters (Unicode scalar
//! values), not bytes.
//!
//! # Example
//!
//! ```
//! use vesper_core::Text;
//!
//! let mut caption = Text::from("  sleep in 5 minutes ");
//! caption.trim().upper_each_word();
//! assert_eq!(caption.as_str(), "Sleep In 5 Minutes");
//!
//! let command = Text::from("run \"a b\" c");
//! let tokens = command.tokenize(" ");
//! assert_eq!(tokens, ["run", "a b", "c"]);
//! ```

mod format;
mod tokenizer;

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign};

use crate::error::{TextError, TextResult};

pub use format::FORMAT_STACK_CAPACITY;
pub use tokenizer::{
    Tokens, TokenizerBuilder, TokenizerConfig, DEFAULT_MAX_TOKENS, DEFAULT_MAX_TOKEN_LEN,
};

/// A growable, owned text buffer with value semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Text {
    buf: String,
}

/// Treat a negative character count as zero. Counts past the end are
/// saturated by the offset lookups.
fn non_negative(count: isize) -> usize {
    usize::try_from(count).unwrap_or(0)
}

impl Text {
    /// Create an empty text.
    #[inline]
    pub const fn new() -> Self {
        Self { buf: String::new() }
    }

    /// Create an empty text with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity),
        }
    }

    /// Borrow the contents as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Consume the text and return the underlying buffer.
    #[inline]
    pub fn into_string(self) -> String {
        self.buf
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.buf.chars().count()
    }

    /// Check if the text has no characters.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Remove all characters.
    #[inline]
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Iterate over the characters.
    #[inline]
    pub fn chars(&self) -> std::str::Chars<'_> {
        self.buf.chars()
    }

    /// Byte offset of the character at `index`, or the buffer length when
    /// `index` is at or past the end.
    fn byte_offset(&self, index: usize) -> usize {
        self.byte_offset_from(0, index)
    }

    /// Byte offset reached by stepping `count` characters forward from the
    /// byte offset `start`, saturating at the buffer length.
    fn byte_offset_from(&self, start: usize, count: usize) -> usize {
        self.buf[start..]
            .char_indices()
            .nth(count)
            .map_or(self.buf.len(), |(offset, _)| start + offset)
    }

    /// Byte offset where the last `count` characters begin, saturating at 0.
    fn byte_offset_from_end(&self, count: usize) -> usize {
        match count.checked_sub(1) {
            None => self.buf.len(),
            Some(back) => self
                .buf
                .char_indices()
                .rev()
                .nth(back)
                .map_or(0, |(offset, _)| offset),
        }
    }

    /// Character index of a byte offset that lies on a char boundary.
    fn char_index(&self, byte_offset: usize) -> usize {
        self.buf[..byte_offset].chars().count()
    }

    // =========================================================================
    // Indexing
    // =========================================================================

    /// Get the character at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::IndexOutOfRange`] when `index >= len()`.
    pub fn at(&self, index: usize) -> TextResult<char> {
        self.buf
            .chars()
            .nth(index)
            .ok_or_else(|| TextError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Replace the character at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::IndexOutOfRange`] when `index >= len()`.
    pub fn set_at(&mut self, index: usize, ch: char) -> TextResult<()> {
        let Some((start, old)) = self.buf.char_indices().nth(index) else {
            return Err(TextError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        };
        let mut encoded = [0u8; 4];
        self.buf
            .replace_range(start..start + old.len_utf8(), ch.encode_utf8(&mut encoded));
        Ok(())
    }

    // =========================================================================
    // Concatenation
    // =========================================================================

    /// Append a string slice.
    pub fn append(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self
    }

    /// Append a single character.
    pub fn append_char(&mut self, ch: char) -> &mut Self {
        self.buf.push(ch);
        self
    }

    /// Insert `s` before the character at `index` and return the new length.
    ///
    /// An index past the end appends.
    pub fn insert(&mut self, index: usize, s: &str) -> usize {
        let offset = self.byte_offset(index);
        self.buf.insert_str(offset, s);
        self.len()
    }

    // =========================================================================
    // Comparison
    // =========================================================================

    /// Compare against another text.
    ///
    /// Returns zero when both texts are equal. Otherwise the sign follows
    /// lexicographic order and the magnitude is the difference between the
    /// two lengths, so two different texts of equal length compare as zero.
    /// Use `Ord` for a total lexicographic ordering.
    pub fn compare(&self, other: &str) -> i64 {
        Self::length_weighted(self.buf.as_str().cmp(other), self.len(), other.chars().count())
    }

    /// Like [`compare`](Self::compare), after folding both sides to lowercase.
    pub fn compare_no_case(&self, other: &str) -> i64 {
        let lhs = self.buf.to_lowercase();
        let rhs = other.to_lowercase();
        Self::length_weighted(lhs.cmp(&rhs), lhs.chars().count(), rhs.chars().count())
    }

    fn length_weighted(ordering: Ordering, lhs_len: usize, rhs_len: usize) -> i64 {
        let magnitude = lhs_len.abs_diff(rhs_len) as i64;
        match ordering {
            Ordering::Equal => 0,
            Ordering::Less => -magnitude,
            Ordering::Greater => magnitude,
        }
    }

    // =========================================================================
    // Substrings
    // =========================================================================

    /// The first `count` characters. Counts outside `0..=len` are clamped.
    pub fn left(&self, count: isize) -> Text {
        Text::from(&self.buf[..self.byte_offset(non_negative(count))])
    }

    /// The last `count` characters. Counts outside `0..=len` are clamped.
    pub fn right(&self, count: isize) -> Text {
        Text::from(&self.buf[self.byte_offset_from_end(non_negative(count))..])
    }

    /// Everything from character `first` to the end.
    pub fn mid(&self, first: isize) -> Text {
        Text::from(&self.buf[self.byte_offset(non_negative(first))..])
    }

    /// `count` characters starting at `first`, clamped to what remains.
    pub fn mid_n(&self, first: isize, count: isize) -> Text {
        let start = self.byte_offset(non_negative(first));
        let end = self.byte_offset_from(start, non_negative(count));
        Text::from(&self.buf[start..end])
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Strip leading and trailing whitespace.
    pub fn trim(&mut self) -> &mut Self {
        self.trim_right().trim_left()
    }

    /// Strip leading whitespace.
    pub fn trim_left(&mut self) -> &mut Self {
        let skipped = self.buf.len() - self.buf.trim_start().len();
        self.buf.drain(..skipped);
        self
    }

    /// Strip trailing whitespace.
    pub fn trim_right(&mut self) -> &mut Self {
        let kept = self.buf.trim_end().len();
        self.buf.truncate(kept);
        self
    }

    /// Fold to uppercase.
    pub fn to_upper(&mut self) -> &mut Self {
        self.buf = self.buf.to_uppercase();
        self
    }

    /// Fold to lowercase.
    pub fn to_lower(&mut self) -> &mut Self {
        self.buf = self.buf.to_lowercase();
        self
    }

    /// Uppercase the first character and every character that follows a
    /// space. All other characters are left alone.
    pub fn upper_each_word(&mut self) -> &mut Self {
        let mut out = String::with_capacity(self.buf.len());
        let mut at_word_start = true;
        for ch in self.buf.chars() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.push(ch);
            }
            at_word_start = ch == ' ';
        }
        self.buf = out;
        self
    }

    /// Remove every occurrence of `ch`. Returns how many were removed.
    pub fn remove_char(&mut self, ch: char) -> usize {
        let before = self.buf.len();
        self.buf.retain(|c| c != ch);
        (before - self.buf.len()) / ch.len_utf8()
    }

    /// Remove every non-overlapping occurrence of `pattern`. Returns how many
    /// were removed.
    pub fn remove(&mut self, pattern: &str) -> usize {
        self.replace(pattern, "")
    }

    /// Replace every non-overlapping occurrence of `old` with `new`, scanning
    /// left to right. Returns the number of replacements; an empty `old`
    /// replaces nothing.
    pub fn replace(&mut self, old: &str, new: &str) -> usize {
        if old.is_empty() {
            return 0;
        }
        let count = self.buf.matches(old).count();
        if count > 0 {
            self.buf = self.buf.replace(old, new);
        }
        count
    }

    /// Replace every `old` character with `new`. Returns the count.
    pub fn replace_char(&mut self, old: char, new: char) -> usize {
        let count = self.buf.chars().filter(|&c| c == old).count();
        if count > 0 {
            self.buf = self
                .buf
                .chars()
                .map(|c| if c == old { new } else { c })
                .collect();
        }
        count
    }

    /// Erase up to `count` characters starting at `index` and return the new
    /// length. Out-of-range requests erase what they can.
    pub fn delete(&mut self, index: usize, count: usize) -> usize {
        let len = self.len();
        if index < len && count > 0 {
            let end = index + count.min(len - index);
            let range = self.byte_offset(index)..self.byte_offset(end);
            self.buf.drain(range);
        }
        self.len()
    }

    /// Shorten to `len` characters. Does nothing if already shorter.
    pub fn truncate(&mut self, len: usize) {
        let offset = self.byte_offset(len);
        self.buf.truncate(offset);
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Index of the first occurrence of `pattern`.
    pub fn find(&self, pattern: &str) -> Option<usize> {
        self.buf.find(pattern).map(|b| self.char_index(b))
    }

    /// Index of the first occurrence of `pattern` at or after `start`.
    pub fn find_from(&self, pattern: &str, start: usize) -> Option<usize> {
        if start > self.len() {
            return None;
        }
        let offset = self.byte_offset(start);
        self.buf[offset..]
            .find(pattern)
            .map(|b| self.char_index(offset + b))
    }

    /// Index of the first occurrence of `ch`.
    pub fn find_char(&self, ch: char) -> Option<usize> {
        self.buf.chars().position(|c| c == ch)
    }

    /// Index of the first character that appears in `set`.
    pub fn find_one_of(&self, set: &str) -> Option<usize> {
        self.buf.chars().position(|c| set.contains(c))
    }

    /// Index of the last occurrence of `ch`.
    pub fn reverse_find(&self, ch: char) -> Option<usize> {
        self.buf.rfind(ch).map(|b| self.char_index(b))
    }

    /// Index of the last occurrence of `pattern`.
    pub fn reverse_find_str(&self, pattern: &str) -> Option<usize> {
        self.buf.rfind(pattern).map(|b| self.char_index(b))
    }

    // =========================================================================
    // Tokenizing
    // =========================================================================

    /// Split into quote-aware tokens using the default limits.
    ///
    /// Each call starts a fresh pass over the text.
    pub fn tokens<'a>(&'a self, delimiters: &'a str) -> Tokens<'a> {
        Tokens::new(&self.buf, delimiters, TokenizerConfig::default())
    }

    /// Split into quote-aware tokens with explicit limits.
    pub fn tokens_with<'a>(&'a self, delimiters: &'a str, config: TokenizerConfig) -> Tokens<'a> {
        Tokens::new(&self.buf, delimiters, config)
    }

    /// Collect all tokens using the default limits.
    pub fn tokenize(&self, delimiters: &str) -> Vec<Text> {
        self.tokens(delimiters).collect()
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Self { buf: s.to_owned() }
    }
}

impl From<String> for Text {
    fn from(buf: String) -> Self {
        Self { buf }
    }
}

impl From<char> for Text {
    fn from(ch: char) -> Self {
        Self {
            buf: ch.to_string(),
        }
    }
}

impl From<Text> for String {
    fn from(text: Text) -> Self {
        text.buf
    }
}

impl AsRef<str> for Text {
    fn as_ref(&self) -> &str {
        &self.buf
    }
}

impl FromIterator<char> for Text {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            buf: iter.into_iter().collect(),
        }
    }
}

impl Extend<char> for Text {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        self.buf.extend(iter);
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}

impl fmt::Write for Text {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buf.push_str(s);
        Ok(())
    }
}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        self.buf == other
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        self.buf == *other
    }
}

impl PartialEq<Text> for &str {
    fn eq(&self, other: &Text) -> bool {
        *self == other.buf
    }
}

// =============================================================================
// Operators
// =============================================================================

impl Add<&str> for Text {
    type Output = Text;

    fn add(mut self, rhs: &str) -> Text {
        self.buf.push_str(rhs);
        self
    }
}

impl Add<&Text> for Text {
    type Output = Text;

    fn add(mut self, rhs: &Text) -> Text {
        self.buf.push_str(&rhs.buf);
        self
    }
}

impl Add<Text> for Text {
    type Output = Text;

    fn add(mut self, rhs: Text) -> Text {
        self.buf.push_str(&rhs.buf);
        self
    }
}

impl Add<char> for Text {
    type Output = Text;

    fn add(mut self, rhs: char) -> Text {
        self.buf.push(rhs);
        self
    }
}

impl AddAssign<&str> for Text {
    fn add_assign(&mut self, rhs: &str) {
        self.buf.push_str(rhs);
    }
}

impl AddAssign<&Text> for Text {
    fn add_assign(&mut self, rhs: &Text) {
        self.buf.push_str(&rhs.buf);
    }
}

impl AddAssign<char> for Text {
    fn add_assign(&mut self, rhs: char) {
        self.buf.push(rhs);
    }
}

static_assertions::assert_impl_all!(Text: Send, Sync, Clone);
