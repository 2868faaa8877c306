//! Quote-aware tokenizing.
//!
//! Splits command lines and setting strings into tokens. A `"` toggles quoted
//! mode and is never copied into a token. Inside quotes, delimiters, tabs and
//! spaces are ordinary characters and line breaks are dropped. Outside quotes,
//! whitespace, line breaks and any caller-supplied delimiter end the current
//! token.

use std::iter::FusedIterator;

use super::Text;
use crate::logging::targets;

/// Default maximum number of tokens produced by one pass.
pub const DEFAULT_MAX_TOKENS: usize = 64;

/// Default maximum length of a single token, in characters.
pub const DEFAULT_MAX_TOKEN_LEN: usize = 260;

const QUOTE: char = '"';

/// Limits applied while tokenizing.
///
/// Hitting either limit ends the pass quietly; tokens already produced are
/// kept and nothing is reported as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerConfig {
    /// Maximum number of tokens to produce.
    pub max_tokens: usize,
    /// Maximum characters in one token. A token that would grow past this
    /// stops the pass and is discarded.
    pub max_token_len: usize,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_MAX_TOKENS,
            max_token_len: DEFAULT_MAX_TOKEN_LEN,
        }
    }
}

impl TokenizerConfig {
    /// A configuration without practical limits.
    pub fn unlimited() -> Self {
        Self {
            max_tokens: usize::MAX,
            max_token_len: usize::MAX,
        }
    }
}

/// Builder for [`TokenizerConfig`].
#[derive(Debug, Default)]
pub struct TokenizerBuilder {
    config: TokenizerConfig,
}

impl TokenizerBuilder {
    /// Create a builder with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of tokens.
    pub fn max_tokens(mut self, max: usize) -> Self {
        self.config.max_tokens = max;
        self
    }

    /// Set the maximum token length.
    pub fn max_token_len(mut self, max: usize) -> Self {
        self.config.max_token_len = max;
        self
    }

    /// Finish building.
    pub fn build(self) -> TokenizerConfig {
        self.config
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Outside,
    InToken,
    InQuotedToken,
}

/// Iterator over the tokens of a text.
///
/// Created by [`Text::tokens`] and [`Text::tokens_with`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    chars: std::str::Chars<'a>,
    delimiters: &'a str,
    config: TokenizerConfig,
    state: State,
    produced: usize,
    finished: bool,
}

impl<'a> Tokens<'a> {
    pub(super) fn new(source: &'a str, delimiters: &'a str, config: TokenizerConfig) -> Self {
        Self {
            chars: source.chars(),
            delimiters,
            config,
            state: State::Outside,
            produced: 0,
            finished: false,
        }
    }

    fn is_separator(&self, ch: char) -> bool {
        // Tab and line breaks are whitespace too.
        ch.is_whitespace() || self.delimiters.contains(ch)
    }

    fn emit(&mut self, token: String) -> Option<Text> {
        if token.is_empty() {
            return None;
        }
        self.produced += 1;
        Some(Text::from(token))
    }

    fn stop(&mut self, reason: &'static str) -> Option<Text> {
        crate::vesper_debug!(
            target: targets::TEXT,
            produced = self.produced,
            max_tokens = self.config.max_tokens,
            max_token_len = self.config.max_token_len,
            reason,
            "tokenizer stopped early"
        );
        self.finished = true;
        None
    }
}

impl Iterator for Tokens<'_> {
    type Item = Text;

    fn next(&mut self) -> Option<Text> {
        if self.finished {
            return None;
        }
        if self.produced >= self.config.max_tokens {
            return self.stop("token count limit");
        }

        let mut token = String::new();
        let mut token_len = 0usize;

        while let Some(ch) = self.chars.next() {
            let keep = match self.state {
                State::InQuotedToken => match ch {
                    QUOTE => {
                        self.state = State::InToken;
                        false
                    }
                    '\r' | '\n' => false,
                    _ => true,
                },
                State::Outside | State::InToken => {
                    if ch == QUOTE {
                        self.state = State::InQuotedToken;
                        false
                    } else if self.is_separator(ch) {
                        self.state = State::Outside;
                        if let Some(text) = self.emit(std::mem::take(&mut token)) {
                            return Some(text);
                        }
                        false
                    } else {
                        self.state = State::InToken;
                        true
                    }
                }
            };

            if keep {
                if token_len >= self.config.max_token_len {
                    return self.stop("token length limit");
                }
                token.push(ch);
                token_len += 1;
            }
        }

        self.finished = true;
        self.emit(token)
    }
}

impl FusedIterator for Tokens<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str, delimiters: &str) -> Vec<String> {
        Text::from(input)
            .tokenize(delimiters)
            .into_iter()
            .map(Text::into_string)
            .collect()
    }

    #[test]
    fn test_quoted_token_keeps_spaces() {
        assert_eq!(tokens("run \"a b\" c", " "), ["run", "a b", "c"]);
    }

    #[test]
    fn test_custom_delimiters() {
        assert_eq!(tokens("a,b;;c", ",;"), ["a", "b", "c"]);
        assert_eq!(tokens("\"a,b\",c", ","), ["a,b", "c"]);
    }

    #[test]
    fn test_whitespace_always_splits() {
        assert_eq!(tokens("one\ttwo\r\nthree", ""), ["one", "two", "three"]);
        assert_eq!(tokens("   ", ""), Vec::<String>::new());
    }

    #[test]
    fn test_quotes_join_adjacent_text() {
        assert_eq!(tokens("pre\"mid dle\"post next", ""), ["premid dlepost", "next"]);
    }

    #[test]
    fn test_line_breaks_dropped_inside_quotes() {
        assert_eq!(tokens("\"multi\r\nline\"", ""), ["multiline"]);
    }

    #[test]
    fn test_empty_quotes_produce_nothing() {
        assert_eq!(tokens("a \"\" b", ""), ["a", "b"]);
    }

    #[test]
    fn test_unterminated_quote_emits_tail() {
        assert_eq!(tokens("cmd \"open ended", ""), ["cmd", "open ended"]);
    }

    #[test]
    fn test_max_tokens_caps_output() {
        let config = TokenizerBuilder::new().max_tokens(2).build();
        let text = Text::from("a b c d");
        let result: Vec<Text> = text.tokens_with("", config).collect();
        assert_eq!(result, ["a", "b"]);
    }

    #[test]
    fn test_max_token_len_stops_pass() {
        let config = TokenizerBuilder::new().max_token_len(3).build();
        let text = Text::from("ab abc abcd xy");
        let result: Vec<Text> = text.tokens_with("", config).collect();
        assert_eq!(result, ["ab", "abc"]);
    }

    #[test]
    fn test_tokens_restart() {
        let text = Text::from("x y");
        let first: Vec<Text> = text.tokens("").collect();
        let second: Vec<Text> = text.tokens("").collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_iterator_is_fused() {
        let text = Text::from("only");
        let mut iter = text.tokens("");
        assert_eq!(iter.next(), Some(Text::from("only")));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_unlimited_config() {
        let config = TokenizerConfig::unlimited();
        let long = "z".repeat(DEFAULT_MAX_TOKEN_LEN * 2);
        let text = Text::from(long.as_str());
        assert_eq!(text.tokens_with("", config).count(), 1);
        assert_eq!(text.tokens("").count(), 0);
    }
}
