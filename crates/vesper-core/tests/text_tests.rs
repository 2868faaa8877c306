//! Text editing, formatting and tokenizing tests.

use vesper_core::text::FORMAT_STACK_CAPACITY;
use vesper_core::{text_format, Text, TextError, TokenizerBuilder};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

#[test]
fn test_substring_identities() {
    let s = Text::from("reminder");
    let len = s.len() as isize;

    for k in 0..=len {
        assert_eq!(s.left(k) + &s.mid(k), s, "split at {k}");
        assert_eq!(s.left(k) + &s.right(len - k), s, "split at {k}");
    }
    assert_eq!(s.mid_n(2, 3), "min");
}

#[test]
fn test_substring_clamping() {
    let s = Text::from("abc");
    assert_eq!(s.left(-4), "");
    assert_eq!(s.left(99), "abc");
    assert_eq!(s.right(99), "abc");
    assert_eq!(s.mid(-1), "abc");
    assert_eq!(s.mid(10), "");
    assert_eq!(s.mid_n(1, -2), "");
}

#[test]
fn test_tokenize_quoted_command() {
    let line = Text::from("run \"a b\" c");
    assert_eq!(line.tokenize(""), ["run", "a b", "c"]);
}

#[test]
fn test_tokenize_custom_delimiters_and_limits() {
    let line = Text::from("alarm;07:30;\"wake up\";daily");
    assert_eq!(line.tokenize(";"), ["alarm", "07:30", "wake up", "daily"]);

    let config = TokenizerBuilder::new().max_tokens(2).build();
    let first_two: Vec<Text> = line.tokens_with(";", config).collect();
    assert_eq!(first_two, ["alarm", "07:30"]);
}

#[test]
fn test_tokenize_overlong_token_stops() {
    init_logging();
    let line = Text::from("short waytoolongtoken after");
    let config = TokenizerBuilder::new().max_token_len(8).build();
    let tokens: Vec<Text> = line.tokens_with("", config).collect();
    assert_eq!(tokens, ["short"]);
}

#[test]
fn test_format_small_and_none() {
    let mut text = Text::from("stale");
    text_format!(text, "{}-{}", 1, 2).unwrap();
    assert_eq!(text, "1-2");

    text.format(None).unwrap();
    assert!(text.is_empty());
}

#[test]
fn test_format_spills_to_heap() {
    init_logging();
    let long = "z".repeat(FORMAT_STACK_CAPACITY * 4);
    let mut text = Text::new();
    text_format!(text, "[{long}]").unwrap();
    assert_eq!(text.len(), long.len() + 2);
    assert_eq!(text.at(0), Ok('['));
    assert_eq!(text.reverse_find(']'), Some(text.len() - 1));
}

#[test]
fn test_index_errors() {
    let mut text = Text::from("ab");
    assert_eq!(
        text.at(2),
        Err(TextError::IndexOutOfRange { index: 2, len: 2 })
    );
    assert!(text.set_at(5, 'x').is_err());
    text.set_at(1, 'é').unwrap();
    assert_eq!(text, "aé");
}

#[test]
fn test_editing_pipeline() {
    let mut text = Text::from("  take a   break  ");
    text.trim().upper_each_word();
    assert_eq!(text, "Take A   Break");

    assert_eq!(text.replace("   ", " "), 1);
    assert_eq!(text.remove_char(' '), 2);
    assert_eq!(text, "TakeABreak");
    assert_eq!(text.delete(4, 1), 9);
    text.to_lower();
    assert_eq!(text, "takebreak");
    assert_eq!(text.find_one_of("xyzb"), Some(4));
}

#[test]
fn test_compare_magnitude() {
    let text = Text::from("abc");
    assert_eq!(text.compare("abc"), 0);
    assert_eq!(text.compare("abcde"), -2);
    assert_eq!(text.compare("ab"), 1);
    assert_eq!(text.compare("abd"), 0);
    assert_eq!(Text::from("ABC").compare_no_case("abcd"), -1);
}
