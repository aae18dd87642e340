//! Command-line tokenizer and argument parsers.
//!
//! Built on `winnow` 0.7. A command line is a run of whitespace-separated
//! words: the first names the command, the rest are its arguments.

use crate::commands::CommandError;
use ged_core::Color;
use winnow::combinator::{preceded, repeat, terminated};
use winnow::prelude::*;
use winnow::token::{take_till, take_while};

/// Split a line into words. Blank lines yield an empty list.
pub fn tokenize(line: &str) -> Vec<&str> {
    // `words` accepts every input, so the fallback is never taken.
    words.parse(line).unwrap_or_default()
}

/// Parse a non-negative integer argument.
pub fn parse_number(token: &str) -> Result<u32, CommandError> {
    number.parse(token).map_err(|_| CommandError::InvalidNumber {
        token: token.to_string(),
        reason: if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
            "too large"
        } else {
            "expected a non-negative integer"
        },
    })
}

/// Parse a color argument (one letter `A`..=`Z`).
pub fn parse_color(token: &str) -> Result<Color, CommandError> {
    Ok(token.parse::<Color>()?)
}

// ─── Low-level parsers ──────────────────────────────────────────────────

fn blank<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    take_while(0.., char::is_whitespace).parse_next(input)
}

fn word<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    take_till(1.., char::is_whitespace).parse_next(input)
}

fn words<'a>(input: &mut &'a str) -> ModalResult<Vec<&'a str>> {
    terminated(repeat(0.., preceded(blank, word)), blank).parse_next(input)
}

fn number(input: &mut &str) -> ModalResult<u32> {
    take_while(1.., |c: char| c.is_ascii_digit())
        .try_map(|digits: &str| digits.parse::<u32>())
        .parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ged_core::CanvasError;

    #[test]
    fn tokenize_splits_on_any_whitespace() {
        assert_eq!(tokenize("pixel 1 2 A"), vec!["pixel", "1", "2", "A"]);
        assert_eq!(tokenize("  hline\t1  4 2 C \r"), vec!["hline", "1", "4", "2", "C"]);
        assert_eq!(tokenize("show"), vec!["show"]);
    }

    #[test]
    fn tokenize_blank_lines() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t ").is_empty());
        assert!(tokenize("\n").is_empty());
    }

    #[test]
    fn numbers() {
        assert_eq!(parse_number("0"), Ok(0));
        assert_eq!(parse_number("250"), Ok(250));
        assert_eq!(parse_number("007"), Ok(7));
    }

    #[test]
    fn number_errors() {
        assert_eq!(
            parse_number("-1"),
            Err(CommandError::InvalidNumber {
                token: "-1".to_string(),
                reason: "expected a non-negative integer",
            })
        );
        assert!(parse_number("3x").is_err());
        assert!(parse_number("").is_err());
        assert_eq!(
            parse_number("99999999999"),
            Err(CommandError::InvalidNumber {
                token: "99999999999".to_string(),
                reason: "too large",
            })
        );
    }

    #[test]
    fn colors() {
        assert_eq!(parse_color("Z"), Ok(Color::ALL[25]));
        assert_eq!(
            parse_color("z"),
            Err(CommandError::Canvas(CanvasError::InvalidColor("z".to_string())))
        );
    }
}
