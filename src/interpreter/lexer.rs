use std::fmt;

use logos::Logos;
use tracing::debug;

use crate::{
    ast::Span,
    error::{ParseError, ParseErrorKind},
};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Numeric literal tokens, kept as written.
    ///
    /// Three shapes are accepted: thousands-grouped integers with an optional
    /// fraction (`1,234`, `12,345.67`), dotted decimals (`3.14`, `.5`) and
    /// plain digit runs (`42`). Grouping requires one to three leading digits
    /// followed by groups of exactly three, so `1,23` is rejected.
    #[regex(r"[0-9]{1,3}(,[0-9]{3})+(\.[0-9]+)?", |lex| lex.slice().to_string())]
    #[regex(r"[0-9]*\.[0-9]+", |lex| lex.slice().to_string())]
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Number(String),
    /// `**`
    #[token("**")]
    DoubleStar,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Blank space between tokens.
    #[regex(r"[ \t\f\r\n]+", logos::skip)]
    Ignored,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(text) => write!(f, "{text}"),
            Self::DoubleStar => write!(f, "**"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Ignored => Ok(()),
        }
    }
}

/// Splits a line into tokens paired with their source spans.
///
/// Blank space is skipped. Lexing stops at the first piece of text that does
/// not start a token.
///
/// # Errors
/// Returns [`ParseErrorKind::UnexpectedCharacter`] pointing at the first
/// unrecognized input.
///
/// # Example
/// ```
/// use decicalc::{
///     ast::Span,
///     interpreter::lexer::{Token, tokenize},
/// };
///
/// let tokens = tokenize("1,234 ** 2").unwrap();
///
/// assert_eq!(tokens,
///            vec![(Token::Number("1,234".to_string()), Span::new(0, 5)),
///                 (Token::DoubleStar, Span::new(6, 8)),
///                 (Token::Number("2".to_string()), Span::new(9, 10)),]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, Span)>, ParseError> {
    let mut tokens = Vec::new();

    for (token, range) in Token::lexer(source).spanned() {
        let span = Span::new(range.start, range.end);
        match token {
            Ok(token) => tokens.push((token, span)),
            Err(()) => {
                let found = source.get(range.clone())
                                  .filter(|slice| !slice.is_empty())
                                  .map(str::to_string)
                                  .or_else(|| {
                                      source.get(range.start..)
                                            .and_then(|rest| rest.chars().next())
                                            .map(String::from)
                                  })
                                  .unwrap_or_default();
                return Err(ParseError::new(ParseErrorKind::UnexpectedCharacter { found },
                                           span.column()));
            },
        }
    }

    debug!(count = tokens.len(), "tokenized input");
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).unwrap().into_iter().map(|(token, _)| token).collect()
    }

    fn number(text: &str) -> Token {
        Token::Number(text.to_string())
    }

    #[test]
    fn grouped_literal_is_one_token() {
        assert_eq!(kinds("1,234"), vec![number("1,234")]);
        assert_eq!(kinds("12,345,678.90"), vec![number("12,345,678.90")]);
    }

    #[test]
    fn dotted_and_plain_literals() {
        assert_eq!(kinds(".5"), vec![number(".5")]);
        assert_eq!(kinds("3.25"), vec![number("3.25")]);
        assert_eq!(kinds("1234"), vec![number("1234")]);
    }

    #[test]
    fn double_star_wins_over_star() {
        assert_eq!(kinds("2**3*4"),
                   vec![number("2"),
                        Token::DoubleStar,
                        number("3"),
                        Token::Star,
                        number("4")]);
    }

    #[test]
    fn blank_space_is_skipped() {
        assert_eq!(kinds(" ( 1 +\t2 )\n"),
                   vec![Token::LParen,
                        number("1"),
                        Token::Plus,
                        number("2"),
                        Token::RParen]);
    }

    #[test]
    fn unknown_character_reports_column() {
        let err = tokenize("1 + x").unwrap_err();

        assert_eq!(err.column, 5);
        assert_eq!(err.kind,
                   ParseErrorKind::UnexpectedCharacter { found: "x".to_string() });
    }

    #[test]
    fn short_group_is_rejected() {
        assert!(tokenize("1,23").is_err());
    }
}
