use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::Span,
    error::{ParseError, ParseErrorKind},
    interpreter::{
        lexer::{Token, tokenize},
        parser::{
            binary::parse_additive,
            tree::{ExprTree, Nested, Spanned},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Column recorded by rules that fail or start at the end of input.
///
/// The rules only see a token iterator and cannot know how long the line was,
/// so [`parse_tokens`] replaces this placeholder with the column just past the
/// last character.
pub(crate) const END_OF_INPUT: usize = 0;

/// Largest accepted nesting depth of an expression.
///
/// Every operator, unary minus and parenthesized group adds a level, so
/// `1+2+3` has depth 3 and a chain of 1,000 additions is rejected. Evaluation
/// recurses once per level; the limit keeps it well inside the stack.
pub const MAX_DEPTH: usize = 1_000;

/// Lexes and parses a full line into a parse tree.
///
/// # Errors
/// Returns a [`ParseError`] if the line contains unknown characters, is empty,
/// is not a well-formed expression or has input left over after one.
///
/// # Example
/// ```
/// use decicalc::interpreter::parser::core::parse;
///
/// let tree = parse("1+2*3").unwrap();
/// assert_eq!(tree.continuation.len(), 1);
///
/// assert!(parse("(1+2").is_err());
/// ```
pub fn parse(source: &str) -> ParseResult<ExprTree> {
    let tokens = tokenize(source)?;
    parse_tokens(&tokens, source.len())
}

/// Parses an already tokenized line.
///
/// `source_len` is the length of the line in bytes and is used to place
/// end-of-input errors just past its last character.
///
/// # Errors
/// See [`parse`].
pub fn parse_tokens(tokens: &[(Token, Span)], source_len: usize) -> ParseResult<ExprTree> {
    let end_column = source_len + 1;

    if tokens.is_empty() {
        return Err(ParseError::new(ParseErrorKind::EmptyInput, end_column));
    }

    check_group_nesting(tokens)?;

    let mut iter = tokens.iter().peekable();
    let tree = parse_expression(&mut iter).map_err(|e| resolve_end_of_input(e, end_column))?;

    if let Some((token, span)) = iter.next() {
        return Err(ParseError::new(ParseErrorKind::UnexpectedTrailingTokens { token:
                                                                                  token.to_string() },
                                   span.column()));
    }

    let depth = tree.depth();
    if depth > MAX_DEPTH {
        return Err(ParseError::new(ParseErrorKind::TooDeep { max: MAX_DEPTH },
                                   tree.span().column()));
    }

    debug!(depth, tree = %tree, "parsed expression");
    Ok(tree)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition and subtraction, and descends through
/// the precedence hierarchy.
///
/// Grammar: `expression := expr`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ExprTree>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    parse_additive(tokens)
}

/// Column of the next token, or [`END_OF_INPUT`] if there is none.
pub(crate) fn peek_column<'a, I>(tokens: &mut Peekable<I>) -> usize
    where I: Iterator<Item = &'a (Token, Span)>
{
    tokens.peek().map_or(END_OF_INPUT, |(_, span)| span.column())
}

/// Rejects parentheses nested past [`MAX_DEPTH`] before the recursive rules
/// see them.
///
/// Each group adds a level, so such input could never pass the depth check
/// after parsing either.
fn check_group_nesting(tokens: &[(Token, Span)]) -> ParseResult<()> {
    let mut open = 0usize;

    for (token, span) in tokens {
        match token {
            Token::LParen => {
                open += 1;
                if open > MAX_DEPTH {
                    return Err(ParseError::new(ParseErrorKind::TooDeep { max: MAX_DEPTH },
                                               span.column()));
                }
            },
            Token::RParen => open = open.saturating_sub(1),
            _ => {},
        }
    }

    Ok(())
}

fn resolve_end_of_input(mut error: ParseError, end_column: usize) -> ParseError {
    if error.column == END_OF_INPUT {
        error.column = end_column;
    }
    for frame in &mut error.trace {
        if frame.column == END_OF_INPUT {
            frame.column = end_column;
        }
    }
    error
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_line_is_rejected() {
        let err = parse("   ").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::EmptyInput);
    }

    #[test]
    fn trailing_tokens_are_rejected() {
        let err = parse("1 2").unwrap_err();

        assert_eq!(err.kind,
                   ParseErrorKind::UnexpectedTrailingTokens { token: "2".to_string() });
        assert_eq!(err.column, 3);
    }

    #[test]
    fn deep_groups_are_rejected_before_recursing() {
        let source = format!("{}1{}", "(".repeat(MAX_DEPTH + 1), ")".repeat(MAX_DEPTH + 1));
        let err = parse(&source).unwrap_err();

        assert_eq!(err.kind, ParseErrorKind::TooDeep { max: MAX_DEPTH });
        assert_eq!(err.column, MAX_DEPTH + 1);
        assert!(err.trace.is_empty());
    }

    #[test]
    fn long_chains_are_rejected_at_their_start() {
        let source = vec!["1"; MAX_DEPTH + 1].join(" + ");
        let err = parse(&source).unwrap_err();

        assert_eq!(err.kind, ParseErrorKind::TooDeep { max: MAX_DEPTH });
        assert_eq!(err.column, 1);
        assert!(parse(&vec!["1"; MAX_DEPTH].join(" + ")).is_ok());
    }

    #[test]
    fn end_of_input_column_points_past_the_line() {
        let err = parse("1 +").unwrap_err();

        assert_eq!(err.column, 4);
        assert!(matches!(err.kind, ParseErrorKind::UnexpectedEndOfInput { .. }));
        assert!(err.trace.iter().all(|frame| frame.column != END_OF_INPUT));
    }
}
