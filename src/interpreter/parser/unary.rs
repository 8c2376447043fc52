use std::iter::Peekable;

use crate::{
    ast::Span,
    error::{ParseError, ParseErrorKind},
    interpreter::{
        lexer::Token,
        parser::{
            core::{END_OF_INPUT, ParseResult, parse_expression, peek_column},
            tree::{BaseTree, Primary},
        },
    },
};

/// What may start a primary.
const PRIMARY_START: &[&str] = &["a number", "'('"];
/// What may start a base: a primary or a unary minus.
const BASE_START: &[&str] = &["a number", "'('", "'-'"];

/// Parses an optionally negated base.
///
/// Unary minus applies to a single primary, never to an exponent chain or to
/// another minus. `-2 ** 2` therefore negates `2` before exponentiation, and
/// `--2` is rejected.
///
/// Grammar:
/// ```text
///     base := "-" primary
///           | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A [`BaseTree`] wrapping the primary.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<BaseTree>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let column = peek_column(tokens);

    let base = if let Some((Token::Minus, minus)) = tokens.peek() {
        let minus = *minus;
        tokens.next();
        parse_primary(tokens, PRIMARY_START).map(|operand| BaseTree::Negated { minus, operand })
    } else {
        parse_primary(tokens, BASE_START).map(BaseTree::Plain)
    };

    base.map_err(|e| e.within("base", column))
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := number
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `expected`: The alternatives to report if no primary starts here.
///
/// # Returns
/// The parsed [`Primary`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>,
                                   expected: &[&'static str])
                                   -> ParseResult<Primary>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let column = peek_column(tokens);

    let primary = match tokens.peek() {
        Some((Token::Number(_), _)) => Ok(parse_literal(tokens)),
        Some((Token::LParen, _)) => parse_grouping(tokens),
        Some((token, span)) => {
            Err(ParseError::new(ParseErrorKind::UnexpectedToken { found:    token.to_string(),
                                                                  expected: expected.to_vec(), },
                                span.column()))
        },
        None => Err(ParseError::new(ParseErrorKind::UnexpectedEndOfInput { expected:
                                                                               expected.to_vec() },
                                    END_OF_INPUT)),
    };

    primary.map_err(|e| e.within("primary", column))
}

/// Consumes a numeric literal token.
///
/// The text is kept exactly as written, separators included; the builder
/// normalizes it.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> Primary
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    match tokens.next() {
        Some((Token::Number(text), span)) => Primary::Number { text: text.clone(),
                                                               span: *span, },
        _ => unreachable!("parse_literal is only called on a number token"),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`. Failure to find the closing
/// parenthesis yields `ParseErrorKind::ExpectedClosingParen`, which names the
/// column of the opening one.
///
/// Grammar `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
///
/// # Returns
/// A [`Primary::Group`] spanning both parentheses.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Primary>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let open = match tokens.next() {
        Some((Token::LParen, span)) => *span,
        _ => unreachable!("parse_grouping is only called on '('"),
    };
    let inner = parse_expression(tokens)?;

    match tokens.next() {
        Some((Token::RParen, close)) => Ok(Primary::Group { inner: Box::new(inner),
                                                            span:  open.to(*close), }),
        Some((token, span)) => {
            Err(ParseError::new(ParseErrorKind::ExpectedClosingParen { found:       Some(token.to_string()),
                                                                       open_column: open.column(), },
                                span.column()))
        },
        None => Err(ParseError::new(ParseErrorKind::ExpectedClosingParen { found:       None,
                                                                           open_column:
                                                                               open.column(), },
                                    END_OF_INPUT)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::parser::core::parse;

    #[test]
    fn double_minus_is_rejected() {
        let err = parse("--2").unwrap_err();

        assert_eq!(err.column, 2);
        assert_eq!(err.expected(), ["a number", "'('"]);
    }

    #[test]
    fn operator_where_operand_belongs() {
        let err = parse("2 * * 3").unwrap_err();

        assert_eq!(err.kind,
                   ParseErrorKind::UnexpectedToken { found:    "*".to_string(),
                                                     expected: BASE_START.to_vec(), });
        assert_eq!(err.column, 5);
    }

    #[test]
    fn unclosed_group_names_the_open_paren() {
        let err = parse("(1+2").unwrap_err();

        assert_eq!(err.kind,
                   ParseErrorKind::ExpectedClosingParen { found:       None,
                                                          open_column: 1, });
        assert_eq!(err.column, 5);
    }

    #[test]
    fn group_span_covers_parentheses() {
        let tree = parse(" (1)").unwrap();
        let BaseTree::Plain(primary) = &tree.left.left.left else {
            panic!("expected a plain base");
        };

        assert!(matches!(primary, Primary::Group { span, .. } if *span == Span::new(1, 4)));
    }
}
