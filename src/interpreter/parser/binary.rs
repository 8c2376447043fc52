use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Span},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, peek_column},
            tree::{Chain, ExprTree, FactorTree, Link, TermTree},
            unary::parse_unary,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `expr := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token stream with span information.
///
/// # Returns
/// A [`Chain`] of terms; the builder folds it to the left.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ExprTree>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let column = peek_column(tokens);
    parse_chain(tokens, parse_multiplicative, |op| {
        matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    }).map_err(|e| e.within("expr", column))
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`.
///
/// The rule is: `term := factor (("*" | "/") factor)*`
///
/// # Parameters
/// - `tokens`: Token stream with span information.
///
/// # Returns
/// A [`Chain`] of factors.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<TermTree>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let column = peek_column(tokens);
    parse_chain(tokens, parse_exponent, |op| {
        matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
    }).map_err(|e| e.within("term", column))
}

/// Parses exponentiation expressions.
///
/// Repeated exponentiation is collected like every other level and therefore
/// associates to the left: `2 ** 3 ** 2` means `(2 ** 3) ** 2`.
///
/// The rule is: `factor := base ("**" base)*`
///
/// # Parameters
/// - `tokens`: Token stream with span information.
///
/// # Returns
/// A [`Chain`] of bases.
pub fn parse_exponent<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<FactorTree>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let column = peek_column(tokens);
    parse_chain(tokens, parse_unary, |op| matches!(op, BinaryOperator::Pow))
        .map_err(|e| e.within("factor", column))
}

/// Collects `operand (op operand)*` for one precedence level.
///
/// Parsing stops at the first token that is not an operator accepted by
/// `accepts`; that token is left for the enclosing level.
fn parse_chain<'a, I, T>(tokens: &mut Peekable<I>,
                         parse_operand: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
                         accepts: impl Fn(BinaryOperator) -> bool)
                         -> ParseResult<Chain<T>>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let left = parse_operand(tokens)?;
    let mut continuation = Vec::new();

    while let Some((token, span)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && accepts(op)
    {
        let op_span = *span;
        tokens.next();
        let right = parse_operand(tokens)?;
        continuation.push(Link { op,
                                 op_span,
                                 right });
    }

    Ok(Chain { left, continuation })
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for tokens that are not binary operators. `-` always maps to
/// subtraction here; a `-` at the start of a base never reaches this function.
///
/// # Example
/// ```
/// use decicalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::DoubleStar),
///            Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::DoubleStar => Some(BinaryOperator::Pow),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crate::interpreter::parser::{
        core::parse,
        tree::{BaseTree, Primary},
    };

    use super::*;

    fn ops<T>(chain: &Chain<T>) -> Vec<BinaryOperator> {
        chain.continuation.iter().map(|link| link.op).collect()
    }

    #[test]
    fn additive_chain_keeps_source_order() {
        let tree = parse("10-3-2").unwrap();
        assert_eq!(ops(&tree), vec![BinaryOperator::Sub, BinaryOperator::Sub]);
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let tree = parse("2+3*4").unwrap();

        assert_eq!(ops(&tree), vec![BinaryOperator::Add]);
        assert!(tree.left.continuation.is_empty());
        assert_eq!(ops(&tree.continuation[0].right), vec![BinaryOperator::Mul]);
    }

    #[test]
    fn exponent_chain_is_collected_flat() {
        let tree = parse("2**3**2").unwrap();
        let factor = &tree.left.left;

        assert_eq!(ops(factor), vec![BinaryOperator::Pow, BinaryOperator::Pow]);
    }

    #[test]
    fn negation_applies_to_the_base() {
        let tree = parse("-2**2").unwrap();
        let factor = &tree.left.left;

        assert!(matches!(&factor.left,
                         BaseTree::Negated { operand: Primary::Number { text, .. }, .. }
                         if text == "2"));
        assert_eq!(ops(factor), vec![BinaryOperator::Pow]);
    }

    #[test]
    fn continuation_shape_renders_nested() {
        let tree = parse("1+2-3").unwrap();

        assert_eq!(tree.to_string(),
                   "{left: {num: \"1\"}, continuation: {op: '+', right: {num: \"2\"}, \
                    continuation: {op: '-', right: {num: \"3\"}, continuation: nil}}}");
    }

    #[test]
    fn dangling_operator_reports_rule_trace() {
        let err = parse("1+").unwrap_err();
        let rules: Vec<_> = err.trace.iter().map(|frame| frame.rule).collect();

        assert_eq!(rules, ["primary", "base", "factor", "term", "expr"]);
        assert_eq!(err.column, 3);
    }
}
