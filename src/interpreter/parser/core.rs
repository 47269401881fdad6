use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::{ParseError, ParseResult},
    interpreter::{
        evaluator::core::MathFunction,
        lexer::{Token, TokenKind},
        parser::{
            registry::VariableRegistry,
            utils::{binary_operator, constant_value, number_literal, unary_operator},
        },
    },
};

/// An entry of the operator stack.
#[derive(Debug, Clone, Copy)]
enum Pending {
    /// An open parenthesis and the index of its token.
    Open { position: usize },
    Unary(UnaryOperator),
    Binary(BinaryOperator),
}

/// State of one shunting-yard run: the operand stack, the operator stack and
/// the variables seen so far.
#[derive(Debug, Default)]
struct ShuntingYard {
    output:    Vec<Expr>,
    operators: Vec<Pending>,
    registry:  VariableRegistry,
}

/// Parses a token sequence and lowers it into a reusable function.
///
/// This is the usual entry point after [`tokenize`](crate::interpreter::lexer::tokenize);
/// use [`parse_expr`] to inspect the tree instead.
///
/// # Errors
/// See [`parse_expr`].
///
/// # Example
/// ```
/// use bigdecimal::BigDecimal;
/// use mathfn::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let function = parse(&tokenize("x*y+z").unwrap()).unwrap();
/// let inputs = [BigDecimal::from(2), BigDecimal::from(3), BigDecimal::from(4)];
///
/// assert_eq!(function.variable_count(), 3);
/// assert_eq!(function.evaluate(&inputs).unwrap(), BigDecimal::from(10));
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<MathFunction> {
    parse_expr(tokens).map(Expr::lower)
}

/// Parses a token sequence into a single expression tree.
///
/// Uses the shunting-yard algorithm with the precedence tiers
/// `+ -` < `* / %` < `^`. All binary operators group to the left except `^`,
/// which groups to the right. Unary operators bind to the next complete
/// operand or parenthesised group, so `sin(x)+1` applies `sin` to `x` only.
///
/// # Errors
/// - `EmptyInput` if there are no tokens.
/// - `MismatchedParenthesis` for an unmatched `)` or an unclosed `(`.
/// - `InsufficientOperands` if an operator is short of operands.
/// - `SyntaxError` if the tokens do not reduce to exactly one expression,
///   e.g. `2x` where two operands are adjacent.
/// - `InvalidNumber`, `UnknownOperator` or `UnknownConstant` for tokens whose
///   text does not match their kind.
///
/// # Example
/// ```
/// use mathfn::{
///     error::ParseError,
///     interpreter::{lexer::tokenize, parser::core::parse_expr},
/// };
///
/// let expr = parse_expr(&tokenize("2^3^2").unwrap()).unwrap();
/// assert_eq!(expr.to_string(), "(2 ^ (3 ^ 2))");
///
/// let err = parse_expr(&tokenize("2x").unwrap()).unwrap_err();
/// assert_eq!(err, ParseError::SyntaxError { operands: 2 });
/// ```
pub fn parse_expr(tokens: &[Token]) -> ParseResult<Expr> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut state = ShuntingYard::default();
    for (position, token) in tokens.iter().enumerate() {
        state.push_token(token, position)?;
    }
    state.finish()
}

impl ShuntingYard {
    fn push_token(&mut self, token: &Token, position: usize) -> ParseResult<()> {
        match token.kind {
            TokenKind::Number => self.output.push(number_literal(&token.text)?),
            TokenKind::Constant => self.output.push(Expr::number(constant_value(&token.text)?)),
            TokenKind::Variable => {
                let index = self.registry.index_of(&token.text);
                self.output.push(Expr::variable(token.text.as_str(), index));
            },
            TokenKind::UnaryOp => self.operators.push(Pending::Unary(unary_operator(&token.text)?)),
            TokenKind::LParen => self.operators.push(Pending::Open { position }),
            TokenKind::BinaryOp => {
                let op = binary_operator(&token.text)?;
                self.reduce_before(op)?;
                self.operators.push(Pending::Binary(op));
            },
            TokenKind::RParen => self.close_group(position)?,
        }
        Ok(())
    }

    /// Applies every stacked operator that binds at least as tightly as the
    /// incoming `op`, stopping at an open parenthesis.
    fn reduce_before(&mut self, op: BinaryOperator) -> ParseResult<()> {
        while let Some(&top) = self.operators.last() {
            let binds_tighter = match top {
                Pending::Open { .. } => false,
                Pending::Unary(_) => true,
                Pending::Binary(stacked) => {
                    stacked.precedence() > op.precedence()
                    || (stacked.precedence() == op.precedence() && !op.is_right_associative())
                },
            };
            if !binds_tighter {
                break;
            }
            self.operators.pop();
            self.apply(top)?;
        }
        Ok(())
    }

    /// Handles `)`: reduces the group, drops its `(` and applies a unary
    /// operator written directly in front of the group.
    fn close_group(&mut self, position: usize) -> ParseResult<()> {
        loop {
            match self.operators.pop() {
                Some(Pending::Open { .. }) => break,
                Some(pending) => self.apply(pending)?,
                None => return Err(ParseError::MismatchedParenthesis { position }),
            }
        }

        if let Some(&Pending::Unary(op)) = self.operators.last() {
            self.operators.pop();
            self.apply(Pending::Unary(op))?;
        }
        Ok(())
    }

    /// Reduces what is left on the operator stack and returns the single
    /// remaining expression.
    fn finish(mut self) -> ParseResult<Expr> {
        while let Some(pending) = self.operators.pop() {
            if let Pending::Open { position } = pending {
                return Err(ParseError::MismatchedParenthesis { position });
            }
            self.apply(pending)?;
        }

        if self.output.len() != 1 {
            return Err(ParseError::SyntaxError { operands: self.output.len() });
        }
        self.output.pop().ok_or(ParseError::SyntaxError { operands: 0 })
    }

    fn apply(&mut self, pending: Pending) -> ParseResult<()> {
        match pending {
            Pending::Unary(op) => {
                let operand = self.pop_operand(op.symbol())?;
                self.output.push(Expr::unary(op, operand));
            },
            Pending::Binary(op) => {
                if self.output.len() < 2 {
                    return Err(ParseError::InsufficientOperands { operator: op.symbol().to_string() });
                }
                let right = self.pop_operand(op.symbol())?;
                let left = self.pop_operand(op.symbol())?;
                self.output.push(Expr::binary(op, left, right, self.registry.len()));
            },
            Pending::Open { position } => return Err(ParseError::MismatchedParenthesis { position }),
        }
        Ok(())
    }

    fn pop_operand(&mut self, operator: &str) -> ParseResult<Expr> {
        self.output.pop().ok_or_else(|| ParseError::InsufficientOperands { operator:
                                                                               operator.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;

    fn tree(expression: &str) -> String {
        parse_expr(&tokenize(expression).unwrap()).unwrap().to_string()
    }

    fn error(expression: &str) -> ParseError {
        parse_expr(&tokenize(expression).unwrap()).unwrap_err()
    }

    #[test]
    fn precedence_and_associativity() {
        assert_eq!(tree("2+3*4"), "(2 + (3 * 4))");
        assert_eq!(tree("8-4-2"), "((8 - 4) - 2)");
        assert_eq!(tree("8/4%3"), "((8 / 4) % 3)");
        assert_eq!(tree("2^3^2"), "(2 ^ (3 ^ 2))");
        assert_eq!(tree("(2^3)^2"), "((2 ^ 3) ^ 2)");
    }

    #[test]
    fn unary_operators_bind_to_the_next_operand() {
        assert_eq!(tree("-2^2"), "(-(2) ^ 2)");
        assert_eq!(tree("sin(x)+1"), "(sin(x) + 1)");
        assert_eq!(tree("sqrt(x^2+y^2)"), "sqrt(((x ^ 2) + (y ^ 2)))");
        assert_eq!(tree("-(-3)"), "-(-(3))");
    }

    #[test]
    fn binary_nodes_record_variables_seen_so_far() {
        let expr = parse_expr(&tokenize("x*2+y").unwrap()).unwrap();
        let Expr::BinaryOp { left, variable_count, .. } = &expr else {
            panic!("expected a binary node");
        };
        assert_eq!(*variable_count, 2);
        assert!(matches!(**left, Expr::BinaryOp { variable_count: 1, .. }));
    }

    #[test]
    fn parenthesis_errors_point_at_the_token() {
        assert_eq!(error("(2+3"), ParseError::MismatchedParenthesis { position: 0 });
        assert_eq!(error("2+3)"), ParseError::MismatchedParenthesis { position: 3 });
    }

    #[test]
    fn operand_shortages() {
        assert_eq!(error("2+"), ParseError::InsufficientOperands { operator: "+".to_string() });
        assert_eq!(error("sin()"), ParseError::InsufficientOperands { operator: "sin".to_string() });
        assert_eq!(error("--5"), ParseError::InsufficientOperands { operator: "-".to_string() });
        assert_eq!(error("()"), ParseError::SyntaxError { operands: 0 });
    }

    #[test]
    fn hand_built_tokens_are_validated() {
        let tokens = [Token::new(TokenKind::Number, "1"),
                      Token::new(TokenKind::BinaryOp, "&"),
                      Token::new(TokenKind::Number, "2")];
        assert_eq!(parse_expr(&tokens),
                   Err(ParseError::UnknownOperator { operator: "&".to_string() }));
        assert_eq!(parse_expr(&[]), Err(ParseError::EmptyInput));
        assert_eq!(parse_expr(&[Token::new(TokenKind::Constant, "tau")]),
                   Err(ParseError::UnknownConstant { name: "tau".to_string() }));
    }
}
