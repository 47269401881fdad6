use std::fmt;

use logos::Logos;

use crate::{
    ast::UnaryOperator,
    error::{ParseError, ParseResult},
};

/// Names of the recognised constants.
pub const CONSTANTS: [&str; 2] = ["e", "pi"];

/// The lexical category of a [`Token`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A numeric literal such as `3.14`.
    Number,
    /// A single-letter variable.
    Variable,
    /// A named constant: `e` or `pi`.
    Constant,
    /// One of `+ - * / % ^` between two operands.
    BinaryOp,
    /// A prefix operator: unary minus or a function name such as `sin`.
    UnaryOp,
    /// `(`
    LParen,
    /// `)`
    RParen,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Number => "NUMBER",
                        Self::Variable => "VARIABLE",
                        Self::Constant => "CONSTANT",
                        Self::BinaryOp => "BINARY_OP",
                        Self::UnaryOp => "UNARY_OP",
                        Self::LParen => "LPAREN",
                        Self::RParen => "RPAREN",
                    })
    }
}

/// Represents a lexical token of an expression.
///
/// `text` is the exact lexeme: the numeric literal, the operator symbol, or
/// the lower-cased identifier. Tokens compare structurally.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// The lexical category.
    pub kind: TokenKind,
    /// The matched text.
    pub text: String,
}

impl Token {
    /// Creates a token of `kind` with the given text.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self { kind,
               text: text.into() }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.text, self.kind)
    }
}

/// Raw lexemes of the normalised expression, before classification.
///
/// Whether a `-` is unary, and whether a word is a function, a constant or a
/// variable, depends on context and is decided by [`tokenize`].
#[derive(Logos, Debug, Copy, Clone, PartialEq, Eq)]
enum Lexeme {
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Any of `+ - * / % ^`.
    #[regex(r"[-+*/%^]")]
    Operator,
    /// A run of digits and dots; validated after matching.
    #[regex(r"[0-9.]+")]
    Number,
    /// A run of letters.
    #[regex(r"\p{L}+")]
    Word,
}

/// Removes whitespace and turns decimal commas into decimal points.
///
/// Whitespace carries no meaning at all, so `"2 3"` normalises to `"23"`.
fn normalise(expression: &str) -> String {
    expression.chars()
              .filter(|c| !matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r'))
              .map(|c| if c == ',' { '.' } else { c })
              .collect()
}

/// Converts an expression into its token sequence.
///
/// Blank input is rejected. Positions reported in errors are zero-based
/// character offsets into the normalised expression. Tokenizing is atomic:
/// either every character is accounted for or an error is returned.
///
/// # Errors
/// - `InvalidInput` for empty or whitespace-only text.
/// - `MalformedNumber` for a literal with two dots or without digits.
/// - `InvalidVariableName` for a multi-letter word that names no function or
///   constant.
/// - `UnknownCharacter` for anything else that is not part of a token.
///
/// # Example
/// ```
/// use mathfn::interpreter::lexer::{Token, TokenKind, tokenize};
///
/// let tokens = tokenize("-5 + sin(x)").unwrap();
/// assert_eq!(tokens[0], Token::new(TokenKind::UnaryOp, "-"));
/// assert_eq!(tokens[2], Token::new(TokenKind::BinaryOp, "+"));
/// assert_eq!(tokens[3], Token::new(TokenKind::UnaryOp, "sin"));
/// assert_eq!(tokens[5], Token::new(TokenKind::Variable, "x"));
///
/// assert!(tokenize("   ").is_err());
/// ```
pub fn tokenize(expression: &str) -> ParseResult<Vec<Token>> {
    let source = normalise(expression);
    if source.is_empty() {
        return Err(ParseError::InvalidInput);
    }

    let mut tokens: Vec<Token> = Vec::new();
    let mut lexer = Lexeme::lexer(&source);
    let mut position = 0;

    while let Some(lexeme) = lexer.next() {
        let slice = lexer.slice();

        let Ok(lexeme) = lexeme else {
            let character = slice.chars().next().unwrap_or_default();
            return Err(ParseError::UnknownCharacter { character, position });
        };

        let token = match lexeme {
            Lexeme::LParen => Token::new(TokenKind::LParen, slice),
            Lexeme::RParen => Token::new(TokenKind::RParen, slice),
            Lexeme::Operator if slice == "-" && starts_operand(tokens.last()) => {
                Token::new(TokenKind::UnaryOp, slice)
            },
            Lexeme::Operator => Token::new(TokenKind::BinaryOp, slice),
            Lexeme::Number => number(slice, position)?,
            Lexeme::Word => word(slice, position)?,
        };
        tokens.push(token);
        position += slice.chars().count();
    }

    Ok(tokens)
}

/// A `-` negates when nothing precedes it, or when it follows `(` or a
/// binary operator.
fn starts_operand(previous: Option<&Token>) -> bool {
    previous.is_none_or(|t| matches!(t.kind, TokenKind::LParen | TokenKind::BinaryOp))
}

fn number(literal: &str, position: usize) -> ParseResult<Token> {
    let dots = literal.bytes().filter(|&b| b == b'.').count();
    if dots > 1 || dots == literal.len() {
        return Err(ParseError::MalformedNumber { literal: literal.to_string(),
                                                 position });
    }
    Ok(Token::new(TokenKind::Number, literal))
}

fn word(word: &str, position: usize) -> ParseResult<Token> {
    let ident = word.to_lowercase();

    if UnaryOperator::FUNCTIONS.iter().any(|op| op.symbol() == ident) {
        return Ok(Token::new(TokenKind::UnaryOp, ident));
    }
    if CONSTANTS.contains(&ident.as_str()) {
        return Ok(Token::new(TokenKind::Constant, ident));
    }
    if ident.chars().count() == 1 {
        return Ok(Token::new(TokenKind::Variable, ident));
    }

    Err(ParseError::InvalidVariableName { name: ident,
                                          position })
}
