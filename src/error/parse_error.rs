use thiserror::Error;

/// Result type used by the tokenizer and the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Represents all errors that can occur during tokenizing or parsing.
///
/// Lexical errors carry a zero-based character offset into the normalised
/// expression (commas replaced by dots, whitespace removed). Structural errors
/// that point at a parenthesis carry the index of that token instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The expression was empty or contained only whitespace.
    #[error("Expression cannot be null or empty.")]
    InvalidInput,
    /// A character that belongs to no token.
    #[error("Unknown character '{character}' at position {position}.")]
    UnknownCharacter {
        /// The offending character.
        character: char,
        /// Offset of the character.
        position:  usize,
    },
    /// A numeric literal with more than one decimal point, or none of digits.
    #[error("Invalid number format: '{literal}' at position {position} has multiple dots or no digits.")]
    MalformedNumber {
        /// The literal as far as it was scanned.
        literal:  String,
        /// Offset of the first character of the literal.
        position: usize,
    },
    /// A multi-letter identifier that names no function or constant.
    #[error("Variables must be single-letter: '{name}' at position {position}.")]
    InvalidVariableName {
        /// The lower-cased identifier.
        name:     String,
        /// Offset of the first letter of the identifier.
        position: usize,
    },
    /// The parser was handed no tokens.
    #[error("Token list cannot be null or empty.")]
    EmptyInput,
    /// A `)` without a matching `(`, or a `(` that is never closed.
    #[error("Mismatched parentheses at token {position}.")]
    MismatchedParenthesis {
        /// Index of the unmatched parenthesis token.
        position: usize,
    },
    /// An operator was applied with fewer operands than it takes.
    #[error("Not enough operands for operator '{operator}'.")]
    InsufficientOperands {
        /// The operator symbol.
        operator: String,
    },
    /// Parsing finished with zero or several disconnected operands.
    #[error("Invalid expression: {operands} operands left after parsing.")]
    SyntaxError {
        /// Number of operands left on the output stack.
        operands: usize,
    },
    /// A number token whose text is not a decimal literal.
    #[error("Invalid numeric literal '{literal}'.")]
    InvalidNumber {
        /// The token text.
        literal: String,
    },
    /// An operator token whose text names no known operator.
    #[error("Unknown operator '{operator}'.")]
    UnknownOperator {
        /// The token text.
        operator: String,
    },
    /// A constant token whose text names no known constant.
    #[error("Unknown constant '{name}'.")]
    UnknownConstant {
        /// The token text.
        name: String,
    },
}
