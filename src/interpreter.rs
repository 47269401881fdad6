/// The evaluator module lowers expression trees and evaluates them.
///
/// Lowering wraps a parsed tree into a reusable, immutable function. Each
/// evaluation walks the tree with a fresh set of variable values and applies
/// the decimal semantics of every operator.
///
/// # Responsibilities
/// - Computes how many inputs a compiled function expects.
/// - Evaluates unary and binary operations on arbitrary-precision decimals.
/// - Reports arithmetic errors such as division by zero, lazily, at
///   evaluation time.
pub mod evaluator;
/// The lexer module tokenizes expression text for further parsing.
///
/// The lexer reads the raw expression and produces a sequence of tokens:
/// numbers, single-letter variables, constants, operators and parentheses.
/// This is the first stage of compilation.
///
/// # Responsibilities
/// - Normalises the input (decimal commas, whitespace).
/// - Tells unary minus apart from binary minus.
/// - Reports lexical errors with their position.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser applies operator precedence and associativity with an explicit
/// operator stack and assigns every variable its input index.
///
/// # Responsibilities
/// - Converts tokens into a single expression tree.
/// - Validates parentheses and operand counts.
/// - Hands the finished tree to the evaluator for lowering.
pub mod parser;
