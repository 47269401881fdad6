use std::fmt;

use bigdecimal::BigDecimal;

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// Every node exclusively owns its children, so a parsed expression is a
/// plain tree without sharing. Trees are built bottom-up by the parser and
/// consumed by [`Expr::lower`], which turns them into a reusable
/// [`MathFunction`](crate::interpreter::evaluator::core::MathFunction).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A numeric literal, including materialised constants such as `pi`.
    Number {
        /// The constant value.
        value: BigDecimal,
    },
    /// Reference to a variable by its position in the input slice.
    Variable {
        /// Name of the variable.
        name:  String,
        /// Zero-based index assigned in first-occurrence order.
        index: usize,
    },
    /// A unary operation such as negation or `sqrt`.
    UnaryOp {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// The operator.
        op:             BinaryOperator,
        /// Left operand.
        left:           Box<Self>,
        /// Right operand.
        right:          Box<Self>,
        /// Number of distinct variables the parser had seen when this node
        /// was built. This counts variables outside the subtree too.
        variable_count: usize,
    },
}

impl Expr {
    /// Creates a numeric literal node.
    #[must_use]
    pub const fn number(value: BigDecimal) -> Self {
        Self::Number { value }
    }

    /// Creates a variable reference node.
    #[must_use]
    pub fn variable(name: impl Into<String>, index: usize) -> Self {
        Self::Variable { name: name.into(),
                         index }
    }

    /// Creates a unary operation node.
    #[must_use]
    pub fn unary(op: UnaryOperator, operand: Self) -> Self {
        Self::UnaryOp { op,
                        operand: Box::new(operand) }
    }

    /// Creates a binary operation node.
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self, variable_count: usize) -> Self {
        Self::BinaryOp { op,
                         left: Box::new(left),
                         right: Box::new(right),
                         variable_count }
    }
}

/// Dismantles the tree with an explicit stack, so dropping a deep tree such as
/// a long `1+1+...+1` chain does not overflow the call stack.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut detached = Vec::new();
        self.detach_children(&mut detached);
        while let Some(mut node) = detached.pop() {
            node.detach_children(&mut detached);
        }
    }
}

impl Expr {
    /// Moves the direct children onto `out`, leaving empty leaves behind.
    fn detach_children(&mut self, out: &mut Vec<Self>) {
        let leaf = || Self::Variable { name:  String::new(),
                                       index: 0, };
        match self {
            Self::Number { .. } | Self::Variable { .. } => {},
            Self::UnaryOp { operand, .. } => out.push(std::mem::replace(operand.as_mut(), leaf())),
            Self::BinaryOp { left, right, .. } => {
                out.push(std::mem::replace(left.as_mut(), leaf()));
                out.push(std::mem::replace(right.as_mut(), leaf()));
            },
        }
    }
}

/// Renders the tree in infix form, parenthesising every binary operation.
///
/// ## Example
/// ```
/// use mathfn::interpreter::{lexer::tokenize, parser::core::parse_expr};
///
/// let expr = parse_expr(&tokenize("x*y+-z").unwrap()).unwrap();
/// assert_eq!(expr.to_string(), "((x * y) + -(z))");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value } => write!(f, "{value}"),
            Self::Variable { name, .. } => write!(f, "{name}"),
            Self::UnaryOp { op, operand } => write!(f, "{op}({operand})"),
            Self::BinaryOp { op, left, right, .. } => write!(f, "({left} {op} {right})"),
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Remainder (`%`)
    Rem,
    /// Exponentiation (`^`)
    Pow,
}

impl BinaryOperator {
    /// Looks up the operator written as `symbol`.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "%" => Some(Self::Rem),
            "^" => Some(Self::Pow),
            _ => None,
        }
    }

    /// The operator as it is written in source text.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::Pow => "^",
        }
    }

    /// Binding strength: `+ -` bind loosest, `^` tightest.
    ///
    /// ```
    /// use mathfn::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Mul.precedence() > BinaryOperator::Sub.precedence());
    /// assert_eq!(BinaryOperator::Div.precedence(), BinaryOperator::Rem.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div | Self::Rem => 2,
            Self::Pow => 3,
        }
    }

    /// Only exponentiation groups to the right: `2^3^2` is `2^(3^2)`.
    #[must_use]
    pub const fn is_right_associative(self) -> bool {
        matches!(self, Self::Pow)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Represents a unary operator.
///
/// Besides negation these are the function-like operations written as a
/// name in front of their operand, e.g. `sin(x)` or `sqrt 4`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Arithmetic negation (`-x`).
    Negate,
    /// Sine, in radians.
    Sin,
    /// Cosine, in radians.
    Cos,
    /// Tangent, in radians.
    Tan,
    /// Arctangent.
    Atan,
    /// Legacy spelling evaluated as the arctangent.
    Catan,
    /// Legacy keyword without numeric semantics.
    Acatan,
    /// Natural logarithm.
    Ln,
    /// Base-10 logarithm.
    Lg,
    /// Square root.
    Sqrt,
    /// Absolute value, computed exactly.
    Abs,
}

impl UnaryOperator {
    /// Every named operator, i.e. all of them except negation.
    pub const FUNCTIONS: [Self; 10] = [Self::Sin,
                                       Self::Cos,
                                       Self::Tan,
                                       Self::Catan,
                                       Self::Atan,
                                       Self::Acatan,
                                       Self::Ln,
                                       Self::Lg,
                                       Self::Sqrt,
                                       Self::Abs];

    /// Looks up the operator written as `symbol`.
    ///
    /// ```
    /// use mathfn::ast::UnaryOperator;
    ///
    /// assert_eq!(UnaryOperator::from_symbol("sqrt"), Some(UnaryOperator::Sqrt));
    /// assert_eq!(UnaryOperator::from_symbol("-"), Some(UnaryOperator::Negate));
    /// assert_eq!(UnaryOperator::from_symbol("exp"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        if symbol == "-" {
            return Some(Self::Negate);
        }
        Self::FUNCTIONS.into_iter().find(|op| op.symbol() == symbol)
    }

    /// The operator as it is written in source text.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Negate => "-",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Atan => "atan",
            Self::Catan => "catan",
            Self::Acatan => "acatan",
            Self::Ln => "ln",
            Self::Lg => "lg",
            Self::Sqrt => "sqrt",
            Self::Abs => "abs",
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
