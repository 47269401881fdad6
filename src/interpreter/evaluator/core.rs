use bigdecimal::BigDecimal;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::{EvalResult, RuntimeError},
    util::num::DIVISION_SCALE,
};

/// Settings that shape how a compiled function computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Fractional digits kept by `/`, rounding half away from zero.
    pub division_scale: i64,
}

impl Default for Options {
    fn default() -> Self {
        Self { division_scale: DIVISION_SCALE }
    }
}

/// A compiled expression: a function from an ordered slice of decimal inputs
/// to a decimal result.
///
/// The function is immutable once built. It can be evaluated any number of
/// times, from any number of threads, with different inputs.
///
/// ## Usage
///
/// Variables are bound by position, in the order they first appear in the
/// expression: in `x*y+z` the input slice is `[x, y, z]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathFunction {
    variable_count: usize,
    root:           Expr,
    options:        Options,
}

impl Expr {
    /// Lowers the tree into a reusable function with default [`Options`].
    ///
    /// # Example
    /// ```
    /// use bigdecimal::BigDecimal;
    /// use mathfn::interpreter::{lexer::tokenize, parser::core::parse_expr};
    ///
    /// let function = parse_expr(&tokenize("(2+3)*4").unwrap()).unwrap().lower();
    ///
    /// assert_eq!(function.variable_count(), 0);
    /// assert_eq!(function.evaluate(&[]).unwrap(), BigDecimal::from(20));
    /// ```
    #[must_use]
    pub fn lower(self) -> MathFunction {
        self.lower_with(Options::default())
    }

    /// Lowers the tree into a reusable function that computes with `options`.
    #[must_use]
    pub fn lower_with(self, options: Options) -> MathFunction {
        MathFunction { variable_count: self.declared_variables(),
                       root: self,
                       options }
    }

    /// Number of inputs this node declares it needs.
    ///
    /// A variable needs every input up to its own, a unary node needs what its
    /// operand needs, and a binary node reports the count recorded when it
    /// was parsed.
    fn declared_variables(&self) -> usize {
        let mut node = self;
        loop {
            match node {
                Self::Number { .. } => return 0,
                Self::Variable { index, .. } => return index + 1,
                Self::UnaryOp { operand, .. } => node = operand,
                Self::BinaryOp { variable_count, .. } => return *variable_count,
            }
        }
    }
}

impl MathFunction {
    /// Number of input values this function declares it expects.
    ///
    /// For an expression whose root is a binary operation this is the number
    /// of distinct variables the parser had seen when it built the root.
    #[must_use]
    pub const fn variable_count(&self) -> usize {
        self.variable_count
    }

    /// The expression tree this function evaluates.
    #[must_use]
    pub const fn expr(&self) -> &Expr {
        &self.root
    }

    /// The options this function computes with.
    #[must_use]
    pub const fn options(&self) -> Options {
        self.options
    }

    /// Evaluates the function with `inputs` bound to its variables.
    ///
    /// Extra inputs are ignored.
    ///
    /// # Errors
    /// - `MissingOperand` if a variable's index is outside `inputs`.
    /// - Any arithmetic error raised by an operator, e.g. `DivisionByZero`.
    ///
    /// # Example
    /// ```
    /// use bigdecimal::BigDecimal;
    /// use mathfn::{error::RuntimeError, interpreter::{lexer::tokenize, parser::core::parse}};
    ///
    /// let function = parse(&tokenize("1/x").unwrap()).unwrap();
    ///
    /// assert_eq!(function.evaluate(&[BigDecimal::from(4)]).unwrap(),
    ///            "0.25".parse::<BigDecimal>().unwrap());
    /// assert_eq!(function.evaluate(&[BigDecimal::from(0)]),
    ///            Err(RuntimeError::DivisionByZero));
    /// ```
    pub fn evaluate(&self, inputs: &[BigDecimal]) -> EvalResult<BigDecimal> {
        let mut work = vec![Frame::Visit(&self.root)];
        let mut values: Vec<BigDecimal> = Vec::new();

        while let Some(frame) = work.pop() {
            match frame {
                Frame::Visit(Expr::Number { value }) => values.push(value.clone()),
                Frame::Visit(Expr::Variable { name, index }) => {
                    let value = inputs.get(*index)
                                      .cloned()
                                      .ok_or_else(|| RuntimeError::MissingOperand { name:     name.clone(),
                                                                                    index:    *index,
                                                                                    provided: inputs.len(), })?;
                    values.push(value);
                },
                Frame::Visit(Expr::UnaryOp { op, operand }) => {
                    work.push(Frame::Unary(*op));
                    work.push(Frame::Visit(operand));
                },
                Frame::Visit(Expr::BinaryOp { op, left, right, .. }) => {
                    work.push(Frame::Binary(*op));
                    work.push(Frame::Visit(right));
                    work.push(Frame::Visit(left));
                },
                Frame::Unary(op) => {
                    let value = pop_value(&mut values);
                    values.push(Self::eval_unary(op, &value)?);
                },
                Frame::Binary(op) => {
                    let right = pop_value(&mut values);
                    let left = pop_value(&mut values);
                    values.push(self.eval_binary(op, &left, &right)?);
                },
            }
        }

        Ok(pop_value(&mut values))
    }
}

/// A pending step of [`MathFunction::evaluate`].
///
/// Operands are visited left to right; an operator frame sits below the
/// visits of its operands and runs once their values are on the value stack.
enum Frame<'a> {
    Visit(&'a Expr),
    Unary(UnaryOperator),
    Binary(BinaryOperator),
}

fn pop_value(values: &mut Vec<BigDecimal>) -> BigDecimal {
    match values.pop() {
        Some(value) => value,
        None => unreachable!("every operator frame runs after its operands are evaluated"),
    }
}
