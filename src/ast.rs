use crate::error::RuntimeError;

/// The validated form of an expression, consumed by the evaluator.
///
/// Operands and operators are kept as two parallel sequences in source order.
/// A stream built by [`parse_expression`](crate::interpreter::parser::parse_expression)
/// always holds exactly one more operand than operators.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TokenStream {
    /// Numeric operands, left to right.
    pub operands:  Vec<f64>,
    /// Operator symbols, left to right. `operators[i]` sits between
    /// `operands[i]` and `operands[i + 1]`.
    pub operators: Vec<char>,
}

impl TokenStream {
    /// Creates a stream from already collected operands and operators.
    ///
    /// No validation happens here; the evaluator re-checks the stream before
    /// folding it.
    #[must_use]
    pub const fn new(operands: Vec<f64>, operators: Vec<char>) -> Self {
        Self { operands, operators }
    }

    /// Returns `true` if the stream holds one more operand than operators.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.operands.len() == self.operators.len() + 1
    }
}

/// Represents a binary arithmetic operator.
///
/// Every operator is applied strictly left to right; there is no precedence.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl Operator {
    /// Applies the operator to two operands.
    ///
    /// Division follows IEEE 754: dividing by zero yields an infinity or NaN
    /// rather than an error.
    ///
    /// # Example
    /// ```
    /// use calculable::ast::Operator;
    ///
    /// assert_eq!(Operator::Sub.apply(10.0, 2.5), 7.5);
    /// assert!(Operator::Div.apply(2.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
        }
    }

    /// The source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = RuntimeError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Sub),
            '*' => Ok(Self::Mul),
            '/' => Ok(Self::Div),
            _ => Err(RuntimeError::UnknownOperator { symbol }),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_symbol_maps_back_to_itself() {
        for symbol in ['+', '-', '*', '/'] {
            let op = Operator::try_from(symbol).unwrap();
            assert_eq!(op.symbol(), symbol);
            assert_eq!(op.to_string(), symbol.to_string());
        }
    }

    #[test]
    fn unmapped_symbol_is_unknown_operator() {
        assert_eq!(Operator::try_from('^'),
                   Err(RuntimeError::UnknownOperator { symbol: '^' }));
        assert_eq!(Operator::try_from('%'),
                   Err(RuntimeError::UnknownOperator { symbol: '%' }));
    }

    #[test]
    fn zero_division_follows_ieee() {
        assert_eq!(Operator::Div.apply(2.0, 0.0), f64::INFINITY);
        assert_eq!(Operator::Div.apply(-2.0, 0.0), f64::NEG_INFINITY);
        assert!(Operator::Div.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn balance_check() {
        assert!(TokenStream::new(vec![1.0], vec![]).is_balanced());
        assert!(TokenStream::new(vec![1.0, 2.0], vec!['+']).is_balanced());
        assert!(!TokenStream::new(vec![1.0], vec!['+']).is_balanced());
        assert!(!TokenStream::default().is_balanced());
    }
}
