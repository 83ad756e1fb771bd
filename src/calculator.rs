use std::str::FromStr;

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide `a` by `b`, failing when `b` is exactly zero.
pub fn divide(a: f64, b: f64) -> Result<f64, CalcError> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}

/// Errors raised by the arithmetic primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    DivisionByZero,
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalcError::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for CalcError {}

/// The supported operations, keyed by their wire name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// Run the primitive behind this operation
    pub fn apply(&self, a: f64, b: f64) -> Result<f64, CalcError> {
        match self {
            Operation::Add => Ok(add(a, b)),
            Operation::Subtract => Ok(subtract(a, b)),
            Operation::Multiply => Ok(multiply(a, b)),
            Operation::Divide => divide(a, b),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOperation(pub String);

impl std::fmt::Display for UnknownOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown operation '{}'", self.0)
    }
}

impl std::error::Error for UnknownOperation {}

impl FromStr for Operation {
    type Err = UnknownOperation;

    // Exact, case-sensitive match
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| UnknownOperation(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_subtract_multiply_follow_float_arithmetic() {
        assert_eq!(add(2.0, 3.0), 5.0);
        assert_eq!(subtract(5.0, 3.0), 2.0);
        assert_eq!(multiply(3.0, 4.0), 12.0);
        assert_eq!(add(0.1, 0.2), 0.1 + 0.2);
        assert_eq!(multiply(-1.5, 2.0), -3.0);
    }

    #[test]
    fn divide_returns_quotient() {
        assert_eq!(divide(10.0, 2.0), Ok(5.0));
        assert_eq!(divide(1.0, 4.0), Ok(0.25));
    }

    #[test]
    fn divide_by_zero_fails() {
        assert_eq!(divide(5.0, 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(divide(5.0, -0.0), Err(CalcError::DivisionByZero));
        assert_eq!(CalcError::DivisionByZero.to_string(), "division by zero");
    }

    #[test]
    fn divide_by_tiny_value_is_not_zero() {
        let q = divide(1.0, f64::MIN_POSITIVE).unwrap();
        assert!(q.is_finite());
    }

    #[test]
    fn non_finite_inputs_pass_through() {
        assert!(add(f64::NAN, 1.0).is_nan());
        assert_eq!(divide(f64::INFINITY, 2.0), Ok(f64::INFINITY));
    }

    #[test]
    fn operation_parses_exact_names_only() {
        assert_eq!("add".parse::<Operation>(), Ok(Operation::Add));
        assert_eq!("divide".parse::<Operation>(), Ok(Operation::Divide));
        assert!("Add".parse::<Operation>().is_err());
        assert!("pow".parse::<Operation>().is_err());
        assert!("".parse::<Operation>().is_err());
    }

    #[test]
    fn operation_apply_dispatches() {
        assert_eq!(Operation::Add.apply(10.0, 5.0), Ok(15.0));
        assert_eq!(Operation::Subtract.apply(10.0, 5.0), Ok(5.0));
        assert_eq!(Operation::Multiply.apply(10.0, 5.0), Ok(50.0));
        assert_eq!(Operation::Divide.apply(10.0, 5.0), Ok(2.0));
        assert_eq!(Operation::Divide.apply(10.0, 0.0), Err(CalcError::DivisionByZero));
    }
}
