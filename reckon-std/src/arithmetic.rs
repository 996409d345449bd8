//! Core arithmetic operations

use reckon_plugin::prelude::*;

pub struct Add;
pub struct Subtract;
pub struct Multiply;
pub struct Divide;

impl Operation for Add {
    fn meta(&self) -> OperationMeta {
        OperationMeta {
            name: "add",
            summary: "Add two numbers",
            usage: "add <a> <b>",
            arity: Arity::Exact(2),
            category: "arithmetic",
        }
    }

    fn apply(&self, operands: &[Number]) -> Result<Number, NumberError> {
        match operands {
            [a, b] => a.checked_add(b),
            _ => Err(NumberError::DomainError("add expects 2 operands".to_string())),
        }
    }
}

impl Operation for Subtract {
    fn meta(&self) -> OperationMeta {
        OperationMeta {
            name: "subtract",
            summary: "Subtract the second number from the first",
            usage: "subtract <a> <b>",
            arity: Arity::Exact(2),
            category: "arithmetic",
        }
    }

    fn apply(&self, operands: &[Number]) -> Result<Number, NumberError> {
        match operands {
            [a, b] => a.checked_sub(b),
            _ => Err(NumberError::DomainError("subtract expects 2 operands".to_string())),
        }
    }
}

impl Operation for Multiply {
    fn meta(&self) -> OperationMeta {
        OperationMeta {
            name: "multiply",
            summary: "Multiply two numbers",
            usage: "multiply <a> <b>",
            arity: Arity::Exact(2),
            category: "arithmetic",
        }
    }

    fn apply(&self, operands: &[Number]) -> Result<Number, NumberError> {
        match operands {
            [a, b] => a.checked_mul(b),
            _ => Err(NumberError::DomainError("multiply expects 2 operands".to_string())),
        }
    }
}

impl Operation for Divide {
    fn meta(&self) -> OperationMeta {
        OperationMeta {
            name: "divide",
            summary: "Divide the first number by the second",
            usage: "divide <a> <b>",
            arity: Arity::Exact(2),
            category: "arithmetic",
        }
    }

    fn apply(&self, operands: &[Number]) -> Result<Number, NumberError> {
        match operands {
            [a, b] => a.checked_div(b),
            _ => Err(NumberError::DomainError("divide expects 2 operands".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nums(values: &[i64]) -> Vec<Number> {
        values.iter().map(|&v| Number::from_i64(v)).collect()
    }

    #[test]
    fn add_two_numbers() {
        assert_eq!(Add.apply(&nums(&[2, 3])).unwrap().to_i64(), Some(5));
    }

    #[test]
    fn subtract_goes_negative() {
        assert_eq!(Subtract.apply(&nums(&[3, 10])).unwrap().to_i64(), Some(-7));
    }

    #[test]
    fn multiply_two_numbers() {
        assert_eq!(Multiply.apply(&nums(&[6, 7])).unwrap().to_i64(), Some(42));
    }

    #[test]
    fn divide_by_zero_is_an_error() {
        assert!(matches!(
            Divide.apply(&nums(&[1, 0])),
            Err(NumberError::DivisionByZero)
        ));
    }

    #[test]
    fn divide_produces_fraction() {
        let result = Divide.apply(&nums(&[7, 2])).unwrap();
        assert_eq!(result.value(), 3.5);
    }
}
