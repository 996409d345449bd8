//! Trigonometric operations (radians)

use reckon_plugin::prelude::*;

pub struct Sin;
pub struct Cos;
pub struct Tan;

impl Operation for Sin {
    fn meta(&self) -> OperationMeta {
        OperationMeta {
            name: "sin",
            summary: "Sine of an angle in radians",
            usage: "sin <x>",
            arity: Arity::Exact(1),
            category: "scientific",
        }
    }

    fn apply(&self, operands: &[Number]) -> Result<Number, NumberError> {
        match operands {
            [x] => Ok(x.sin()),
            _ => Err(NumberError::DomainError("sin expects 1 operand".to_string())),
        }
    }
}

impl Operation for Cos {
    fn meta(&self) -> OperationMeta {
        OperationMeta {
            name: "cos",
            summary: "Cosine of an angle in radians",
            usage: "cos <x>",
            arity: Arity::Exact(1),
            category: "scientific",
        }
    }

    fn apply(&self, operands: &[Number]) -> Result<Number, NumberError> {
        match operands {
            [x] => Ok(x.cos()),
            _ => Err(NumberError::DomainError("cos expects 1 operand".to_string())),
        }
    }
}

impl Operation for Tan {
    fn meta(&self) -> OperationMeta {
        OperationMeta {
            name: "tan",
            summary: "Tangent of an angle in radians",
            usage: "tan <x>",
            arity: Arity::Exact(1),
            category: "scientific",
        }
    }

    fn apply(&self, operands: &[Number]) -> Result<Number, NumberError> {
        match operands {
            [x] => Ok(x.tan()),
            _ => Err(NumberError::DomainError("tan expects 1 operand".to_string())),
        }
    }
}
