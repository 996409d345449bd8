//! Scientific math operations: roots, powers, logarithms

use reckon_plugin::prelude::*;

pub struct Sqrt;
pub struct Power;
pub struct Log;
pub struct Ln;

impl Operation for Sqrt {
    fn meta(&self) -> OperationMeta {
        OperationMeta {
            name: "sqrt",
            summary: "Square root (non-negative input)",
            usage: "sqrt <x>",
            arity: Arity::Exact(1),
            category: "scientific",
        }
    }

    fn apply(&self, operands: &[Number]) -> Result<Number, NumberError> {
        match operands {
            [x] => x.sqrt(),
            _ => Err(NumberError::DomainError("sqrt expects 1 operand".to_string())),
        }
    }
}

impl Operation for Power {
    fn meta(&self) -> OperationMeta {
        OperationMeta {
            name: "power",
            summary: "Raise base to exponent",
            usage: "power <base> <exponent>",
            arity: Arity::Exact(2),
            category: "scientific",
        }
    }

    fn apply(&self, operands: &[Number]) -> Result<Number, NumberError> {
        match operands {
            [base, exponent] => base.pow(exponent),
            _ => Err(NumberError::DomainError("power expects 2 operands".to_string())),
        }
    }
}

impl Operation for Log {
    fn meta(&self) -> OperationMeta {
        OperationMeta {
            name: "log",
            summary: "Base-10 logarithm (positive input)",
            usage: "log <x>",
            arity: Arity::Exact(1),
            category: "scientific",
        }
    }

    fn apply(&self, operands: &[Number]) -> Result<Number, NumberError> {
        match operands {
            [x] => x.log10(),
            _ => Err(NumberError::DomainError("log expects 1 operand".to_string())),
        }
    }
}

impl Operation for Ln {
    fn meta(&self) -> OperationMeta {
        OperationMeta {
            name: "ln",
            summary: "Natural logarithm (positive input)",
            usage: "ln <x>",
            arity: Arity::Exact(1),
            category: "scientific",
        }
    }

    fn apply(&self, operands: &[Number]) -> Result<Number, NumberError> {
        match operands {
            [x] => x.ln(),
            _ => Err(NumberError::DomainError("ln expects 1 operand".to_string())),
        }
    }
}
