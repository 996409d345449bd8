//! Central tendency operations: mean, median, mode

use crate::helpers::{mean, sorted};
use reckon_plugin::prelude::*;
use std::collections::HashMap;

pub struct Mean;
pub struct Median;
pub struct Mode;

impl Operation for Mean {
    fn meta(&self) -> OperationMeta {
        OperationMeta {
            name: "mean",
            summary: "Arithmetic mean of the operands",
            usage: "mean <n1> [n2 ...]",
            arity: Arity::AtLeast(1),
            category: "statistics",
        }
    }

    fn apply(&self, operands: &[Number]) -> Result<Number, NumberError> {
        mean(operands)
    }
}

impl Operation for Median {
    fn meta(&self) -> OperationMeta {
        OperationMeta {
            name: "median",
            summary: "Middle value (average of the two middle if even count)",
            usage: "median <n1> [n2 ...]",
            arity: Arity::AtLeast(1),
            category: "statistics",
        }
    }

    fn apply(&self, operands: &[Number]) -> Result<Number, NumberError> {
        if operands.is_empty() {
            return Err(NumberError::DomainError("median of empty set".to_string()));
        }
        let values = sorted(operands);
        let n = values.len();
        if n % 2 == 1 {
            Ok(values[n / 2])
        } else {
            values[n / 2 - 1]
                .checked_add(&values[n / 2])?
                .checked_div(&Number::from_i64(2))
        }
    }
}

impl Operation for Mode {
    fn meta(&self) -> OperationMeta {
        OperationMeta {
            name: "mode",
            summary: "Most frequent value (first seen wins a tie)",
            usage: "mode <n1> [n2 ...]",
            arity: Arity::AtLeast(1),
            category: "statistics",
        }
    }

    fn apply(&self, operands: &[Number]) -> Result<Number, NumberError> {
        let mut counts: HashMap<u64, usize> = HashMap::new();
        for value in operands {
            *counts.entry(value.to_bits()).or_insert(0) += 1;
        }

        // Strict > keeps the first-seen value on ties
        let mut best: Option<(Number, usize)> = None;
        for value in operands {
            let count = counts[&value.to_bits()];
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((*value, count));
            }
        }

        best.map(|(value, _)| value)
            .ok_or_else(|| NumberError::DomainError("mode of empty set".to_string()))
    }
}
