//! Dispersion operations: variance, standard deviation

use crate::helpers::sample_variance;
use reckon_plugin::prelude::*;

pub struct Variance;
pub struct Stdev;

impl Operation for Variance {
    fn meta(&self) -> OperationMeta {
        OperationMeta {
            name: "variance",
            summary: "Sample variance (n - 1 denominator)",
            usage: "variance <n1> <n2> [n3 ...]",
            arity: Arity::AtLeast(2),
            category: "statistics",
        }
    }

    fn apply(&self, operands: &[Number]) -> Result<Number, NumberError> {
        sample_variance(operands)
    }
}

impl Operation for Stdev {
    fn meta(&self) -> OperationMeta {
        OperationMeta {
            name: "stdev",
            summary: "Sample standard deviation",
            usage: "stdev <n1> <n2> [n3 ...]",
            arity: Arity::AtLeast(2),
            category: "statistics",
        }
    }

    fn apply(&self, operands: &[Number]) -> Result<Number, NumberError> {
        sample_variance(operands)?.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nums(values: &[f64]) -> Vec<Number> {
        values.iter().map(|&v| Number::new(v).unwrap()).collect()
    }

    #[test]
    fn variance_of_known_set() {
        // 2, 4, 4, 4, 5, 5, 7, 9: sample variance = 32/7
        let result = Variance
            .apply(&nums(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]))
            .unwrap();
        assert!((result.value() - 32.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn stdev_is_sqrt_of_variance() {
        let data = nums(&[1.0, 2.0, 3.0, 4.0]);
        let var = Variance.apply(&data).unwrap();
        let sd = Stdev.apply(&data).unwrap();
        assert!((sd.value() * sd.value() - var.value()).abs() < 1e-12);
    }

    #[test]
    fn single_value_is_error() {
        assert!(Variance.apply(&nums(&[1.0])).is_err());
        assert!(Stdev.apply(&nums(&[1.0])).is_err());
    }
}
