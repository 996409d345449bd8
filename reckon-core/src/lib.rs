//! Reckon Core - Fundamental types
//!
//! This crate provides the core types used throughout Reckon:
//! - `Number`: finite floating-point values with checked operations
//! - `Outcome`: value-or-error result of a dispatched command
//! - `CalcError`: structured errors with machine-readable codes

mod error;
mod number;
mod outcome;

pub use error::{codes, Arity, CalcError};
pub use number::{Number, NumberError};
pub use outcome::Outcome;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::codes;
    pub use crate::{Arity, CalcError, Number, NumberError, Outcome};
}

#[cfg(test)]
mod tests {
    use super::*;

    mod number_tests {
        use super::*;

        #[test]
        fn test_from_i64() {
            let n = Number::from_i64(42);
            assert_eq!(n.to_i64(), Some(42));
        }

        #[test]
        fn test_from_str_integer() {
            let n = Number::from_str("123").unwrap();
            assert_eq!(n.to_i64(), Some(123));
        }

        #[test]
        fn test_from_str_decimal() {
            let n = Number::from_str("3.14").unwrap();
            assert!(!n.is_integer());
        }

        #[test]
        fn test_from_str_scientific() {
            let n = Number::from_str("1.5e2").unwrap();
            assert_eq!(n.to_i64(), Some(150));
        }

        #[test]
        fn test_from_str_garbage() {
            assert!(matches!(
                Number::from_str("abc"),
                Err(NumberError::ParseError(_))
            ));
        }

        #[test]
        fn test_from_str_rejects_nan_and_inf() {
            assert!(Number::from_str("nan").is_err());
            assert!(Number::from_str("inf").is_err());
        }

        #[test]
        fn test_checked_add() {
            let a = Number::from_i64(10);
            let b = Number::from_i64(32);
            assert_eq!(a.checked_add(&b).unwrap().to_i64(), Some(42));
        }

        #[test]
        fn test_checked_add_overflow() {
            let max = Number::new(f64::MAX).unwrap();
            assert!(matches!(max.checked_add(&max), Err(NumberError::Overflow)));
        }

        #[test]
        fn test_checked_div() {
            let a = Number::from_i64(84);
            let b = Number::from_i64(2);
            assert_eq!(a.checked_div(&b).unwrap().to_i64(), Some(42));
        }

        #[test]
        fn test_div_by_zero() {
            let a = Number::from_i64(42);
            let b = Number::from_i64(0);
            assert!(matches!(
                a.checked_div(&b),
                Err(NumberError::DivisionByZero)
            ));
        }

        #[test]
        fn test_sqrt() {
            let n = Number::from_i64(4);
            assert_eq!(n.sqrt().unwrap().to_i64(), Some(2));
        }

        #[test]
        fn test_sqrt_negative() {
            let n = Number::from_i64(-4);
            assert!(matches!(n.sqrt(), Err(NumberError::DomainError(_))));
        }

        #[test]
        fn test_ln_non_positive() {
            assert!(Number::from_i64(0).ln().is_err());
            assert!(Number::from_i64(-1).ln().is_err());
        }

        #[test]
        fn test_log10() {
            let n = Number::from_i64(1000);
            assert_eq!(n.log10().unwrap().to_i64(), Some(3));
        }

        #[test]
        fn test_pow() {
            let base = Number::from_i64(2);
            let exp = Number::from_i64(10);
            assert_eq!(base.pow(&exp).unwrap().to_i64(), Some(1024));
        }

        #[test]
        fn test_pow_domain_error() {
            // Negative base with fractional exponent has no real result
            let base = Number::from_i64(-2);
            let exp = Number::from_str("0.5").unwrap();
            assert!(matches!(base.pow(&exp), Err(NumberError::DomainError(_))));
        }

        #[test]
        fn test_is_negative() {
            assert!(Number::from_i64(-5).is_negative());
            assert!(!Number::from_i64(5).is_negative());
            assert!(!Number::from_i64(0).is_negative());
        }

        #[test]
        fn test_abs() {
            assert_eq!(Number::from_i64(-42).abs().to_i64(), Some(42));
        }

        #[test]
        fn test_display_integer_without_decimals() {
            assert_eq!(Number::from_i64(5).to_string(), "5");
            assert_eq!(Number::from_str("2.5").unwrap().to_string(), "2.5");
        }

        #[test]
        fn test_to_bits_groups_zero_signs() {
            let pos = Number::from_str("0.0").unwrap();
            let neg = Number::from_str("-0.0").unwrap();
            assert_eq!(pos.to_bits(), neg.to_bits());
        }
    }

    mod outcome_tests {
        use super::*;

        #[test]
        fn test_value_outcome() {
            let o = Outcome::Value(Number::from_i64(5));
            assert!(!o.is_error());
            assert_eq!(o.as_number().unwrap().to_i64(), Some(5));
        }

        #[test]
        fn test_error_outcome() {
            let o = Outcome::Error(CalcError::duplicate("add"));
            assert!(o.is_error());
            assert!(o.as_number().is_none());
        }

        #[test]
        fn test_from_result() {
            let ok: Outcome = Ok(Number::from_i64(1)).into();
            assert!(!ok.is_error());
            let err: Outcome = Err(CalcError::NoOperationsAvailable).into();
            assert!(err.is_error());
        }

        #[test]
        fn test_serialize_tagged() {
            let o = Outcome::Value(Number::from_i64(5));
            let json = serde_json::to_value(&o).unwrap();
            assert_eq!(json["status"], "value");
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn test_codes() {
            assert_eq!(
                CalcError::unknown_operation("foo", vec![]).code(),
                codes::UNKNOWN_OPERATION
            );
            assert_eq!(CalcError::duplicate("add").code(), codes::DUPLICATE_OPERATION);
            assert_eq!(
                CalcError::execution("divide", NumberError::DivisionByZero).code(),
                codes::OPERATION_FAILED
            );
        }

        #[test]
        fn test_arity_accepts() {
            assert!(Arity::Exact(2).accepts(2));
            assert!(!Arity::Exact(2).accepts(3));
            assert!(Arity::AtLeast(2).accepts(5));
            assert!(!Arity::AtLeast(2).accepts(1));
        }

        #[test]
        fn test_render_includes_code() {
            let err = CalcError::arity("add", Arity::Exact(2), 1);
            let line = err.render();
            assert!(line.contains("ARITY"), "missing code in: {}", line);
            assert!(line.contains("add"));
        }

        #[test]
        fn test_unknown_operation_suggestion() {
            let err = CalcError::unknown_operation("ad", vec!["add".to_string()]);
            let hint = err.suggestion().unwrap();
            assert!(hint.contains("add"));
        }

        #[test]
        fn test_plugin_load_wraps_cause() {
            let cause = CalcError::duplicate("add");
            let err = CalcError::plugin_load("arithmetic", cause);
            assert_eq!(err.code(), codes::PLUGIN_LOAD);
            assert!(err.to_string().contains("already registered"));
        }
    }
}
