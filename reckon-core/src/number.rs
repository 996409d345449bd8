//! Finite floating-point numbers
//!
//! `Number` wraps an `f64` that is guaranteed finite. Every operation that
//! could leave the finite domain (division, roots, logarithms, powers)
//! returns a `Result` instead of producing NaN or infinity.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for number operations
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum NumberError {
    #[error("Invalid number format: {0}")]
    ParseError(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Domain error: {0}")]
    DomainError(String),

    #[error("Overflow: result is not a finite number")]
    Overflow,
}

/// A finite f64.
///
/// Construction and arithmetic never yield NaN or infinity - such results
/// are reported as `NumberError` instead.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Number {
    inner: f64,
}

impl Number {
    // ========== Construction ==========

    /// Create from f64, rejecting NaN and infinities
    pub fn new(value: f64) -> Result<Self, NumberError> {
        if value.is_finite() {
            Ok(Self { inner: value })
        } else {
            Err(NumberError::Overflow)
        }
    }

    pub fn from_i64(n: i64) -> Self {
        Self { inner: n as f64 }
    }

    /// Parse from string: "123", "3.14", "-0.5", "1.5e10"
    pub fn from_str(s: &str) -> Result<Self, NumberError> {
        let s = s.trim();
        let value: f64 = s
            .parse()
            .map_err(|_| NumberError::ParseError(s.to_string()))?;
        Self::new(value).map_err(|_| NumberError::ParseError(s.to_string()))
    }

    pub fn value(&self) -> f64 {
        self.inner
    }

    pub fn to_i64(&self) -> Option<i64> {
        if self.is_integer() && self.inner.abs() < 2f64.powi(53) {
            Some(self.inner as i64)
        } else {
            None
        }
    }

    // ========== Arithmetic ==========

    pub fn checked_add(&self, other: &Self) -> Result<Self, NumberError> {
        Self::new(self.inner + other.inner)
    }

    pub fn checked_sub(&self, other: &Self) -> Result<Self, NumberError> {
        Self::new(self.inner - other.inner)
    }

    pub fn checked_mul(&self, other: &Self) -> Result<Self, NumberError> {
        Self::new(self.inner * other.inner)
    }

    pub fn checked_div(&self, other: &Self) -> Result<Self, NumberError> {
        if other.inner == 0.0 {
            return Err(NumberError::DivisionByZero);
        }
        Self::new(self.inner / other.inner)
    }

    // ========== Roots, powers, logarithms ==========

    pub fn sqrt(&self) -> Result<Self, NumberError> {
        if self.inner < 0.0 {
            return Err(NumberError::DomainError(format!(
                "sqrt of negative number {}",
                self.inner
            )));
        }
        Self::new(self.inner.sqrt())
    }

    /// Raise to an arbitrary real power.
    ///
    /// Negative base with fractional exponent and 0^negative are domain
    /// errors (f64 would yield NaN or infinity).
    pub fn pow(&self, exponent: &Self) -> Result<Self, NumberError> {
        let result = self.inner.powf(exponent.inner);
        if result.is_nan() {
            return Err(NumberError::DomainError(format!(
                "{} raised to {}",
                self.inner, exponent.inner
            )));
        }
        Self::new(result)
    }

    pub fn ln(&self) -> Result<Self, NumberError> {
        if self.inner <= 0.0 {
            return Err(NumberError::DomainError(format!(
                "ln of non-positive number {}",
                self.inner
            )));
        }
        Self::new(self.inner.ln())
    }

    pub fn log10(&self) -> Result<Self, NumberError> {
        if self.inner <= 0.0 {
            return Err(NumberError::DomainError(format!(
                "log of non-positive number {}",
                self.inner
            )));
        }
        Self::new(self.inner.log10())
    }

    // ========== Trigonometry (total over finite input) ==========

    pub fn sin(&self) -> Self {
        Self { inner: self.inner.sin() }
    }

    pub fn cos(&self) -> Self {
        Self { inner: self.inner.cos() }
    }

    pub fn tan(&self) -> Self {
        Self { inner: self.inner.tan() }
    }

    // ========== Predicates ==========

    pub fn abs(&self) -> Self {
        Self { inner: self.inner.abs() }
    }

    pub fn is_zero(&self) -> bool {
        self.inner == 0.0
    }

    pub fn is_negative(&self) -> bool {
        self.inner < 0.0
    }

    pub fn is_integer(&self) -> bool {
        self.inner.fract() == 0.0
    }

    /// Bit pattern of the wrapped f64. Stable key for grouping equal
    /// values in maps (f64 itself is not Hash).
    pub fn to_bits(&self) -> u64 {
        // Normalize -0.0 so it groups with 0.0
        if self.inner == 0.0 {
            0f64.to_bits()
        } else {
            self.inner.to_bits()
        }
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_i64() {
            Some(n) => write!(f, "{}", n),
            None => write!(f, "{}", self.inner),
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::from_i64(n)
    }
}
