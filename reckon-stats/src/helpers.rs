//! Shared numeric helpers for the statistics operations

use reckon_core::{Number, NumberError};

pub(crate) fn sum(values: &[Number]) -> Result<Number, NumberError> {
    let mut total = Number::from_i64(0);
    for value in values {
        total = total.checked_add(value)?;
    }
    Ok(total)
}

pub(crate) fn mean(values: &[Number]) -> Result<Number, NumberError> {
    if values.is_empty() {
        return Err(NumberError::DomainError("mean of empty set".to_string()));
    }
    sum(values)?.checked_div(&Number::from_i64(values.len() as i64))
}

pub(crate) fn sorted(values: &[Number]) -> Vec<Number> {
    let mut out = values.to_vec();
    // Numbers are always finite, so partial_cmp cannot fail
    out.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    out
}

/// Sample variance (n - 1 denominator), matching the original's stdev family
pub(crate) fn sample_variance(values: &[Number]) -> Result<Number, NumberError> {
    if values.len() < 2 {
        return Err(NumberError::DomainError(
            "variance requires at least 2 values".to_string(),
        ));
    }
    let center = mean(values)?;
    let mut acc = Number::from_i64(0);
    for value in values {
        let dev = value.checked_sub(&center)?;
        acc = acc.checked_add(&dev.checked_mul(&dev)?)?;
    }
    acc.checked_div(&Number::from_i64((values.len() - 1) as i64))
}
