use crate::utils::error::{SimError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(SimError::invalid_value(
            field_name,
            value,
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SimError::invalid_value(
            field_name,
            value,
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(SimError::invalid_value(
            field_name,
            value,
            format!("Unsupported value. Valid values: {}", allowed.join(", ")),
        ));
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| SimError::MissingConfigError {
        field: field_name.to_string(),
    })
}

/// 群組大小必須介於 1 與應用程式設定的上限之間
pub fn validate_group_size(field_name: &str, group_size: usize, max_group_size: usize) -> Result<()> {
    validate_positive_number("max_group_size", max_group_size as u64, 1)?;
    validate_range(field_name, group_size, 1, max_group_size)
}
