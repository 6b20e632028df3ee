use crate::utils::error::{DailyKitError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(DailyKitError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_strictly_less<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    upper: T,
) -> Result<()> {
    if value >= upper {
        return Err(DailyKitError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be less than {}", upper),
        });
    }
    Ok(())
}

/// 只接受整數文字，小數 (例如 "2.5") 視為無效
pub fn parse_integer(field_name: &str, raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|e| DailyKitError::ValidationError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: format!("Not an integer: {}", e),
        })
}
