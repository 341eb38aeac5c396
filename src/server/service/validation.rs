//! Write-time field rules shared by the write services.

use chrono::{NaiveDate, NaiveDateTime};

use crate::server::error::validation::ValidationError;

pub const NAME_LENGTH: (usize, usize) = (2, 255);
pub const TEXT_LENGTH: (usize, usize) = (3, 255);
pub const PHONE_LENGTH: (usize, usize) = (10, 20);
pub const EMAIL_MAX_LENGTH: usize = 255;
pub const REGISTRATION_LENGTH: (usize, usize) = (3, 10);
pub const AIRCRAFT_MODEL_LENGTH: (usize, usize) = (2, 100);

/// Hectares
pub const FIELD_SIZE_RANGE: (f64, f64) = (0.1, 10000.0);
/// Liters
pub const CHEMICAL_AMOUNT_RANGE: (f64, f64) = (0.1, 1000.0);
/// Liters
pub const WATER_AMOUNT_RANGE: (f64, f64) = (0.1, 5000.0);
pub const LOAD_NUMBER_RANGE: (i32, i32) = (1, 999_999);
/// Liters per hectare
pub const APPLICATION_RATE_RANGE: (f64, f64) = (0.01, 100.0);
pub const HOPPER_GALLONS_RANGE: (f64, f64) = (50.0, 5000.0);
pub const HOPPER_LITERS_RANGE: (f64, f64) = (189.0, 18927.0);
/// Minimum liters per gallon accepted when both hopper capacities are given
pub const HOPPER_LITERS_PER_GALLON: f64 = 3.785;

pub fn check_range(field: &'static str, value: f64, (min, max): (f64, f64)) -> Result<(), ValidationError> {
    if !value.is_finite() || value < min || value > max {
        return Err(ValidationError::OutOfRange { field, min, max });
    }

    Ok(())
}

pub fn check_int_range(
    field: &'static str,
    value: i32,
    (min, max): (i32, i32),
) -> Result<(), ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field,
            min: min as f64,
            max: max as f64,
        });
    }

    Ok(())
}

/// Length is counted in characters after trimming surrounding whitespace
pub fn check_length(
    field: &'static str,
    value: &str,
    (min, max): (usize, usize),
) -> Result<(), ValidationError> {
    let length = value.trim().chars().count();
    if length < min || length > max {
        return Err(ValidationError::Length { field, min, max });
    }

    Ok(())
}

pub fn check_email(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    let valid = match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    };

    if !valid {
        return Err(ValidationError::Rule(format!("{} must be a valid email address", field)));
    }
    if value.chars().count() > EMAIL_MAX_LENGTH {
        return Err(ValidationError::Length {
            field,
            min: 0,
            max: EMAIL_MAX_LENGTH,
        });
    }

    Ok(())
}

/// `scheduled_at` must fall after midnight at the start of `today`
pub fn check_scheduled_after(
    scheduled_at: NaiveDateTime,
    today: NaiveDate,
) -> Result<(), ValidationError> {
    if scheduled_at <= today.and_time(chrono::NaiveTime::MIN) {
        return Err(ValidationError::Rule(
            "scheduledAt must be after the current date".to_string(),
        ));
    }

    Ok(())
}

/// Rejects deleting a record that `references` rows still point at
pub fn check_unreferenced(
    resource: &str,
    id: i32,
    references: u64,
    referenced_by: &str,
) -> Result<(), ValidationError> {
    if references > 0 {
        return Err(ValidationError::Rule(format!(
            "{} {} is still referenced by {} {}",
            resource, id, references, referenced_by
        )));
    }

    Ok(())
}
