use super::domain::AnimalInput;
use crate::errors::ServiceError;

pub const NAME_REQUIRED: &str = "Name cannot be null or empty";
pub const DESCRIPTION_REQUIRED: &str = "Description cannot be null or empty";

/// Fields that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidAnimal {
    pub name: String,
    pub description: String,
}

/// Check required fields in a fixed order; the first failure wins.
pub fn validate(input: &AnimalInput) -> Result<ValidAnimal, ServiceError> {
    let name = required(input.name.as_deref(), "name", NAME_REQUIRED)?;
    let description = required(input.description.as_deref(), "description", DESCRIPTION_REQUIRED)?;
    Ok(ValidAnimal { name: name.to_string(), description: description.to_string() })
}

fn required<'a>(value: Option<&'a str>, field: &'static str, reason: &str) -> Result<&'a str, ServiceError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ServiceError::Validation { field, reason: reason.to_string() }),
    }
}
